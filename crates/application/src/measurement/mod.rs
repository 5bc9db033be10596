mod service;

pub use service::{INSERTED_MESSAGE, InsertReceipt, MeasurementService, RecordedMeasurement};
