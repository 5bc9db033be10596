//! Application layer - Use cases and business workflows

pub mod measurement;

pub use measurement::MeasurementService;
