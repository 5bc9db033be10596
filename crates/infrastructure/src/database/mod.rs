pub mod measurement_repository;
mod pool;

pub use measurement_repository::{InMemoryMeasurementRepository, PostgresMeasurementRepository};
pub use pool::{connect_pool, run_migrations};
