mod in_memory_measurement_repository;
mod postgres_measurement_repository;

pub use in_memory_measurement_repository::InMemoryMeasurementRepository;
pub use postgres_measurement_repository::PostgresMeasurementRepository;
