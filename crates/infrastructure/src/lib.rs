//! Infrastructure layer - External integrations

pub mod config;
pub mod database;

pub use config::{ConfigurationError, ServerConfig};
pub use database::{
    InMemoryMeasurementRepository, PostgresMeasurementRepository, connect_pool, run_migrations,
};
