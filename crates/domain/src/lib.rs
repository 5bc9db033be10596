//! Domain layer - Pure business logic with no external dependencies
//!
//! This crate contains:
//! - The Measurement entity and its Weight value object
//! - The fixed UTC-5 timestamp policy
//! - Reduction indicators (baseline vs. latest, CO2 equivalent)
//! - Repository interfaces (traits)
//!
//! Principles:
//! - No dependencies on infrastructure
//! - Validation enforced at domain level
//! - Testable in isolation, independent of the host's time zone

pub mod error;
pub mod measurement;
pub mod time;

// Re-export commonly used types
pub use error::{DomainError, ValidationError};
pub use measurement::{
    Measurement, MeasurementRecord, MeasurementRepository, RecentLimit, ReductionIndicators,
    Weight,
};
pub use time::{Clock, ClockReading, StoredTimestamp, SystemClock};
