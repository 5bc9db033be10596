use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};

use super::{Measurement, RecentLimit, Weight};
use crate::DomainError;

/// Repository interface for Measurement persistence
///
/// The table is append-only: there is no update or delete.
/// Implementations should be provided in the infrastructure layer.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MeasurementRepository: Send + Sync {
    /// Append one measurement
    async fn insert(
        &self,
        recorded_at: DateTime<FixedOffset>,
        weight: Weight,
    ) -> Result<(), DomainError>;

    /// Most recent measurements, newest first (`id` descending)
    async fn list_recent(&self, limit: RecentLimit) -> Result<Vec<Measurement>, DomainError>;

    /// Every stored weight, oldest first (`id` ascending)
    async fn list_all_weights_ascending(&self) -> Result<Vec<Option<f64>>, DomainError>;
}
