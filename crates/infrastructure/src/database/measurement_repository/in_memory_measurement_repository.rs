use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};
use domain::measurement::{Measurement, MeasurementRepository, RecentLimit, Weight};
use domain::{DomainError, StoredTimestamp};
use tokio::sync::Mutex;

/// Process-local MeasurementRepository for tests and demos.
///
/// `set_failing(true)` makes every call return a storage error, which is
/// how the HTTP error paths are exercised without a database.
#[derive(Clone, Default)]
pub struct InMemoryMeasurementRepository {
    rows: Arc<Mutex<Vec<Measurement>>>,
    failing: Arc<AtomicBool>,
}

impl InMemoryMeasurementRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed rows as if they had been written by another process.
    pub async fn seed(&self, rows: impl IntoIterator<Item = (Option<StoredTimestamp>, Option<f64>)>) {
        let mut stored = self.rows.lock().await;
        for (recorded_at, weight_g) in rows {
            let id = stored.len() as i64 + 1;
            stored.push(Measurement::new(id, recorded_at, weight_g));
        }
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub async fn len(&self) -> usize {
        self.rows.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.lock().await.is_empty()
    }

    fn check(&self) -> Result<(), DomainError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(DomainError::Storage("in-memory store unavailable".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl MeasurementRepository for InMemoryMeasurementRepository {
    async fn insert(
        &self,
        recorded_at: DateTime<FixedOffset>,
        weight: Weight,
    ) -> Result<(), DomainError> {
        self.check()?;
        let mut rows = self.rows.lock().await;
        let id = rows.len() as i64 + 1;
        rows.push(Measurement::new(
            id,
            Some(recorded_at.into()),
            Some(weight.grams()),
        ));
        Ok(())
    }

    async fn list_recent(&self, limit: RecentLimit) -> Result<Vec<Measurement>, DomainError> {
        self.check()?;
        let rows = self.rows.lock().await;
        Ok(rows
            .iter()
            .rev()
            .take(limit.get() as usize)
            .cloned()
            .collect())
    }

    async fn list_all_weights_ascending(&self) -> Result<Vec<Option<f64>>, DomainError> {
        self.check()?;
        let rows = self.rows.lock().await;
        Ok(rows.iter().map(|m| m.weight_g).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[tokio::test]
    async fn test_recent_is_newest_first_and_limited() {
        let repo = InMemoryMeasurementRepository::new();
        let now = Utc::now().fixed_offset();
        for grams in [10.0, 20.0, 30.0] {
            repo.insert(now, Weight::new(grams).unwrap()).await.unwrap();
        }

        let recent = repo.list_recent(RecentLimit::new(2)).await.unwrap();
        let ids: Vec<i64> = recent.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![3, 2]);

        let weights = repo.list_all_weights_ascending().await.unwrap();
        assert_eq!(weights, vec![Some(10.0), Some(20.0), Some(30.0)]);
    }

    #[tokio::test]
    async fn test_failing_mode() {
        let repo = InMemoryMeasurementRepository::new();
        repo.set_failing(true);

        let err = repo.list_recent(RecentLimit::default()).await.unwrap_err();
        assert!(matches!(err, DomainError::Storage(_)));

        repo.set_failing(false);
        assert!(repo.list_recent(RecentLimit::default()).await.unwrap().is_empty());
    }
}
