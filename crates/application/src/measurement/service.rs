use std::sync::Arc;

use chrono::{DateTime, FixedOffset};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error, info, warn};

use domain::measurement::{DEFAULT_CO2_FACTOR, Measurement, RecentLimit, ReductionIndicators};
use domain::time::DISPLAY_FORMAT;
use domain::{Clock, ClockReading, DomainError, MeasurementRepository, Weight};

/// Confirmation message returned after a successful insert.
pub const INSERTED_MESSAGE: &str = "Dato insertado correctamente";

/// Outcome of a successful `record` call.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedMeasurement {
    pub weight: Weight,
    pub recorded_at: DateTime<FixedOffset>,
}

impl RecordedMeasurement {
    pub fn receipt(&self) -> InsertReceipt {
        InsertReceipt {
            message: INSERTED_MESSAGE,
            weight_g: self.weight.grams(),
            date: self.recorded_at.format(DISPLAY_FORMAT).to_string(),
        }
    }
}

/// Wire shape of the insert confirmation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsertReceipt {
    #[serde(rename = "mensaje")]
    pub message: &'static str,
    #[serde(rename = "peso")]
    pub weight_g: f64,
    #[serde(rename = "fecha")]
    pub date: String,
}

/// Use cases over the measurement history.
#[derive(Clone)]
pub struct MeasurementService {
    repository: Arc<dyn MeasurementRepository>,
    clock: Arc<dyn Clock>,
    co2_factor: f64,
}

impl MeasurementService {
    pub fn new(repository: Arc<dyn MeasurementRepository>, clock: Arc<dyn Clock>) -> Self {
        Self {
            repository,
            clock,
            co2_factor: DEFAULT_CO2_FACTOR,
        }
    }

    pub fn with_co2_factor(mut self, co2_factor: f64) -> Self {
        self.co2_factor = co2_factor;
        self
    }

    /// Validate a payload, stamp it in UTC-5 and append it.
    ///
    /// Storage is never touched when validation fails.
    pub async fn record(&self, payload: &Value) -> Result<RecordedMeasurement, DomainError> {
        let weight = Weight::from_payload(payload).inspect_err(|e| {
            warn!(error = %e, "Rejected measurement payload");
        })?;

        let recorded_at = self.clock.now_local();

        self.repository
            .insert(recorded_at, weight)
            .await
            .inspect_err(|e| error!(error = %e, "Failed to store measurement"))?;

        info!(peso_g = weight.grams(), fecha = %recorded_at, "📥 Measurement recorded");

        Ok(RecordedMeasurement {
            weight,
            recorded_at,
        })
    }

    /// Newest measurements first.
    pub async fn recent(&self, limit: RecentLimit) -> Result<Vec<Measurement>, DomainError> {
        let rows = self
            .repository
            .list_recent(limit)
            .await
            .inspect_err(|e| error!(error = %e, limit = limit.get(), "Failed to list measurements"))?;

        debug!(count = rows.len(), limit = limit.get(), "Listed recent measurements");
        Ok(rows)
    }

    /// Baseline-vs-latest indicators over the full history.
    pub async fn indicators(&self) -> Result<ReductionIndicators, DomainError> {
        let weights = self
            .repository
            .list_all_weights_ascending()
            .await
            .inspect_err(|e| error!(error = %e, "Failed to load weight history"))?;

        Ok(ReductionIndicators::compute(weights, self.co2_factor))
    }

    pub fn clock_check(&self) -> ClockReading {
        ClockReading::read(self.clock.as_ref())
    }
}
