use serde::Serialize;

use crate::time::StoredTimestamp;

/// Placeholder shown when a stored row has no timestamp.
pub const MISSING_DATE: &str = "N/A";

/// A single recorded weight, as read back from storage.
///
/// Both columns are nullable in older tables, so they are optional here.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub id: i64,
    pub recorded_at: Option<StoredTimestamp>,
    pub weight_g: Option<f64>,
}

impl Measurement {
    pub fn new(id: i64, recorded_at: Option<StoredTimestamp>, weight_g: Option<f64>) -> Self {
        Self {
            id,
            recorded_at,
            weight_g,
        }
    }

    /// Date in UTC-5 display format, or `N/A`.
    pub fn display_date(&self) -> String {
        self.recorded_at
            .map(|ts| ts.display())
            .unwrap_or_else(|| MISSING_DATE.to_string())
    }

    /// Weight rounded to the nearest whole gram; absent weights read as 0.
    pub fn rounded_grams(&self) -> i64 {
        self.weight_g.map(round_grams).unwrap_or(0)
    }

    pub fn to_record(&self) -> MeasurementRecord {
        MeasurementRecord {
            date: self.display_date(),
            weight_g: self.rounded_grams(),
        }
    }
}

/// Wire shape of a listed measurement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MeasurementRecord {
    #[serde(rename = "fecha")]
    pub date: String,
    #[serde(rename = "peso")]
    pub weight_g: i64,
}

/// Round half away from zero to whole grams.
pub fn round_grams(grams: f64) -> i64 {
    grams.round() as i64
}
