use chrono::{DateTime, FixedOffset, Utc};
use serde::Serialize;

use super::{COLOMBIA_UTC_OFFSET_HOURS, DIAGNOSTIC_FORMAT, to_colombia};

/// Source of the current instant.
///
/// Kept behind a trait so handlers and services can be driven by a fixed
/// instant in tests regardless of the machine's zone.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// Current instant in UTC-5.
    fn now_local(&self) -> DateTime<FixedOffset> {
        to_colombia(self.now())
    }
}

/// Wall clock backed by `Utc::now()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Snapshot served by the clock diagnostic endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClockReading {
    #[serde(rename = "hora_colombia")]
    pub local: String,
    #[serde(rename = "hora_utc")]
    pub utc: String,
    #[serde(rename = "diferencia_horas")]
    pub offset_hours: i32,
}

impl ClockReading {
    pub fn read(clock: &dyn Clock) -> Self {
        let utc = clock.now();
        Self {
            local: to_colombia(utc).format(DIAGNOSTIC_FORMAT).to_string(),
            utc: utc.format(DIAGNOSTIC_FORMAT).to_string(),
            offset_hours: COLOMBIA_UTC_OFFSET_HOURS,
        }
    }
}
