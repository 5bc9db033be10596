//! Fixed civil-time policy
//!
//! All user-facing timestamps are expressed in UTC-5 ("Colombia time").
//! The offset is fixed: no daylight-saving adjustment, and system-local
//! time is never consulted.

mod clock;
mod stored;

pub use clock::{Clock, ClockReading, FixedClock, SystemClock};
pub use stored::StoredTimestamp;

use chrono::{DateTime, FixedOffset, Utc};

/// Hours west of UTC for the civil zone used throughout the system.
pub const COLOMBIA_UTC_OFFSET_HOURS: i32 = 5;

/// `DD/MM/YYYY HH:MM`, used for listings and insert confirmations.
pub const DISPLAY_FORMAT: &str = "%d/%m/%Y %H:%M";

/// `DD/MM/YYYY HH:MM:SS`, used by the clock diagnostic endpoint.
pub const DIAGNOSTIC_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// The UTC-5 offset as a chrono value.
pub const COLOMBIA_OFFSET: FixedOffset =
    match FixedOffset::west_opt(COLOMBIA_UTC_OFFSET_HOURS * 3600) {
        Some(offset) => offset,
        None => panic!("UTC-5 is outside chrono's offset range"),
    };

/// Re-express an instant in UTC-5.
pub fn to_colombia(instant: DateTime<Utc>) -> DateTime<FixedOffset> {
    instant.with_timezone(&COLOMBIA_OFFSET)
}
