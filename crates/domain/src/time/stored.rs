use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};

use super::{COLOMBIA_OFFSET, DISPLAY_FORMAT};

/// A timestamp as it comes back from storage.
///
/// Rows written by this system carry zone information; older rows may
/// not. A naive value is assumed to be UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoredTimestamp {
    Zoned(DateTime<Utc>),
    Naive(NaiveDateTime),
}

impl StoredTimestamp {
    /// Normalize to UTC, treating naive values as UTC.
    pub fn to_utc(&self) -> DateTime<Utc> {
        match self {
            Self::Zoned(dt) => *dt,
            Self::Naive(naive) => naive.and_utc(),
        }
    }

    /// The same instant in UTC-5.
    pub fn to_local(&self) -> DateTime<FixedOffset> {
        self.to_utc().with_timezone(&COLOMBIA_OFFSET)
    }

    /// `DD/MM/YYYY HH:MM` in UTC-5.
    pub fn display(&self) -> String {
        self.to_local().format(DISPLAY_FORMAT).to_string()
    }
}

impl From<DateTime<Utc>> for StoredTimestamp {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Zoned(value)
    }
}

impl From<DateTime<FixedOffset>> for StoredTimestamp {
    fn from(value: DateTime<FixedOffset>) -> Self {
        Self::Zoned(value.with_timezone(&Utc))
    }
}

impl From<NaiveDateTime> for StoredTimestamp {
    fn from(value: NaiveDateTime) -> Self {
        Self::Naive(value)
    }
}
