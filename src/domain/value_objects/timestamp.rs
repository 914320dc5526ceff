//! Timestamp value object.
//!
//! Provides a UTC timestamp truncated to microseconds, the precision that
//! PostgreSQL `TIMESTAMPTZ` columns store. A value written to the ledger and
//! read back therefore compares equal to the original.

use std::fmt;

use chrono::{DateTime, NaiveDate, SubsecRound, TimeZone, Utc};
use serde::{Deserialize, Serialize};

const STORAGE_PRECISION_DIGITS: u16 = 6;

/// A UTC timestamp for recording when a point event occurred.
///
/// # Examples
///
/// ```rust
/// use loyalty_points::domain::Timestamp;
///
/// let created_at = Timestamp::from_ymd_hms(2018, 8, 4, 12, 34, 56).unwrap();
/// assert_eq!(created_at.to_string(), "2018-08-04T12:34:56+00:00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "DateTime<Utc>", into = "DateTime<Utc>")]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment, truncated to microseconds.
    #[must_use]
    pub fn now() -> Self {
        Self::from_datetime(Utc::now())
    }

    /// Creates a timestamp from a `DateTime<Utc>`, truncated to microseconds.
    #[must_use]
    pub fn from_datetime(datetime: DateTime<Utc>) -> Self {
        Self(datetime.trunc_subsecs(STORAGE_PRECISION_DIGITS))
    }

    /// Creates a timestamp from calendar fields interpreted as UTC.
    ///
    /// Returns `None` when the fields do not form a valid date-time.
    #[must_use]
    pub fn from_ymd_hms(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_opt(hour, minute, second))
            .map(|naive| Self(Utc.from_utc_datetime(&naive)))
    }

    /// Parses an RFC 3339 string such as `2018-08-04T12:34:56Z`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        DateTime::parse_from_rfc3339(value)
            .ok()
            .map(|datetime| Self::from_datetime(datetime.with_timezone(&Utc)))
    }

    /// Returns the underlying `DateTime<Utc>`.
    #[must_use]
    pub const fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0.to_rfc3339())
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(datetime: DateTime<Utc>) -> Self {
        Self::from_datetime(datetime)
    }
}

impl From<Timestamp> for DateTime<Utc> {
    fn from(timestamp: Timestamp) -> Self {
        timestamp.0
    }
}
