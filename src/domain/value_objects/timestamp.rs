//! # Timestamp Value Object
//!
//! UTC point in time used for offer creation, resolution and ledger entries.
//!
//! # Examples
//!
//! ```
//! use transfer_market::domain::value_objects::Timestamp;
//!
//! let earlier = Timestamp::from_secs(1_704_067_200).unwrap();
//! let now = Timestamp::now();
//!
//! assert!(now.is_after(&earlier));
//! ```

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A UTC timestamp.
///
/// Wraps `chrono::DateTime<Utc>`; ordering follows wall-clock order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    #[must_use]
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a timestamp from Unix seconds.
    ///
    /// Returns `None` if the value is out of range.
    #[must_use]
    pub fn from_secs(secs: i64) -> Option<Self> {
        Utc.timestamp_opt(secs, 0).single().map(Self)
    }

    /// Creates a timestamp from Unix milliseconds.
    ///
    /// Returns `None` if the value is out of range.
    #[must_use]
    pub fn from_millis(millis: i64) -> Option<Self> {
        Utc.timestamp_millis_opt(millis).single().map(Self)
    }

    /// Returns the Unix timestamp in milliseconds.
    #[inline]
    #[must_use]
    pub fn timestamp_millis(&self) -> i64 {
        self.0.timestamp_millis()
    }

    /// Returns true if this timestamp is before another.
    #[inline]
    #[must_use]
    pub fn is_before(&self, other: &Self) -> bool {
        self.0 < other.0
    }

    /// Returns true if this timestamp is after another.
    #[inline]
    #[must_use]
    pub fn is_after(&self, other: &Self) -> bool {
        self.0 > other.0
    }

    /// Returns the underlying DateTime.
    #[inline]
    #[must_use]
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }
}

impl From<Timestamp> for DateTime<Utc> {
    fn from(ts: Timestamp) -> Self {
        ts.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn ordering_follows_time() {
        let a = Timestamp::from_secs(1_000).unwrap();
        let b = Timestamp::from_secs(2_000).unwrap();
        assert!(a.is_before(&b));
        assert!(b.is_after(&a));
        assert!(a < b);
    }

    #[test]
    fn millis_roundtrip() {
        let ts = Timestamp::from_millis(1_704_067_200_123).unwrap();
        assert_eq!(ts.timestamp_millis(), 1_704_067_200_123);
    }

    #[test]
    fn display_is_rfc3339() {
        let ts = Timestamp::from_secs(1_704_067_200).unwrap();
        assert!(ts.to_string().starts_with("2024-01-01T00:00:00"));
    }

    #[test]
    fn datetime_conversion_roundtrip() {
        let now = Timestamp::now();
        let dt: DateTime<Utc> = now.into();
        assert_eq!(Timestamp::from(dt), now);
    }
}
