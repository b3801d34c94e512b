use std::fmt;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::TypeError;

/// Canonical textual form: microsecond precision, no timezone suffix.
///
/// Example: `2026-08-06T14:03:27.000512`. The fraction is always exactly
/// six digits, so every value has a single canonical rendering.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Wall-clock timestamp fixed to microsecond precision.
///
/// Wraps a naive UTC datetime. [`Timestamp::now`] truncates the system
/// clock to whole microseconds, so a freshly taken value always survives
/// the canonical text round-trip unchanged.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Timestamp(NaiveDateTime);

impl Timestamp {
    /// The current wall-clock time, truncated to whole microseconds.
    pub fn now() -> Self {
        let micros = Utc::now().timestamp_micros();
        Self::from_micros(micros).unwrap_or_default()
    }

    /// Build from microseconds since the UNIX epoch.
    ///
    /// Returns `None` if the value is outside the representable range.
    pub fn from_micros(micros: i64) -> Option<Self> {
        DateTime::from_timestamp_micros(micros).map(|dt| Self(dt.naive_utc()))
    }

    /// Microseconds since the UNIX epoch.
    pub fn micros(&self) -> i64 {
        self.0.and_utc().timestamp_micros()
    }

    /// Render the canonical textual form.
    pub fn to_canonical(&self) -> String {
        self.0.format(TIMESTAMP_FORMAT).to_string()
    }

    /// Parse the canonical textual form.
    ///
    /// Anything that deviates from [`TIMESTAMP_FORMAT`] is rejected; there
    /// is no fallback format and no silent default.
    pub fn parse(s: &str) -> Result<Self, TypeError> {
        NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT)
            .map(Self)
            .map_err(|e| TypeError::InvalidTimestamp {
                value: s.to_string(),
                reason: e.to_string(),
            })
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self(NaiveDateTime::default())
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_canonical())
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(D::Error::custom)
    }
}

impl fmt::Debug for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Timestamp({})", self.to_canonical())
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_canonical())
    }
}
