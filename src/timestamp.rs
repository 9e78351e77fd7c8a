//! UTC timestamps for log lines.
//!
//! The default rendering is round-trippable: seven fractional digits and a
//! trailing `Z`, which [`Timestamp::parse`] reads back to the same instant
//! (at 100 ns resolution).

use std::fmt::{self, Write};

/// Default line timestamp format (`2026-10-17T08:15:42.1234567Z`).
pub const ROUND_TRIP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.7fZ";

/// A point in time, always rendered in UTC.
///
/// Wraps a [`jiff::Timestamp`] for high-precision time handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp {
    pub value: jiff::Timestamp,
}

/// Source of the current time for a logger.
pub type Clock = fn() -> Timestamp;

impl Timestamp {
    /// The current system time.
    pub fn now() -> Self {
        Self {
            value: jiff::Timestamp::now(),
        }
    }

    pub const fn from_jiff(value: jiff::Timestamp) -> Self {
        Self { value }
    }

    /// Format with a strftime-compatible format string.
    ///
    /// Fails if the format string is invalid for jiff.
    pub fn try_format_with(&self, format: &str) -> Result<String, fmt::Error> {
        let zdt = self.value.to_zoned(jiff::tz::TimeZone::UTC);
        let mut out = String::with_capacity(32);
        write!(out, "{}", zdt.strftime(format))?;
        Ok(out)
    }

    /// Format with `format`, falling back to [`ROUND_TRIP_FORMAT`] if it is invalid.
    pub fn format_with(&self, format: &str) -> String {
        self.try_format_with(format)
            .or_else(|_| self.try_format_with(ROUND_TRIP_FORMAT))
            .unwrap_or_else(|_| self.value.to_string())
    }

    /// Format using the round-trip format.
    pub fn format_display(&self) -> String {
        self.format_with(ROUND_TRIP_FORMAT)
    }

    /// Parse an RFC 3339 / ISO 8601 timestamp (any offset; normalized to UTC).
    pub fn parse(s: &str) -> Option<Self> {
        s.parse::<jiff::Timestamp>().ok().map(Self::from_jiff)
    }

    /// Check that `format` renders without error.
    pub fn validate_format(format: &str) -> bool {
        Self::from_jiff(jiff::Timestamp::UNIX_EPOCH)
            .try_format_with(format)
            .is_ok()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_display())
    }
}
