//! Log level representation with tags, colors, and parsing.
//!
//! The six levels are a closed set. Their numeric [`code`](LogLevel::code)
//! follows declaration order and carries no severity meaning; filtering uses
//! [`severity`](LogLevel::severity) instead.

use std::fmt;

use crate::color::AnsiColor;

/// Canonical log level enumeration.
///
/// Declaration order is the stable numeric code:
/// - [`Trace`](Self::Trace) = 0
/// - [`Info`](Self::Info) = 1
/// - [`Warning`](Self::Warning) = 2
/// - [`Error`](Self::Error) = 3
/// - [`Debug`](Self::Debug) = 4
/// - [`Critical`](Self::Critical) = 5
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogLevel {
    Trace = 0,
    Info = 1,
    Warning = 2,
    Error = 3,
    Debug = 4,
    Critical = 5,
}

impl LogLevel {
    /// Every level, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Trace,
        Self::Info,
        Self::Warning,
        Self::Error,
        Self::Debug,
        Self::Critical,
    ];

    /// Bracketed tag printed at the start of each line (e.g., `"[WARNING]"`).
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Trace => "[TRACE]",
            Self::Info => "[INFO]",
            Self::Warning => "[WARNING]",
            Self::Error => "[ERROR]",
            Self::Debug => "[DEBUG]",
            Self::Critical => "[CRITICAL]",
        }
    }

    /// Tag used when a level code is not recognized.
    pub const fn unknown_tag() -> &'static str {
        "[UNKNOWN]"
    }

    /// Returns the [`AnsiColor`] of this level's tag.
    ///
    /// - Trace, Info: grey
    /// - Warning: yellow
    /// - Error: orange
    /// - Debug: green
    /// - Critical: red
    pub const fn color(self) -> AnsiColor {
        match self {
            Self::Trace | Self::Info => AnsiColor::Grey,
            Self::Warning => AnsiColor::Yellow,
            Self::Error => AnsiColor::Orange,
            Self::Debug => AnsiColor::Green,
            Self::Critical => AnsiColor::Red,
        }
    }

    /// Stable numeric code (declaration order).
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Look up a level by its numeric code. Returns `None` for codes above 5.
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Trace),
            1 => Some(Self::Info),
            2 => Some(Self::Warning),
            3 => Some(Self::Error),
            4 => Some(Self::Debug),
            5 => Some(Self::Critical),
            _ => None,
        }
    }

    /// Severity rank, lowest first: Trace, Debug, Info, Warning, Error, Critical.
    pub const fn severity(self) -> u8 {
        match self {
            Self::Trace => 0,
            Self::Debug => 1,
            Self::Info => 2,
            Self::Warning => 3,
            Self::Error => 4,
            Self::Critical => 5,
        }
    }

    /// Whether a line at this level passes a minimum-level filter.
    pub fn passes(self, min_level: Option<Self>) -> bool {
        min_level.is_none_or(|min| self.severity() >= min.severity())
    }

    /// Parse a string into a [`LogLevel`], case-insensitive.
    ///
    /// Returns `None` for unrecognized strings.
    pub fn from_str_loose(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "trace" | "trc" => Some(Self::Trace),
            "info" | "inf" | "information" => Some(Self::Info),
            "warn" | "warning" | "wrn" => Some(Self::Warning),
            "error" | "err" => Some(Self::Error),
            "debug" | "dbg" => Some(Self::Debug),
            "critical" | "crit" | "fatal" => Some(Self::Critical),
            _ => None,
        }
    }

    /// Map a `log` crate level onto the console levels.
    pub const fn from_log(level: log::Level) -> Self {
        match level {
            log::Level::Error => Self::Error,
            log::Level::Warn => Self::Warning,
            log::Level::Info => Self::Info,
            log::Level::Debug => Self::Debug,
            log::Level::Trace => Self::Trace,
        }
    }

    /// The most verbose `log` filter that still lets this level through.
    pub const fn to_log_filter(self) -> log::LevelFilter {
        match self {
            Self::Trace => log::LevelFilter::Trace,
            Self::Debug => log::LevelFilter::Debug,
            Self::Info => log::LevelFilter::Info,
            Self::Warning => log::LevelFilter::Warn,
            Self::Error | Self::Critical => log::LevelFilter::Error,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
