//! Command-line argument definitions for `tintlog`.
//!
//! Uses [`clap`] derive macros for argument parsing.

use std::io::{self, IsTerminal};

use clap::{Parser, ValueEnum};
use clap_complete::Shell;

use crate::level::LogLevel;

/// Write one colorized, timestamped log line to stdout.
///
/// With ARGS, TEMPLATE is expanded positionally (`{0}`, `{1,-8}`, `{0:X8}`).
/// Without ARGS, TEMPLATE is printed verbatim.
#[derive(Debug, Parser)]
#[command(name = "tintlog", version, about, long_about = None)]
pub struct Cli {
    /// Severity of the line (trace, info, warning, error, debug, critical).
    #[arg(value_parser = parse_level_arg, required_unless_present = "completions")]
    pub level: Option<LogLevel>,

    /// Message, or template when ARGS are given.
    #[arg(required_unless_present = "completions")]
    pub template: Option<String>,

    /// Positional substitution arguments. Integers and floats are typed
    /// automatically; everything else is a string.
    #[arg(allow_negative_numbers = true)]
    pub args: Vec<String>,

    /// Control color output.
    ///
    /// `auto` (the default) enables colors only when stdout is a TTY and
    /// `NO_COLOR` is unset.
    #[arg(short = 'c', long, value_enum)]
    pub color: Option<ColorMode>,

    /// Drop the line if it is below this severity.
    #[arg(short = 'l', long, value_parser = parse_level_arg)]
    pub min_level: Option<LogLevel>,

    /// Timestamp format (strftime-compatible, rendered in UTC).
    #[arg(short = 't', long)]
    pub timestamp_format: Option<String>,

    /// Attach an error to the line. Repeat to build a cause chain, outermost
    /// first.
    #[arg(short = 'e', long = "error", value_name = "MESSAGE")]
    pub errors: Vec<String>,

    /// Path to configuration file.
    #[arg(long)]
    pub config: Option<std::path::PathBuf>,

    /// Print shell completions and exit.
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

/// Color output mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Enable colors only when stdout is a TTY.
    Auto,
    /// Always enable colors.
    Always,
    /// Never enable colors.
    Never,
}

impl ColorMode {
    /// Parse a config-file value. Unknown values mean `auto`.
    pub fn from_str_loose(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "always" => Self::Always,
            "never" => Self::Never,
            _ => Self::Auto,
        }
    }

    /// Decide whether to emit ANSI escapes.
    ///
    /// `auto` honors a TTY check, `NO_COLOR`, `TERM=dumb` and `FORCE_COLOR`.
    pub fn resolve(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => {
                if std::env::var_os("FORCE_COLOR").is_some_and(|v| !v.is_empty()) {
                    return true;
                }
                if !io::stdout().is_terminal() {
                    return false;
                }
                if std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()) {
                    return false;
                }
                if std::env::var("TERM").is_ok_and(|v| v == "dumb") {
                    return false;
                }
                true
            }
        }
    }
}

/// Parse level argument as case-insensitive string.
fn parse_level_arg(s: &str) -> Result<LogLevel, String> {
    LogLevel::from_str_loose(s).ok_or_else(|| {
        format!(
            "invalid level '{s}': expected one of trace, info, warning, error, debug, critical"
        )
    })
}
