//! Line composition for console output.
//!
//! Every line follows one shape:
//!
//! ```text
//! <color>[LEVEL]<reset> 2026-10-17T08:15:42.1234567Z - message[ - Exception: <chain>]
//! ```
//!
//! Template expansion and chain rendering both degrade instead of failing:
//! a bad template is emitted raw, an unrenderable chain is left off.

use std::error::Error;

use crate::fault;
use crate::level::LogLevel;
use crate::template::{self, Arg};
use crate::timestamp::{ROUND_TRIP_FORMAT, Timestamp};

/// Resolved presentation settings for a logger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineStyle {
    /// Wrap the level tag in its ANSI color.
    pub use_color: bool,
    /// strftime-compatible timestamp format.
    pub timestamp_format: String,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            use_color: true,
            timestamp_format: ROUND_TRIP_FORMAT.to_string(),
        }
    }
}

/// Build the message part of a line.
///
/// `args` of `Some` (even empty) means the message is a template; `None`
/// means it is emitted verbatim.
pub fn compose_message(
    message: &str,
    args: Option<&[Arg]>,
    error: Option<&(dyn Error + 'static)>,
) -> String {
    let mut text = match args {
        Some(args) => template::format(message, args).unwrap_or_else(|_| message.to_string()),
        None => message.to_string(),
    };

    if let Some(Ok(chain)) = error.map(fault::render_chain) {
        text.push_str(" - Exception: ");
        text.push_str(&chain);
    }
    text
}

/// Format a single line into `out`.
///
/// A `level` of `None` renders the red `[UNKNOWN]` tag.
pub fn format_line(
    level: Option<LogLevel>,
    timestamp: &Timestamp,
    message: &str,
    style: &LineStyle,
    out: &mut String,
) {
    let (tag, color) = match level {
        Some(level) => (level.tag(), level.color()),
        None => (LogLevel::unknown_tag(), crate::color::AnsiColor::Red),
    };

    if style.use_color {
        out.push_str(&color.paint(tag));
    } else {
        out.push_str(tag);
    }
    out.push(' ');
    out.push_str(&timestamp.format_with(&style.timestamp_format));
    out.push_str(" - ");
    out.push_str(message);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Fault;
    use crate::args;

    fn ts() -> Timestamp {
        Timestamp::parse("2026-10-17T08:15:42.1234567Z").unwrap()
    }

    fn line(level: Option<LogLevel>, message: &str, style: &LineStyle) -> String {
        let mut out = String::new();
        format_line(level, &ts(), message, style, &mut out);
        out
    }

    #[test]
    fn test_colored_line_shape() {
        let out = line(Some(LogLevel::Warning), "disk at 92%", &LineStyle::default());
        assert_eq!(
            out,
            "\x1b[33m[WARNING]\x1b[0m 2026-10-17T08:15:42.1234567Z - disk at 92%"
        );
    }

    #[test]
    fn test_every_level_has_its_own_colored_tag() {
        for level in LogLevel::ALL {
            let out = line(Some(level), "m", &LineStyle::default());
            let expected = level.color().paint(level.tag());
            assert!(out.starts_with(&expected), "{level:?}: {out:?}");
            for other in LogLevel::ALL {
                if other.tag() != level.tag() {
                    assert!(!out.contains(other.tag()), "{level:?} line contains {other:?}");
                }
            }
        }
    }

    #[test]
    fn test_unknown_level_is_red() {
        let out = line(None, "m", &LineStyle::default());
        assert!(out.starts_with("\x1b[31m[UNKNOWN]\x1b[0m "));
    }

    #[test]
    fn test_plain_line_without_color() {
        let style = LineStyle {
            use_color: false,
            ..LineStyle::default()
        };
        let out = line(Some(LogLevel::Error), "boom", &style);
        assert_eq!(out, "[ERROR] 2026-10-17T08:15:42.1234567Z - boom");
        assert!(!out.contains("\x1b["));
    }

    #[test]
    fn test_custom_timestamp_format() {
        let style = LineStyle {
            use_color: false,
            timestamp_format: "%H:%M:%S".to_string(),
        };
        assert_eq!(line(Some(LogLevel::Info), "x", &style), "[INFO] 08:15:42 - x");
    }

    #[test]
    fn test_compose_plain_keeps_braces() {
        assert_eq!(compose_message("{0} {1}", None, None), "{0} {1}");
    }

    #[test]
    fn test_compose_template() {
        assert_eq!(
            compose_message("disk at {0}%", Some(&args![92]), None),
            "disk at 92%"
        );
    }

    #[test]
    fn test_compose_mismatch_falls_back_to_raw() {
        assert_eq!(
            compose_message("{0} {1}", Some(&args!["only-one-arg"]), None),
            "{0} {1}"
        );
        assert_eq!(compose_message("{0}", Some(&[]), None), "{0}");
    }

    #[test]
    fn test_compose_with_error_chain() {
        let err = Fault::new("app::SaveError", "disk write failed")
            .with_source(Fault::new("io::Full", "no space"));
        let text = compose_message("save failed", None, Some(&err));
        assert!(text.starts_with("save failed - Exception: -- Exception Level 0 --\n"));
        assert!(text.contains("\n-- Exception Level 1 --\n"));
        assert!(!text.ends_with('\n'));
    }

    #[test]
    fn test_compose_with_error_and_args() {
        let err = Fault::new("Kind", "inner");
        let text = compose_message("job {0} failed", Some(&args![7]), Some(&err));
        assert!(text.starts_with("job 7 failed - Exception: -- Exception Level 0 --"));
    }

    #[test]
    fn test_compose_with_error_and_bad_template() {
        let err = Fault::new("Kind", "inner");
        let text = compose_message("job {0} {1}", Some(&args![7]), Some(&err));
        assert!(text.starts_with("job {0} {1} - Exception: "));
    }
}
