//! `log` crate backend.
//!
//! Installing the bridge routes `log::info!` and friends through the same
//! console format and lock as [`Logger`]:
//!
//! | `log`   | console   |
//! |---------|-----------|
//! | `error` | `[ERROR]` |
//! | `warn`  | `[WARNING]` |
//! | `info`  | `[INFO]`  |
//! | `debug` | `[DEBUG]` |
//! | `trace` | `[TRACE]` |

use std::fmt::Write;
use std::sync::Arc;

use crate::config::Config;
use crate::console::{Console, StdoutConsole};
use crate::error::TintError;
use crate::level::LogLevel;
use crate::logger::{LeveledLog, Logger};

/// Category of loggers installed as the global `log` backend.
pub enum LogCrate {}

impl<T: ?Sized> log::Log for Logger<T> {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        self.is_enabled(LogLevel::from_log(metadata.level()))
    }

    fn log(&self, record: &log::Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let mut message = String::new();
        if write!(message, "{}", record.args()).is_err() {
            return;
        }
        self.emit(LogLevel::from_log(record.level()), &message, None, None);
    }

    fn flush(&self) {}
}

/// Install a stdout logger as the global `log` backend.
pub fn init(config: &Config) -> Result<(), TintError> {
    init_with_console(config, Arc::new(StdoutConsole))
}

/// Install a logger writing to `console` as the global `log` backend.
///
/// Fails if a backend is already installed.
pub fn init_with_console(config: &Config, console: Arc<dyn Console>) -> Result<(), TintError> {
    let logger: Logger<LogCrate> = Logger::with_console(config, console);
    log::set_boxed_logger(Box::new(logger))?;
    log::set_max_level(
        config
            .min_level
            .map_or(log::LevelFilter::Trace, LogLevel::to_log_filter),
    );
    Ok(())
}
