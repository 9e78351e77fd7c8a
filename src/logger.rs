//! The leveled logging contract and its console implementation.
//!
//! [`LeveledLog`] has one required method, [`emit`](LeveledLog::emit); the
//! per-level methods are provided on top of it. [`Logger`] implements it by
//! composing a line and writing it through the process-wide console lock.
//!
//! ```
//! use std::sync::Arc;
//! use tintlog::{Config, LeveledLog, Logger, MemoryConsole, args};
//!
//! struct Billing;
//!
//! let console = Arc::new(MemoryConsole::new());
//! let logger: Logger<Billing> = Logger::with_console(&Config::default(), console.clone());
//!
//! logger.log_warning_args("disk at {0}%", &args![92]);
//! assert!(console.lines()[0].ends_with(" - disk at 92%"));
//! ```

use std::error::Error;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::config::Config;
use crate::console::{self, Console, StdoutConsole};
use crate::formatter::{self, LineStyle};
use crate::level::LogLevel;
use crate::template::Arg;
use crate::timestamp::{Clock, Timestamp};

/// Leveled logging operations.
///
/// Plain methods write their message verbatim. `_args` methods treat the
/// message as a template; a template that does not match its arguments is
/// written raw. `_with` methods append the rendered error chain. None of these
/// can fail.
pub trait LeveledLog: Send + Sync {
    /// Write one line at `level`.
    ///
    /// `args` of `Some` (even an empty slice) makes `message` a template.
    fn emit(
        &self,
        level: LogLevel,
        message: &str,
        args: Option<&[Arg]>,
        error: Option<&(dyn Error + 'static)>,
    );

    fn log_trace(&self, message: &str) {
        self.emit(LogLevel::Trace, message, None, None);
    }

    fn log_trace_args(&self, template: &str, args: &[Arg]) {
        self.emit(LogLevel::Trace, template, Some(args), None);
    }

    fn log_information(&self, message: &str) {
        self.emit(LogLevel::Info, message, None, None);
    }

    fn log_information_args(&self, template: &str, args: &[Arg]) {
        self.emit(LogLevel::Info, template, Some(args), None);
    }

    fn log_warning(&self, message: &str) {
        self.emit(LogLevel::Warning, message, None, None);
    }

    fn log_warning_args(&self, template: &str, args: &[Arg]) {
        self.emit(LogLevel::Warning, template, Some(args), None);
    }

    fn log_debug(&self, message: &str) {
        self.emit(LogLevel::Debug, message, None, None);
    }

    fn log_debug_args(&self, template: &str, args: &[Arg]) {
        self.emit(LogLevel::Debug, template, Some(args), None);
    }

    fn log_error(&self, message: &str) {
        self.emit(LogLevel::Error, message, None, None);
    }

    fn log_error_args(&self, template: &str, args: &[Arg]) {
        self.emit(LogLevel::Error, template, Some(args), None);
    }

    fn log_error_with(&self, error: &(dyn Error + 'static), message: &str) {
        self.emit(LogLevel::Error, message, None, Some(error));
    }

    fn log_error_with_args(&self, error: &(dyn Error + 'static), template: &str, args: &[Arg]) {
        self.emit(LogLevel::Error, template, Some(args), Some(error));
    }

    fn log_critical(&self, message: &str) {
        self.emit(LogLevel::Critical, message, None, None);
    }

    fn log_critical_args(&self, template: &str, args: &[Arg]) {
        self.emit(LogLevel::Critical, template, Some(args), None);
    }

    fn log_critical_with(&self, error: &(dyn Error + 'static), message: &str) {
        self.emit(LogLevel::Critical, message, None, Some(error));
    }

    fn log_critical_with_args(
        &self,
        error: &(dyn Error + 'static),
        template: &str,
        args: &[Arg],
    ) {
        self.emit(LogLevel::Critical, template, Some(args), Some(error));
    }
}

impl<L: LeveledLog + ?Sized> LeveledLog for Arc<L> {
    fn emit(
        &self,
        level: LogLevel,
        message: &str,
        args: Option<&[Arg]>,
        error: Option<&(dyn Error + 'static)>,
    ) {
        (**self).emit(level, message, args, error);
    }
}

/// Convenience macros: a bare message is written verbatim, a message followed
/// by arguments is expanded as a template.
///
/// ```
/// # use std::sync::Arc;
/// # use tintlog::{Config, Logger, MemoryConsole};
/// # let console = Arc::new(MemoryConsole::new());
/// # let logger: Logger<()> = Logger::with_console(&Config::default(), console.clone());
/// tintlog::log_warning!(logger, "disk at {0}%", 92);
/// tintlog::log_information!(logger, "ready");
/// # assert_eq!(console.lines().len(), 2);
/// ```
#[macro_export]
macro_rules! log_trace {
    ($logger:expr, $message:expr $(,)?) => {{
        use $crate::LeveledLog as _;
        $logger.log_trace($message)
    }};
    ($logger:expr, $template:expr, $($arg:expr),+ $(,)?) => {{
        use $crate::LeveledLog as _;
        $logger.log_trace_args($template, &$crate::args![$($arg),+])
    }};
}

#[macro_export]
macro_rules! log_information {
    ($logger:expr, $message:expr $(,)?) => {{
        use $crate::LeveledLog as _;
        $logger.log_information($message)
    }};
    ($logger:expr, $template:expr, $($arg:expr),+ $(,)?) => {{
        use $crate::LeveledLog as _;
        $logger.log_information_args($template, &$crate::args![$($arg),+])
    }};
}

#[macro_export]
macro_rules! log_warning {
    ($logger:expr, $message:expr $(,)?) => {{
        use $crate::LeveledLog as _;
        $logger.log_warning($message)
    }};
    ($logger:expr, $template:expr, $($arg:expr),+ $(,)?) => {{
        use $crate::LeveledLog as _;
        $logger.log_warning_args($template, &$crate::args![$($arg),+])
    }};
}

#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $message:expr $(,)?) => {{
        use $crate::LeveledLog as _;
        $logger.log_debug($message)
    }};
    ($logger:expr, $template:expr, $($arg:expr),+ $(,)?) => {{
        use $crate::LeveledLog as _;
        $logger.log_debug_args($template, &$crate::args![$($arg),+])
    }};
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr, $message:expr $(,)?) => {{
        use $crate::LeveledLog as _;
        $logger.log_error($message)
    }};
    ($logger:expr, $template:expr, $($arg:expr),+ $(,)?) => {{
        use $crate::LeveledLog as _;
        $logger.log_error_args($template, &$crate::args![$($arg),+])
    }};
}

#[macro_export]
macro_rules! log_critical {
    ($logger:expr, $message:expr $(,)?) => {{
        use $crate::LeveledLog as _;
        $logger.log_critical($message)
    }};
    ($logger:expr, $template:expr, $($arg:expr),+ $(,)?) => {{
        use $crate::LeveledLog as _;
        $logger.log_critical_args($template, &$crate::args![$($arg),+])
    }};
}

/// Console logger for category `T`.
///
/// `T` only tags which subsystem is logging; it is never instantiated.
/// Instances are interchangeable apart from their settings and share the one
/// console lock.
pub struct Logger<T: ?Sized> {
    console: Arc<dyn Console>,
    style: LineStyle,
    min_level: Option<LogLevel>,
    clock: Clock,
    _category: PhantomData<fn() -> T>,
}

impl<T: ?Sized> Logger<T> {
    /// Logger writing to standard output.
    pub fn new(config: &Config) -> Self {
        Self::with_console(config, Arc::new(StdoutConsole))
    }

    pub fn with_console(config: &Config, console: Arc<dyn Console>) -> Self {
        Self {
            console,
            style: config.line_style(),
            min_level: config.min_level,
            clock: Timestamp::now,
            _category: PhantomData,
        }
    }

    /// Replace the time source (fixed clocks make output deterministic).
    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Rust type name of the category.
    pub fn category(&self) -> &'static str {
        std::any::type_name::<T>()
    }

    pub const fn style(&self) -> &LineStyle {
        &self.style
    }

    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level.passes(self.min_level)
    }

    /// Compose the full line `emit` would write, without writing it.
    pub fn compose(
        &self,
        level: LogLevel,
        message: &str,
        args: Option<&[Arg]>,
        error: Option<&(dyn Error + 'static)>,
    ) -> String {
        let text = formatter::compose_message(message, args, error);
        let mut line = String::with_capacity(text.len() + 48);
        formatter::format_line(Some(level), &(self.clock)(), &text, &self.style, &mut line);
        line
    }
}

impl<T: ?Sized> Clone for Logger<T> {
    fn clone(&self) -> Self {
        Self {
            console: Arc::clone(&self.console),
            style: self.style.clone(),
            min_level: self.min_level,
            clock: self.clock,
            _category: PhantomData,
        }
    }
}

impl<T: ?Sized> fmt::Debug for Logger<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("category", &self.category())
            .field("style", &self.style)
            .field("min_level", &self.min_level)
            .finish_non_exhaustive()
    }
}

impl<T: ?Sized> LeveledLog for Logger<T> {
    fn emit(
        &self,
        level: LogLevel,
        message: &str,
        args: Option<&[Arg]>,
        error: Option<&(dyn Error + 'static)>,
    ) {
        if !self.is_enabled(level) {
            return;
        }
        let line = self.compose(level, message, args, error);
        console::write_line(self.console.as_ref(), &line);
    }
}
