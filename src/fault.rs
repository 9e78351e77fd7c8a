//! Rich error values and the error-chain renderer.
//!
//! [`render_chain`] walks any [`std::error::Error`] from the outermost error
//! through its [`source`](Error::source) links and produces one section per
//! link. [`Fault`] carries every optional detail a section can show; other
//! error types report what can be recovered from them.

use std::backtrace::{Backtrace, BacktraceStatus};
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{self, Write};
use std::io;
use std::sync::LazyLock;

use regex::Regex;

/// Code reported for errors that carry none of their own.
pub const DEFAULT_ERROR_CODE: u32 = 0x8013_1500;

/// Maximum number of chain links rendered.
pub const MAX_CHAIN_DEPTH: usize = 64;

/// Leading path-like identifier of a `Debug` rendering (`Foo`, `a::b::Foo`).
static DEBUG_TYPE_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*(?:::[A-Za-z_][A-Za-z0-9_]*)*")
        .expect("type name pattern is valid")
});

/// An error with diagnostic detail: kind, code, origin, target, backtrace,
/// key/value data, and an optional inner cause.
///
/// ```
/// use tintlog::Fault;
///
/// let inner = Fault::new("storage::DiskFull", "no space left on device").with_code(0x70);
/// let outer = Fault::new("app::SaveError", "could not save document")
///     .with_origin("editor")
///     .with_data("document", "report.txt")
///     .with_source(inner);
///
/// let rendered = tintlog::fault::render_chain(&outer).unwrap();
/// assert!(rendered.contains("-- Exception Level 1 --"));
/// ```
#[derive(Debug)]
pub struct Fault {
    kind: String,
    message: String,
    code: u32,
    origin: Option<String>,
    target: Option<String>,
    backtrace: Option<Backtrace>,
    data: BTreeMap<String, serde_json::Value>,
    source: Option<Box<dyn Error + Send + Sync + 'static>>,
}

impl Fault {
    pub fn new(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            message: message.into(),
            code: DEFAULT_ERROR_CODE,
            origin: None,
            target: None,
            backtrace: None,
            data: BTreeMap::new(),
            source: None,
        }
    }

    /// Build a fault whose kind is the Rust type name of `E`.
    pub fn of<E: ?Sized>(message: impl Into<String>) -> Self {
        Self::new(std::any::type_name::<E>(), message)
    }

    #[must_use]
    pub fn with_code(mut self, code: u32) -> Self {
        self.code = code;
        self
    }

    /// Name of the component the fault originated in.
    #[must_use]
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    /// Operation or location that failed (e.g., `Store::save`).
    #[must_use]
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    #[must_use]
    pub fn with_data(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_source(mut self, source: impl Into<Box<dyn Error + Send + Sync + 'static>>) -> Self {
        self.source = Some(source.into());
        self
    }

    #[must_use]
    pub fn with_backtrace(mut self, backtrace: Backtrace) -> Self {
        self.backtrace = Some(backtrace);
        self
    }

    /// Capture a backtrace if `RUST_BACKTRACE`/`RUST_LIB_BACKTRACE` enable it.
    #[must_use]
    pub fn capture_backtrace(self) -> Self {
        self.with_backtrace(Backtrace::capture())
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn code(&self) -> u32 {
        self.code
    }

    pub fn origin(&self) -> Option<&str> {
        self.origin.as_deref()
    }

    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    pub const fn backtrace(&self) -> Option<&Backtrace> {
        self.backtrace.as_ref()
    }

    pub const fn data(&self) -> &BTreeMap<String, serde_json::Value> {
        &self.data
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error for Fault {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn Error + 'static))
    }
}

/// What one chain link can tell about itself.
struct LinkDetails<'a> {
    kind: Cow<'a, str>,
    code: u32,
    origin: Option<&'a str>,
    target: Option<&'a str>,
    backtrace: Option<&'a Backtrace>,
    data: Option<&'a BTreeMap<String, serde_json::Value>>,
}

impl<'a> LinkDetails<'a> {
    fn bare(kind: impl Into<Cow<'a, str>>, code: u32) -> Self {
        Self {
            kind: kind.into(),
            code,
            origin: None,
            target: None,
            backtrace: None,
            data: None,
        }
    }

    fn of(err: &'a (dyn Error + 'static)) -> Result<Self, fmt::Error> {
        if let Some(fault) = err.downcast_ref::<Fault>() {
            return Ok(Self {
                kind: Cow::Borrowed(fault.kind()),
                code: fault.code(),
                origin: fault.origin(),
                target: fault.target(),
                backtrace: fault.backtrace(),
                data: Some(fault.data()),
            });
        }
        if let Some(io_err) = err.downcast_ref::<io::Error>() {
            #[allow(clippy::cast_sign_loss)] // OS codes are reported as their bit pattern
            let code = io_err
                .raw_os_error()
                .map_or(DEFAULT_ERROR_CODE, |c| c as u32);
            return Ok(Self::bare("std::io::Error", code));
        }

        macro_rules! known {
            ($($ty:ty),+) => {
                $(
                    if err.is::<$ty>() {
                        return Ok(Self::bare(std::any::type_name::<$ty>(), DEFAULT_ERROR_CODE));
                    }
                )+
            };
        }
        known!(
            std::num::ParseIntError,
            std::num::ParseFloatError,
            std::str::Utf8Error,
            std::string::FromUtf8Error,
            fmt::Error,
            serde_json::Error
        );

        Ok(Self::bare(debug_type_name(err)?, DEFAULT_ERROR_CODE))
    }
}

/// Derive a type name from the leading identifier of the `Debug` output.
///
/// Enum errors usually print a variant first (`Io(Os { .. })`), so the name
/// reported for them is the variant, not the enum.
fn debug_type_name(err: &dyn Error) -> Result<String, fmt::Error> {
    let mut debug = String::new();
    write!(debug, "{err:?}")?;
    Ok(DEBUG_TYPE_NAME
        .find(&debug)
        .map_or_else(|| "<unknown>".to_string(), |m| m.as_str().to_string()))
}

/// Render the chain rooted at `error`, outermost first.
///
/// Fails only if an error's `Display` or `Debug` implementation fails.
pub fn render_chain(error: &(dyn Error + 'static)) -> Result<String, fmt::Error> {
    let mut out = String::new();
    let mut current = Some(error);
    let mut level = 0;

    while let Some(err) = current
        && level < MAX_CHAIN_DEPTH
    {
        render_link(err, level, &mut out)?;
        current = err.source();
        level += 1;
    }

    Ok(out.trim_end().to_string())
}

fn render_link(err: &(dyn Error + 'static), level: usize, out: &mut String) -> fmt::Result {
    let details = LinkDetails::of(err)?;

    writeln!(out, "-- Exception Level {level} --")?;
    writeln!(out, "Type     : {}", details.kind)?;
    writeln!(out, "Message  : {err}")?;
    writeln!(out, "Code     : 0x{:08X}", details.code)?;
    if let Some(origin) = details.origin
        && !origin.trim().is_empty()
    {
        writeln!(out, "Source   : {origin}")?;
    }
    if let Some(target) = details.target {
        writeln!(out, "Target   : {target}")?;
    }
    if let Some(backtrace) = details.backtrace
        && backtrace.status() == BacktraceStatus::Captured
    {
        writeln!(out, "StackTrace:")?;
        writeln!(out, "{backtrace}")?;
    }
    if let Some(data) = details.data
        && !data.is_empty()
    {
        writeln!(out, "Data:")?;
        for (key, value) in data {
            writeln!(out, "  {key}: {}", format_value(value))?;
        }
    }
    Ok(())
}

/// Format a JSON value for display.
///
/// - Strings: unquoted
/// - Numbers/bools: as-is
/// - Arrays and objects: compact JSON
/// - Null: "null"
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
