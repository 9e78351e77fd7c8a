//! Error types for `tintlog`.
//!
//! Uses [`thiserror`] for ergonomic error derivation. Logging calls never
//! return these; they surface only while configuring or constructing loggers.

use thiserror::Error;

/// Errors that can occur while setting up logging.
///
/// The binary reports any of these on stderr and exits 1.
#[derive(Debug, Error)]
pub enum TintError {
    /// Configuration error (invalid value, unreadable config file).
    #[error("configuration error: {0}")]
    Config(String),

    /// TOML deserialization error.
    #[error("config file error: {0}")]
    Toml(#[from] toml::de::Error),

    /// A logger was resolved from a provider that has no logger binding.
    #[error("no binding registered for {service}")]
    Unregistered { service: &'static str },

    /// The global `log` backend was already installed.
    #[error("cannot install global logger: {0}")]
    SetLogger(#[from] log::SetLoggerError),
}
