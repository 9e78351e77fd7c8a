//! Configuration management with TOML file support.
//!
//! Merges settings from three sources (highest precedence first):
//! 1. CLI flags
//! 2. Config file (`~/.config/tintlog/config.toml` or `$XDG_CONFIG_HOME/tintlog/config.toml`)
//! 3. Built-in defaults
//!
//! Library users usually start from [`Config::default`], which always
//! colorizes and writes every level.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::cli::{Cli, ColorMode};
use crate::error::TintError;
use crate::formatter::LineStyle;
use crate::level::LogLevel;
use crate::timestamp::{ROUND_TRIP_FORMAT, Timestamp};

/// Runtime configuration merged from defaults, config file, and CLI arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Color output mode (auto/always/never).
    pub color_mode: ColorMode,
    /// Minimum severity to write; lines below it are dropped.
    pub min_level: Option<LogLevel>,
    /// Timestamp display format string (strftime-compatible).
    pub timestamp_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color_mode: ColorMode::Always,
            min_level: None,
            timestamp_format: ROUND_TRIP_FORMAT.to_string(),
        }
    }
}

impl Config {
    /// Build a [`Config`] from CLI arguments, loading the config file if present.
    ///
    /// Merge precedence: CLI flags > config file > defaults.
    pub fn from_cli(cli: &Cli) -> Result<Self, TintError> {
        let mut config = Self {
            color_mode: ColorMode::Auto,
            ..Self::default()
        };

        let config_path = cli.config.clone().unwrap_or_else(Self::default_config_path);

        if config_path.exists() {
            let file_config = FileConfig::load(&config_path)?;
            config.apply_file_config(file_config)?;
        } else if cli.config.is_some() {
            return Err(TintError::Config(format!(
                "config file {} does not exist",
                config_path.display()
            )));
        }

        // CLI overrides
        if let Some(color) = cli.color {
            config.color_mode = color;
        }

        if cli.min_level.is_some() {
            config.min_level = cli.min_level;
        }
        if let Some(ref format) = cli.timestamp_format {
            config.timestamp_format.clone_from(format);
        }

        config.validate()?;
        Ok(config)
    }

    /// Load defaults overlaid with the TOML file at `path`.
    pub fn load(path: &Path) -> Result<Self, TintError> {
        let mut config = Self::default();
        config.apply_file_config(FileConfig::load(path)?)?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve presentation settings (the color decision happens here).
    pub fn line_style(&self) -> LineStyle {
        LineStyle {
            use_color: self.color_mode.resolve(),
            timestamp_format: self.timestamp_format.clone(),
        }
    }

    fn validate(&self) -> Result<(), TintError> {
        if Timestamp::validate_format(&self.timestamp_format) {
            Ok(())
        } else {
            Err(TintError::Config(format!(
                "invalid timestamp format '{}'",
                self.timestamp_format
            )))
        }
    }

    /// Default config file path: `$XDG_CONFIG_HOME/tintlog/config.toml` or `~/.config/tintlog/config.toml`.
    fn default_config_path() -> PathBuf {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            PathBuf::from(xdg).join("tintlog").join("config.toml")
        } else if let Some(home) = std::env::var_os("HOME") {
            PathBuf::from(home)
                .join(".config")
                .join("tintlog")
                .join("config.toml")
        } else {
            PathBuf::from(".config/tintlog/config.toml")
        }
    }

    /// Apply settings from a parsed config file.
    fn apply_file_config(&mut self, file: FileConfig) -> Result<(), TintError> {
        if let Some(color) = file.color {
            self.color_mode = ColorMode::from_str_loose(&color);
        }

        if let Some(level) = file.level {
            let parsed = LogLevel::from_str_loose(&level)
                .ok_or_else(|| TintError::Config(format!("unknown level '{level}'")))?;
            self.min_level = Some(parsed);
        }

        if let Some(format) = file.timestamp_format {
            self.timestamp_format = format;
        }

        Ok(())
    }
}

/// Config file structure (TOML deserialization).
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    color: Option<String>,
    level: Option<String>,
    timestamp_format: Option<String>,
}

impl FileConfig {
    fn load(path: &Path) -> Result<Self, TintError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            TintError::Config(format!("cannot read config file {}: {e}", path.display()))
        })?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }
}
