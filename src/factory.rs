//! Logger factory.
//!
//! Each [`LoggerFactory::create_logger`] call builds its own registry and
//! provider, resolves one logger, and discards the scope. Nothing is cached
//! across calls; callers that want one shared instance keep the returned
//! `Arc` themselves.

use std::sync::Arc;

use crate::config::Config;
use crate::console::{Console, StdoutConsole};
use crate::error::TintError;
use crate::logger::Logger;
use crate::registry::{ServiceProviderExt, ServiceRegistry, ServiceRegistryExt};

/// Creates loggers bound to a category type.
#[derive(Clone)]
pub struct LoggerFactory {
    config: Config,
    console: Arc<dyn Console>,
}

impl Default for LoggerFactory {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl LoggerFactory {
    /// Factory for loggers writing to standard output.
    pub fn new(config: Config) -> Self {
        Self::with_console(config, Arc::new(StdoutConsole))
    }

    pub fn with_console(config: Config, console: Arc<dyn Console>) -> Self {
        Self { config, console }
    }

    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Build a fresh scope, register the console logger, and resolve one
    /// logger for category `T`.
    pub fn create_logger<T: ?Sized + 'static>(&self) -> Result<Arc<Logger<T>>, TintError> {
        let mut registry = ServiceRegistry::new();
        registry.add_console_logger_with(self.config.clone(), Arc::clone(&self.console));
        let provider = registry.build();
        provider.logger::<T>()
    }
}
