//! Service registration for loggers.
//!
//! [`ServiceRegistry`] collects bindings; [`ServiceRegistry::build`] freezes
//! them into a [`ServiceProvider`] that creates singletons on first request.
//! [`ServiceRegistryExt::add_console_logger`] registers the console logger
//! for every category at once, and [`ServiceProviderExt::logger`] resolves it
//! for one category.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use crate::config::Config;
use crate::console::{Console, StdoutConsole};
use crate::error::TintError;
use crate::logger::Logger;

type Shared = Arc<dyn Any + Send + Sync>;

/// Mutable set of bindings, keyed by binding type.
#[derive(Default)]
pub struct ServiceRegistry {
    bindings: HashMap<TypeId, Shared>,
}

impl ServiceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the binding of type `B`.
    pub fn bind<B: Any + Send + Sync>(&mut self, binding: B) -> &mut Self {
        self.bindings.insert(TypeId::of::<B>(), Arc::new(binding));
        self
    }

    pub fn binding<B: Any + Send + Sync>(&self) -> Option<&B> {
        self.bindings
            .get(&TypeId::of::<B>())
            .and_then(|b| b.downcast_ref::<B>())
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn build(self) -> ServiceProvider {
        ServiceProvider {
            bindings: self.bindings,
            singletons: Mutex::new(HashMap::new()),
        }
    }
}

/// Resolves services from a frozen set of bindings.
///
/// Singletons are created on first request and shared afterwards; dropping
/// the provider does not affect instances already handed out.
pub struct ServiceProvider {
    bindings: HashMap<TypeId, Shared>,
    singletons: Mutex<HashMap<TypeId, Shared>>,
}

impl ServiceProvider {
    pub fn binding<B: Any + Send + Sync>(&self) -> Option<&B> {
        self.bindings
            .get(&TypeId::of::<B>())
            .and_then(|b| b.downcast_ref::<B>())
    }

    /// Return the singleton of type `S`, creating it with `create` on first use.
    pub fn singleton<S, F>(&self, create: F) -> Arc<S>
    where
        S: Any + Send + Sync,
        F: FnOnce() -> S,
    {
        let mut singletons = self
            .singletons
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let key = TypeId::of::<S>();

        if let Some(existing) = singletons.get(&key)
            && let Ok(instance) = Arc::clone(existing).downcast::<S>()
        {
            return instance;
        }

        let instance = Arc::new(create());
        singletons.insert(key, Arc::clone(&instance) as Shared);
        instance
    }
}

/// The console-logger binding: one per registry, covering every category.
#[derive(Clone)]
pub struct LoggerBinding {
    pub config: Config,
    pub console: Arc<dyn Console>,
}

impl LoggerBinding {
    pub fn build<T: ?Sized>(&self) -> Logger<T> {
        Logger::with_console(&self.config, Arc::clone(&self.console))
    }
}

/// Registration extension for the console logger.
pub trait ServiceRegistryExt {
    /// Bind the console logger with default settings, writing to stdout.
    fn add_console_logger(&mut self) -> &mut Self;

    fn add_console_logger_with(&mut self, config: Config, console: Arc<dyn Console>) -> &mut Self;
}

impl ServiceRegistryExt for ServiceRegistry {
    fn add_console_logger(&mut self) -> &mut Self {
        self.add_console_logger_with(Config::default(), Arc::new(StdoutConsole))
    }

    fn add_console_logger_with(&mut self, config: Config, console: Arc<dyn Console>) -> &mut Self {
        self.bind(LoggerBinding { config, console })
    }
}

/// Resolution extension for the console logger.
pub trait ServiceProviderExt {
    /// The singleton logger for category `T`.
    fn logger<T: ?Sized + 'static>(&self) -> Result<Arc<Logger<T>>, TintError>;
}

impl ServiceProviderExt for ServiceProvider {
    fn logger<T: ?Sized + 'static>(&self) -> Result<Arc<Logger<T>>, TintError> {
        let binding = self
            .binding::<LoggerBinding>()
            .ok_or(TintError::Unregistered {
                service: std::any::type_name::<Logger<T>>(),
            })?;
        Ok(self.singleton(|| binding.build::<T>()))
    }
}
