//! `tintlog`: colorized, timestamped console logging.
//!
//! Every line reads `[TAG] <UTC timestamp> - <message>`, with the tag painted
//! in its level's color. Messages may be positional templates (`{0}`,
//! `{1,-8}`, `{0:X8}`) and may carry an error whose whole cause chain is
//! rendered after the message. Writes from all loggers in the process are
//! serialized so lines never interleave.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use tintlog::{
//!     Config, LeveledLog, LoggerFactory, MemoryConsole, ServiceProviderExt, ServiceRegistry,
//!     ServiceRegistryExt, args,
//! };
//!
//! struct Checkout;
//!
//! let console = Arc::new(MemoryConsole::new());
//! let mut registry = ServiceRegistry::new();
//! registry.add_console_logger_with(Config::default(), console.clone());
//! let provider = registry.build();
//!
//! let logger = provider.logger::<Checkout>().unwrap();
//! logger.log_information_args("{0} items in cart", &args![3]);
//! assert!(console.lines()[0].starts_with("\x1b[90m[INFO]\x1b[0m "));
//!
//! let factory = LoggerFactory::with_console(Config::default(), console.clone());
//! factory.create_logger::<Checkout>().unwrap().log_debug("{0} stays literal");
//! assert!(console.lines()[1].ends_with(" - {0} stays literal"));
//! ```

pub mod bridge;
pub mod cli;
pub mod color;
pub mod config;
pub mod console;
pub mod error;
pub mod factory;
pub mod fault;
pub mod formatter;
pub mod level;
pub mod logger;
pub mod registry;
pub mod template;
pub mod timestamp;

// Re-export primary API types for convenience.
pub use config::Config;
pub use console::{Console, MemoryConsole, StdoutConsole};
pub use error::TintError;
pub use factory::LoggerFactory;
pub use fault::{Fault, render_chain};
pub use formatter::{LineStyle, compose_message, format_line};
pub use level::LogLevel;
pub use logger::{LeveledLog, Logger};
pub use registry::{
    LoggerBinding, ServiceProvider, ServiceProviderExt, ServiceRegistry, ServiceRegistryExt,
};
pub use template::{Arg, TemplateError};
pub use timestamp::{Clock, Timestamp};
