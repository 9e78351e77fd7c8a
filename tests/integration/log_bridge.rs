//! The `log` crate backend and the public library surface.

use std::sync::Arc;

use tintlog::{Config, LogLevel, MemoryConsole, bridge};

#[test]
fn log_macros_route_to_console() {
    let console = Arc::new(MemoryConsole::new());
    let config = Config {
        min_level: Some(LogLevel::Info),
        ..Config::default()
    };
    bridge::init_with_console(&config, console.clone()).unwrap();

    log::info!("cache warmed in {}ms", 12);
    log::warn!("slow query");
    log::debug!("dropped below min level");

    let lines = console.lines();
    assert_eq!(lines.len(), 2, "{lines:?}");
    assert!(lines[0].starts_with("\x1b[90m[INFO]\x1b[0m "));
    assert!(lines[0].ends_with(" - cache warmed in 12ms"));
    assert!(lines[1].contains("[WARNING]"));

    assert!(bridge::init_with_console(&config, console).is_err());
}
