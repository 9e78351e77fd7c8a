//! Console output targets and the process-wide write lock.
//!
//! Every logger writes through [`write_line`], which holds [`CONSOLE_LOCK`]
//! for the duration of the write. The lock is shared by all logger instances
//! and all consoles, so lines from concurrent callers never interleave.

use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

/// Serializes every console write in the process.
static CONSOLE_LOCK: Mutex<()> = Mutex::new(());

/// A destination for complete log lines.
///
/// Implementations receive one line (without trailing newline) per call.
pub trait Console: Send + Sync {
    fn write_line(&self, line: &str) -> io::Result<()>;
}

/// Writes lines to the process's standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutConsole;

impl Console for StdoutConsole {
    fn write_line(&self, line: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{line}")?;
        stdout.flush()
    }
}

/// Collects lines in memory; useful for tests and for embedding output
/// elsewhere.
#[derive(Debug, Default)]
pub struct MemoryConsole {
    lines: Mutex<Vec<String>>,
}

impl MemoryConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every line written so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// All lines, each terminated by a newline.
    pub fn contents(&self) -> String {
        self.lines().iter().fold(String::new(), |mut acc, line| {
            acc.push_str(line);
            acc.push('\n');
            acc
        })
    }

    pub fn clear(&self) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl Console for MemoryConsole {
    fn write_line(&self, line: &str) -> io::Result<()> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(line.to_string());
        Ok(())
    }
}

/// Write `line` to `console` while holding the process-wide lock.
///
/// Write failures (including a closed pipe) are dropped: logging never fails
/// its caller.
pub fn write_line(console: &dyn Console, line: &str) {
    let _guard = CONSOLE_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
    let _ = console.write_line(line);
}
