//! End-to-end tests for the `tintlog` binary and the public library API.

mod basic_output;
mod color_control;
mod config_file;
mod error_chain;
mod log_bridge;
mod templates;

use assert_cmd::Command;

/// The binary with a config home that holds no config file.
#[allow(deprecated)]
pub fn tintlog() -> Command {
    let mut cmd = Command::cargo_bin("tintlog").unwrap();
    cmd.env("XDG_CONFIG_HOME", "/nonexistent/tintlog-tests")
        .env_remove("FORCE_COLOR")
        .env_remove("NO_COLOR");
    cmd
}

/// Run the binary and return stdout as a string.
pub fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "tintlog failed: {output:?}");
    String::from_utf8(output.stdout).unwrap()
}

/// Matches the round-trip timestamp.
pub const TS: &str = r"\d{4}-\d\d-\d\dT\d\d:\d\d:\d\d\.\d{7}Z";
