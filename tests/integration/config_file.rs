//! Config file loading and precedence.

use std::io::Write;

use predicates::prelude::*;

use crate::tintlog;

fn config_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{content}").unwrap();
    file
}

#[test]
fn config_file_sets_color_and_level() {
    let file = config_file("color = \"never\"\nlevel = \"warning\"\n");
    tintlog()
        .arg("--config")
        .arg(file.path())
        .args(["info", "dropped"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    tintlog()
        .arg("--config")
        .arg(file.path())
        .args(["--color=always", "error", "kept"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("\x1b[38;5;208m[ERROR]"));
}

#[test]
fn cli_flags_override_config_file() {
    let file = config_file("level = \"critical\"\n");
    tintlog()
        .arg("--config")
        .arg(file.path())
        .args(["--color=never", "-l", "trace", "trace", "visible"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[TRACE]"));
}

#[test]
fn xdg_config_home_is_used() {
    let dir = tempfile::tempdir().unwrap();
    let app = dir.path().join("tintlog");
    std::fs::create_dir_all(&app).unwrap();
    std::fs::write(app.join("config.toml"), "timestamp_format = \"%Y\"\ncolor = \"never\"\n")
        .unwrap();

    tintlog()
        .env("XDG_CONFIG_HOME", dir.path())
        .args(["info", "hi"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^\[INFO\] \d{4} - hi\n$").unwrap());
}

#[test]
fn missing_explicit_config_file_fails() {
    tintlog()
        .args(["--config", "/nonexistent/tintlog.toml", "info", "hi"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn unknown_key_in_config_file_fails() {
    let file = config_file("colour = \"never\"\n");
    tintlog()
        .arg("--config")
        .arg(file.path())
        .args(["info", "hi"])
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("tintlog: "));
}

#[test]
fn unknown_level_in_config_file_fails() {
    let file = config_file("level = \"loud\"\n");
    tintlog()
        .arg("--config")
        .arg(file.path())
        .args(["info", "hi"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("loud"));
}
