//! Line shape, tags, and colors for each level.

use predicates::prelude::*;
use regex::Regex;

use crate::{TS, stdout_of, tintlog};

#[test]
fn warning_line_has_yellow_tag_and_timestamp() {
    let out = stdout_of(tintlog().args(["--color=always", "warning", "disk at {0}%", "92"]));
    let re = Regex::new(&format!(r"^\x1b\[33m\[WARNING\]\x1b\[0m {TS} - disk at 92%\n$")).unwrap();
    assert!(re.is_match(&out), "unexpected line: {out:?}");
}

#[test]
fn each_level_has_its_own_tag_and_color() {
    let cases = [
        ("trace", "\x1b[90m[TRACE]\x1b[0m"),
        ("info", "\x1b[90m[INFO]\x1b[0m"),
        ("warning", "\x1b[33m[WARNING]\x1b[0m"),
        ("error", "\x1b[38;5;208m[ERROR]\x1b[0m"),
        ("debug", "\x1b[32m[DEBUG]\x1b[0m"),
        ("critical", "\x1b[31m[CRITICAL]\x1b[0m"),
    ];
    for (level, prefix) in cases {
        let out = stdout_of(tintlog().args(["--color=always", level, "hello"]));
        assert!(out.starts_with(prefix), "{level}: {out:?}");
        assert!(out.ends_with(" - hello\n"), "{level}: {out:?}");
    }
}

#[test]
fn level_names_are_case_insensitive() {
    tintlog()
        .args(["--color=never", "CRITICAL", "down"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("[CRITICAL] "));
}

#[test]
fn unknown_level_is_rejected() {
    tintlog()
        .args(["verbose", "hello"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid level"));
}

#[test]
fn custom_timestamp_format() {
    let out = stdout_of(tintlog().args(["--color=never", "-t", "%Y", "info", "hi"]));
    let re = Regex::new(r"^\[INFO\] \d{4} - hi\n$").unwrap();
    assert!(re.is_match(&out), "unexpected line: {out:?}");
}

#[test]
fn min_level_suppresses_lower_lines() {
    tintlog()
        .args(["--min-level", "error", "warning", "quiet"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    tintlog()
        .args(["--color=never", "--min-level", "error", "critical", "loud"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[CRITICAL]"));
}

#[test]
fn completions_are_generated() {
    tintlog()
        .args(["--completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tintlog"));
}
