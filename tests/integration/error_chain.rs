//! `--error` chains rendered after the message.

use predicates::prelude::*;

use crate::{stdout_of, tintlog};

#[test]
fn single_error_renders_one_section() {
    let out = stdout_of(tintlog().args(["--color=never", "-e", "timeout", "error", "call failed"]));
    assert!(out.contains(" - call failed - Exception: -- Exception Level 0 --\n"));
    assert!(out.contains("Type     : tintlog::cli\n"));
    assert!(out.contains("Message  : timeout\n"));
    assert!(out.contains("Code     : 0x80131500"));
    assert!(!out.contains("Exception Level 1"));
}

#[test]
fn repeated_errors_nest_outermost_first() {
    let out = stdout_of(tintlog().args([
        "--color=never",
        "-e",
        "outer",
        "-e",
        "inner",
        "critical",
        "save failed",
    ]));
    let outer = out.find("Message  : outer").unwrap();
    let level1 = out.find("-- Exception Level 1 --").unwrap();
    let inner = out.find("Message  : inner").unwrap();
    assert!(outer < level1 && level1 < inner, "unexpected order: {out:?}");
    assert!(out.starts_with("[CRITICAL] "));
    assert!(out.ends_with("Code     : 0x80131500\n"));
}

#[test]
fn error_chain_with_template_arguments() {
    tintlog()
        .args(["--color=never", "-e", "boom", "error", "job {0} failed", "17"])
        .assert()
        .success()
        .stdout(predicate::str::contains(" - job 17 failed - Exception: "))
        .stdout(predicate::str::contains("Message  : boom"));
}

#[test]
fn error_on_non_error_levels_still_renders() {
    tintlog()
        .args(["--color=never", "-e", "minor", "warning", "retrying"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Message  : minor"));
}
