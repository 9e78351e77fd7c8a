//! Template expansion through the command line.

use predicates::prelude::*;

use crate::tintlog;

#[test]
fn positional_arguments_are_substituted() {
    tintlog()
        .args(["--color=never", "info", "{1} then {0}", "first", "second"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with(" - second then first\n"));
}

#[test]
fn alignment_and_format_specifiers() {
    tintlog()
        .args(["--color=never", "info", "[{0,-6}] [{1,4}] {2:X4}", "ab", "7", "255"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with(" - [ab    ] [   7] 00FF\n"));
}

#[test]
fn negative_numbers_are_arguments() {
    tintlog()
        .args(["--color=never", "info", "delta {0}", "-5"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with(" - delta -5\n"));
}

#[test]
fn missing_argument_emits_raw_template() {
    tintlog()
        .args(["--color=never", "warning", "{0} {1}", "only"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with(" - {0} {1}\n"));
}

#[test]
fn without_arguments_braces_are_literal() {
    tintlog()
        .args(["--color=never", "debug", "set {0} to {{x}}"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with(" - set {0} to {{x}}\n"));
}

#[test]
fn escaped_braces_with_arguments() {
    tintlog()
        .args(["--color=never", "info", "{{{0}}}", "x"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with(" - {x}\n"));
}
