//! Color decisions: `--color`, `NO_COLOR`, `FORCE_COLOR`.

use crate::{stdout_of, tintlog};

#[test]
fn color_never_disables_ansi() {
    let out = stdout_of(tintlog().args(["--color=never", "info", "hello"]));
    assert!(!out.contains("\x1b["), "unexpected escapes: {out:?}");
}

#[test]
fn color_always_enables_ansi() {
    let out = stdout_of(tintlog().args(["--color=always", "info", "hello"]));
    assert!(out.starts_with("\x1b[90m[INFO]\x1b[0m "));
}

#[test]
fn color_always_overrides_no_color() {
    let out = stdout_of(tintlog().env("NO_COLOR", "1").args(["--color=always", "info", "hi"]));
    assert!(out.contains("\x1b["));
}

#[test]
fn piped_stdout_disables_colors_by_default() {
    let out = stdout_of(tintlog().args(["error", "hello"]));
    assert!(out.starts_with("[ERROR] "), "unexpected line: {out:?}");
}

#[test]
fn force_color_enables_colors_when_piped() {
    let out = stdout_of(tintlog().env("FORCE_COLOR", "1").args(["error", "hello"]));
    assert!(out.starts_with("\x1b[38;5;208m[ERROR]\x1b[0m "));
}

#[test]
fn color_never_overrides_force_color() {
    let out = stdout_of(tintlog().env("FORCE_COLOR", "1").args(["--color=never", "info", "x"]));
    assert!(!out.contains("\x1b["));
}
