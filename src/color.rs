//! ANSI color helpers for level tags.
//!
//! Each helper returns its input bracketed by a color escape and the reset
//! sequence `ESC[0m`. Built on [`owo_colors::Style`], whose suffix is a full
//! reset rather than a foreground-only reset.

use owo_colors::{OwoColorize, Style, XtermColors};

/// 256-color palette index used for orange.
const ORANGE_XTERM: u8 = 208;

/// The named colors used by level tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnsiColor {
    Red,
    Yellow,
    Green,
    Orange,
    Grey,
}

impl AnsiColor {
    /// Returns the [`Style`] for this color.
    pub fn style(self) -> Style {
        match self {
            Self::Red => Style::new().red(),
            Self::Yellow => Style::new().yellow(),
            Self::Green => Style::new().green(),
            Self::Orange => Style::new().color(XtermColors::from(ORANGE_XTERM)),
            Self::Grey => Style::new().bright_black(),
        }
    }

    /// Wrap `text` in this color and a trailing reset.
    pub fn paint(self, text: &str) -> String {
        text.style(self.style()).to_string()
    }
}

pub fn red(text: &str) -> String {
    AnsiColor::Red.paint(text)
}

pub fn yellow(text: &str) -> String {
    AnsiColor::Yellow.paint(text)
}

pub fn green(text: &str) -> String {
    AnsiColor::Green.paint(text)
}

pub fn orange(text: &str) -> String {
    AnsiColor::Orange.paint(text)
}

pub fn grey(text: &str) -> String {
    AnsiColor::Grey.paint(text)
}
