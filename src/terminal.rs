//! Terminal capability detection and utilities

use std::sync::OnceLock;

use owo_colors::{OwoColorize, colors::css};
use serde::{Deserialize, Serialize};

static COLOR_ENABLED: OnceLock<bool> = OnceLock::new();

/// When to colour output.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    /// Colour when stdout supports it.
    #[default]
    Auto,
    /// Always colour.
    Always,
    /// Never colour.
    Never,
}

/// Fixes the colour decision for the rest of the process.
///
/// Only the first call has any effect. Without a call, colour follows
/// [`ColorChoice::Auto`].
pub fn init(choice: ColorChoice) {
    let enabled = match choice {
        ColorChoice::Auto => detect_color(),
        ColorChoice::Always => true,
        ColorChoice::Never => false,
    };
    let _ = COLOR_ENABLED.set(enabled);
}

fn detect_color() -> bool {
    supports_color::on(supports_color::Stream::Stdout).is_some()
}

/// Detects whether colored output should be enabled
#[must_use]
pub fn supports_color() -> bool {
    *COLOR_ENABLED.get_or_init(detect_color)
}

/// Detects terminal width, returning None if not available
#[must_use]
pub fn terminal_width() -> Option<u16> {
    terminal_size::terminal_size().map(|(w, _)| w.0)
}

/// Check if terminal is narrow (< 60 columns)
#[must_use]
pub fn is_narrow() -> bool {
    terminal_width().is_some_and(|w| w < 60)
}

/// A horizontal rule sized to the terminal.
#[must_use]
pub fn rule(ch: char) -> String {
    let width = if is_narrow() { 30 } else { 43 };
    std::iter::repeat_n(ch, width).collect()
}

/// Extension trait for colorizing output
pub trait Colorize {
    /// Color as success (green)
    fn success(&self) -> String;
    /// Color as warning (amber)
    fn warning(&self) -> String;
    /// Dim the text
    fn dim(&self) -> String;
    /// Bold the text
    fn strong(&self) -> String;
}

impl Colorize for str {
    fn success(&self) -> String {
        if supports_color() {
            self.fg::<css::Green>().to_string()
        } else {
            self.to_string()
        }
    }

    fn warning(&self) -> String {
        if supports_color() {
            self.fg::<css::Orange>().to_string()
        } else {
            self.to_string()
        }
    }

    fn dim(&self) -> String {
        if supports_color() {
            self.dimmed().to_string()
        } else {
            self.to_string()
        }
    }

    fn strong(&self) -> String {
        if supports_color() {
            self.bold().to_string()
        } else {
            self.to_string()
        }
    }
}

impl Colorize for String {
    fn success(&self) -> String {
        self.as_str().success()
    }

    fn warning(&self) -> String {
        self.as_str().warning()
    }

    fn dim(&self) -> String {
        self.as_str().dim()
    }

    fn strong(&self) -> String {
        self.as_str().strong()
    }
}
