//! Terminal styling and color utilities.
//!
//! This module provides ANSI escape code definitions and color detection
//! for terminal output formatting.

use std::io::IsTerminal;

/// ANSI escape codes for text styling and colors.
pub mod colors {
    /// Reset all styling.
    pub const RESET: &str = "\x1b[0m";
    /// Bright bold white for station names.
    pub const WHITE_BOLD: &str = "\x1b[1;97m";
    /// Gray for secondary elements (arrows, hop numbers).
    pub const GRAY: &str = "\x1b[90m";
    /// Cyan for line names.
    pub const CYAN: &str = "\x1b[36m";
}

/// A collection of resolved color codes, either actual ANSI sequences
/// or empty strings when color is disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPalette {
    pub reset: &'static str,
    pub station: &'static str,
    pub line: &'static str,
    pub gray: &'static str,
}

impl ColorPalette {
    /// Create a palette with actual ANSI color codes.
    #[must_use]
    pub const fn colored() -> Self {
        Self {
            reset: colors::RESET,
            station: colors::WHITE_BOLD,
            line: colors::CYAN,
            gray: colors::GRAY,
        }
    }

    /// Create a palette with no colors (empty strings).
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            reset: "",
            station: "",
            line: "",
            gray: "",
        }
    }

    /// Create a palette based on terminal capabilities.
    #[must_use]
    pub fn detect() -> Self {
        if supports_color() {
            Self::colored()
        } else {
            Self::plain()
        }
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::detect()
    }
}

/// Check if stdout should receive ANSI color codes.
///
/// Respects `NO_COLOR` (https://no-color.org/) and `TERM=dumb`, and never
/// colors output that is piped or redirected.
#[must_use]
pub fn supports_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if let Ok(term) = std::env::var("TERM") {
        if term.eq_ignore_ascii_case("dumb") {
            return false;
        }
    }
    std::io::stdout().is_terminal()
}
