//! Severity levels of diagnostic entries, with parsing and colorization.
//!
//! The diagnostic format only ever emits the five upper-case tokens
//! `TRACE`, `DEBUG`, `INFO`, `WARN` and `ERROR`. Any other token means the
//! line is not a diagnostic entry.

use std::fmt;

use owo_colors::Style;

/// Canonical severity enumeration.
///
/// Ordered by severity (ascending) for `>=` filtering via [`Ord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl Level {
    /// Width of the rendered severity field.
    pub const FIELD_WIDTH: usize = 5;

    /// All levels, least severe first.
    pub const ALL: [Self; 5] = [
        Self::Trace,
        Self::Debug,
        Self::Info,
        Self::Warn,
        Self::Error,
    ];

    /// Lower-case level names joined for error messages.
    pub fn names() -> String {
        Self::ALL.map(|level| level.as_str().to_ascii_lowercase()).join(", ")
    }

    /// The token exactly as it appears in a diagnostic line.
    #[allow(clippy::trivially_copy_pass_by_ref)] // &self required since OwoColorize has conflicting trait methods
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Trace => "TRACE",
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        }
    }

    /// Returns the [`Style`] for this level's field when colors are enabled.
    ///
    /// - Trace: bright magenta
    /// - Debug: bright blue
    /// - Info: bright green
    /// - Warn: bright yellow
    /// - Error: bright red
    #[allow(clippy::trivially_copy_pass_by_ref)]
    pub const fn style(&self) -> Style {
        match self {
            Self::Trace => Style::new().bright_magenta(),
            Self::Debug => Style::new().bright_blue(),
            Self::Info => Style::new().bright_green(),
            Self::Warn => Style::new().bright_yellow(),
            Self::Error => Style::new().bright_red(),
        }
    }

    /// Returns the [`Style`] for this level, using a custom color if provided.
    ///
    /// If `custom_color` is `None`, falls back to the default color table.
    #[allow(clippy::trivially_copy_pass_by_ref)]
    pub fn style_with_color(&self, custom_color: Option<&str>) -> Style {
        match custom_color {
            Some(color) => color_name_to_style(color),
            None => self.style(),
        }
    }

    /// Match a severity token from a diagnostic line.
    ///
    /// Strict: only the exact upper-case tokens are accepted, so that lines
    /// with foreign levels (`CRITICAL`, `info`, ...) pass through untouched.
    pub fn from_token(s: &str) -> Option<Self> {
        match s {
            "TRACE" => Some(Self::Trace),
            "DEBUG" => Some(Self::Debug),
            "INFO" => Some(Self::Info),
            "WARN" => Some(Self::Warn),
            "ERROR" => Some(Self::Error),
            _ => None,
        }
    }

    /// Parse a user-supplied level name (CLI flag, config file), case-insensitive.
    ///
    /// Returns `None` for unrecognized strings.
    pub fn from_str_loose(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "trace" | "trc" => Some(Self::Trace),
            "debug" | "dbg" => Some(Self::Debug),
            "info" | "inf" => Some(Self::Info),
            "warn" | "warning" | "wrn" => Some(Self::Warn),
            "error" | "err" => Some(Self::Error),
            _ => None,
        }
    }
}

/// Convert a color name string to an [`owo_colors::Style`].
///
/// Supports standard ANSI colors and bright variants.
/// Unknown colors fall back to plain white.
fn color_name_to_style(color: &str) -> Style {
    match color.to_lowercase().as_str() {
        "black" => Style::new().black(),
        "red" => Style::new().red(),
        "green" => Style::new().green(),
        "yellow" => Style::new().yellow(),
        "blue" => Style::new().blue(),
        "magenta" | "purple" => Style::new().magenta(),
        "cyan" => Style::new().cyan(),
        "bright_black" | "gray" | "grey" => Style::new().bright_black(),
        "bright_red" => Style::new().bright_red(),
        "bright_green" => Style::new().bright_green(),
        "bright_yellow" => Style::new().bright_yellow(),
        "bright_blue" => Style::new().bright_blue(),
        "bright_magenta" => Style::new().bright_magenta(),
        "bright_cyan" => Style::new().bright_cyan(),
        "bright_white" => Style::new().bright_white(),
        // "white" and unknown colors
        _ => Style::new().white(),
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
