//! Command-line argument definitions for `tracefmt`.
//!
//! Uses [`clap`] derive macros for argument parsing. Every option is also
//! settable from the config file; flags given here win.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::Deserialize;

use crate::level::Level;

/// Reformat diagnostic log lines for interactive review.
///
/// Reads the named files in order (or stdin when none are given), and prints
/// each diagnostic entry as a single compact, colorized line sized to the
/// terminal. Lines that are not diagnostic entries are printed unchanged.
#[derive(Debug, Parser)]
#[command(name = "tracefmt", version, about, long_about = None)]
pub struct Cli {
    /// Input files. `-` reads stdin. Reads stdin when no files are given.
    pub files: Vec<PathBuf>,

    /// Control color output.
    ///
    /// Defaults to `always` so output can be paged with `less -r`.
    #[arg(short = 'c', long, value_enum)]
    pub color: Option<ColorMode>,

    /// Minimum severity to display.
    ///
    /// Entries below this level are suppressed. Other lines always pass through.
    #[arg(short = 'l', long, value_parser = parse_level_arg)]
    pub level: Option<Level>,

    /// Layout width in columns, instead of the detected terminal width.
    #[arg(short = 'w', long, value_parser = clap::value_parser!(u16).range(1..))]
    pub width: Option<u16>,

    /// Show a column with time elapsed since the first or previous entry.
    #[arg(short = 'e', long, value_enum)]
    pub elapsed: Option<ElapsedColumn>,

    /// Path to configuration file.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Color output mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Enable colors only when stdout is a TTY.
    Auto,
    /// Always enable colors.
    Always,
    /// Never enable colors.
    Never,
}

/// Which elapsed time the optional elapsed column shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElapsedColumn {
    /// Time since the first entry.
    Start,
    /// Time since the previous entry.
    Delta,
}

/// Parse level argument as case-insensitive string.
fn parse_level_arg(s: &str) -> Result<Level, String> {
    Level::from_str_loose(s).ok_or_else(|| {
        format!("invalid level '{s}': expected one of {}", Level::names())
    })
}
