//! `tracefmt` — Reformat diagnostic log lines for interactive review.
//!
//! This library provides the parsing and layout functionality for the
//! `tracefmt` CLI tool. It recognizes lines written by a `tracing` fmt layer
//! (optionally wrapped in a syslog envelope), separates the span context from
//! the message, and renders each entry as one compact, colorized line sized
//! to the terminal. Everything else passes through unchanged.
//!
//! # Example
//!
//! ```
//! use tracefmt::{Config, LineFormatter};
//!
//! let config = Config::default();
//! let mut formatter = LineFormatter::new(&config, 100, false);
//! let mut out = String::new();
//!
//! formatter.format_line(
//!     "2024-01-02T03:04:05.123456Z INFO worker-1 conn{id=7}: hello",
//!     &mut out,
//! );
//! assert!(out.starts_with("2024-01-02T03:04:05.123456Z INFO  worker-1"));
//! assert!(out.contains("hello conn{id=7}: "));
//! ```

pub mod cli;
pub mod config;
pub mod context;
pub mod envelope;
pub mod error;
pub mod formatter;
pub mod level;
pub mod logging;
pub mod parser;
pub mod session;
pub mod source;
pub mod terminal;
pub mod timestamp;

// Re-export primary API types for convenience.
pub use config::Config;
pub use context::{Annotated, AnnotationSpan, split_annotations};
pub use error::TracefmtError;
pub use formatter::{LineFormatter, Outcome};
pub use level::Level;
pub use parser::{Entry, LineKind, parse_entry, parse_line};
pub use session::{Elapsed, Session};
pub use timestamp::Timestamp;
