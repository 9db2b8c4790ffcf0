//! Diagnostic line parser.
//!
//! Classifies each input line as either a structured diagnostic [`Entry`]
//! or raw text to be passed through. The diagnostic format is the one
//! written by the server's `tracing` fmt layer with thread names enabled:
//!
//! ```text
//! 2024-01-02T03:04:05.123456Z  INFO worker-1 span{k=v}: target: message
//! ```
//!
//! An optional syslog envelope is stripped first (see [`crate::envelope`]).

use std::sync::LazyLock;

use regex::Regex;

use crate::envelope;
use crate::level::Level;
use crate::timestamp::Timestamp;

static RE_ENTRY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<time>\d+-\d+-\d+T\d+:\d+:\d+\.\d+Z)\s+(?P<level>\S+)\s+(?P<context>\S+)\s+(?P<remainder>.*)$",
    )
    .unwrap()
});

/// The parsed classification of an input line.
#[derive(Debug)]
pub enum LineKind<'a> {
    /// The line is a diagnostic entry.
    Entry(Entry<'a>),
    /// Anything else. Carries the line with any envelope removed, which is
    /// what gets printed.
    Raw(&'a str),
}

/// A structured diagnostic entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<'a> {
    pub timestamp: Timestamp,
    pub level: Level,
    /// Execution-context id, typically the thread name.
    pub context: &'a str,
    /// Everything after the context id: annotations followed by the message.
    pub remainder: &'a str,
}

/// Parse a single input line into a [`LineKind`].
pub fn parse_line(line: &str) -> LineKind<'_> {
    let normalized = envelope::normalize(line);
    match parse_entry(normalized) {
        Some(entry) => LineKind::Entry(entry),
        None => LineKind::Raw(normalized),
    }
}

/// Match the diagnostic entry format on an already-normalized line.
///
/// Returns `None` when the shape does not match, the severity token is not
/// one of the five known levels, or the timestamp is not a real date.
pub fn parse_entry(line: &str) -> Option<Entry<'_>> {
    let caps = RE_ENTRY.captures(line)?;
    let level = Level::from_token(caps.name("level")?.as_str())?;
    let timestamp = Timestamp::parse_entry(caps.name("time")?.as_str())?;

    Some(Entry {
        timestamp,
        level,
        context: caps.name("context")?.as_str(),
        remainder: caps.name("remainder")?.as_str(),
    })
}
