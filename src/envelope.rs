//! Outer transport envelope detection.
//!
//! Diagnostic logs shipped through syslog/journald arrive wrapped as
//! `<time> <host> <proc>: <line>`. This module strips that wrapper so the
//! inner diagnostic line can be matched. Lines without an envelope are
//! returned unchanged.

use std::sync::LazyLock;

use regex::Regex;

// <time> is either BSD syslog `<token> d HH:MM:SS` (the token is usually the
// month name, but anything space-free is taken) or an RFC 3339 timestamp with
// a numeric offset. A trailing `Z` is not accepted so that a bare diagnostic
// entry (which always ends its timestamp in `Z`) never looks like an envelope.
static RE_ENVELOPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<time>\S+\s+\d{1,2}\s+\d{1,2}:\d{2}:\d{2}|\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}(?:\.\d+)?[+-]\d{2}:\d{2})\s+(?P<host>\S+)\s+(?P<proc>\S+):\s+(?P<remainder>.*)$",
    )
    .unwrap()
});

/// The fields of a detected envelope, borrowed from the raw line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Envelope<'a> {
    pub timestamp: &'a str,
    pub host: &'a str,
    pub process: &'a str,
    pub remainder: &'a str,
}

/// Detect an envelope on `line`.
pub fn detect(line: &str) -> Option<Envelope<'_>> {
    let caps = RE_ENVELOPE.captures(line)?;
    Some(Envelope {
        timestamp: caps.name("time")?.as_str(),
        host: caps.name("host")?.as_str(),
        process: caps.name("proc")?.as_str(),
        remainder: caps.name("remainder")?.as_str(),
    })
}

/// Strip the envelope from `line`, or return it unchanged if there is none.
pub fn normalize(line: &str) -> &str {
    match detect(line) {
        Some(envelope) => {
            tracing::trace!(
                timestamp = envelope.timestamp,
                host = envelope.host,
                process = envelope.process,
                "stripped envelope"
            );
            envelope.remainder
        }
        None => line,
    }
}
