//! Timestamp parsing for diagnostic entries.
//!
//! Diagnostic entries carry a UTC timestamp with fractional seconds and a
//! literal `Z` marker, e.g. `2024-01-02T03:04:05.123456Z`. The original text
//! is kept for display so the rendered line shows exactly what was logged.

use std::fmt;

/// The exact fractional-second UTC format written by the diagnostic logger.
pub const ENTRY_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.fZ";

/// Parsed timestamp of a diagnostic entry.
///
/// Wraps a [`jiff::Timestamp`] for arithmetic and keeps the original text
/// for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timestamp {
    /// Normalized timestamp value.
    pub value: jiff::Timestamp,
    /// Original string representation, rendered verbatim.
    pub original: String,
}

impl Timestamp {
    /// Parse an entry timestamp using [`ENTRY_FORMAT`].
    ///
    /// Returns `None` when the text is not a valid calendar value; the caller
    /// treats that the same as a line that does not match at all.
    pub fn parse_entry(s: &str) -> Option<Self> {
        let dt = jiff::civil::DateTime::strptime(ENTRY_FORMAT, s).ok()?;
        let zoned = dt.to_zoned(jiff::tz::TimeZone::UTC).ok()?;
        Some(Self {
            value: zoned.timestamp(),
            original: s.to_string(),
        })
    }

    /// Number of characters the timestamp occupies when rendered.
    pub fn display_width(&self) -> usize {
        self.original.chars().count()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original)
    }
}
