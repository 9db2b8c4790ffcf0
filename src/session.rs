//! First-seen / most-recent timestamp tracking across a run.

use jiff::SignedDuration;

use crate::timestamp::Timestamp;

/// Time elapsed at one observed entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Elapsed {
    /// Since the first entry of the session.
    pub since_start: SignedDuration,
    /// Since the entry observed just before this one. Negative when the input
    /// goes back in time (clock skew, concatenated files).
    pub since_previous: SignedDuration,
}

/// Session clock owned by the pipeline for the lifetime of a run.
#[derive(Debug, Clone, Default)]
pub struct Session {
    first: Option<jiff::Timestamp>,
    last: Option<jiff::Timestamp>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an entry timestamp and return the elapsed times relative to the
    /// state before this call. The first observation yields zero for both.
    pub fn observe(&mut self, timestamp: &Timestamp) -> Elapsed {
        let now = timestamp.value;
        let first = *self.first.get_or_insert(now);
        let last = self.last.replace(now).unwrap_or(now);

        Elapsed {
            since_start: now.duration_since(first),
            since_previous: now.duration_since(last),
        }
    }

    /// Timestamp of the first observed entry.
    pub fn first(&self) -> Option<jiff::Timestamp> {
        self.first
    }

    /// Timestamp of the most recently observed entry.
    pub fn last(&self) -> Option<jiff::Timestamp> {
        self.last
    }
}
