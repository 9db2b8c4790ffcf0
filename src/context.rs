//! Separation of contextual annotations from the log message.
//!
//! The `tracing` fmt layer writes the active span stack ahead of the actual
//! message, e.g. `deliver{id=123}:smtp(host=mx1): sending DATA`. With heavily
//! instrumented code that context can be far longer than the message itself.
//! [`split_annotations`] finds where the span run ends by tracking bracket
//! depth and looking for the first top-level `": "`.

use std::ops::Range;

/// Byte range into the remainder covering one balanced group, including any
/// text between the previous group and this one (the span name).
pub type AnnotationSpan = Range<usize>;

/// The remainder of an entry, split into annotation text and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotated<'a> {
    /// The human-readable message.
    pub message: &'a str,
    /// The leading annotation run including its trailing `": "`, or empty.
    pub annotation: &'a str,
    /// Balanced groups found before the scan stopped, ordered by start.
    pub spans: Vec<AnnotationSpan>,
}

/// Scanner state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    OutsideGroup,
    /// Always at least 1.
    InsideGroup(usize),
}

impl ScanState {
    /// Advance over one character. Returns the new state and whether a
    /// top-level group just closed.
    const fn step(self, c: char) -> (Self, bool) {
        match (self, c) {
            (Self::OutsideGroup, '{' | '(') => (Self::InsideGroup(1), false),
            (Self::InsideGroup(depth), '{' | '(') => (Self::InsideGroup(depth + 1), false),
            (Self::InsideGroup(1), '}' | ')') => (Self::OutsideGroup, true),
            (Self::InsideGroup(depth), '}' | ')') => (Self::InsideGroup(depth - 1), false),
            // Closers with nothing open are ordinary characters.
            (state, _) => (state, false),
        }
    }
}

/// Split an entry remainder into annotation text and message.
///
/// The scan stops at the first `": "` outside any group. If at least one
/// balanced group was seen before that point, everything up to and including
/// the space is annotation; otherwise the whole remainder is the message.
/// A group left open at the end of the line is not reported as a span.
pub fn split_annotations(remainder: &str) -> Annotated<'_> {
    let mut state = ScanState::OutsideGroup;
    let mut run_start: Option<usize> = None;
    let mut spans = Vec::new();
    let mut prev: Option<char> = None;
    let mut end = 0;

    for (i, c) in remainder.char_indices() {
        let start = *run_start.get_or_insert(i);

        if i > 1 && c == ' ' && prev == Some(':') && state == ScanState::OutsideGroup {
            if !spans.is_empty() {
                end = i + 1;
            }
            break;
        }

        let (next, closed) = state.step(c);
        if closed {
            spans.push(start..i + c.len_utf8());
            run_start = None;
        }
        state = next;
        prev = Some(c);
    }

    Annotated {
        message: &remainder[end..],
        annotation: &remainder[..end],
        spans,
    }
}
