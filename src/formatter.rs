//! Width-aware, colorized rendering of diagnostic entries.
//!
//! Each entry is rendered on a single line:
//!
//! ```text
//! <timestamp> <LEVEL> <context........> <message> <annotations>
//! ```
//!
//! The message is capped at twice the layout width. The annotation excerpt
//! gets whatever room is left and is cut first when space runs out. All
//! truncation happens before styling and counts only visible characters:
//! escape sequences already present in the input are kept whole, and a cut
//! that leaves input styling open is closed with a reset.

use std::fmt::{self, Write};

use jiff::SignedDuration;
use owo_colors::{OwoColorize, Style};

use crate::cli::ElapsedColumn;
use crate::config::Config;
use crate::context::{self, Annotated};
use crate::level::Level;
use crate::parser::{self, Entry, LineKind};
use crate::session::{Elapsed, Session};

/// Width of the execution-context field. Longer ids are not cut.
pub const CONTEXT_WIDTH: usize = 16;

/// Width of the optional elapsed column.
pub const ELAPSED_WIDTH: usize = 11;

/// Separating spaces between the five rendered fields.
const SEPARATORS: usize = 4;

/// Style of the annotation excerpt.
const EXCERPT_STYLE: Style = Style::new().black().bold();

/// SGR reset, appended after a cut that leaves input styling open.
const RESET: &str = "\x1b[0m";

/// What [`LineFormatter::format_line`] did with a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome<'a> {
    /// A diagnostic entry was rendered into the output buffer.
    Rendered,
    /// Not an entry. The buffer holds this text: the line minus any envelope.
    Passthrough(&'a str),
    /// An entry below the minimum level. Nothing was written.
    Filtered,
}

impl Outcome<'_> {
    /// Whether the line produces output.
    pub const fn is_printed(&self) -> bool {
        !matches!(self, Self::Filtered)
    }
}

/// Formats a stream of lines, carrying the session clock between them.
#[derive(Debug)]
pub struct LineFormatter<'c> {
    config: &'c Config,
    width: usize,
    use_color: bool,
    session: Session,
}

impl<'c> LineFormatter<'c> {
    /// Create a formatter laying out lines for a terminal `width` columns wide.
    pub fn new(config: &'c Config, width: usize, use_color: bool) -> Self {
        Self {
            config,
            width,
            use_color,
            session: Session::new(),
        }
    }

    /// Format a single line for output into `out`.
    ///
    /// Diagnostic entries are re-rendered; anything else is copied through
    /// with only its envelope (if any) removed. Entries below the minimum
    /// level write nothing and return [`Outcome::Filtered`].
    pub fn format_line<'l>(&mut self, line: &'l str, out: &mut String) -> Outcome<'l> {
        match parser::parse_line(line) {
            LineKind::Raw(raw) => {
                out.push_str(raw);
                Outcome::Passthrough(raw)
            }
            LineKind::Entry(entry) => {
                let elapsed = self.session.observe(&entry.timestamp);
                if self.config.min_level.is_some_and(|min| entry.level < min) {
                    return Outcome::Filtered;
                }
                let annotated = context::split_annotations(entry.remainder);
                self.render_entry(&entry, &annotated, elapsed, out);
                Outcome::Rendered
            }
        }
    }

    /// The session clock as of the last formatted entry.
    pub fn session(&self) -> &Session {
        &self.session
    }

    fn render_entry(
        &self,
        entry: &Entry<'_>,
        annotated: &Annotated<'_>,
        elapsed: Elapsed,
        out: &mut String,
    ) {
        let message = truncate_visible(annotated.message, self.width.saturating_mul(2));

        let mut fixed = entry.timestamp.display_width() + Level::FIELD_WIDTH + CONTEXT_WIDTH;
        fixed += SEPARATORS;
        let elapsed_field = self.config.elapsed.map(|column| {
            fixed += ELAPSED_WIDTH + 1;
            let value = match column {
                ElapsedColumn::Start => elapsed.since_start,
                ElapsedColumn::Delta => elapsed.since_previous,
            };
            format!("{:>ELAPSED_WIDTH$}", format_elapsed(value))
        });

        let budget = excerpt_budget(self.width, fixed + message.width);
        let excerpt = truncate_visible(annotated.annotation, budget);

        let level_field = format!("{:<width$}", entry.level.as_str(), width = Level::FIELD_WIDTH);
        let context_field = format!("{:<CONTEXT_WIDTH$}", entry.context);

        if self.use_color {
            let level_style = entry
                .level
                .style_with_color(self.config.level_color(entry.level));
            let _ = write!(
                out,
                "{} {} ",
                entry.timestamp.original.dimmed(),
                level_field.style(level_style)
            );
            if let Some(field) = elapsed_field {
                let _ = write!(out, "{} ", field.dimmed());
            }
            let _ = write!(
                out,
                "{} {message} {}",
                context_field.dimmed(),
                excerpt.style(EXCERPT_STYLE)
            );
        } else {
            let _ = write!(out, "{} {level_field} ", entry.timestamp.original);
            if let Some(field) = elapsed_field {
                out.push_str(&field);
                out.push(' ');
            }
            let _ = write!(out, "{context_field} {message} {excerpt}");
        }
    }
}

/// Characters available for the annotation excerpt when `used` columns are
/// already taken on a `width`-column line.
///
/// When the line already overflows, the budget is computed a second time
/// against the overflow itself, so a modest overflow still leaves room for
/// part of the annotations. A result below zero means no excerpt at all.
pub fn excerpt_budget(width: usize, used: usize) -> usize {
    let width = i64::try_from(width).unwrap_or(i64::MAX);
    let used = i64::try_from(used).unwrap_or(i64::MAX);
    let mut avail = width.saturating_sub(used);
    if avail < 0 {
        avail = width.saturating_add(avail);
    }
    usize::try_from(avail).unwrap_or(0)
}

/// Input text cut to a number of visible characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Visible<'a> {
    text: &'a str,
    /// Visible characters in `text`.
    width: usize,
    /// `text` ends with an SGR style still in effect.
    open_style: bool,
}

impl fmt::Display for Visible<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text)?;
        if self.open_style {
            f.write_str(RESET)?;
        }
        Ok(())
    }
}

/// Take at most `max` visible characters of `s`.
///
/// Escape sequences take no width and are never split. The cut is made
/// right after the last kept visible character, so every sequence before it
/// is whole.
fn truncate_visible(s: &str, max: usize) -> Visible<'_> {
    let mut width = 0;
    let mut open_style = false;
    let mut i = 0;
    while let Some(c) = s[i..].chars().next() {
        if width == max {
            return Visible {
                text: &s[..i],
                width,
                open_style,
            };
        }
        if c == '\x1b' {
            let end = escape_end(s, i);
            if let Some(params) = sgr_params(&s[i..end]) {
                open_style = !params.bytes().all(|b| b == b'0' || b == b';');
            }
            i = end;
        } else {
            width += 1;
            i += c.len_utf8();
        }
    }
    Visible {
        text: s,
        width,
        open_style,
    }
}

/// End of the escape sequence starting at byte `start` (an ESC).
///
/// CSI sequences (`ESC [ ... final`) run to their final byte in `@`..=`~`.
/// Any other escape covers ESC and the character after it. An unterminated
/// sequence runs to the end of the text.
fn escape_end(s: &str, start: usize) -> usize {
    let bytes = s.as_bytes();
    let after = start + 1;
    if bytes.get(after) != Some(&b'[') {
        return s[after..]
            .chars()
            .next()
            .map_or(after, |c| after + c.len_utf8());
    }
    bytes[after + 1..]
        .iter()
        .position(|b| (0x40..=0x7e).contains(b))
        .map_or(s.len(), |pos| after + 1 + pos + 1)
}

/// Parameters of a complete SGR sequence (`ESC [ params m`).
fn sgr_params(seq: &str) -> Option<&str> {
    seq.strip_prefix("\x1b[")?.strip_suffix('m')
}

/// Render a signed duration as `+S.ffffff` seconds.
fn format_elapsed(d: SignedDuration) -> String {
    format!("{:+.6}", d.as_secs_f64())
}
