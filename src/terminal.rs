//! Terminal width detection.

use terminal_size::{Width, terminal_size, terminal_size_of};

/// Width used when no terminal can be queried.
pub const FALLBACK_WIDTH: usize = 80;

/// Layout width: an explicit setting wins, then the detected terminal, then
/// [`FALLBACK_WIDTH`].
pub fn resolve_width(configured: Option<usize>) -> usize {
    configured.or_else(detect_width).unwrap_or(FALLBACK_WIDTH)
}

/// Query the terminal size.
///
/// stderr is asked first so that `tracefmt app.log | less -r` still lays out
/// for the real terminal; stdout is the fallback.
pub fn detect_width() -> Option<usize> {
    terminal_size_of(std::io::stderr())
        .or_else(terminal_size)
        .map(|(Width(cols), _)| usize::from(cols))
        .filter(|&cols| cols > 0)
}
