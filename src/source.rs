//! Input line supply: stdin or a sequence of files.
//!
//! Lines are read as raw bytes. Parsing works on a lossy UTF-8 decoding, so
//! a stray invalid sequence never aborts the run or drops the line, while
//! the raw bytes stay available for lines that are passed through as-is.

use std::borrow::Cow;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::error::TracefmtError;

/// One input stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

impl Input {
    /// Map command-line file arguments to inputs. No arguments means stdin,
    /// and `-` stands for stdin wherever it appears.
    pub fn from_args(files: &[PathBuf]) -> Vec<Self> {
        if files.is_empty() {
            return vec![Self::Stdin];
        }
        files
            .iter()
            .map(|path| {
                if path.as_os_str() == "-" {
                    Self::Stdin
                } else {
                    Self::File(path.clone())
                }
            })
            .collect()
    }

    /// Open the input for buffered reading.
    pub fn open(&self) -> Result<Box<dyn BufRead>, TracefmtError> {
        match self {
            Self::Stdin => Ok(Box::new(io::stdin().lock())),
            Self::File(path) => {
                let file = File::open(path).map_err(|source| TracefmtError::Open {
                    path: path.clone(),
                    source,
                })?;
                tracing::debug!(path = %path.display(), "opened input file");
                Ok(Box::new(BufReader::new(file)))
            }
        }
    }

    /// Display name used in diagnostics.
    pub fn name(&self) -> &Path {
        match self {
            Self::Stdin => Path::new("-"),
            Self::File(path) => path,
        }
    }
}

/// One input line without its terminator.
#[derive(Debug)]
pub struct Line<'a> {
    raw: &'a [u8],
    text: Cow<'a, str>,
}

impl<'a> Line<'a> {
    pub fn new(raw: &'a [u8]) -> Self {
        Self {
            raw,
            text: String::from_utf8_lossy(raw),
        }
    }

    /// The line as text, with invalid UTF-8 replaced by U+FFFD.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The line exactly as read.
    pub fn raw(&self) -> &'a [u8] {
        self.raw
    }

    /// The raw bytes behind `tail`, a suffix of [`Line::text`].
    ///
    /// Lets a pass-through line be written back with the original bytes
    /// even where the text had replacement characters.
    pub fn raw_suffix(&self, tail: &str) -> &'a [u8] {
        let offset = self.text.len().saturating_sub(tail.len());
        match self.text {
            Cow::Borrowed(_) => &self.raw[offset..],
            Cow::Owned(_) => &self.raw[raw_offset(self.raw, offset)..],
        }
    }
}

/// Map a byte offset in the lossy decoding of `raw` back to `raw`.
///
/// The lossy decoding replaces each invalid run reported by
/// [`slice::utf8_chunks`] with one U+FFFD, so offsets line up chunk by chunk.
fn raw_offset(raw: &[u8], lossy_offset: usize) -> usize {
    const REPLACEMENT_LEN: usize = char::REPLACEMENT_CHARACTER.len_utf8();

    let mut lossy = 0;
    let mut consumed = 0;
    for chunk in raw.utf8_chunks() {
        let valid = chunk.valid().len();
        if lossy_offset <= lossy + valid {
            return consumed + (lossy_offset - lossy);
        }
        lossy += valid;
        consumed += valid;
        if !chunk.invalid().is_empty() {
            lossy += REPLACEMENT_LEN;
            consumed += chunk.invalid().len();
        }
    }
    consumed
}

/// Reads lines without their terminator, reusing one buffer.
#[derive(Debug)]
pub struct LineReader<R> {
    reader: R,
    buf: Vec<u8>,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::with_capacity(512),
        }
    }

    /// Read the next line, stripping a trailing `\n` or `\r\n`.
    ///
    /// Returns `Ok(None)` at end of input.
    pub fn next_line(&mut self) -> io::Result<Option<Line<'_>>> {
        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(None);
        }
        if self.buf.last() == Some(&b'\n') {
            self.buf.pop();
            if self.buf.last() == Some(&b'\r') {
                self.buf.pop();
            }
        }
        Ok(Some(Line::new(&self.buf)))
    }
}
