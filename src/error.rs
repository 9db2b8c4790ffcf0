//! Error types for the `tracefmt` application.
//!
//! Uses [`thiserror`] for ergonomic error derivation. Lines that simply do
//! not look like diagnostic entries are not errors; they travel through the
//! pipeline as `None` and are printed unchanged.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur in `tracefmt`.
///
/// Maps to exit codes via [`exit_code`](Self::exit_code):
/// configuration problems → 1, I/O problems → 2.
#[derive(Debug, Error)]
pub enum TracefmtError {
    /// Configuration error (unreadable config file, bad value).
    #[error("configuration error: {0}")]
    Config(String),

    /// TOML deserialization error.
    #[error("config file error: {0}")]
    Toml(#[from] toml::de::Error),

    /// An input file could not be opened.
    #[error("{}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// I/O error during read or write.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl TracefmtError {
    /// Process exit code for this error.
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Config(_) | Self::Toml(_) => 1,
            Self::Open { .. } | Self::Io(_) => 2,
        }
    }
}
