//! Error types
//!
//! Library-level errors. Command handlers wrap these in `anyhow` with context.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building or ordering a print sequence
#[derive(Debug, Error)]
pub enum OrderError {
    /// A directory could not be listed or the root is not a directory
    #[error("cannot read directory {}: {source}", .path.display())]
    FileSystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The rule file is missing or unreadable
    #[error("cannot read rule file {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An exclusion pattern in the tool config is not a valid glob
    #[error("invalid exclusion pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl OrderError {
    pub(crate) fn file_system(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileSystem {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, OrderError>;
