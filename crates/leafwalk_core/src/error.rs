//! Error types.
//!
//! Walking a value never fails. These errors come from the I/O around it:
//! reading configuration and loading documents.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur while loading configuration or documents.
#[derive(Debug, Error)]
pub enum LeafwalkError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Document parse error.
    #[error("Parse error in {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    /// A file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl LeafwalkError {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates a read error for `path`.
    pub fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Creates a parse error for `path`.
    pub fn parse(path: impl AsRef<Path>, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.as_ref().to_path_buf(),
            message: message.into(),
        }
    }
}
