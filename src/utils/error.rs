//! Error handling for htmlgrid
//!
//! Only document-level failures are errors. Per-cell anomalies (bad spans,
//! missing styles, blank content) resolve to defaults and never surface here.

use std::path::PathBuf;

use thiserror::Error;

/// Grid resolution error type
#[derive(Debug, Error)]
pub enum GridError {
    /// The source document could not be read
    #[error("IO error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// IO error without a known path (stdin, output streams)
    #[error("IO error: {0}")]
    Stream(#[from] std::io::Error),
    /// Invalid caller input, e.g. a malformed configuration file
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for grid operations
pub type GridResult<T> = Result<T, GridError>;

// Convenience constructors for errors
impl GridError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GridError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        GridError::InvalidInput(message.into())
    }
}
