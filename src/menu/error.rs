//! Error types for menu persistence.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while saving or loading a menu.
#[derive(Debug, Error)]
pub enum MenuError {
    /// The menu file could not be opened, created or written.
    #[error("Menu I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The content is not a JSON object, or a reader/writer failed mid-stream.
    #[error("Malformed menu: {0}")]
    Json(#[from] serde_json::Error),

    /// An entry's value is not a number.
    #[error("Invalid price for {name}: {value}")]
    InvalidPrice {
        name: String,
        value: serde_json::Value,
    },
}

impl MenuError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        MenuError::Io {
            path: path.into(),
            source,
        }
    }
}
