//! Error types for nbweave.
//!
//! Library crates use [`NbweaveError`] via `thiserror`.
//! The CLI wraps this with `color-eyre` for rich diagnostics.

use std::path::PathBuf;

/// Top-level error type for all nbweave operations.
#[derive(Debug, thiserror::Error)]
pub enum NbweaveError {
    /// Source file missing or unreadable. Nothing is written in this case.
    #[error("cannot read input {path:?}: {source}")]
    Input {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Destination could not be created or written. A partially written
    /// output file must be treated as invalid by callers.
    #[error("cannot write output {path:?}: {source}")]
    Output {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Configuration loading or validation error.
    #[error("config error: {message}")]
    Config { message: String },

    /// Notebook JSON encoding error.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, NbweaveError>;

impl NbweaveError {
    /// Wrap a read failure with the offending path.
    pub fn input(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Input {
            path: path.into(),
            source,
        }
    }

    /// Wrap a write failure with the offending path.
    pub fn output(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Output {
            path: path.into(),
            source,
        }
    }

    /// Create a config error from any displayable message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }
}
