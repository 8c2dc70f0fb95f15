//! Error types for the text engine library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the text engine library.
#[derive(Error, Debug)]
pub enum EngineError {
    /// Invalid alphabet table data
    #[error("Invalid alphabet: {0}")]
    InvalidAlphabet(String),

    /// Invalid confusables table data
    #[error("Invalid confusables: {0}")]
    InvalidConfusables(String),

    /// Error loading alphabet or confusables data
    #[error("Load error: {0}")]
    Load(String),

    /// I/O error with file context
    #[error("I/O error for {path}: {err}")]
    Io {
        path: PathBuf,
        #[source]
        err: std::io::Error,
    },

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;
