//! Error types raised by storage backends.

use thiserror::Error;

/// Errors surfaced by key-value stores.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error for key '{key}': {message}")]
    Json { key: String, message: String },

    #[error("corrupted store file: {0}")]
    CorruptedData(String),

    #[error("storage unavailable: {0}")]
    Unavailable(String),
}
