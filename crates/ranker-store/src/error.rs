//! Error types for storage operations

use thiserror::Error;

/// Result type alias for storage operations
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors that can occur while reading items or persisting state
#[derive(Error, Debug)]
pub enum StoreError {
    /// Filesystem error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Well-formed JSON that does not describe a valid matrix
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// The item source named no items
    #[error("No items found in {0}")]
    NoItems(String),
}
