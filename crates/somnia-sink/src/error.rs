//! Error types for sink operations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while writing the batch.
#[derive(Debug, Error)]
pub enum SinkError {
    /// Staging table name is not a plain SQL identifier.
    #[error("invalid staging table name: '{name}'")]
    InvalidTable { name: String },

    /// Destination unreachable.
    #[error("failed to open database {path}: {message}")]
    Open { path: PathBuf, message: String },

    /// Could not start the batch transaction.
    #[error("failed to begin transaction: {message}")]
    Begin { message: String },

    /// A row insert failed. Row numbers are 1-indexed, header excluded.
    #[error("insert failed on row {row}: {message}")]
    Insert { row: usize, message: String },

    /// The batch commit failed.
    #[error("commit failed: {message}")]
    Commit { message: String },
}

/// Result type for sink operations.
pub type Result<T> = std::result::Result<T, SinkError>;
