//! Error types for the datalens library.
//!
//! The profiling engine itself is total: malformed cells are dropped from the
//! reduction they would feed. These errors cover the edges around it, such as
//! reading input files, exporting summaries and resolving column names.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for datalens operations.
#[derive(Debug, Error)]
pub enum DatalensError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A row could not be turned into a record.
    #[error("Invalid record at row {row}: {message}")]
    InvalidRecord { row: usize, message: String },

    /// A requested column does not exist in the dataset.
    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for datalens operations.
pub type Result<T> = std::result::Result<T, DatalensError>;
