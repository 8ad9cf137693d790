//! Error types for starting a batch.
//!
//! Per-file failures are not batch errors: they are reported in each
//! `FileReport` and the batch moves on.

use thiserror::Error;

/// Reason a batch could not start.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum BatchError {
    /// The collected file list was empty.
    #[error("No .dae files to process")]
    NoFiles,
}

/// Result type for batch operations.
pub type BatchResult<T> = Result<T, BatchError>;
