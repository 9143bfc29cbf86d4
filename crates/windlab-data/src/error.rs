//! Error types for dataset operations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or summarizing the dataset.
#[derive(Debug, Error)]
pub enum DataError {
    /// Dataset file does not exist. A missing local file is not transient,
    /// so this is never retried.
    #[error("dataset file not found: {0}")]
    NotFound(PathBuf),

    /// The dataset has no rows, so numeric aggregates are undefined.
    #[error("dataset is empty, nothing to summarize")]
    EmptyDataset,

    /// A row failed to parse (wrong column count or non-numeric cell).
    #[error("failed to parse dataset row {row}: {reason}")]
    Parse { row: usize, reason: String },

    /// CSV-level read failure.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
