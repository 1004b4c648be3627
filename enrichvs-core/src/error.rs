//! Structured error types for the enrichvs toolkit.

use thiserror::Error;

/// Unified error type for all enrichvs operations.
#[derive(Debug, Error)]
pub enum EnrichError {
    /// I/O error (file not found, permission denied, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error (malformed rows, unparsable numbers or JSON)
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid input (bad arguments, out-of-range parameters)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Score and label sequences of different lengths.
    #[error("the number of scores ({scores}) must be equal to the number of labels ({labels})")]
    InputMismatch { scores: usize, labels: usize },

    /// A dataset on which the requested metric is undefined (no items,
    /// no hits, or no decoys where the normalizer needs them).
    #[error("degenerate input: {0}")]
    DegenerateInput(String),
}

/// Convenience alias used throughout enrichvs.
pub type Result<T> = std::result::Result<T, EnrichError>;
