//! Error types for blocktree.

use thiserror::Error;

/// Result type alias for blocktree operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while reading a block stream.
///
/// Rendering never fails; every variant here comes from input handling or
/// tree reconstruction.
#[derive(Error, Debug)]
pub enum Error {
    /// The input is not valid JSON, or not a JSON array of records.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A record is missing a required field or carries a mistyped one.
    #[error("Malformed block at index {index}: {reason}")]
    MalformedBlock {
        /// Position of the offending record in the input sequence
        index: usize,
        /// What was wrong with it
        reason: String,
    },

    /// A record whose tag cannot appear at document level (strict mode only).
    #[error("Unexpected block tag `{tag}` at index {index}")]
    UnexpectedTag {
        /// Position of the offending record in the input sequence
        index: usize,
        /// The tag as it appeared on the wire
        tag: String,
    },
}

impl Error {
    /// Build a `MalformedBlock` error.
    pub fn malformed(index: usize, reason: impl Into<String>) -> Self {
        Error::MalformedBlock {
            index,
            reason: reason.into(),
        }
    }

    /// Index of the record that caused the error, if any.
    pub fn block_index(&self) -> Option<usize> {
        match self {
            Error::Json(_) => None,
            Error::MalformedBlock { index, .. } | Error::UnexpectedTag { index, .. } => {
                Some(*index)
            }
        }
    }
}
