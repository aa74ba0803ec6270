//! Error types for the editdist crate.

use std::path::PathBuf;

use crate::distance::Move;

/// Edit distance error types.
#[derive(Debug, thiserror::Error)]
pub enum EditDistError {
    /// A path step is not one of diagonal, down, or right.
    #[error("invalid path step from {from} to {to}: expected move right, down, or diagonal")]
    InvalidPath { from: Move, to: Move },

    /// The path search ran out of candidates before reaching the last cell.
    #[error("no path found through {rows}x{cols} cost matrix")]
    NoPath { rows: usize, cols: usize },

    /// String is not one of the single-letter operation codes.
    #[error("unknown edit operation code: {0:?}")]
    UnknownOpCode(String),

    /// An input sequence could not be read.
    #[error("input unavailable: {path}: {source}")]
    InputUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience result type for editdist operations.
pub type EditDistResult<T> = Result<T, EditDistError>;
