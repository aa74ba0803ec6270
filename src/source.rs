//! Whole-file input of the sequences to compare.

use std::path::Path;

use tracing::debug;

use crate::error::{EditDistError, EditDistResult};

/// Read `path` in full as raw bytes.
///
/// No decoding is applied; each byte is one code unit.
pub fn read_sequence(path: &Path) -> EditDistResult<Vec<u8>> {
    let bytes = std::fs::read(path).map_err(|source| EditDistError::InputUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = bytes.len(), "read input sequence");
    Ok(bytes)
}
