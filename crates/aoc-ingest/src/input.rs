//! Reading puzzle input from disk.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{IngestError, Result};

/// Reads the whole input file as UTF-8 text.
pub fn read_input(path: &Path) -> Result<String> {
    let text = fs::read_to_string(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = text.len(), "input read");
    Ok(text)
}
