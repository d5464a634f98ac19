//! Loader — reads the hand-authored word list from disk.

use crate::{ConvertError, Result};
use std::path::Path;

/// Read the whole file at `path` as UTF-8.
pub fn load(path: &Path) -> Result<String> {
    let text = std::fs::read_to_string(path).map_err(|source| ConvertError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "loaded source");
    Ok(text)
}
