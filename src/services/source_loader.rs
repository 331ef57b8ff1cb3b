//! Loading diagram sources from disk.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{RenderError, TextEncoding};

/// Read the whole file and decode it with `encoding`.
pub fn read_source(path: &Path, encoding: TextEncoding) -> Result<String, RenderError> {
    let bytes = fs::read(path).map_err(|e| RenderError::source_read(path, e))?;
    encoding.decode(&bytes).map_err(|e| RenderError::source_read(path, e))
}

/// List the regular files of `directory`, sorted by file name.
///
/// A missing or unreadable directory yields an empty list.
pub fn discover_sources(directory: &Path) -> Vec<PathBuf> {
    let entries = match fs::read_dir(directory) {
        Ok(entries) => entries,
        Err(err) => {
            tracing::debug!(
                directory = %directory.display(),
                error = %err,
                "Source directory is not readable"
            );
            return Vec::new();
        }
    };

    let mut sources: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect();
    sources.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    sources
}
