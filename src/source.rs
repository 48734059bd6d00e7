//! Line supplier: turns a file path into the ordered lines the classifier
//! consumes.

use std::path::Path;

use crate::counter::split_lines;
use crate::error::{CodeCounterError, Result};

/// Supplies the lines of a file.
pub trait LineSource: Sync {
    /// Read `path` and split it into lines.
    ///
    /// # Errors
    /// Returns `FileRead` if the file cannot be read or is not valid UTF-8.
    fn read_lines(&self, path: &Path) -> Result<Vec<String>>;
}

/// Reads files from disk.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsLineSource;

impl LineSource for FsLineSource {
    fn read_lines(&self, path: &Path) -> Result<Vec<String>> {
        let content =
            std::fs::read_to_string(path).map_err(|source| CodeCounterError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(split_lines(&content).map(String::from).collect())
    }
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod tests;
