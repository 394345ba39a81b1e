//! Newline-delimited file-list parsing
//!
//! The generator and the batch converters all consume plain text files
//! with one asset path per line. Editors and shell redirection leave a
//! trailing newline, so blank lines are stripped rather than surfaced as
//! empty paths.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Read a newline-delimited list of file paths.
///
/// Lines are trimmed and blank lines dropped, so a trailing newline (or
/// stray blank line) never produces an empty entry.
///
/// # Errors
/// Returns [`Error::FileListNotFound`] if the list file does not exist.
pub fn read_file_list<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::FileListNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path)?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect())
}
