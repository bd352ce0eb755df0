//! File collaborator: loading source text and saving walks.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Characters rejected in a walk destination name.
const FORBIDDEN: &[char] = &['\\', '/', ':', '*', '?', '"', '<', '>', '|'];

/// Read a text file, joining its lines with a single space.
pub fn load_text(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    Ok(raw.lines().collect::<Vec<_>>().join(" "))
}

/// Reject empty names and names containing any of `\ / : * ? " < > |`.
pub fn validate_file_name(name: &str) -> Result<()> {
    if name.is_empty() || name.contains(FORBIDDEN) {
        return Err(Error::InvalidFileName(name.to_string()));
    }
    Ok(())
}

/// Overwrite `dir/name` with `words` space-joined, with no trailing separator or newline.
///
/// `name` is a bare file name and is checked with [`validate_file_name`] first.
pub fn write_walk<S: AsRef<str>>(
    dir: impl AsRef<Path>,
    name: &str,
    words: &[S],
) -> Result<PathBuf> {
    validate_file_name(name)?;
    let path = dir.as_ref().join(name);
    let content = words.iter().map(AsRef::as_ref).collect::<Vec<&str>>().join(" ");
    fs::write(&path, content).map_err(|e| Error::io(&path, e))?;
    Ok(path)
}
