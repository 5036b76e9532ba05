//! Spec-file loading — implements the `SpecReader` port.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::application::ports::SpecReader;
use crate::domain::AppSpec;
use crate::domain::error::SpecFileError;

/// Read a file's full text.
///
/// Existence is checked before the read so a missing file yields the fixed
/// `File <path> does not exist` wording rather than a raw OS error.
///
/// # Errors
///
/// Returns [`SpecFileError::NotFound`] when `path` does not reference an
/// existing file, or [`SpecFileError::Unreadable`] when the read fails.
pub fn read_file(path: &Path) -> Result<String, SpecFileError> {
    if !path.exists() {
        return Err(SpecFileError::NotFound(path.display().to_string()));
    }
    Ok(fs::read_to_string(path)?)
}

/// Read a file and parse its content as JSON.
///
/// # Errors
///
/// Propagates [`read_file`] failures, or returns
/// [`SpecFileError::InvalidJson`] carrying the parser's own message when the
/// content is not valid JSON.
pub fn read_json_file(path: &Path) -> Result<Value, SpecFileError> {
    let content = read_file(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Filesystem implementation of `SpecReader`.
pub struct JsonSpecReader;

impl SpecReader for JsonSpecReader {
    fn read_json_file(&self, path: &Path) -> anyhow::Result<AppSpec> {
        Ok(AppSpec::new(read_json_file(path)?))
    }
}
