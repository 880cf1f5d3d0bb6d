//! Output file writing

use std::fs;
use std::path::Path;

use crate::error::{ResubError, Result};

/// Writes `lines` to `path` verbatim, truncating any existing file.
///
/// Elements are expected to carry their own terminators; nothing is
/// inserted between them.
pub fn write(path: &Path, lines: &[String]) -> Result<()> {
    fs::write(path, lines.concat()).map_err(|e| ResubError::Write {
        path: path.to_path_buf(),
        source: e,
    })
}
