//! Replacement-source loading

use std::fs;
use std::path::Path;

use crate::error::{ResubError, Result};

/// Resolves a replacement-source token into the lines to splice in.
///
/// An existing regular file is read whole and split into lines with their
/// terminators retained. A token that names nothing on the filesystem is
/// treated as a single literal replacement line, so a missing file is
/// indistinguishable from an intentional literal. A token naming a
/// directory is rejected.
pub fn load(source: &str) -> Result<Vec<String>> {
    let path = Path::new(source);
    if path.is_file() {
        let data = fs::read_to_string(path).map_err(|e| ResubError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(data.split_inclusive('\n').map(str::to_string).collect())
    } else if path.is_dir() {
        Err(ResubError::DirectorySource(path.to_path_buf()))
    } else {
        Ok(vec![source.to_string()])
    }
}
