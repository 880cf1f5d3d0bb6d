//! Error types for substitution pipeline operations

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResubError {
    #[error("Pattern count ({patterns}) does not match replacement count ({replacements})")]
    PairCountMismatch { patterns: usize, replacements: usize },

    #[error("No pattern/replacement pairs were supplied")]
    NoPairs,

    #[error("Replacement source {0:?} is a directory")]
    DirectorySource(PathBuf),

    #[error("Invalid pattern {pattern:?}: {source}")]
    Pattern {
        pattern: String,
        source: regex::Error,
    },

    #[error("Failed to read {path:?}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("Failed to write {path:?}: {source}")]
    Write { path: PathBuf, source: io::Error },
}

pub type Result<T> = std::result::Result<T, ResubError>;
