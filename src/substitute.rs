//! Line matching and substitution

use std::fs;
use std::path::Path;

use regex::Regex;

use crate::error::{ResubError, Result};

/// Applies one pattern to `input`, replacing every line whose start matches.
///
/// The pattern must match from the beginning of a line; the rest of the
/// line need not match. A matched line is dropped and every element of
/// `replacement` is spliced in where it stood, so the output grows or
/// shrinks when the replacement is not exactly one line. Non-matching
/// lines pass through unchanged. The whole result is materialized in
/// memory.
pub fn substitute(pattern: &str, input: &Path, replacement: &[String]) -> Result<Vec<String>> {
    let regex = compile_anchored(pattern)?;

    let data = fs::read_to_string(input).map_err(|e| ResubError::Read {
        path: input.to_path_buf(),
        source: e,
    })?;

    let mut lines = Vec::new();
    for line in data.split_inclusive('\n') {
        if regex.is_match(line) {
            lines.extend(replacement.iter().cloned());
        } else {
            lines.push(line.to_string());
        }
    }
    Ok(lines)
}

/// Compiles `pattern` so it can only match from the start of a line.
///
/// The non-capturing group keeps top-level alternations anchored.
fn compile_anchored(pattern: &str) -> Result<Regex> {
    Regex::new(&format!("^(?:{pattern})")).map_err(|e| ResubError::Pattern {
        pattern: pattern.to_string(),
        source: e,
    })
}
