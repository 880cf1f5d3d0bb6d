//! Pass orchestration
//!
//! A pipeline run applies each (pattern, replacement) pair as one pass over
//! the whole file. Pass 0 reads the input file; every pass writes the
//! output file, and every later pass reads it back, so the output path
//! doubles as working storage between passes. Interrupting a multi-pass run
//! therefore leaves a partially substituted output file behind.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::content;
use crate::error::{ResubError, Result};
use crate::substitute;
use crate::writer;

/// Runs every substitution pass in order, returning the final output path.
///
/// `patterns` and `replacements` pair up positionally and must be equal in
/// count; a mismatch fails before any pass executes. Zero pairs are
/// rejected rather than silently copying the input.
pub fn run(
    input: &Path,
    output: &Path,
    patterns: &[String],
    replacements: &[String],
) -> Result<PathBuf> {
    if patterns.len() != replacements.len() {
        return Err(ResubError::PairCountMismatch {
            patterns: patterns.len(),
            replacements: replacements.len(),
        });
    }
    if patterns.is_empty() {
        return Err(ResubError::NoPairs);
    }

    let mut source = input.to_path_buf();
    for (i, (pattern, replacement)) in patterns.iter().zip(replacements).enumerate() {
        let content = content::load(replacement)?;
        let lines = substitute::substitute(pattern, &source, &content)?;
        debug!(
            "Pass {}: pattern {:?} produced {} lines",
            i,
            pattern,
            lines.len()
        );
        writer::write(output, &lines)?;
        source = output.to_path_buf();
    }
    Ok(output.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn strings(elems: &[&str]) -> Vec<String> {
        elems.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_mismatched_counts_fail_before_any_pass() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.txt");
        fs::write(&input, "a\n").unwrap();
        let output = dir.path().join("out.txt");

        let err = run(
            &input,
            &output,
            &strings(&["a", "b"]),
            &strings(&["1", "2", "3"]),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ResubError::PairCountMismatch {
                patterns: 2,
                replacements: 3
            }
        ));
        assert!(!output.exists());
    }

    #[test]
    fn test_zero_pairs_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.txt");
        fs::write(&input, "a\n").unwrap();
        let output = dir.path().join("out.txt");

        let err = run(&input, &output, &[], &[]).unwrap_err();
        assert!(matches!(err, ResubError::NoPairs));
        assert!(!output.exists());
    }

    #[test]
    fn test_single_pass_replaces_matched_line() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.txt");
        fs::write(&input, "START\nkeep\nEND\n").unwrap();
        let output = dir.path().join("out.txt");

        let result = run(&input, &output, &strings(&["START"]), &strings(&["BEGIN\n"])).unwrap();
        assert_eq!(result, output);
        assert_eq!(fs::read_to_string(&output).unwrap(), "BEGIN\nkeep\nEND\n");
    }

    #[test]
    fn test_file_replacement_expands_matched_line() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.txt");
        fs::write(&input, "a\nMID\nc\n").unwrap();
        let replacement = dir.path().join("repl.txt");
        fs::write(&replacement, "X\nY\n").unwrap();
        let output = dir.path().join("out.txt");

        run(
            &input,
            &output,
            &strings(&["MID"]),
            &strings(&[replacement.to_str().unwrap()]),
        )
        .unwrap();
        assert_eq!(fs::read_to_string(&output).unwrap(), "a\nX\nY\nc\n");
    }

    #[test]
    fn test_passes_chain_cumulatively() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.txt");
        fs::write(&input, "A one\nB two\nkeep\n").unwrap();
        let output = dir.path().join("out.txt");

        run(
            &input,
            &output,
            &strings(&["A", "B"]),
            &strings(&["1\n", "2\n"]),
        )
        .unwrap();
        assert_eq!(fs::read_to_string(&output).unwrap(), "1\n2\nkeep\n");
    }

    #[test]
    fn test_later_pass_sees_earlier_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.txt");
        fs::write(&input, "A\n").unwrap();
        let output = dir.path().join("out.txt");

        run(
            &input,
            &output,
            &strings(&["A", "Z"]),
            &strings(&["Z\n", "done\n"]),
        )
        .unwrap();
        assert_eq!(fs::read_to_string(&output).unwrap(), "done\n");
    }

    #[test]
    fn test_rerun_on_own_output_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.txt");
        fs::write(&input, "START\nkeep\n").unwrap();
        let first = dir.path().join("first.txt");
        let second = dir.path().join("second.txt");

        run(&input, &first, &strings(&["START"]), &strings(&["BEGIN\n"])).unwrap();
        run(&first, &second, &strings(&["START"]), &strings(&["BEGIN\n"])).unwrap();
        assert_eq!(
            fs::read_to_string(&first).unwrap(),
            fs::read_to_string(&second).unwrap()
        );
    }
}
