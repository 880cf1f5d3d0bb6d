//! Command-line arguments

use std::path::PathBuf;

use clap::Parser;

/// Replaces every input line whose start matches a pattern with the
/// contents of a replacement source. Patterns and replacements are
/// repeatable and pair up in the order given; each pair runs as its own
/// pass over the previous pass's output.
#[derive(Parser, Debug)]
#[command(name = "resub")]
#[command(version)]
pub struct Args {
    /// Input file to be searched
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    pub file: PathBuf,

    /// Output file to be written
    #[arg(short = 'o', long = "output-file", value_name = "FILE")]
    pub output: PathBuf,

    /// Pattern matched against the start of each line; repeatable
    #[arg(short = 'p', long = "pattern", value_name = "STR", required = true)]
    pub patterns: Vec<String>,

    /// Literal string, or file whose contents replace each matched line;
    /// repeatable, paired positionally with --pattern
    #[arg(
        short = 'r',
        long = "replace",
        value_name = "STR_OR_FILE",
        required = true
    )]
    pub replacements: Vec<String>,

    /// Enable debug logging
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

pub fn parse_args() -> Args {
    Args::parse()
}
