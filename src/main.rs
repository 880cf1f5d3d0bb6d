use std::process;

use text_colorizer::Colorize;
use tracing::debug;

use resub::ResubError;

mod args;

fn main() {
    let args = args::parse_args();

    resub::init_tracing(if args.verbose {
        "resub=debug"
    } else {
        "resub=warn"
    });

    match resub::run(&args.file, &args.output, &args.patterns, &args.replacements) {
        Ok(path) => {
            debug!("Wrote {:?}", path);
        }
        // The pair-count diagnostic goes to stdout; everything else is a
        // stderr failure.
        Err(err @ ResubError::PairCountMismatch { .. }) => {
            println!("{}", err);
            process::exit(1);
        }
        Err(err) => {
            eprintln!("{} - {}", "resub".red(), err);
            process::exit(1);
        }
    }
}
