//! Line-anchored regular-expression substitution
//!
//! Replaces whole lines of a text file whose start matches a pattern with
//! the contents of a replacement source, which is either a literal string
//! or another file. Multiple pattern/replacement pairs are applied as
//! chained passes, each operating on the previous pass's output.

mod content;
mod error;
mod pipeline;
mod substitute;
mod writer;

pub use content::load;
pub use error::{ResubError, Result};
pub use pipeline::run;
pub use substitute::substitute;
pub use writer::write;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing/logging with the given filter level
pub fn init_tracing(filter: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
