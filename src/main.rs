//! layered-opts - layered option resolution
//!
//! Prints every option with its resolved value, taking command line
//! arguments over the configuration file over built-in defaults.

use layered_opts::cli;
use std::io::{self, Write};
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    // Initialize logging
    init_logging();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    // Failures are reported on stdout; the exit status stays 0.
    if let Err(e) = cli::run(std::env::args_os(), &mut out) {
        error!("Error: {}", e);
        let _ = writeln!(out, "{}", e);
    }
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "layered_opts=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}
