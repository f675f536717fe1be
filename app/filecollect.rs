//! Command-line interface for filecollect.
//!
//! Collects every file under a directory into one text file. Progress and errors
//! are logged to stdout; set `RUST_LOG` to change the verbosity.

use clap::Parser;
use filecollect::collect_to_file;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// filecollect — concatenate a directory tree into a single text file
#[derive(Parser)]
#[command(name = "filecollect", version, about, long_about = None)]
struct Cli {
    /// Directory whose files are collected
    directory: PathBuf,

    /// Output file (overwritten if it exists)
    output: PathBuf,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stdout).with_target(false))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging();
    collect_to_file(cli.directory, cli.output);
}
