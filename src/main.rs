//! Simple Omok terminal tutorial.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // The TUI owns stdout, so logs go to stderr; redirect to a file to read them.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    info!(language = %cli.language, "Starting Simple Omok tutorial");

    simple_omok::tui::run(cli.language)
}
