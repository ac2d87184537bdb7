//! wsarchive CLI - snapshots a workspace into a timestamped ZIP archive.

mod cli;
mod commands;
mod error;
mod output;
mod progress;

use anyhow::Result;
use clap::Parser;
use tracing::Level;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    init_tracing(cli.verbose);

    let formatter = output::create_formatter(cli.json, cli.verbose, cli.quiet);

    commands::archive::execute(&cli, &*formatter)
}

/// Diagnostics go to stderr so stdout stays parseable in `--json` mode.
fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::ERROR };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
