//! CLI argument parsing using clap.

use clap::Parser;
use std::path::PathBuf;
use wsarchive_core::config::DEFAULT_ROOT;

#[derive(Parser)]
#[command(name = "wsarchive")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Workspace directory to archive
    #[arg(long, value_name = "DIR", default_value = DEFAULT_ROOT)]
    pub root: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output results in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,
}
