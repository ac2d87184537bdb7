//! Archive command implementation.

use crate::cli::Cli;
use crate::error::add_root_context;
use crate::output::OutputFormatter;
use crate::progress::CliProgress;
use anyhow::Result;
use wsarchive_core::ArchiveConfig;
use wsarchive_core::create_workspace_archive_with_progress;

/// Archives the workspace named on the command line.
///
/// Files that fail individually are reported but do not fail the command.
pub fn execute(cli: &Cli, formatter: &dyn OutputFormatter) -> Result<()> {
    let config = ArchiveConfig::default().with_root(&cli.root);

    let mut progress = CliProgress::new(formatter);
    let report = add_root_context(
        create_workspace_archive_with_progress(&config, &mut progress),
        &config.root,
    )?;

    formatter.format_archive_result(&report)?;

    Ok(())
}
