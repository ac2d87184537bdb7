//! Line-by-line progress output for archiving runs.

use crate::output::OutputFormatter;
use std::path::Path;
use wsarchive_core::ArchiveError;
use wsarchive_core::ArchiveProgress;
use wsarchive_core::ArchiveReport;

/// Forwards core progress events to the active output formatter.
///
/// The final result is printed by the command once the run returns, so
/// `on_complete` does nothing here.
pub struct CliProgress<'a> {
    formatter: &'a dyn OutputFormatter,
}

impl<'a> CliProgress<'a> {
    pub fn new(formatter: &'a dyn OutputFormatter) -> Self {
        Self { formatter }
    }
}

impl ArchiveProgress for CliProgress<'_> {
    fn on_start(&mut self, archive: &Path) {
        self.formatter.format_start(archive);
    }

    fn on_entry_added(&mut self, archive_name: &Path, _bytes: u64) {
        self.formatter.format_entry_added(archive_name);
    }

    fn on_entry_failed(&mut self, path: &Path, error: &ArchiveError) {
        self.formatter.format_entry_failed(path, error);
    }

    fn on_complete(&mut self, _report: &ArchiveReport) {}
}
