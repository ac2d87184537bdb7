//! Output formatter trait for CLI results.

use anyhow::Result;
use serde::Serialize;
use std::path::Path;
use wsarchive_core::ArchiveError;
use wsarchive_core::ArchiveReport;

/// Common output formatter trait
pub trait OutputFormatter {
    /// Announce the archive about to be written
    fn format_start(&self, archive: &Path);

    /// Report a file stored in the archive
    fn format_entry_added(&self, archive_name: &Path);

    /// Report a file left out because of an error
    fn format_entry_failed(&self, path: &Path, error: &ArchiveError);

    /// Format the final result of a run
    fn format_archive_result(&self, report: &ArchiveReport) -> Result<()>;
}

/// Generic JSON output structure
#[derive(Debug, Serialize)]
pub struct JsonOutput<T> {
    pub operation: String,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    /// Archive written, but some files were left out
    Partial,
}

impl<T: Serialize> JsonOutput<T> {
    pub fn new(operation: impl Into<String>, status: Status, data: T) -> Self {
        Self {
            operation: operation.into(),
            status,
            data: Some(data),
        }
    }
}
