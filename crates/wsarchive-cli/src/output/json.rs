//! JSON output formatter for machine-readable results.

use super::formatter::JsonOutput;
use super::formatter::OutputFormatter;
use super::formatter::Status;
use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use std::io::{self};
use std::path::Path;
use wsarchive_core::ArchiveError;
use wsarchive_core::ArchiveReport;

/// Emits a single JSON document once the run is complete.
pub struct JsonFormatter;

#[derive(Debug, Serialize)]
struct FailureOutput {
    path: String,
    reason: String,
}

#[derive(Debug, Serialize)]
struct ArchiveOutput {
    archive_path: String,
    files_added: usize,
    files_failed: usize,
    bytes_read: u64,
    archive_size: u64,
    archive_size_mib: f64,
    duration_ms: u128,
    failures: Vec<FailureOutput>,
}

impl From<&ArchiveReport> for ArchiveOutput {
    fn from(report: &ArchiveReport) -> Self {
        Self {
            archive_path: report.archive_path.display().to_string(),
            files_added: report.files_added,
            files_failed: report.files_failed(),
            bytes_read: report.bytes_read,
            archive_size: report.archive_size,
            archive_size_mib: report.archive_size_mib(),
            duration_ms: report.duration.as_millis(),
            failures: report
                .failures()
                .map(|(path, reason)| FailureOutput {
                    path: path.display().to_string(),
                    reason: reason.to_string(),
                })
                .collect(),
        }
    }
}

impl JsonFormatter {
    fn output<T: Serialize>(value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        writeln!(io::stdout(), "{json}")?;
        Ok(())
    }
}

impl OutputFormatter for JsonFormatter {
    // Per-entry events are folded into the final document.
    fn format_start(&self, _archive: &Path) {}

    fn format_entry_added(&self, _archive_name: &Path) {}

    fn format_entry_failed(&self, _path: &Path, _error: &ArchiveError) {}

    fn format_archive_result(&self, report: &ArchiveReport) -> Result<()> {
        let status = if report.has_failures() {
            Status::Partial
        } else {
            Status::Success
        };
        let output = JsonOutput::new("archive", status, ArchiveOutput::from(report));
        Self::output(&output)
    }
}
