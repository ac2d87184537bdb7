//! Human-readable output formatter with colors and styling.

use super::formatter::OutputFormatter;
use anyhow::Result;
use console::Term;
use console::style;
use std::path::Path;
use wsarchive_core::ArchiveError;
use wsarchive_core::ArchiveReport;

pub struct HumanFormatter {
    verbose: bool,
    quiet: bool,
    use_colors: bool,
    term: Term,
}

impl HumanFormatter {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            verbose,
            quiet,
            use_colors: console::colors_enabled(),
            term: Term::stdout(),
        }
    }

    fn format_size(bytes: u64) -> String {
        const KB: u64 = 1024;
        const MB: u64 = KB * 1024;
        const GB: u64 = MB * 1024;

        if bytes >= GB {
            format!("{:.1} GB", bytes as f64 / GB as f64)
        } else if bytes >= MB {
            format!("{:.1} MB", bytes as f64 / MB as f64)
        } else if bytes >= KB {
            format!("{:.1} KB", bytes as f64 / KB as f64)
        } else {
            format!("{bytes} B")
        }
    }

    fn summary_line(report: &ArchiveReport) -> String {
        format!(
            "{} files added, {} skipped",
            report.files_added,
            report.files_failed()
        )
    }
}

impl OutputFormatter for HumanFormatter {
    fn format_start(&self, archive: &Path) {
        if self.quiet {
            return;
        }

        let _ = self
            .term
            .write_line(&format!("Creating archive: {}", archive.display()));
    }

    fn format_entry_added(&self, archive_name: &Path) {
        if self.quiet {
            return;
        }

        let _ = self
            .term
            .write_line(&format!("Added: {}", archive_name.display()));
    }

    fn format_entry_failed(&self, path: &Path, error: &ArchiveError) {
        // Shown in quiet mode too: the file is missing from the archive
        if self.use_colors {
            let _ = self.term.write_line(&format!(
                "{} {}: {error}",
                style("Skipped").yellow().bold(),
                path.display()
            ));
        } else {
            let _ = self
                .term
                .write_line(&format!("Skipped {}: {error}", path.display()));
        }
    }

    fn format_archive_result(&self, report: &ArchiveReport) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        if self.use_colors {
            let _ = self.term.write_line(&format!(
                "{} Archive created: {}",
                style("✓").green().bold(),
                report.archive_path.display()
            ));
        } else {
            let _ = self.term.write_line(&format!(
                "Archive created: {}",
                report.archive_path.display()
            ));
        }

        let _ = self.term.write_line(&format!(
            "Archive size: {:.2} MB",
            report.archive_size_mib()
        ));
        let _ = self.term.write_line(&Self::summary_line(report));

        if self.verbose {
            let _ = self.term.write_line(&format!(
                "  Uncompressed: {}",
                Self::format_size(report.bytes_read)
            ));
            let _ = self
                .term
                .write_line(&format!("  Duration: {:?}", report.duration));
        }

        Ok(())
    }
}
