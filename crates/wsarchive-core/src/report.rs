//! Per-file outcomes, run summary and progress callbacks.

use crate::ArchiveError;
use std::path::Path;
use std::path::PathBuf;
use std::time::Duration;

/// Bytes per mebibyte.
pub const BYTES_PER_MIB: u64 = 1024 * 1024;

/// Result of writing one file into the archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryOutcome {
    /// File was stored under `archive_name`.
    Added {
        /// Entry name inside the archive.
        archive_name: PathBuf,
        /// Uncompressed bytes copied.
        bytes: u64,
    },

    /// File was left out because reading or writing it failed.
    Failed {
        /// Full filesystem path of the file.
        path: PathBuf,
        /// Rendered error.
        reason: String,
    },
}

/// Summary of an archiving run.
///
/// # Examples
///
/// ```
/// use std::path::PathBuf;
/// use wsarchive_core::ArchiveReport;
/// use wsarchive_core::EntryOutcome;
///
/// let mut report = ArchiveReport::new(PathBuf::from("/ws/artifacts/a.zip"));
/// report.record(EntryOutcome::Added {
///     archive_name: PathBuf::from("src/main.rs"),
///     bytes: 120,
/// });
/// report.record(EntryOutcome::Failed {
///     path: PathBuf::from("/ws/secret.key"),
///     reason: "permission denied".into(),
/// });
///
/// assert_eq!(report.files_added, 1);
/// assert_eq!(report.files_failed(), 1);
/// assert_eq!(report.bytes_read, 120);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ArchiveReport {
    /// Archive that was written.
    pub archive_path: PathBuf,

    /// Files that could not be stored, in the order they were visited.
    /// Added files only feed the counters.
    pub failed_entries: Vec<EntryOutcome>,

    /// Number of files stored in the archive.
    pub files_added: usize,

    /// Total uncompressed bytes stored.
    pub bytes_read: u64,

    /// Size of the finished archive on disk.
    pub archive_size: u64,

    /// Wall-clock duration of the run.
    pub duration: Duration,
}

impl ArchiveReport {
    /// Creates an empty report for the given archive.
    #[must_use]
    pub fn new(archive_path: PathBuf) -> Self {
        Self {
            archive_path,
            ..Self::default()
        }
    }

    /// Updates the counters for an added file, or keeps a failed one.
    pub fn record(&mut self, outcome: EntryOutcome) {
        match outcome {
            EntryOutcome::Added { bytes, .. } => {
                self.files_added += 1;
                self.bytes_read += bytes;
            }
            failed @ EntryOutcome::Failed { .. } => self.failed_entries.push(failed),
        }
    }

    /// Iterates over failed files as `(path, reason)`.
    pub fn failures(&self) -> impl Iterator<Item = (&Path, &str)> {
        self.failed_entries.iter().filter_map(|outcome| match outcome {
            EntryOutcome::Failed { path, reason } => Some((path.as_path(), reason.as_str())),
            EntryOutcome::Added { .. } => None,
        })
    }

    /// Number of files left out because of errors.
    #[must_use]
    pub fn files_failed(&self) -> usize {
        self.failed_entries.len()
    }

    /// Returns whether any file failed.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.files_failed() > 0
    }

    /// Archive size in mebibytes (`bytes / 1_048_576`).
    ///
    /// # Examples
    ///
    /// ```
    /// use wsarchive_core::ArchiveReport;
    ///
    /// let mut report = ArchiveReport::default();
    /// report.archive_size = 3 * 1024 * 1024 / 2;
    /// assert_eq!(format!("{:.2}", report.archive_size_mib()), "1.50");
    /// ```
    #[must_use]
    pub fn archive_size_mib(&self) -> f64 {
        self.archive_size as f64 / BYTES_PER_MIB as f64
    }
}

/// Callback trait for line-by-line progress while archiving.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use wsarchive_core::ArchiveError;
/// use wsarchive_core::ArchiveProgress;
/// use wsarchive_core::ArchiveReport;
///
/// struct Printer;
///
/// impl ArchiveProgress for Printer {
///     fn on_start(&mut self, archive: &Path) {
///         println!("Creating archive: {}", archive.display());
///     }
///
///     fn on_entry_added(&mut self, archive_name: &Path, _bytes: u64) {
///         println!("Added: {}", archive_name.display());
///     }
///
///     fn on_entry_failed(&mut self, path: &Path, error: &ArchiveError) {
///         println!("Skipped {}: {error}", path.display());
///     }
///
///     fn on_complete(&mut self, report: &ArchiveReport) {
///         println!("{:.2} MB", report.archive_size_mib());
///     }
/// }
/// ```
pub trait ArchiveProgress {
    /// Called once the destination is known, before any entry is written.
    fn on_start(&mut self, archive: &Path);

    /// Called after a file has been stored.
    fn on_entry_added(&mut self, archive_name: &Path, bytes: u64);

    /// Called when a file could not be stored. The run continues.
    fn on_entry_failed(&mut self, path: &Path, error: &ArchiveError);

    /// Called after the archive has been finalized.
    fn on_complete(&mut self, report: &ArchiveReport);
}

/// No-op implementation of `ArchiveProgress`.
#[derive(Debug, Default)]
pub struct NoopProgress;

impl ArchiveProgress for NoopProgress {
    fn on_start(&mut self, _archive: &Path) {}

    fn on_entry_added(&mut self, _archive_name: &Path, _bytes: u64) {}

    fn on_entry_failed(&mut self, _path: &Path, _error: &ArchiveError) {}

    fn on_complete(&mut self, _report: &ArchiveReport) {}
}
