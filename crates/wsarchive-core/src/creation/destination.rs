//! Timestamped archive destination.

use chrono::Local;
use chrono::NaiveDateTime;
use std::path::Path;
use std::path::PathBuf;

/// File name prefix for every archive.
pub const ARCHIVE_PREFIX: &str = "workspace-complete-";

/// Timestamp layout embedded in the file name (`YYYYMMDD-HHMMSS`).
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d-%H%M%S";

/// Where a run writes its archive.
///
/// Names are unique only at one-second granularity: two runs within the
/// same second target the same file, and the later one overwrites it.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use std::path::Path;
/// use wsarchive_core::creation::ArchiveDestination;
///
/// let at = NaiveDate::from_ymd_opt(2024, 3, 9)
///     .unwrap()
///     .and_hms_opt(7, 5, 30)
///     .unwrap();
/// let dest = ArchiveDestination::at(Path::new("/workspace"), "artifacts", at);
///
/// assert_eq!(
///     dest.archive_path(),
///     Path::new("/workspace/artifacts/workspace-complete-20240309-070530.zip")
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveDestination {
    directory: PathBuf,
    file_name: String,
}

impl ArchiveDestination {
    /// Destination stamped with the given local time.
    #[must_use]
    pub fn at(root: &Path, output_dir: &str, timestamp: NaiveDateTime) -> Self {
        Self {
            directory: root.join(output_dir),
            file_name: format!(
                "{ARCHIVE_PREFIX}{}.zip",
                timestamp.format(TIMESTAMP_FORMAT)
            ),
        }
    }

    /// Destination stamped with the current local time.
    #[must_use]
    pub fn now(root: &Path, output_dir: &str) -> Self {
        Self::at(root, output_dir, Local::now().naive_local())
    }

    /// Directory that holds the archive.
    #[must_use]
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Archive file name, without directory.
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Full path of the archive file.
    #[must_use]
    pub fn archive_path(&self) -> PathBuf {
        self.directory.join(&self.file_name)
    }
}
