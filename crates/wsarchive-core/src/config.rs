//! Run configuration for workspace archiving.

use crate::creation::ArchiveDestination;
use crate::creation::ExcludeSet;
use chrono::NaiveDateTime;
use std::path::PathBuf;

/// Workspace archived when no root is given.
pub const DEFAULT_ROOT: &str = "/workspace";

/// Subdirectory of the root that receives archives.
pub const DEFAULT_OUTPUT_DIR: &str = "artifacts";

/// Deflate level used when none is configured.
pub const DEFAULT_COMPRESSION_LEVEL: u8 = 6;

/// Configuration for a single archiving run.
///
/// Everything the run depends on is carried here and handed to the walker
/// and writer explicitly. Nothing is read from the environment or from
/// configuration files.
///
/// # Examples
///
/// ```
/// use wsarchive_core::ArchiveConfig;
///
/// // Archive /workspace into /workspace/artifacts
/// let config = ArchiveConfig::default();
/// assert_eq!(config.root.to_str(), Some("/workspace"));
///
/// // Point at another tree
/// let custom = ArchiveConfig::default()
///     .with_root("/srv/project")
///     .with_compression_level(9);
/// ```
#[derive(Debug, Clone)]
pub struct ArchiveConfig {
    /// Directory tree to archive. Entry names are relative to it.
    ///
    /// Default: `/workspace`.
    pub root: PathBuf,

    /// Name of the subdirectory of `root` that receives the archive.
    ///
    /// Created if missing. Default: `artifacts`.
    pub output_dir: String,

    /// Fragments that exclude a path from the archive.
    ///
    /// Default: [`ExcludeSet::default`].
    pub excludes: ExcludeSet,

    /// Deflate level (1-9). `Some(0)` stores entries uncompressed.
    ///
    /// Default: `Some(6)`.
    pub compression_level: Option<u8>,

    /// Local time used for the archive name. `None` means now.
    ///
    /// Default: `None`.
    pub timestamp: Option<NaiveDateTime>,
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            output_dir: DEFAULT_OUTPUT_DIR.to_string(),
            excludes: ExcludeSet::default(),
            compression_level: Some(DEFAULT_COMPRESSION_LEVEL),
            timestamp: None,
        }
    }
}

impl ArchiveConfig {
    /// Creates a new `ArchiveConfig` with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the workspace root.
    #[must_use]
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    /// Sets the output subdirectory name.
    #[must_use]
    pub fn with_output_dir(mut self, output_dir: impl Into<String>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    /// Replaces the exclude set.
    #[must_use]
    pub fn with_excludes(mut self, excludes: ExcludeSet) -> Self {
        self.excludes = excludes;
        self
    }

    /// Sets the compression level, clamped to 0-9.
    #[must_use]
    pub fn with_compression_level(mut self, level: u8) -> Self {
        self.compression_level = Some(level.min(9));
        self
    }

    /// Pins the timestamp used for the archive name.
    #[must_use]
    pub fn with_timestamp(mut self, timestamp: NaiveDateTime) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Resolves where this run writes its archive.
    #[must_use]
    pub fn destination(&self) -> ArchiveDestination {
        match self.timestamp {
            Some(at) => ArchiveDestination::at(&self.root, &self.output_dir, at),
            None => ArchiveDestination::now(&self.root, &self.output_dir),
        }
    }
}
