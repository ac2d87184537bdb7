//! Error types for workspace archiving.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `ArchiveError`.
pub type Result<T> = std::result::Result<T, ArchiveError>;

/// Errors that can occur while archiving a workspace.
///
/// Most variants are structural: they prevent any valid archive from being
/// produced and abort the run. Per-file failures are surfaced through
/// [`EntryOutcome::Failed`](crate::EntryOutcome::Failed) instead and only
/// reach this type while a single entry is being written.
#[derive(Error, Debug)]
pub enum ArchiveError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Workspace root does not exist.
    #[error("workspace root not found: {path}")]
    RootNotFound {
        /// The configured root.
        path: PathBuf,
    },

    /// Workspace root exists but is not a directory.
    #[error("workspace root is not a directory: {path}")]
    RootNotDirectory {
        /// The configured root.
        path: PathBuf,
    },

    /// Workspace root could not be inspected.
    #[error("cannot access workspace root {path}: {source}")]
    RootUnreadable {
        /// The configured root.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Output directory could not be created.
    #[error("cannot create output directory {path}: {source}")]
    OutputDirectory {
        /// Directory that was being created.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Destination archive could not be opened for writing.
    #[error("cannot create archive {path}: {source}")]
    ArchiveCreate {
        /// Archive path.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Directory traversal failed.
    #[error("directory traversal failed: {source}")]
    Walk {
        /// Path that failed to be listed, or the root if unknown.
        path: PathBuf,
        /// Underlying walkdir error.
        source: walkdir::Error,
    },

    /// Archive could not be finalized.
    #[error("cannot finalize archive {path}: {source}")]
    ArchiveFinalize {
        /// Archive path.
        path: PathBuf,
        /// Underlying ZIP error.
        source: zip::result::ZipError,
    },

    /// Relative path cannot be represented as a ZIP entry name.
    #[error("invalid archive entry name: {path}")]
    InvalidEntryName {
        /// The relative path.
        path: PathBuf,
    },

    /// ZIP writer rejected an entry.
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),
}

impl ArchiveError {
    /// Returns `true` if this error aborts the whole run.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use wsarchive_core::ArchiveError;
    ///
    /// let err = ArchiveError::RootNotFound {
    ///     path: PathBuf::from("/workspace"),
    /// };
    /// assert!(err.is_structural());
    ///
    /// let err = ArchiveError::InvalidEntryName {
    ///     path: PathBuf::from("bad"),
    /// };
    /// assert!(!err.is_structural());
    /// ```
    #[must_use]
    pub const fn is_structural(&self) -> bool {
        matches!(
            self,
            Self::RootNotFound { .. }
                | Self::RootNotDirectory { .. }
                | Self::RootUnreadable { .. }
                | Self::OutputDirectory { .. }
                | Self::ArchiveCreate { .. }
                | Self::Walk { .. }
                | Self::ArchiveFinalize { .. }
        )
    }

    /// Returns the filesystem path this error refers to, if any.
    #[must_use]
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::RootNotFound { path }
            | Self::RootNotDirectory { path }
            | Self::RootUnreadable { path, .. }
            | Self::OutputDirectory { path, .. }
            | Self::ArchiveCreate { path, .. }
            | Self::Walk { path, .. }
            | Self::ArchiveFinalize { path, .. }
            | Self::InvalidEntryName { path } => Some(path),
            Self::Io(_) | Self::Zip(_) => None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_root_not_found_display() {
        let err = ArchiveError::RootNotFound {
            path: PathBuf::from("/missing"),
        };
        assert_eq!(err.to_string(), "workspace root not found: /missing");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err: ArchiveError = io_err.into();
        assert!(matches!(err, ArchiveError::Io(_)));
        assert!(err.to_string().contains("denied"));
        assert!(!err.is_structural());
    }

    #[test]
    fn test_structural_classification() {
        let err = ArchiveError::OutputDirectory {
            path: PathBuf::from("/ws/artifacts"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.is_structural());
        assert_eq!(err.path(), Some(std::path::Path::new("/ws/artifacts")));

        let err = ArchiveError::Zip(zip::result::ZipError::FileNotFound);
        assert!(!err.is_structural());
        assert_eq!(err.path(), None);
    }

    #[test]
    fn test_root_unreadable_is_structural() {
        let err = ArchiveError::RootUnreadable {
            path: PathBuf::from("/ws"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.is_structural());
        assert_eq!(err.path(), Some(std::path::Path::new("/ws")));
        assert_eq!(err.to_string(), "cannot access workspace root /ws: denied");
    }

    #[test]
    fn test_walk_display_names_path_once() {
        let source = walkdir::WalkDir::new("/definitely/not/here")
            .into_iter()
            .find_map(std::result::Result::err)
            .unwrap();
        let err = ArchiveError::Walk {
            path: PathBuf::from("/definitely/not/here"),
            source,
        };
        assert_eq!(err.to_string().matches("/definitely/not/here").count(), 1);
    }

    #[test]
    fn test_archive_create_display_includes_source() {
        let err = ArchiveError::ArchiveCreate {
            path: PathBuf::from("/ws/artifacts/out.zip"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "read-only"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/ws/artifacts/out.zip"));
        assert!(msg.contains("read-only"));
    }
}
