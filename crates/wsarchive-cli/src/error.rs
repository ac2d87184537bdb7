//! Error conversion utilities for CLI.
//!
//! Converts wsarchive-core's typed errors (thiserror) into user-friendly
//! contextual errors (anyhow) with actionable guidance.

use anyhow::anyhow;
use std::path::Path;
use wsarchive_core::ArchiveError;

/// Converts `ArchiveError` to user-friendly anyhow error with context
pub fn convert_archive_error(err: ArchiveError, root: &Path) -> anyhow::Error {
    match err {
        ArchiveError::RootNotFound { path } => {
            anyhow!(
                "Workspace root '{}' does not exist\n\
                 HINT: Use --root to archive a different directory.",
                path.display()
            )
        }
        ArchiveError::RootNotDirectory { path } => {
            anyhow!(
                "Workspace root '{}' is not a directory\n\
                 HINT: Use --root to archive a different directory.",
                path.display()
            )
        }
        ArchiveError::RootUnreadable { path, source } => {
            anyhow!(
                "Cannot access workspace root '{}': {}\n\
                 HINT: Check that every component of the path is a readable directory.",
                path.display(),
                source
            )
        }
        ArchiveError::OutputDirectory { path, source } => {
            anyhow!(
                "Cannot create output directory '{}': {}\n\
                 HINT: Check write permissions on '{}'.",
                path.display(),
                source,
                root.display()
            )
        }
        ArchiveError::ArchiveCreate { path, source } => {
            anyhow!(
                "Cannot create archive '{}': {}\n\
                 HINT: Check free space and write permissions on the output directory.",
                path.display(),
                source
            )
        }
        ArchiveError::Walk { source, .. } => {
            anyhow!(
                "Traversal of '{}' failed: {}\n\
                 HINT: The archive written so far is incomplete and should be discarded.",
                root.display(),
                source
            )
        }
        ArchiveError::ArchiveFinalize { path, source } => {
            anyhow!(
                "Cannot finalize archive '{}': {}\n\
                 HINT: The archive is incomplete and should be discarded.",
                path.display(),
                source
            )
        }
        _ => anyhow::Error::from(err).context(format!("Error archiving '{}'", root.display())),
    }
}

/// Adds context to a failed archiving run
pub fn add_root_context<T>(result: Result<T, ArchiveError>, root: &Path) -> anyhow::Result<T> {
    result.map_err(|e| convert_archive_error(e, root))
}
