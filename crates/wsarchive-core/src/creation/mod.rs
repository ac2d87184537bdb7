//! Workspace archive creation.
//!
//! Three stages run in sequence over a single pass of the tree:
//! [`filters`] decides what is noise, [`walker`] enumerates the surviving
//! files and [`zip`] streams them into the archive.

pub mod destination;
pub mod filters;
pub mod walker;
pub mod zip;

// Re-exports for public API
pub use destination::ArchiveDestination;
pub use filters::ExcludeSet;
pub use walker::ArchiveEntry;
pub use walker::ArchiveWalker;
pub use self::zip::create_workspace_archive;
pub use self::zip::create_workspace_archive_with_progress;
