//! Workspace snapshots as timestamped ZIP archives.
//!
//! `wsarchive-core` walks a workspace tree, skips well-known noise (dependency
//! caches, compiled Python files, OS metadata) and streams everything else
//! into `<root>/artifacts/workspace-complete-<YYYYMMDD-HHMMSS>.zip`.
//!
//! Files that cannot be read are reported and left out; the run itself only
//! fails when no archive can be produced at all.
//!
//! # Examples
//!
//! ```no_run
//! use wsarchive_core::ArchiveConfig;
//! use wsarchive_core::create_workspace_archive;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ArchiveConfig::default().with_root("/srv/project");
//! let report = create_workspace_archive(&config)?;
//! println!(
//!     "{} ({:.2} MB)",
//!     report.archive_path.display(),
//!     report.archive_size_mib()
//! );
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod creation;
pub mod error;
pub mod report;

// Re-export main API types
pub use config::ArchiveConfig;
pub use creation::create_workspace_archive;
pub use creation::create_workspace_archive_with_progress;
pub use error::ArchiveError;
pub use error::Result;
pub use report::ArchiveProgress;
pub use report::ArchiveReport;
pub use report::EntryOutcome;
pub use report::NoopProgress;
