//! ZIP archive writing.
//!
//! Streams every walked file into a deflate-compressed ZIP. Failures on a
//! single file are recorded and skipped; failures that prevent any archive
//! from being produced abort the run.

use crate::ArchiveConfig;
use crate::ArchiveError;
use crate::Result;
use crate::config::DEFAULT_COMPRESSION_LEVEL;
use crate::creation::walker::ArchiveEntry;
use crate::creation::walker::ArchiveWalker;
use crate::report::ArchiveProgress;
use crate::report::ArchiveReport;
use crate::report::EntryOutcome;
use crate::report::NoopProgress;
use chrono::Datelike;
use chrono::Local;
use chrono::Timelike;
use std::fs;
use std::fs::File;
use std::io::BufWriter;
use std::io::Read;
use std::io::Seek;
use std::io::Write;
use std::path::Component;
use std::path::Path;
use std::time::Instant;
use std::time::SystemTime;
use tracing::debug;
use tracing::info;
use tracing::warn;
use zip::CompressionMethod;
use zip::DateTime;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

const COPY_BUFFER_SIZE: usize = 64 * 1024;

/// Entries this large need ZIP64 extensions.
const ZIP64_THRESHOLD: u64 = u32::MAX as u64;

/// Archives the configured workspace without progress reporting.
///
/// # Examples
///
/// ```no_run
/// use wsarchive_core::ArchiveConfig;
/// use wsarchive_core::create_workspace_archive;
///
/// let config = ArchiveConfig::default().with_root("/srv/project");
/// let report = create_workspace_archive(&config)?;
/// println!("{} files in {}", report.files_added, report.archive_path.display());
/// # Ok::<(), wsarchive_core::ArchiveError>(())
/// ```
///
/// # Errors
///
/// See [`create_workspace_archive_with_progress`].
pub fn create_workspace_archive(config: &ArchiveConfig) -> Result<ArchiveReport> {
    create_workspace_archive_with_progress(config, &mut NoopProgress)
}

/// Archives the configured workspace, reporting each step to `progress`.
///
/// The output directory is created if missing and the archive is written to
/// `<root>/<output_dir>/workspace-complete-<timestamp>.zip`. The archive
/// never contains itself.
///
/// # Errors
///
/// Returns a structural error if:
/// - The root does not exist or is not a directory
/// - The output directory cannot be created
/// - The archive file cannot be created or finalized
/// - A directory cannot be listed during traversal
///
/// A traversal error leaves the partially written archive on disk.
/// Per-file failures are never returned; they are recorded in the report.
pub fn create_workspace_archive_with_progress(
    config: &ArchiveConfig,
    progress: &mut dyn ArchiveProgress,
) -> Result<ArchiveReport> {
    let start = Instant::now();

    validate_root(&config.root)?;

    let destination = config.destination();
    fs::create_dir_all(destination.directory()).map_err(|source| {
        ArchiveError::OutputDirectory {
            path: destination.directory().to_path_buf(),
            source,
        }
    })?;

    let archive_path = destination.archive_path();
    progress.on_start(&archive_path);
    info!(
        root = %config.root.display(),
        archive = %archive_path.display(),
        "creating archive"
    );

    let file = File::create(&archive_path).map_err(|source| ArchiveError::ArchiveCreate {
        path: archive_path.clone(),
        source,
    })?;
    let mut zip = ZipWriter::new(BufWriter::new(file));
    let mut report = ArchiveReport::new(archive_path.clone());

    let walker =
        ArchiveWalker::new(&config.root, &config.excludes).with_skip_path(&archive_path);
    let options = base_options(config.compression_level);
    let mut buffer = vec![0u8; COPY_BUFFER_SIZE];

    for entry in walker.walk() {
        let entry = entry?;
        match add_file_to_zip(&mut zip, &entry, options, &mut buffer) {
            Ok(bytes) => {
                debug!(entry = %entry.archive_name.display(), bytes, "added file");
                progress.on_entry_added(&entry.archive_name, bytes);
                report.record(EntryOutcome::Added {
                    archive_name: entry.archive_name,
                    bytes,
                });
            }
            Err(err) => {
                warn!(path = %entry.path.display(), error = %err, "skipped file");
                progress.on_entry_failed(&entry.path, &err);
                report.record(EntryOutcome::Failed {
                    path: entry.path,
                    reason: err.to_string(),
                });
            }
        }
    }

    let finalize_err = |source: zip::result::ZipError| ArchiveError::ArchiveFinalize {
        path: archive_path.clone(),
        source,
    };
    let mut writer = zip.finish().map_err(finalize_err)?;
    writer.flush().map_err(|e| finalize_err(e.into()))?;
    drop(writer);

    report.archive_size = fs::metadata(&archive_path)
        .map_err(|e| finalize_err(e.into()))?
        .len();
    report.duration = start.elapsed();

    info!(
        archive = %archive_path.display(),
        files = report.files_added,
        failed = report.files_failed(),
        size = report.archive_size,
        "archive complete"
    );
    progress.on_complete(&report);

    Ok(report)
}

fn validate_root(root: &Path) -> Result<()> {
    match fs::metadata(root) {
        Ok(metadata) if metadata.is_dir() => Ok(()),
        Ok(_) => Err(ArchiveError::RootNotDirectory {
            path: root.to_path_buf(),
        }),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Err(ArchiveError::RootNotFound {
            path: root.to_path_buf(),
        }),
        Err(source) => Err(ArchiveError::RootUnreadable {
            path: root.to_path_buf(),
            source,
        }),
    }
}

/// Options shared by every entry of a run.
fn base_options(compression_level: Option<u8>) -> SimpleFileOptions {
    if compression_level == Some(0) {
        SimpleFileOptions::default().compression_method(CompressionMethod::Stored)
    } else {
        let level = compression_level.unwrap_or(DEFAULT_COMPRESSION_LEVEL);
        SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .compression_level(Some(i64::from(level)))
    }
}

/// Stores one file. On error nothing of the file remains in the archive.
fn add_file_to_zip<W: Write + Seek>(
    zip: &mut ZipWriter<W>,
    entry: &ArchiveEntry,
    options: SimpleFileOptions,
    buffer: &mut [u8],
) -> Result<u64> {
    // Follows symlinks, so a link is stored with its target's contents.
    let metadata = fs::metadata(&entry.path)?;
    if !metadata.is_file() {
        return Err(ArchiveError::Io(std::io::Error::other(
            "not a regular file",
        )));
    }

    let name = zip_entry_name(&entry.archive_name)?;
    let mut file = File::open(&entry.path)?;

    zip.start_file(name, entry_options(options, &metadata))?;

    match copy_into(&mut file, zip, buffer) {
        Ok(bytes) => Ok(bytes),
        Err(err) => {
            if let Err(abort) = zip.abort_file() {
                warn!(path = %entry.path.display(), error = %abort, "cannot discard partial entry");
            }
            Err(err)
        }
    }
}

fn copy_into<R: Read, W: Write>(reader: &mut R, writer: &mut W, buffer: &mut [u8]) -> Result<u64> {
    let mut bytes_written = 0u64;
    loop {
        let bytes_read = reader.read(buffer)?;
        if bytes_read == 0 {
            break;
        }
        writer.write_all(&buffer[..bytes_read])?;
        bytes_written += bytes_read as u64;
    }
    Ok(bytes_written)
}

fn entry_options(options: SimpleFileOptions, metadata: &fs::Metadata) -> SimpleFileOptions {
    let mut options = options.large_file(metadata.len() >= ZIP64_THRESHOLD);

    if let Some(modified) = metadata.modified().ok().and_then(zip_timestamp) {
        options = options.last_modified_time(modified);
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        options = options.unix_permissions(metadata.permissions().mode());
    }

    options
}

/// Converts a modification time to a ZIP timestamp in local time.
///
/// Returns `None` outside the range ZIP can represent (1980-2107).
fn zip_timestamp(time: SystemTime) -> Option<DateTime> {
    let local: chrono::DateTime<Local> = time.into();
    DateTime::from_date_and_time(
        u16::try_from(local.year()).ok()?,
        u8::try_from(local.month()).ok()?,
        u8::try_from(local.day()).ok()?,
        u8::try_from(local.hour()).ok()?,
        u8::try_from(local.minute()).ok()?,
        u8::try_from(local.second()).ok()?,
    )
    .ok()
}

/// Builds a `/`-separated entry name from a root-relative path.
///
/// # Errors
///
/// Returns [`ArchiveError::InvalidEntryName`] for empty paths, paths that
/// are not plain relative paths, and components that are not valid UTF-8.
fn zip_entry_name(relative: &Path) -> Result<String> {
    let invalid = || ArchiveError::InvalidEntryName {
        path: relative.to_path_buf(),
    };

    let mut name = String::new();
    for component in relative.components() {
        let Component::Normal(part) = component else {
            return Err(invalid());
        };
        let part = part.to_str().ok_or_else(invalid)?;
        if !name.is_empty() {
            name.push('/');
        }
        name.push_str(part);
    }

    if name.is_empty() {
        return Err(invalid());
    }
    Ok(name)
}
