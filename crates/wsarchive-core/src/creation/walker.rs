//! Directory tree walking with exclusion pruning.
//!
//! Excluded directories are pruned before they are read, so nothing below
//! them is ever listed. Files are tested individually after that.

use crate::ArchiveError;
use crate::Result;
use crate::creation::filters::ExcludeSet;
use std::path::Path;
use std::path::PathBuf;
use tracing::debug;
use walkdir::DirEntry;
use walkdir::WalkDir;

/// Walks a workspace tree and yields the files that belong in the archive.
///
/// Symlinks are never followed for descent. A symlink that resolves to a
/// directory is skipped; any other symlink is yielded like a regular file
/// and its target's contents end up in the archive.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use wsarchive_core::creation::ArchiveWalker;
/// use wsarchive_core::creation::ExcludeSet;
///
/// let excludes = ExcludeSet::default();
/// let walker = ArchiveWalker::new(Path::new("/workspace"), &excludes);
///
/// for entry in walker.walk() {
///     let entry = entry?;
///     println!("{}", entry.archive_name.display());
/// }
/// # Ok::<(), wsarchive_core::ArchiveError>(())
/// ```
pub struct ArchiveWalker<'a> {
    root: &'a Path,
    excludes: &'a ExcludeSet,
    skip_path: Option<&'a Path>,
}

impl<'a> ArchiveWalker<'a> {
    /// Creates a walker rooted at `root`.
    #[must_use]
    pub fn new(root: &'a Path, excludes: &'a ExcludeSet) -> Self {
        Self {
            root,
            excludes,
            skip_path: None,
        }
    }

    /// Never yields `path`, even if it is not excluded.
    ///
    /// Used to keep the archive being written out of itself.
    #[must_use]
    pub fn with_skip_path(mut self, path: &'a Path) -> Self {
        self.skip_path = Some(path);
        self
    }

    /// Returns a lazy iterator over archive entries.
    ///
    /// # Errors
    ///
    /// Yields [`ArchiveError::Walk`] when a directory (including the root)
    /// cannot be listed. Callers treat that as fatal.
    pub fn walk(&self) -> impl Iterator<Item = Result<ArchiveEntry>> + '_ {
        WalkDir::new(self.root)
            .follow_links(false)
            .into_iter()
            .filter_entry(move |entry| !self.is_pruned(entry))
            .filter_map(move |entry| match entry {
                Ok(entry) => self.build_entry(&entry).map(Ok),
                Err(source) => Some(Err(ArchiveError::Walk {
                    path: source
                        .path()
                        .map_or_else(|| self.root.to_path_buf(), Path::to_path_buf),
                    source,
                })),
            })
    }

    fn is_pruned(&self, entry: &DirEntry) -> bool {
        if entry.depth() == 0 || !entry.file_type().is_dir() {
            return false;
        }
        match self.excludes.matching_pattern(entry.path()) {
            Some(pattern) => {
                debug!(path = %entry.path().display(), pattern, "pruned directory");
                true
            }
            None => false,
        }
    }

    /// Returns `None` for directories and for files that must be skipped.
    fn build_entry(&self, entry: &DirEntry) -> Option<ArchiveEntry> {
        let file_type = entry.file_type();
        if file_type.is_dir() {
            return None;
        }

        let path = entry.path();

        if let Some(pattern) = self.excludes.matching_pattern(path) {
            debug!(path = %path.display(), pattern, "excluded file");
            return None;
        }

        if self.skip_path.is_some_and(|skip| skip == path) {
            return None;
        }

        if file_type.is_symlink() && std::fs::metadata(path).is_ok_and(|meta| meta.is_dir()) {
            debug!(path = %path.display(), "skipped symlink to directory");
            return None;
        }

        // walkdir joins every yielded path onto the root.
        let archive_name = path.strip_prefix(self.root).ok()?.to_path_buf();

        Some(ArchiveEntry {
            path: path.to_path_buf(),
            archive_name,
        })
    }
}

/// A file selected for the archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    /// Full filesystem path, as seen during traversal.
    pub path: PathBuf,

    /// Path relative to the workspace root; becomes the entry name.
    pub archive_name: PathBuf,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn archive_names(root: &Path, excludes: &ExcludeSet) -> Vec<String> {
        let walker = ArchiveWalker::new(root, excludes);
        let mut names: Vec<String> = walker
            .walk()
            .map(|entry| entry.unwrap().archive_name.to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_walker_yields_files_only() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();

        fs::write(root.join("a.txt"), "a").unwrap();
        fs::create_dir_all(root.join("b/deep")).unwrap();
        fs::write(root.join("b/c.txt"), "c").unwrap();
        fs::write(root.join("b/deep/d.txt"), "d").unwrap();
        fs::create_dir(root.join("empty")).unwrap();

        let names = archive_names(root, &ExcludeSet::default());
        assert_eq!(names, ["a.txt", "b/c.txt", "b/deep/d.txt"]);
    }

    #[test]
    fn test_walker_prunes_excluded_directories() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();

        fs::write(root.join("a.txt"), "a").unwrap();
        fs::create_dir_all(root.join("b")).unwrap();
        fs::write(root.join("b/c.txt"), "c").unwrap();
        fs::create_dir_all(root.join("node_modules/pkg")).unwrap();
        fs::write(root.join("node_modules/d.txt"), "d").unwrap();
        fs::write(root.join("node_modules/pkg/index.js"), "js").unwrap();

        let names = archive_names(root, &ExcludeSet::default());
        assert_eq!(names, ["a.txt", "b/c.txt"]);
    }

    #[test]
    fn test_walker_skips_excluded_files() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();

        fs::write(root.join("main.py"), "print()").unwrap();
        fs::write(root.join("main.pyc"), "bytecode").unwrap();
        fs::write(root.join(".DS_Store"), "meta").unwrap();
        fs::write(root.join("Thumbs.db"), "meta").unwrap();

        let names = archive_names(root, &ExcludeSet::default());
        assert_eq!(names, ["main.py"]);
    }

    #[test]
    fn test_walker_keeps_hidden_files() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();

        fs::write(root.join(".env"), "KEY=1").unwrap();
        fs::create_dir(root.join(".config")).unwrap();
        fs::write(root.join(".config/settings.toml"), "x = 1").unwrap();

        let names = archive_names(root, &ExcludeSet::default());
        assert_eq!(names, [".config/settings.toml", ".env"]);
    }

    #[test]
    fn test_walker_loose_match_prunes_lookalike_directory() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();

        fs::create_dir(root.join("old_node_modules_backup")).unwrap();
        fs::write(root.join("old_node_modules_backup/keep.txt"), "k").unwrap();
        fs::write(root.join("keep.txt"), "k").unwrap();

        let names = archive_names(root, &ExcludeSet::default());
        assert_eq!(names, ["keep.txt"]);
    }

    #[test]
    fn test_walker_honors_custom_excludes() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();

        fs::create_dir(root.join("target")).unwrap();
        fs::write(root.join("target/app"), "bin").unwrap();
        fs::create_dir(root.join("node_modules")).unwrap();
        fs::write(root.join("node_modules/a.js"), "js").unwrap();

        let names = archive_names(root, &ExcludeSet::new(["target"]));
        assert_eq!(names, ["node_modules/a.js"]);
    }

    #[test]
    fn test_walker_skip_path() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();

        fs::create_dir(root.join("artifacts")).unwrap();
        let archive = root.join("artifacts/out.zip");
        fs::write(&archive, "partial").unwrap();
        fs::write(root.join("artifacts/older.zip"), "old").unwrap();

        let excludes = ExcludeSet::default();
        let walker = ArchiveWalker::new(root, &excludes).with_skip_path(&archive);
        let names: Vec<_> = walker
            .walk()
            .map(|e| e.unwrap().archive_name)
            .collect();

        assert_eq!(names, [PathBuf::from("artifacts/older.zip")]);
    }

    #[test]
    fn test_walker_entry_paths() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();

        fs::create_dir(root.join("src")).unwrap();
        fs::write(root.join("src/lib.rs"), "code").unwrap();

        let excludes = ExcludeSet::default();
        let walker = ArchiveWalker::new(root, &excludes);
        let entries: Vec<_> = walker.walk().collect::<Result<Vec<_>>>().unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].path, root.join("src/lib.rs"));
        assert_eq!(entries[0].archive_name, Path::new("src/lib.rs"));
        assert!(!entries[0].archive_name.starts_with(root));
    }

    #[test]
    fn test_walker_missing_root_is_error() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("missing");

        let excludes = ExcludeSet::default();
        let walker = ArchiveWalker::new(&root, &excludes);
        let results: Vec<_> = walker.walk().collect();

        assert_eq!(results.len(), 1);
        assert!(matches!(results[0], Err(ArchiveError::Walk { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn test_walker_symlinks() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();

        fs::create_dir(root.join("real")).unwrap();
        fs::write(root.join("real/file.txt"), "content").unwrap();
        std::os::unix::fs::symlink(root.join("real"), root.join("dir_link")).unwrap();
        std::os::unix::fs::symlink(root.join("real/file.txt"), root.join("file_link")).unwrap();

        let names = archive_names(root, &ExcludeSet::default());
        assert_eq!(names, ["file_link", "real/file.txt"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_walker_yields_dangling_symlink() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();

        std::os::unix::fs::symlink(root.join("gone"), root.join("dangling")).unwrap();

        let names = archive_names(root, &ExcludeSet::default());
        assert_eq!(names, ["dangling"]);
    }
}
