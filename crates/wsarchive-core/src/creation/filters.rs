//! Path exclusion logic for workspace archiving.
//!
//! Exclusion is deliberately loose: a path is excluded when any pattern
//! occurs *anywhere* in its string form. There is no glob expansion and no
//! component-boundary awareness, so `build/node_modules_backup/x.txt` and
//! `notes.pyc.bak` are excluded by the `node_modules` and `.pyc` patterns.
//! Consumers rely on this behavior, so it must not be tightened into
//! segment matching without treating it as a behavior change.

use std::path::Path;

/// Fragments excluded by default: dependency and test caches, compiled
/// Python artifacts and OS metadata files.
pub const DEFAULT_EXCLUDE_PATTERNS: &[&str] = &[
    "node_modules",
    "__pycache__",
    ".pytest_cache",
    ".coverage",
    ".pyc",
    ".pyo",
    ".pyd",
    ".DS_Store",
    "Thumbs.db",
];

/// Immutable set of literal exclude fragments.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use wsarchive_core::creation::ExcludeSet;
///
/// let excludes = ExcludeSet::default();
/// assert!(excludes.is_excluded(Path::new("/ws/web/node_modules/react/index.js")));
/// assert!(excludes.is_excluded(Path::new("/ws/app/__pycache__")));
/// assert!(!excludes.is_excluded(Path::new("/ws/src/main.rs")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExcludeSet {
    patterns: Vec<String>,
}

impl ExcludeSet {
    /// Builds a set from the given fragments.
    ///
    /// Empty fragments are dropped (an empty string is a substring of every
    /// path and would exclude everything) and duplicates are collapsed.
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set: Vec<String> = Vec::new();
        for pattern in patterns {
            let pattern = pattern.into();
            if !pattern.is_empty() && !set.contains(&pattern) {
                set.push(pattern);
            }
        }
        Self { patterns: set }
    }

    /// Creates a set that excludes nothing.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            patterns: Vec::new(),
        }
    }

    /// Returns `true` if the path must be left out of the archive.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::Path;
    /// use wsarchive_core::creation::ExcludeSet;
    ///
    /// let excludes = ExcludeSet::default();
    ///
    /// // Plain substring test: no segment boundaries.
    /// assert!(excludes.is_excluded(Path::new("docs/my.pyc.bak")));
    /// assert!(excludes.is_excluded(Path::new("old_node_modules_copy/a.js")));
    /// ```
    #[must_use]
    pub fn is_excluded(&self, path: &Path) -> bool {
        self.matching_pattern(path).is_some()
    }

    /// Returns the first pattern contained in the path, if any.
    #[must_use]
    pub fn matching_pattern(&self, path: &Path) -> Option<&str> {
        let path_str = path.to_string_lossy();
        self.patterns
            .iter()
            .find(|pattern| path_str.contains(pattern.as_str()))
            .map(String::as_str)
    }

    /// Returns the patterns in insertion order.
    #[must_use]
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Returns the number of patterns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Returns `true` if the set contains no patterns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl Default for ExcludeSet {
    fn default() -> Self {
        Self::new(DEFAULT_EXCLUDE_PATTERNS.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_default_patterns_exclude_noise_directories() {
        let excludes = ExcludeSet::default();
        assert!(excludes.is_excluded(Path::new("/workspace/node_modules")));
        assert!(excludes.is_excluded(Path::new("/workspace/pkg/__pycache__")));
        assert!(excludes.is_excluded(Path::new("/workspace/.pytest_cache")));
        assert!(excludes.is_excluded(Path::new("/workspace/.coverage")));
    }

    #[test]
    fn test_default_patterns_exclude_noise_files() {
        let excludes = ExcludeSet::default();
        assert!(excludes.is_excluded(Path::new("/workspace/mod.pyc")));
        assert!(excludes.is_excluded(Path::new("/workspace/mod.pyo")));
        assert!(excludes.is_excluded(Path::new("/workspace/ext.pyd")));
        assert!(excludes.is_excluded(Path::new("/workspace/photos/.DS_Store")));
        assert!(excludes.is_excluded(Path::new("/workspace/photos/Thumbs.db")));
    }

    #[test]
    fn test_regular_files_are_kept() {
        let excludes = ExcludeSet::default();
        assert!(!excludes.is_excluded(Path::new("/workspace/src/main.rs")));
        assert!(!excludes.is_excluded(Path::new("/workspace/README.md")));
        assert!(!excludes.is_excluded(Path::new("/workspace/app/models.py")));
        assert!(!excludes.is_excluded(Path::new("/workspace/.gitignore")));
    }

    #[test]
    fn test_substring_match_ignores_segment_boundaries() {
        let excludes = ExcludeSet::default();
        assert!(excludes.is_excluded(Path::new("notes/my.pyc.bak")));
        assert!(excludes.is_excluded(Path::new("not_node_modules_really/a.txt")));
        assert!(excludes.is_excluded(Path::new("report.coverage.html")));
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let excludes = ExcludeSet::default();
        assert!(!excludes.is_excluded(Path::new("NODE_MODULES/a.js")));
        assert!(!excludes.is_excluded(Path::new("thumbs.db")));
    }

    #[test]
    fn test_matching_pattern_reports_trigger() {
        let excludes = ExcludeSet::default();
        assert_eq!(
            excludes.matching_pattern(Path::new("web/node_modules/x")),
            Some("node_modules")
        );
        assert_eq!(excludes.matching_pattern(Path::new("web/index.ts")), None);
    }

    #[test]
    fn test_new_drops_empty_and_duplicate_patterns() {
        let excludes = ExcludeSet::new(["target", "", "target", "dist"]);
        assert_eq!(excludes.patterns(), ["target", "dist"]);
        assert_eq!(excludes.len(), 2);
        assert!(!excludes.is_excluded(Path::new("src/lib.rs")));
    }

    #[test]
    fn test_empty_set_excludes_nothing() {
        let excludes = ExcludeSet::empty();
        assert!(excludes.is_empty());
        assert!(!excludes.is_excluded(Path::new("node_modules/a.js")));
    }

    #[test]
    fn test_default_set_size() {
        assert_eq!(ExcludeSet::default().len(), DEFAULT_EXCLUDE_PATTERNS.len());
    }

    proptest! {
        #[test]
        fn prop_any_path_containing_pattern_is_excluded(
            prefix in "[a-zA-Z0-9_/]{0,20}",
            suffix in "[a-zA-Z0-9_/.]{0,20}",
            idx in 0..DEFAULT_EXCLUDE_PATTERNS.len(),
        ) {
            let excludes = ExcludeSet::default();
            let path = format!("{prefix}{}{suffix}", DEFAULT_EXCLUDE_PATTERNS[idx]);
            prop_assert!(excludes.is_excluded(Path::new(&path)));
        }

        #[test]
        fn prop_custom_set_agrees_with_substring_test(
            path in "[a-z/]{0,30}",
            pattern in "[a-z]{1,4}",
        ) {
            let excludes = ExcludeSet::new([pattern.clone()]);
            prop_assert_eq!(excludes.is_excluded(Path::new(&path)), path.contains(&pattern));
        }
    }
}
