//! Example: Snapshotting a throwaway workspace with wsarchive-core
//!
//! Run with: `cargo run --example create_archive`

use std::fs;
use std::path::Path;
use wsarchive_core::ArchiveConfig;
use wsarchive_core::ArchiveError;
use wsarchive_core::ArchiveProgress;
use wsarchive_core::ArchiveReport;
use wsarchive_core::create_workspace_archive_with_progress;

struct Printer;

impl ArchiveProgress for Printer {
    fn on_start(&mut self, archive: &Path) {
        println!("Creating archive: {}", archive.display());
    }

    fn on_entry_added(&mut self, archive_name: &Path, bytes: u64) {
        println!("  + {} ({bytes} bytes)", archive_name.display());
    }

    fn on_entry_failed(&mut self, path: &Path, error: &ArchiveError) {
        println!("  ! {}: {error}", path.display());
    }

    fn on_complete(&mut self, report: &ArchiveReport) {
        println!(
            "Done: {} files, {:.2} MB",
            report.files_added,
            report.archive_size_mib()
        );
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let workspace = tempfile::tempdir()?;
    let root = workspace.path();

    fs::create_dir_all(root.join("src"))?;
    fs::write(root.join("src/main.py"), "print('hello')")?;
    fs::create_dir_all(root.join("src/__pycache__"))?;
    fs::write(root.join("src/__pycache__/main.cpython-312.pyc"), "bytecode")?;
    fs::create_dir_all(root.join("web/node_modules/left-pad"))?;
    fs::write(root.join("web/node_modules/left-pad/index.js"), "module.exports")?;
    fs::write(root.join("web/index.html"), "<html></html>")?;

    let config = ArchiveConfig::default().with_root(root);
    let report = create_workspace_archive_with_progress(&config, &mut Printer)?;

    // Caches never make it in.
    assert_eq!(report.files_added, 2);
    Ok(())
}
