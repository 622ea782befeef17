//! Page-directory scanning
//!
//! Collects the folder and file path lists the pipeline consumes. Paths
//! are normalized to `/` separators and sorted for deterministic output
//! across platforms and runs.

use std::path::Path;

use anyhow::{ensure, Context, Result};
use walkdir::WalkDir;

/// Raw scan of a page directory
pub struct ScanResult {
    /// The scanned directory itself (the pipeline's base URL)
    pub base: String,
    /// Every directory under (and including) the base
    pub folders: Vec<String>,
    /// Every file matching the extension filter
    pub files: Vec<String>,
}

/// Walks `dir` recursively, splitting entries into folders and files
///
/// Only files ending in `.<ext>` are kept; every directory is kept so
/// the hierarchy stage sees intermediate folders that own no files of
/// their own.
pub fn scan_pages(dir: &Path, ext: &str) -> Result<ScanResult> {
    let suffix = format!(".{ext}");
    let mut folders = Vec::new();
    let mut files = Vec::new();

    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry =
            entry.with_context(|| format!("Failed to scan page directory {}", dir.display()))?;
        let path = entry.path().to_string_lossy().replace('\\', "/");

        if entry.file_type().is_dir() {
            folders.push(path);
        } else if path.ends_with(&suffix) {
            files.push(path);
        }
    }

    ensure!(
        !folders.is_empty(),
        "Page directory {} does not exist or is not a directory",
        dir.display()
    );

    // WalkDir yields the root before anything beneath it
    let base = folders[0].clone();
    Ok(ScanResult {
        base,
        folders,
        files,
    })
}
