//! Filesystem scanning and manifest assembly.
//!
//! The single pass of the tool: walk the icon root's immediate
//! subdirectories, collect qualifying files, and produce a [`Manifest`].
//!
//! ## Directory Structure
//!
//! The scanner expects a flat two-level layout:
//!
//! ```text
//! Icons/                               # Scan root
//! ├── Compute/                         # Category (one per subdirectory)
//! │   ├── 7-icon-service-vm.svg        # Icon record
//! │   ├── 42-icon-service-compute.svg
//! │   └── notes.txt                    # Wrong suffix: ignored
//! ├── Database/
//! │   ├── 1-icon-service-sql.svg
//! │   └── drafts/                      # Nested subdirectory: ignored
//! └── Network/                         # No qualifying files: empty list
//! ```
//!
//! ## Rules
//!
//! - Only immediate subdirectories of the root become categories; files at
//!   the root level are ignored.
//! - Within a category, only immediate files whose name ends with the
//!   recognized extension (case-sensitive) are collected. There is no
//!   recursion below the category level.
//! - Every category appears in the manifest, empty ones included.
//! - Categories and records are sorted by name, so output is deterministic
//!   regardless of directory-enumeration order.

use crate::config::IconConfig;
use crate::manifest::{IconRecord, Manifest};
use crate::naming;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),
}

/// Scan `root` and build the manifest according to `config`.
///
/// One filesystem read pass: directory and file enumeration only, no file
/// contents are opened. Fails fast on the first enumeration error.
pub fn scan(root: &Path, config: &IconConfig) -> Result<Manifest, ScanError> {
    if root.exists() && !root.is_dir() {
        return Err(ScanError::NotADirectory(root.to_path_buf()));
    }

    let label = root_label(root, config);
    let mut manifest = Manifest::default();

    for dir in category_dirs(root)? {
        let category = dir
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let records = scan_category(&dir, &category, &label, config)?;
        manifest.categories.insert(category, records);
    }

    Ok(manifest)
}

/// Leading path segment for every record: the configured label, or the root
/// directory's own name.
fn root_label(root: &Path, config: &IconConfig) -> String {
    if let Some(label) = &config.root_label {
        return label.clone();
    }
    root.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| root.display().to_string())
}

/// Immediate subdirectories of `root`, sorted by path.
fn category_dirs(root: &Path) -> Result<Vec<PathBuf>, ScanError> {
    let mut dirs: Vec<PathBuf> = fs::read_dir(root)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_dir())
        .collect();
    dirs.sort();
    Ok(dirs)
}

/// Collect the records for one category directory.
///
/// Only immediate files with the recognized suffix qualify; nested
/// subdirectories are skipped entirely. Records come out sorted by file
/// name, and since each file yields exactly one record, paths are unique
/// within the category.
fn scan_category(
    dir: &Path,
    category: &str,
    label: &str,
    config: &IconConfig,
) -> Result<Vec<IconRecord>, ScanError> {
    let mut file_names: Vec<String> = fs::read_dir(dir)?
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_file())
        .map(|e| e.file_name().to_string_lossy().to_string())
        .filter(|name| name.ends_with(&config.extension))
        .collect();
    file_names.sort();

    Ok(file_names
        .into_iter()
        .map(|file_name| {
            let name = naming::display_name(&file_name, &config.extension, &config.prefix_label);
            // Composed with '/' directly, never the host separator
            let path = format!("{label}/{category}/{file_name}");
            IconRecord { name, path }
        })
        .collect())
}
