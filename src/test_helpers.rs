//! Shared test utilities for the icon-manifest test suite.
//!
//! Provides a fixture-tree builder and manifest lookup helpers used by the
//! scan tests.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = fixture_tree(&[
//!     ("Compute", &["7-icon-service-vm.svg"]),
//!     ("Network", &[]),
//! ]);
//! let manifest = scan(&tmp.path().join("Icons"), &IconConfig::default()).unwrap();
//! assert_eq!(record_names(&manifest, "Compute"), vec!["vm"]);
//! ```

use std::fs;
use tempfile::TempDir;

use crate::manifest::Manifest;

/// Build an `Icons/` tree in a temp directory from `(category, files)` pairs.
///
/// Each file is written with placeholder content — the scanner never opens
/// file contents, only names matter.
pub fn fixture_tree(categories: &[(&str, &[&str])]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("Icons");
    for (category, files) in categories {
        let dir = root.join(category);
        fs::create_dir_all(&dir).unwrap();
        for file in *files {
            fs::write(dir.join(file), "<svg/>").unwrap();
        }
    }
    tmp
}

/// Record names for a category, in manifest order. Panics if the category
/// is missing.
pub fn record_names<'a>(manifest: &'a Manifest, category: &str) -> Vec<&'a str> {
    manifest
        .categories
        .get(category)
        .unwrap_or_else(|| {
            let keys: Vec<&str> = manifest.categories.keys().map(String::as_str).collect();
            panic!("category '{category}' not found. Available: {keys:?}")
        })
        .iter()
        .map(|r| r.name.as_str())
        .collect()
}
