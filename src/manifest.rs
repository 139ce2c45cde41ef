//! Manifest types and JSON output.
//!
//! The manifest is the tool's sole artifact: a JSON object mapping each
//! category name to its list of icon records, written with 2-space
//! indentation so downstream consumers (and humans) can diff it easily.
//! It is rebuilt from scratch on every run and fully replaces any prior
//! file at the output path.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WriteError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// One catalogued icon file.
///
/// `name` is derived from the file name (see [`crate::naming`]) and is not
/// guaranteed unique; `path` is unique within the manifest — exactly one
/// record exists per qualifying file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconRecord {
    /// Human-readable identifier derived from the file name.
    pub name: String,
    /// Forward-slash path `<rootLabel>/<category>/<fileName>`, identical on
    /// every host platform.
    pub path: String,
}

/// The complete category → records mapping.
///
/// Backed by a `BTreeMap` so category keys serialize in sorted order, and
/// records are sorted by path before insertion — two runs over an unchanged
/// tree produce byte-identical output. Categories with no qualifying files
/// are present with an empty list.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Manifest {
    pub categories: BTreeMap<String, Vec<IconRecord>>,
}

impl Manifest {
    /// Total number of icon records across all categories.
    pub fn icon_count(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }

    /// Serialize as a pretty-printed JSON object (2-space indent).
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Write the manifest to `path`, replacing any existing file.
    ///
    /// Serialization happens before the write, so a JSON error leaves prior
    /// output untouched. The write itself is a plain overwrite.
    pub fn write(&self, path: &Path) -> Result<(), WriteError> {
        let json = self.to_json()?;
        fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, path: &str) -> IconRecord {
        IconRecord {
            name: name.to_string(),
            path: path.to_string(),
        }
    }

    #[test]
    fn serializes_as_plain_object() {
        let mut manifest = Manifest::default();
        manifest.categories.insert(
            "Database".to_string(),
            vec![record("sql", "Icons/Database/1-icon-service-sql.svg")],
        );
        manifest.categories.insert("Network".to_string(), vec![]);

        let json = manifest.to_json().unwrap();
        let expected = r#"{
  "Database": [
    {
      "name": "sql",
      "path": "Icons/Database/1-icon-service-sql.svg"
    }
  ],
  "Network": []
}"#;
        assert_eq!(json, expected);
    }

    #[test]
    fn categories_serialize_in_sorted_order() {
        let mut manifest = Manifest::default();
        manifest.categories.insert("Zeta".to_string(), vec![]);
        manifest.categories.insert("Alpha".to_string(), vec![]);

        let json = manifest.to_json().unwrap();
        assert!(json.find("Alpha").unwrap() < json.find("Zeta").unwrap());
    }

    #[test]
    fn icon_count_sums_all_categories() {
        let mut manifest = Manifest::default();
        manifest
            .categories
            .insert("A".to_string(), vec![record("x", "I/A/x.svg")]);
        manifest.categories.insert(
            "B".to_string(),
            vec![record("y", "I/B/y.svg"), record("z", "I/B/z.svg")],
        );
        manifest.categories.insert("C".to_string(), vec![]);

        assert_eq!(manifest.icon_count(), 3);
    }

    #[test]
    fn write_replaces_existing_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let out = tmp.path().join("icons.json");
        fs::write(&out, "stale content").unwrap();

        let mut manifest = Manifest::default();
        manifest.categories.insert("Compute".to_string(), vec![]);
        manifest.write(&out).unwrap();

        let written = fs::read_to_string(&out).unwrap();
        assert!(!written.contains("stale"));
        assert!(written.contains("Compute"));
    }

    #[test]
    fn write_fails_on_missing_parent() {
        let tmp = tempfile::TempDir::new().unwrap();
        let out = tmp.path().join("no-such-dir").join("icons.json");

        let manifest = Manifest::default();
        assert!(matches!(manifest.write(&out), Err(WriteError::Io(_))));
    }
}
