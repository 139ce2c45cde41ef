//! # icon-manifest
//!
//! A build-time manifest generator for categorized SVG icon sets. Your
//! filesystem is the data source: each immediate subdirectory of the icon
//! root is a category, and every file inside it with the recognized
//! extension becomes an icon record.
//!
//! # Pipeline
//!
//! One pass, compute-then-write:
//!
//! ```text
//! Icons/  →  scan  →  Manifest (in memory)  →  icons.json
//! ```
//!
//! The output is a JSON object mapping category names to `{name, path}`
//! records, fully rebuilt and overwritten on every run. No asset contents
//! are read, no recursion below the category level, no incremental state.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Walks the icon root and assembles the category → records map |
//! | [`naming`] | Derives display names from file names (`42-icon-service-compute.svg` → "compute") |
//! | [`manifest`] | `Manifest` / `IconRecord` types, pretty JSON serialization, output write |
//! | [`config`] | `icon-manifest.toml` loading, defaults, and validation |
//! | [`output`] | CLI output formatting — category/record inventory display |
//!
//! # Design Decisions
//!
//! ## Deterministic Output
//!
//! Directory-enumeration order is platform-defined, so categories and
//! records are sorted by name before serialization. Two runs over an
//! unchanged tree produce byte-identical `icons.json` — the file diffs
//! cleanly under version control.
//!
//! ## Explicit Prefix Matching Over Regex
//!
//! The `NN-icon-service-` name-cleanup rule is a single fixed pattern, so
//! [`naming`] implements it as a hand-written matcher (digits, then the
//! literal label, anchored at the start) instead of pulling in a regex
//! engine. The behavior is auditable in a dozen lines and tested in
//! isolation.
//!
//! ## Explicit Configuration
//!
//! Scan root, output path, recognized extension, and the prefix label all
//! live in [`config::IconConfig`], passed into the scanner at call time.
//! No process-wide state; the CLI layers flags over an optional
//! `icon-manifest.toml`.

pub mod config;
pub mod manifest;
pub mod naming;
pub mod output;
pub mod scan;

#[cfg(test)]
pub(crate) mod test_helpers;
