//! CLI output formatting.
//!
//! Output is information-centric: the primary display for every category is
//! its name and icon count, with individual records shown as indented
//! name lines and their manifest paths as secondary `Path:` context.
//!
//! ```text
//! Categories
//! 001 Compute (2 icons)
//!     compute
//!         Path: Icons/Compute/42-icon-service-compute.svg
//!     vm
//!         Path: Icons/Compute/7-icon-service-vm.svg
//! 002 Network (0 icons)
//!
//! 2 categories, 2 icons
//! ```
//!
//! Each display has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.

use crate::manifest::Manifest;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Category header line: positional index, name, icon count.
fn category_header(index: usize, name: &str, count: usize) -> String {
    format!("{} {} ({} icons)", format_index(index), name, count)
}

/// Format the full category/record inventory of a manifest.
pub fn format_scan_output(manifest: &Manifest) -> Vec<String> {
    let mut lines = vec!["Categories".to_string()];

    for (pos, (category, records)) in manifest.categories.iter().enumerate() {
        lines.push(category_header(pos + 1, category, records.len()));
        for record in records {
            lines.push(format!("{}{}", indent(1), record.name));
            lines.push(format!("{}Path: {}", indent(2), record.path));
        }
    }

    lines.push(String::new());
    lines.push(format!(
        "{} categories, {} icons",
        manifest.categories.len(),
        manifest.icon_count()
    ));
    lines
}

/// Print the scan inventory to stdout.
pub fn print_scan_output(manifest: &Manifest) {
    for line in format_scan_output(manifest) {
        println!("{line}");
    }
}
