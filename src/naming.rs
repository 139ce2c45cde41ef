//! Centralized display-name derivation for icon file names.
//!
//! Icon sets exported from vendor tooling ship file names like
//! `42-icon-service-compute.svg`: a numeric export index, a fixed
//! `-icon-service-` label, then the actual service name. This module turns
//! such a file name into its human-readable identity:
//!
//! - `42-icon-service-compute.svg` → "compute"
//! - `logo.svg` → "logo" (no recognized prefix, only the extension is dropped)
//!
//! The prefix rule is deliberately an explicit matcher rather than a regex:
//! one-or-more ASCII digits immediately followed by the configured label,
//! anchored at the start. Anything else is left untouched.

/// Strip a single trailing occurrence of `extension` from `file_name`.
///
/// The match is case-sensitive and anchored at the end; a name like
/// `a.svg.svg` loses exactly one suffix. Names that don't end with the
/// extension are returned unchanged.
pub fn strip_extension<'a>(file_name: &'a str, extension: &str) -> &'a str {
    file_name.strip_suffix(extension).unwrap_or(file_name)
}

/// Strip a leading `<digits><label>` pattern from `base`, if present.
///
/// The pattern only matches at position 0 and requires at least one digit:
/// - `"42-icon-service-compute"` with label `"-icon-service-"` → `"compute"`
/// - `"icon-service-compute"` (no digits) → unchanged
/// - `"7-storage"` (digits but wrong label) → unchanged
pub fn strip_numbered_prefix<'a>(base: &'a str, label: &str) -> &'a str {
    let digits = base.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits == 0 {
        return base;
    }
    match base[digits..].strip_prefix(label) {
        Some(rest) => rest,
        None => base,
    }
}

/// Derive the display name for an icon file: drop the extension, then drop
/// the numbered prefix label if it matches.
pub fn display_name(file_name: &str, extension: &str, label: &str) -> String {
    let base = strip_extension(file_name, extension);
    strip_numbered_prefix(base, label).to_string()
}
