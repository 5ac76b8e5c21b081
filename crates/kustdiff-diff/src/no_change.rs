//! No-change detection.
//!
//! The engine always writes a file header, even when the two sides are
//! identical, so an unchanged pair is recognised by comparing its text against
//! the header-only diff for the same path labels.

/// Separator line that opens every file diff.
pub const FILE_SEPARATOR: &str =
    "===================================================================";

/// The exact text the engine emits for `src_path` and `dst_path` when there
/// are no hunks.
pub fn canonical_no_change(src_path: &str, dst_path: &str) -> String {
    format!("{FILE_SEPARATOR}\n--- {src_path}\n+++ {dst_path}\n")
}

/// Returns `true` if `text` is the header-only diff for these path labels.
pub fn is_no_change(text: &str, src_path: &str, dst_path: &str) -> bool {
    // Equivalent to `text == canonical_no_change(..)` without allocating.
    let Some(rest) = text.strip_prefix(FILE_SEPARATOR) else {
        return false;
    };
    let Some(rest) = rest.strip_prefix("\n--- ") else {
        return false;
    };
    let Some(rest) = rest.strip_prefix(src_path) else {
        return false;
    };
    let Some(rest) = rest.strip_prefix("\n+++ ") else {
        return false;
    };
    let Some(rest) = rest.strip_prefix(dst_path) else {
        return false;
    };
    rest == "\n"
}
