//! Per-file unified diff.
//!
//! Uses the `similar` crate (Myers diff algorithm) to group line changes into
//! hunks and prefixes them with the file header from [`crate::no_change`].

use similar::{Algorithm, ChangeTag, TextDiff};

use kustdiff_types::Mapping;

use crate::no_change::{canonical_no_change, is_no_change};

/// Context lines kept around each change when grouping hunks.
pub const DEFAULT_CONTEXT_LINES: usize = 4;

/// Knobs for the diff engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DiffOptions {
    /// Number of unchanged lines shown before and after each change.
    pub context_lines: usize,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            context_lines: DEFAULT_CONTEXT_LINES,
        }
    }
}

/// The unified diff of one mapping.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiffBlock {
    pub src_path: String,
    pub dst_path: String,
    /// Header plus hunks, newline terminated.
    pub text: String,
    /// Lines present only in the destination.
    pub additions: usize,
    /// Lines present only in the source.
    pub deletions: usize,
}

impl DiffBlock {
    /// Returns `true` if this block is the header-only diff for its labels.
    pub fn is_no_change(&self) -> bool {
        is_no_change(&self.text, &self.src_path, &self.dst_path)
    }
}

/// Diff two named blobs with the default options.
pub fn compute_diff(src_path: &str, dst_path: &str, src_content: &str, dst_content: &str) -> DiffBlock {
    compute_diff_with(src_path, dst_path, src_content, dst_content, &DiffOptions::default())
}

/// Diff two named blobs.
///
/// The output is deterministic: no deadline is set on the diff, so the same
/// inputs always produce the same hunks.
pub fn compute_diff_with(
    src_path: &str,
    dst_path: &str,
    src_content: &str,
    dst_content: &str,
    options: &DiffOptions,
) -> DiffBlock {
    let mut text = canonical_no_change(src_path, dst_path);

    let diff = TextDiff::configure()
        .algorithm(Algorithm::Myers)
        .diff_lines(src_content, dst_content);

    let mut additions = 0usize;
    let mut deletions = 0usize;
    for change in diff.iter_all_changes() {
        match change.tag() {
            ChangeTag::Insert => additions += 1,
            ChangeTag::Delete => deletions += 1,
            ChangeTag::Equal => {}
        }
    }

    if additions + deletions > 0 {
        let mut unified = diff.unified_diff();
        unified
            .context_radius(options.context_lines)
            .missing_newline_hint(true);
        for hunk in unified.iter_hunks() {
            text.push_str(&hunk.to_string());
        }
    }

    DiffBlock {
        src_path: src_path.to_string(),
        dst_path: dst_path.to_string(),
        text,
        additions,
        deletions,
    }
}

/// Diff a payload mapping.
pub fn diff_mapping(mapping: &Mapping, options: &DiffOptions) -> DiffBlock {
    compute_diff_with(
        &mapping.src_path,
        &mapping.dst_path,
        &mapping.src_content,
        &mapping.dst_content,
        options,
    )
}
