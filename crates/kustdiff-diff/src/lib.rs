//! Diff engine for kustdiff.
//!
//! Turns one [`Mapping`](kustdiff_types::Mapping) into the unified-diff text
//! for that pair and decides whether that text represents a change at all.
//!
//! # Key Types
//!
//! - [`DiffBlock`] -- Unified-diff text for one mapping plus line counts
//! - [`DiffOptions`] -- Context radius used when grouping hunks
//! - [`canonical_no_change`] / [`is_no_change`] -- Header-only diff detection

pub mod block;
pub mod no_change;

pub use block::{compute_diff, compute_diff_with, diff_mapping, DiffBlock, DiffOptions, DEFAULT_CONTEXT_LINES};
pub use no_change::{canonical_no_change, is_no_change, FILE_SEPARATOR};
