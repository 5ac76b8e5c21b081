//! Payload types for kustdiff.
//!
//! The CI step that builds Flux Kustomizations hands kustdiff a JSON payload
//! describing which rendered manifests to compare. This crate owns that
//! schema and its validation.
//!
//! # Key Types
//!
//! - [`Mapping`] -- One source file that becomes one destination file
//! - [`Diffable`] -- The ordered set of mappings for one render
//! - [`IssueRef`] -- The pull request a Markdown comment is posted to

pub mod diffable;
pub mod error;
pub mod issue;

pub use diffable::{Diffable, Mapping};
pub use error::{TypeError, TypeResult};
pub use issue::IssueRef;
