//! Report rendering for kustdiff.
//!
//! Folds a [`Diffable`] into a [`Report`] (raw unified diff plus a Markdown
//! document with one collapsible section per changed file), colorizes the raw
//! diff for terminals, and hands the Markdown to a comment sink or the CI job
//! summary when asked to.
//!
//! # Key Types
//!
//! - [`Report`] / [`assemble`] -- Raw and Markdown renderings of a diffable
//! - [`colorize`] -- Green/red terminal rendering of a raw diff
//! - [`Dispatcher`] / [`RenderRequest`] -- Output selection and delivery
//! - [`CommentSink`] -- Seam for posting Markdown to a pull request
//! - [`StepSummary`] -- Append-only writer for the CI job summary
//! - [`RenderConfig`] -- TOML-loadable render settings

pub mod assemble;
pub mod colorize;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod request;
pub mod sink;
pub mod summary;

pub use assemble::{assemble, FileSummary, Report, MARKDOWN_HEADER};
pub use colorize::colorize;
pub use config::{ColorChoice, DeliveryMode, RenderConfig};
pub use dispatch::{Delivery, Dispatched, Dispatcher};
pub use error::{ReportError, ReportResult, SinkError, SinkResult};
pub use request::{OutputFormat, OutputType, RenderRequest};
pub use sink::CommentSink;
pub use summary::{StepSummary, STEP_SUMMARY_ENV};

pub use kustdiff_diff::DiffOptions;
pub use kustdiff_types::{Diffable, IssueRef, Mapping};

/// A dispatched report together with the report itself.
#[derive(Debug)]
pub struct Rendered {
    pub report: Report,
    pub dispatched: Dispatched,
}

/// Parse a JSON payload, assemble its report and dispatch it.
///
/// A malformed payload fails before anything is rendered or delivered.
pub async fn render(
    payload: &str,
    request: &RenderRequest,
    options: &DiffOptions,
    dispatcher: &Dispatcher,
) -> ReportResult<Rendered> {
    let diffable = Diffable::from_json(payload)?;
    let report = assemble(&diffable, options);
    let dispatched = dispatcher.dispatch(&report, request).await?;
    Ok(Rendered { report, dispatched })
}
