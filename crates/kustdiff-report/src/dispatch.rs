//! Output dispatch: pick the returned rendering and deliver the Markdown.
//!
//! Delivery and the returned rendering are independent: a `pr_comment`
//! request still returns colorized text unless Markdown was asked for.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use kustdiff_types::IssueRef;

use crate::assemble::Report;
use crate::colorize::colorize;
use crate::config::DeliveryMode;
use crate::error::{ReportError, ReportResult, SinkError, SinkResult};
use crate::request::{OutputFormat, OutputType, RenderRequest};
use crate::sink::CommentSink;
use crate::summary::StepSummary;

/// What happened to the Markdown report.
#[derive(Debug)]
pub enum Delivery {
    /// Nothing was delivered: no changes, or no delivery requested.
    Skipped,
    /// The comment or summary was delivered before `dispatch` returned.
    Delivered,
    /// A fire-and-forget comment is still in flight.
    Pending(JoinHandle<SinkResult<()>>),
}

impl Delivery {
    /// Wait for an in-flight comment, if any, and return its outcome.
    pub async fn settle(self) -> SinkResult<()> {
        match self {
            Delivery::Skipped | Delivery::Delivered => Ok(()),
            Delivery::Pending(handle) => handle
                .await
                .map_err(|e| SinkError::Aborted(e.to_string()))?,
        }
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, Delivery::Skipped)
    }
}

/// Result of one dispatch.
#[derive(Debug)]
pub struct Dispatched {
    /// Markdown or colorized text, per the request's output format.
    pub output: String,
    pub delivery: Delivery,
}

/// Routes a [`Report`] to its return value and delivery targets.
pub struct Dispatcher {
    comments: Option<(Arc<dyn CommentSink>, IssueRef)>,
    summary: Option<StepSummary>,
    mode: DeliveryMode,
}

impl Dispatcher {
    /// A dispatcher with no delivery targets.
    pub fn new(mode: DeliveryMode) -> Self {
        Self {
            comments: None,
            summary: None,
            mode,
        }
    }

    /// Post `pr_comment` reports to `issue` through `sink`.
    pub fn with_comment_sink(mut self, sink: Arc<dyn CommentSink>, issue: IssueRef) -> Self {
        self.comments = Some((sink, issue));
        self
    }

    /// Append `job_summary` reports to `summary`.
    pub fn with_step_summary(mut self, summary: StepSummary) -> Self {
        self.summary = Some(summary);
        self
    }

    /// Deliver the report as requested and return the selected rendering.
    ///
    /// Nothing is delivered when the report has no changes. In
    /// [`DeliveryMode::FireAndForget`] this must run inside a tokio runtime.
    pub async fn dispatch(&self, report: &Report, request: &RenderRequest) -> ReportResult<Dispatched> {
        debug!(
            output_type = %request.output_type,
            output_format = %request.output_format,
            mode = ?self.mode,
            changed = report.has_changes(),
            "dispatching report"
        );

        let delivery = if report.has_changes() {
            match request.output_type {
                OutputType::PrComment => self.post_comment(report.markdown_diff()).await?,
                OutputType::JobSummary => {
                    let summary = self.summary.as_ref().ok_or(ReportError::MissingStepSummary)?;
                    summary.append(report.markdown_diff())?;
                    Delivery::Delivered
                }
                OutputType::Other => Delivery::Skipped,
            }
        } else {
            Delivery::Skipped
        };

        let output = match request.output_format {
            OutputFormat::Markdown => report.markdown_diff().to_string(),
            OutputFormat::Terminal => colorize(report.raw_diff()),
        };

        Ok(Dispatched { output, delivery })
    }

    async fn post_comment(&self, body: &str) -> ReportResult<Delivery> {
        let (sink, issue) = self.comments.as_ref().ok_or(ReportError::MissingCommentSink)?;

        match self.mode {
            DeliveryMode::Await => {
                sink.create_comment(issue, body).await?;
                info!(%issue, bytes = body.len(), "posted diff comment");
                Ok(Delivery::Delivered)
            }
            DeliveryMode::FireAndForget => {
                let runtime = tokio::runtime::Handle::try_current().map_err(|_| {
                    ReportError::Config("fire-and-forget delivery needs a tokio runtime".into())
                })?;
                let sink = Arc::clone(sink);
                let issue = issue.clone();
                let body = body.to_string();

                let handle = runtime.spawn(async move {
                    let result = sink.create_comment(&issue, &body).await;
                    match &result {
                        Ok(()) => info!(%issue, bytes = body.len(), "posted diff comment"),
                        Err(e) => warn!(%issue, error = %e, "diff comment delivery failed"),
                    }
                    result
                });
                Ok(Delivery::Pending(handle))
            }
        }
    }
}
