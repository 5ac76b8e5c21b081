//! Error types for report rendering and delivery.

use kustdiff_types::TypeError;

/// Errors raised by a [`CommentSink`](crate::CommentSink).
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    /// The remote end refused or failed the request.
    #[error("transport error: {0}")]
    Transport(String),

    /// The comment request could not be encoded.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// A spawned delivery task panicked or was cancelled.
    #[error("delivery task aborted: {0}")]
    Aborted(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias for sink results.
pub type SinkResult<T> = Result<T, SinkError>;

/// Errors that abort a render.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// The diffable payload was malformed.
    #[error("payload error: {0}")]
    Payload(#[from] TypeError),

    /// An awaited comment delivery failed.
    #[error("comment delivery failed: {0}")]
    Sink(#[from] SinkError),

    /// `pr_comment` output was requested with changes present but no sink.
    #[error("pr_comment output requested but no comment sink is configured")]
    MissingCommentSink,

    /// `job_summary` output was requested with changes present but no summary file.
    #[error("job_summary output requested but no job summary file is configured")]
    MissingStepSummary,

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias for report results.
pub type ReportResult<T> = Result<T, ReportError>;
