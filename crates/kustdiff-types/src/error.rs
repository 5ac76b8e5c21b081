//! Error types for payload parsing.

/// Errors raised while reading a diffable payload.
#[derive(Debug, thiserror::Error)]
pub enum TypeError {
    /// The payload is not valid JSON, or does not match the mapping schema
    /// (missing field, unknown field, wrong type).
    #[error("malformed diffable payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),

    /// An issue reference could not be parsed.
    #[error("invalid issue reference: {0}")]
    InvalidIssueRef(String),
}

/// Convenience alias for payload results.
pub type TypeResult<T> = Result<T, TypeError>;
