//! File-backed comment sink.
//!
//! The CI step that owns the API token posts the comment; kustdiff writes the
//! `createComment` request it would have made.

use std::path::PathBuf;

use async_trait::async_trait;
use serde::Serialize;

use kustdiff_report::{CommentSink, SinkError, SinkResult};
use kustdiff_types::IssueRef;

#[derive(Serialize)]
struct CommentRequest<'a> {
    owner: &'a str,
    repo: &'a str,
    issue_number: u64,
    body: &'a str,
}

/// Writes each comment request as JSON to a fixed path.
pub struct FileCommentSink {
    path: PathBuf,
}

impl FileCommentSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CommentSink for FileCommentSink {
    async fn create_comment(&self, issue: &IssueRef, body: &str) -> SinkResult<()> {
        let request = CommentRequest {
            owner: &issue.owner,
            repo: &issue.repo,
            issue_number: issue.number,
            body,
        };
        let json = serde_json::to_vec_pretty(&request)
            .map_err(|e| SinkError::Serialization(e.to_string()))?;
        tokio::fs::write(&self.path, json).await?;
        tracing::debug!(path = %self.path.display(), %issue, "wrote comment request");
        Ok(())
    }
}
