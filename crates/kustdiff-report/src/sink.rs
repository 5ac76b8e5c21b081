//! The comment sink seam.
//!
//! Posting to a pull request needs credentials and a network client that
//! belong to the calling automation, so kustdiff only defines the call it
//! makes: one `create_comment` with the finished Markdown as body.

use async_trait::async_trait;

use kustdiff_types::IssueRef;

use crate::error::SinkResult;

/// Something that can post a Markdown comment on a pull request.
///
/// Implementations must be `Send + Sync + 'static` so fire-and-forget
/// delivery can move them onto a spawned task.
#[async_trait]
pub trait CommentSink: Send + Sync {
    async fn create_comment(&self, issue: &IssueRef, body: &str) -> SinkResult<()>;
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::time::Duration;

    use crate::error::SinkError;

    /// Records every call; optionally fails or delays.
    #[derive(Default)]
    pub(crate) struct RecordingSink {
        calls: Mutex<Vec<(IssueRef, String)>>,
        pub fail: bool,
        pub delay: Option<Duration>,
    }

    impl RecordingSink {
        pub fn failing() -> Self {
            Self {
                fail: true,
                ..Default::default()
            }
        }

        pub fn delayed(delay: Duration) -> Self {
            Self {
                delay: Some(delay),
                ..Default::default()
            }
        }

        pub fn calls(&self) -> Vec<(IssueRef, String)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl CommentSink for RecordingSink {
        async fn create_comment(&self, issue: &IssueRef, body: &str) -> SinkResult<()> {
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            self.calls.lock().unwrap().push((issue.clone(), body.to_string()));
            if self.fail {
                return Err(SinkError::Transport("401 Bad credentials".into()));
            }
            Ok(())
        }
    }

    #[tokio::test]
    async fn recording_sink_records() {
        let sink = RecordingSink::default();
        sink.create_comment(&IssueRef::new("o", "r", 3), "hello").await.unwrap();
        assert_eq!(sink.calls(), vec![(IssueRef::new("o", "r", 3), "hello".to_string())]);
    }
}
