//! CI job summary output.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::ReportResult;

/// Environment variable naming the job summary file on GitHub Actions.
pub const STEP_SUMMARY_ENV: &str = "GITHUB_STEP_SUMMARY";

/// Appends Markdown to a job summary file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepSummary {
    path: PathBuf,
}

impl StepSummary {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The summary file named by `GITHUB_STEP_SUMMARY`, if set and non-empty.
    pub fn from_env() -> Option<Self> {
        std::env::var_os(STEP_SUMMARY_ENV)
            .filter(|v| !v.is_empty())
            .map(Self::new)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append `markdown` followed by a newline. Existing content is kept.
    pub fn append(&self, markdown: &str) -> ReportResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(markdown.as_bytes())?;
        file.write_all(b"\n")?;
        tracing::info!(path = %self.path.display(), bytes = markdown.len(), "appended job summary");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let summary = StepSummary::new(dir.path().join("summary.md"));

        summary.append("### Title\n").unwrap();
        let content = std::fs::read_to_string(summary.path()).unwrap();
        assert_eq!(content, "### Title\n\n");
    }

    #[test]
    fn append_keeps_existing_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summary.md");
        std::fs::write(&path, "earlier step\n").unwrap();

        StepSummary::new(&path).append("mine").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "earlier step\nmine\n");
    }

    #[test]
    fn from_env_needs_a_non_empty_value() {
        std::env::remove_var(STEP_SUMMARY_ENV);
        assert_eq!(StepSummary::from_env(), None);

        std::env::set_var(STEP_SUMMARY_ENV, "");
        assert_eq!(StepSummary::from_env(), None);

        std::env::set_var(STEP_SUMMARY_ENV, "/tmp/step-summary.md");
        assert_eq!(
            StepSummary::from_env(),
            Some(StepSummary::new("/tmp/step-summary.md"))
        );

        std::env::remove_var(STEP_SUMMARY_ENV);
    }

    #[test]
    fn append_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let summary = StepSummary::new(dir.path().join("nope").join("summary.md"));
        assert!(summary.append("x").is_err());
    }
}
