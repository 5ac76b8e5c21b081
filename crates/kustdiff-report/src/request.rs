//! Output selectors for one render.
//!
//! Both selectors are parsed leniently: unrecognised values fall back to
//! "no side effect" and "terminal text" respectively.

use std::fmt;

/// Where the Markdown report is delivered, besides being returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputType {
    /// Post the Markdown as a pull request comment.
    PrComment,
    /// Append the Markdown to the CI job summary.
    JobSummary,
    /// No delivery.
    Other,
}

impl From<&str> for OutputType {
    fn from(s: &str) -> Self {
        match s {
            "pr_comment" => OutputType::PrComment,
            "job_summary" => OutputType::JobSummary,
            _ => OutputType::Other,
        }
    }
}

impl fmt::Display for OutputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputType::PrComment => f.write_str("pr_comment"),
            OutputType::JobSummary => f.write_str("job_summary"),
            OutputType::Other => f.write_str("other"),
        }
    }
}

/// What `dispatch` returns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// The Markdown document.
    Markdown,
    /// The colorized raw diff.
    Terminal,
}

impl From<&str> for OutputFormat {
    fn from(s: &str) -> Self {
        match s {
            "markdown" => OutputFormat::Markdown,
            _ => OutputFormat::Terminal,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Markdown => f.write_str("markdown"),
            OutputFormat::Terminal => f.write_str("terminal"),
        }
    }
}

/// The two independent output selectors of one render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderRequest {
    pub output_type: OutputType,
    pub output_format: OutputFormat,
}

impl RenderRequest {
    pub fn new(output_type: OutputType, output_format: OutputFormat) -> Self {
        Self {
            output_type,
            output_format,
        }
    }

    /// Build a request from the raw selector strings a CI step passes.
    pub fn parse(output_type: &str, output_format: &str) -> Self {
        Self::new(output_type.into(), output_format.into())
    }
}
