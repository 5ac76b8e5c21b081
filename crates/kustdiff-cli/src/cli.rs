use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use kustdiff_report::ColorChoice;
use kustdiff_types::IssueRef;

#[derive(Parser)]
#[command(
    name = "kustdiff",
    about = "kustdiff: render Flux Kustomization diffs for terminals, pull requests and job summaries",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// When to emit ANSI colors (overrides the config file)
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorArg>,

    /// TOML file with render settings
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorArg {
    Auto,
    Always,
    Never,
}

impl From<ColorArg> for ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => ColorChoice::Auto,
            ColorArg::Always => ColorChoice::Always,
            ColorArg::Never => ColorChoice::Never,
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Render a diffable payload
    Render(RenderArgs),
    /// Colorize an existing unified diff
    Colorize(ColorizeArgs),
}

#[derive(Args)]
pub struct RenderArgs {
    /// Diffable JSON payload file, or `-` for stdin
    #[arg(long, default_value = "-")]
    pub diffable: String,
    /// `pr_comment`, `job_summary`, or anything else for no delivery
    #[arg(long, default_value = "")]
    pub output_type: String,
    /// `markdown`, or anything else for colorized terminal text
    #[arg(long, default_value = "terminal")]
    pub output_format: String,
    /// Pull request to comment on, as owner/repo#number
    #[arg(long, requires = "comment_file")]
    pub pull_request: Option<IssueRef>,
    /// Where to write the comment request for the posting step
    #[arg(long, requires = "pull_request")]
    pub comment_file: Option<PathBuf>,
    /// Job summary file (defaults to $GITHUB_STEP_SUMMARY)
    #[arg(long)]
    pub summary_file: Option<PathBuf>,
    /// Context lines around each change
    #[arg(long)]
    pub context: Option<usize>,
    /// Return without waiting for comment delivery
    #[arg(long)]
    pub no_wait: bool,
    /// Print per-file change counts to stderr
    #[arg(long)]
    pub stat: bool,
    /// Exit with status 1 when any change was rendered
    #[arg(long)]
    pub exit_code: bool,
}

#[derive(Args)]
pub struct ColorizeArgs {
    /// Unified diff file, or `-` for stdin
    #[arg(default_value = "-")]
    pub input: String,
}
