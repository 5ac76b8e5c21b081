use std::io::Read;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use colored::Colorize;
use tracing::warn;

use kustdiff_report::{
    colorize, render, Dispatcher, RenderConfig, RenderRequest, Rendered, Report, StepSummary,
};

use crate::cli::*;
use crate::sinks::FileCommentSink;

pub async fn run_command(cli: Cli) -> anyhow::Result<ExitCode> {
    let mut config = match &cli.config {
        Some(path) => RenderConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => RenderConfig::default(),
    };
    if let Some(color) = cli.color {
        config.color = color.into();
    }
    config.color.apply();

    match cli.command {
        Command::Render(args) => cmd_render(args, config).await,
        Command::Colorize(args) => cmd_colorize(args),
    }
}

async fn cmd_render(args: RenderArgs, config: RenderConfig) -> anyhow::Result<ExitCode> {
    let Rendered { report, dispatched } = render_payload(&args, config).await?;

    print!("{}", dispatched.output);
    if args.stat {
        print_stat(&report);
    }

    if let Err(e) = dispatched.delivery.settle().await {
        warn!(error = %e, "comment delivery failed after render");
    }

    if args.exit_code && report.has_changes() {
        Ok(ExitCode::from(1))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

/// Read the payload, wire up the delivery targets and render.
async fn render_payload(args: &RenderArgs, mut config: RenderConfig) -> anyhow::Result<Rendered> {
    if let Some(context) = args.context {
        config.context_lines = context;
    }
    if args.no_wait {
        config.wait_for_comment_delivery = false;
    }

    let mut dispatcher = Dispatcher::new(config.delivery_mode());
    if let (Some(issue), Some(path)) = (&args.pull_request, &args.comment_file) {
        dispatcher = dispatcher.with_comment_sink(Arc::new(FileCommentSink::new(path)), issue.clone());
    }
    let summary = args
        .summary_file
        .as_ref()
        .map(StepSummary::new)
        .or_else(StepSummary::from_env);
    if let Some(summary) = summary {
        dispatcher = dispatcher.with_step_summary(summary);
    }

    let payload = read_input(&args.diffable)
        .with_context(|| format!("reading diffable payload from {}", args.diffable))?;
    let request = RenderRequest::parse(&args.output_type, &args.output_format);

    let rendered = render(&payload, &request, &config.diff_options(), &dispatcher).await?;
    Ok(rendered)
}

fn cmd_colorize(args: ColorizeArgs) -> anyhow::Result<ExitCode> {
    let raw = read_input(&args.input)
        .with_context(|| format!("reading diff from {}", args.input))?;
    print!("{}", colorize(&raw));
    Ok(ExitCode::SUCCESS)
}

fn print_stat(report: &Report) {
    for file in report.files() {
        let label = if file.src_path == file.dst_path {
            file.src_path.clone()
        } else {
            format!("{} → {}", file.src_path, file.dst_path)
        };
        eprintln!(
            " {} | {} {}",
            label.bold(),
            format!("+{}", file.additions).green(),
            format!("-{}", file.deletions).red()
        );
    }
    eprintln!(
        " {} files changed, {} insertions(+), {} deletions(-)",
        report.files().len(),
        report.additions(),
        report.deletions()
    );
}

/// Read a whole file, or stdin for `-`.
fn read_input(path: &str) -> std::io::Result<String> {
    if path == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        std::fs::read_to_string(path)
    }
}
