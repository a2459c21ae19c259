//! CLI argument parsing via `clap`.

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "checklist-review",
    version,
    about = "Summarize markdown checklist completion into a review report",
    long_about = "checklist-review — scan a directory of markdown checklists, tally checked items and pending P0/P1/P2 tags, and write one aggregated markdown report.\n\nRuns with no arguments. Configuration precedence: CLI > checklist-review.toml > defaults.",
    after_help = "Examples:\n  checklist-review\n  checklist-review --dir docs/flows --out docs/review.md\n  checklist-review --check\n  checklist-review --output json"
)]
/// Top-level CLI options. Without a subcommand the report is generated.
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Option<Commands>,
    #[command(flatten)]
    pub report: ReportArgs,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show version
    #[command(
        about = "Show version",
        long_about = "Print the current checklist-review version."
    )]
    Version,
}

#[derive(Args, Debug, Default)]
/// Flags for the report run.
pub struct ReportArgs {
    #[arg(long, help = "Repository root (default: current dir)")]
    pub repo_root: Option<String>,
    #[arg(long, help = "Checklist directory, relative to the repository root")]
    pub dir: Option<String>,
    #[arg(long, help = "Report file, relative to the repository root")]
    pub out: Option<String>,
    #[arg(long, help = "Output mode: human|json (default: human)")]
    pub output: Option<String>,
    #[arg(long, action = clap::ArgAction::SetTrue, help = "Exit non-zero if the report on disk is out of date (implies no write)")]
    pub check: bool,
    #[arg(long, action = clap::ArgAction::SetTrue, conflicts_with = "check", help = "Print the report to stdout instead of writing it")]
    pub stdout: bool,
}
