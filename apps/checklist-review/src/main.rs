//! checklist-review binary entry point.
//! Resolves configuration, runs the report pipeline and prints the outcome.

use checklist_review::cli::{Cli, Commands, ReportArgs};
use checklist_review::error::Result;
use checklist_review::output::{self, WriteStatus};
use checklist_review::render::{render_markdown, write_report};
use checklist_review::{config, report, utils};
use clap::Parser;

fn main() {
    let cli = Cli::parse();
    match cli.cmd {
        Some(Commands::Version) => {
            println!("{}", env!("CARGO_PKG_VERSION"));
        }
        None => match run(&cli.report) {
            Ok(true) => {}
            Ok(false) => std::process::exit(1),
            Err(e) => {
                eprintln!("{} {}", utils::error_prefix(), e);
                std::process::exit(2);
            }
        },
    }
}

/// Generate the report. Returns `false` when `--check` finds it stale.
fn run(args: &ReportArgs) -> Result<bool> {
    let eff = config::resolve_effective(
        args.repo_root.as_deref(),
        args.dir.as_deref(),
        args.out.as_deref(),
        args.output.as_deref(),
    )?;
    let human = eff.output != "json";
    if human && eff.config_path.is_none() {
        eprintln!(
            "{} No checklist-review.toml found; using defaults.",
            utils::note_prefix()
        );
    }

    let rep = report::run_report(&eff.dir, &eff.pattern)?;
    if human {
        eprintln!(
            "{} Scanned {} checklist(s) in {}",
            utils::info_prefix(),
            rep.files.len(),
            eff.dir.to_string_lossy()
        );
    }
    let md = render_markdown(&rep, &eff.render);

    if args.stdout {
        print!("{}", md);
        return Ok(true);
    }
    let status = if args.check {
        report::check_status(&eff.out, &md)?
    } else {
        write_report(&eff.out, &md)?;
        WriteStatus::Written
    };
    output::print_report(&rep, &eff.out, status, &eff.output);
    Ok(status != WriteStatus::Stale)
}
