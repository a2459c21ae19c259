//! Console output for a finished report run.
//!
//! Supports `human` (default) and `json` outputs. The JSON form carries the
//! output path, per-file rows and the global summary.

use crate::models::Report;
use crate::utils::use_colors;
use owo_colors::OwoColorize;
use serde_json::json;
use serde_json::Value as JsonVal;
use std::path::Path;

/// What happened to the report file during the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteStatus {
    Written,
    /// `--check` found the file on disk matching the rendered report.
    UpToDate,
    /// `--check` found the file on disk missing or different.
    Stale,
}

impl WriteStatus {
    fn as_str(self) -> &'static str {
        match self {
            WriteStatus::Written => "written",
            WriteStatus::UpToDate => "up-to-date",
            WriteStatus::Stale => "stale",
        }
    }
}

/// Print the outcome of a report run in the requested format.
pub fn print_report(report: &Report, out_path: &Path, status: WriteStatus, output: &str) {
    match output {
        "json" => {
            let out = compose_report_json(report, out_path, status);
            println!(
                "{}",
                serde_json::to_string_pretty(&out).unwrap_or_else(|_| out.to_string())
            );
        }
        _ => {
            let color = use_colors(output);
            let path = out_path.to_string_lossy();
            match status {
                WriteStatus::Written => println!("Generated {}", path),
                WriteStatus::UpToDate => {
                    if color {
                        println!("{} {}", "up to date:".green().bold(), path);
                    } else {
                        println!("up to date: {}", path);
                    }
                }
                WriteStatus::Stale => {
                    if color {
                        println!("{} {}", "✖ out of date:".red().bold(), path.bold());
                    } else {
                        println!("✖ out of date: {}", path);
                    }
                }
            }
            for s in &report.files {
                let line = format!(
                    "  {:>6.1}%  {:>4}/{:<4} {}",
                    s.pct, s.done, s.total, s.file
                );
                if !color {
                    println!("{}", line);
                } else if s.total > 0 && s.done == s.total {
                    println!("{}", line.green());
                } else if s.p0 > 0 {
                    println!("{}", line.red());
                } else {
                    println!("{}", line);
                }
            }
            let g = &report.summary;
            let summary = format!(
                "— Summary — done={}/{} ({:.1}%) p0={} p1={} p2={} other={} files={}",
                g.done, g.total, g.pct_all, g.p0, g.p1, g.p2, g.un, g.files
            );
            if color {
                println!("{}", summary.bold());
            } else {
                println!("{}", summary);
            }
        }
    }
}

/// Compose the JSON document for a run (pure) for testing purposes.
pub fn compose_report_json(report: &Report, out_path: &Path, status: WriteStatus) -> JsonVal {
    json!({
        "output": out_path.to_string_lossy(),
        "status": status.as_str(),
        "results": report.files,
        "summary": report.summary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::build_report;
    use crate::analyze::analyze_text;

    #[test]
    fn test_compose_report_json_shape() {
        let report = build_report(vec![
            analyze_text("b.md", "- [ ] a P0\n- [ ] b\n"),
            analyze_text("a.md", "- [x] done\n"),
        ]);
        let out = compose_report_json(&report, Path::new("docs/review.md"), WriteStatus::Written);
        assert_eq!(out["output"], "docs/review.md");
        assert_eq!(out["status"], "written");
        assert_eq!(out["results"][0]["file"], "a.md");
        assert_eq!(out["results"][0]["pct"], 100.0);
        assert_eq!(out["results"][1]["p0"], 1);
        assert_eq!(out["results"][1]["un"], 1);
        assert_eq!(out["summary"]["total"], 3);
        assert_eq!(out["summary"]["files"], 2);
    }

    #[test]
    fn test_compose_report_json_stale_status() {
        let report = build_report(Vec::new());
        let out = compose_report_json(&report, Path::new("r.md"), WriteStatus::Stale);
        assert_eq!(out["status"], "stale");
        assert_eq!(out["results"].as_array().map(Vec::len), Some(0));
        assert_eq!(out["summary"]["pct_all"], 0.0);
    }
}
