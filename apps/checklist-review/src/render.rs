//! Markdown rendering of a `Report` and writing it to disk.

use crate::error::{Result, ReviewError};
use crate::models::Report;
use std::fs;
use std::path::Path;

pub const DEFAULT_TITLE: &str = "Implementation Review";

/// Presentation knobs for the rendered document.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub title: String,
    /// Prepended to each file name to build the table links, e.g. `./workflow/`.
    pub link_prefix: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            link_prefix: "./workflow/".to_string(),
        }
    }
}

/// Render the summary and per-file table as markdown.
pub fn render_markdown(report: &Report, opts: &RenderOptions) -> String {
    let g = &report.summary;
    let mut md: Vec<String> = Vec::new();
    md.push(format!("# {}", opts.title));
    md.push(
        "\nThis document provides an automated review of the completion status of all workflow checklists."
            .to_string(),
    );
    md.push("\n## Overall Summary".to_string());
    md.push(format!(
        "- **Overall Completion**: {}/{} ({:.1}%)",
        g.done, g.total, g.pct_all
    ));
    md.push(format!("- **Pending Critical (P0)**: {}", g.p0));
    md.push(format!("- **Pending High (P1)**: {}", g.p1));
    md.push(format!("- **Pending Medium (P2)**: {}", g.p2));
    md.push(format!("- **Other Pending Tasks**: {}", g.un));

    md.push("\n## Detailed Status by Flow".to_string());
    md.push(
        "| Flow Checklist | Progress | % Done | Pending P0 | Pending P1 | Pending P2 | Unclassified |"
            .to_string(),
    );
    md.push("|---|---|---|---|---|---|---|".to_string());
    for s in &report.files {
        md.push(format!(
            "| [{file}]({prefix}{file}) | {}/{} | {:.1}% | {} | {} | {} | {} |",
            s.done,
            s.total,
            s.pct,
            s.p0,
            s.p1,
            s.p2,
            s.un,
            file = s.file,
            prefix = opts.link_prefix,
        ));
    }
    let mut out = md.join("\n");
    out.push('\n');
    out
}

/// Write `content` to `path`, replacing any existing file.
///
/// Parent directories are not created.
pub fn write_report(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|source| ReviewError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::build_report;
    use crate::analyze::analyze_text;
    use tempfile::tempdir;

    fn sample() -> Report {
        build_report(vec![
            analyze_text("b.md", "- [ ] x P0\n- [ ] y P0\n- [ ] z P1\n- [ ] w P1\n"),
            analyze_text("a.md", "- [x] one\n- [x] two\n"),
        ])
    }

    #[test]
    fn test_render_summary_and_rows() {
        let md = render_markdown(&sample(), &RenderOptions::default());
        assert!(md.starts_with("# Implementation Review\n\nThis document provides"));
        assert!(md.contains("- **Overall Completion**: 2/6 (33.3%)\n"));
        assert!(md.contains("- **Pending Critical (P0)**: 2\n"));
        assert!(md.contains("- **Pending High (P1)**: 2\n"));
        assert!(md.contains("- **Pending Medium (P2)**: 0\n"));
        assert!(md.contains("- **Other Pending Tasks**: 0\n"));
        let a = md
            .find("| [a.md](./workflow/a.md) | 2/2 | 100.0% | 0 | 0 | 0 | 0 |")
            .unwrap();
        let b = md
            .find("| [b.md](./workflow/b.md) | 0/4 | 0.0% | 2 | 2 | 0 | 0 |")
            .unwrap();
        assert!(a < b);
        assert!(md.ends_with("| 0 |\n"));
    }

    #[test]
    fn test_render_empty_report_exact() {
        let md = render_markdown(&build_report(Vec::new()), &RenderOptions::default());
        let expected = "\
# Implementation Review

This document provides an automated review of the completion status of all workflow checklists.

## Overall Summary
- **Overall Completion**: 0/0 (0.0%)
- **Pending Critical (P0)**: 0
- **Pending High (P1)**: 0
- **Pending Medium (P2)**: 0
- **Other Pending Tasks**: 0

## Detailed Status by Flow
| Flow Checklist | Progress | % Done | Pending P0 | Pending P1 | Pending P2 | Unclassified |
|---|---|---|---|---|---|---|
";
        assert_eq!(md, expected);
    }

    #[test]
    fn test_render_custom_title_and_prefix() {
        let opts = RenderOptions {
            title: "Release Readiness".into(),
            link_prefix: "../flows/".into(),
        };
        let md = render_markdown(&sample(), &opts);
        assert!(md.starts_with("# Release Readiness\n"));
        assert!(md.contains("[a.md](../flows/a.md)"));
    }

    #[test]
    fn test_write_report_overwrites_and_fails_without_parent() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("review.md");
        fs::write(&out, "stale content that is longer than the new one").unwrap();
        write_report(&out, "fresh\n").unwrap();
        assert_eq!(fs::read_to_string(&out).unwrap(), "fresh\n");

        let missing = dir.path().join("no/such/dir/review.md");
        assert!(matches!(
            write_report(&missing, "x"),
            Err(ReviewError::Write { .. })
        ));
    }
}
