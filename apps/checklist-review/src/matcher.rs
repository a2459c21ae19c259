//! Checkbox line classification.
//!
//! A checklist item is a markdown list line of the form `- [ ]`, `- [x]` or
//! `- [X]`, optionally indented. Unchecked items are further tagged by the
//! first priority marker (`P0`, `P1`, `P2`) found anywhere in the line.

use crate::models::{LineKind, Priority};
use regex::Regex;
use std::sync::OnceLock;

fn checkbox_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\s*-\s+\[([xX\s])\]").expect("checkbox regex"))
}

/// Classify one line of a checklist file.
pub fn classify_line(line: &str) -> LineKind {
    let Some(caps) = checkbox_re().captures(line) else {
        return LineKind::NotItem;
    };
    let mark = caps.get(1).map(|m| m.as_str()).unwrap_or(" ");
    if mark.eq_ignore_ascii_case("x") {
        return LineKind::Checked;
    }
    LineKind::Unchecked(priority_of(line))
}

/// First priority tag present in `line`, honoring P0 > P1 > P2.
pub fn priority_of(line: &str) -> Option<Priority> {
    Priority::PRECEDENCE
        .into_iter()
        .find(|p| line.contains(p.tag()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_item_ignores_priority() {
        assert_eq!(classify_line("- [x] done task P0"), LineKind::Checked);
        assert_eq!(classify_line("- [X] shipped P1"), LineKind::Checked);
    }

    #[test]
    fn test_unchecked_precedence_p1_over_p2() {
        assert_eq!(
            classify_line("  - [ ] fix thing P1 and P2"),
            LineKind::Unchecked(Some(Priority::P1))
        );
        assert_eq!(
            classify_line("- [ ] P2 first, then P0"),
            LineKind::Unchecked(Some(Priority::P0))
        );
    }

    #[test]
    fn test_unchecked_without_tag() {
        assert_eq!(classify_line("- [ ] no tag"), LineKind::Unchecked(None));
        // tags are case-sensitive
        assert_eq!(classify_line("- [ ] p0 lowercase"), LineKind::Unchecked(None));
    }

    #[test]
    fn test_pattern_must_start_line() {
        assert_eq!(
            classify_line("Some text - [ ] not at line start"),
            LineKind::NotItem
        );
        assert_eq!(classify_line("-[ ] missing space"), LineKind::NotItem);
        assert_eq!(classify_line("* [ ] other bullet"), LineKind::NotItem);
        assert_eq!(classify_line("- [y] bad mark"), LineKind::NotItem);
        assert_eq!(classify_line(""), LineKind::NotItem);
    }

    #[test]
    fn test_indentation_and_tabs() {
        assert_eq!(classify_line("\t- [x] nested"), LineKind::Checked);
        assert_eq!(
            classify_line("    -   [ ] wide gap P2"),
            LineKind::Unchecked(Some(Priority::P2))
        );
        // a tab inside the brackets counts as unchecked
        assert_eq!(classify_line("- [\t] tabbed"), LineKind::Unchecked(None));
    }
}
