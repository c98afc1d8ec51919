//! Post-processing: second pass over the structured Markdown.
//!
//! Running page headers repeat the section title on every page, so after
//! structuring the same heading can appear twice with only a blank line in
//! between. The front of the guide is an alphabetical index whose letter
//! dividers survive as lone capitals. Two rules fix both:
//!
//! 1. Lone uppercase letters near the top become bold index markers
//! 2. A heading identical to the previous non-blank line is dropped
//!
//! ## Rule Order
//!
//! Index letters are decided on the structured line positions, so they run
//! before deduplication removes lines. Neither rule touches headings the other
//! produces, which keeps the two passes independent.

use crate::config::Heuristics;

/// Apply both post-processing rules.
pub fn post_process_markdown(input: &str, heuristics: &Heuristics) -> String {
    let s = format_index_letters(input, heuristics.index_letter_line_limit);
    dedup_headings(&s)
}

// ── Rule 1: Index letters ────────────────────────────────────────────────────

/// Rewrite `A` as `**A**` on lines before `line_limit`.
fn format_index_letters(input: &str, line_limit: usize) -> String {
    input
        .split('\n')
        .enumerate()
        .map(|(i, line)| {
            let trimmed = line.trim();
            if i < line_limit && is_index_letter(trimmed) {
                format!("**{trimmed}**")
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Exactly one uppercase Latin letter.
pub fn is_index_letter(s: &str) -> bool {
    s.len() == 1 && s.as_bytes()[0].is_ascii_uppercase()
}

// ── Rule 2: Duplicate headings ───────────────────────────────────────────────

/// Drop a heading that repeats the previous non-blank line, collapsing the
/// blank lines that surrounded it.
fn dedup_headings(input: &str) -> String {
    let mut result: Vec<&str> = Vec::new();
    let mut last_content: Option<&str> = None;

    for line in input.split('\n') {
        if line.trim().is_empty() {
            if result.last().is_some_and(|l| !l.trim().is_empty()) {
                result.push(line);
            }
            continue;
        }

        if line.starts_with("##") && last_content == Some(line) {
            continue;
        }

        last_content = Some(line);
        result.push(line);
    }

    result.join("\n")
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_letter_detection() {
        assert!(is_index_letter("A"));
        assert!(is_index_letter("Z"));
        assert!(!is_index_letter("a"));
        assert!(!is_index_letter("Ä"));
        assert!(!is_index_letter("AB"));
        assert!(!is_index_letter(""));
    }

    #[test]
    fn test_index_letter_before_limit() {
        let mut lines = vec!["Text"; 50];
        lines.push("A");
        lines.push("Abzüge 12");
        let out = format_index_letters(&lines.join("\n"), 300);
        assert_eq!(out.split('\n').nth(50), Some("**A**"));
    }

    #[test]
    fn test_index_letter_after_limit_untouched() {
        let mut lines = vec!["Text"; 300];
        lines.push("B");
        let out = format_index_letters(&lines.join("\n"), 300);
        assert!(out.ends_with("\nB"));
        assert!(!out.contains("**"));
    }

    #[test]
    fn test_blank_lines_not_index_letters() {
        let input = "Text\n\nMehr";
        assert_eq!(format_index_letters(input, 300), input);
    }

    #[test]
    fn test_adjacent_duplicate_heading_removed() {
        let input = "## 4. Einkünfte\n## 4. Einkünfte\nText";
        assert_eq!(dedup_headings(input), "## 4. Einkünfte\nText");
    }

    #[test]
    fn test_duplicate_heading_across_blank_removed() {
        let input = "### Vermögen\n\n### Vermögen\n\nText";
        assert_eq!(dedup_headings(input), "### Vermögen\n\nText");
    }

    #[test]
    fn test_distinct_headings_kept() {
        let input = "### Vermögen\n\n### Schulden\n\nText";
        assert_eq!(dedup_headings(input), input);
    }

    #[test]
    fn test_repeated_body_lines_kept() {
        let input = "Siehe oben\nSiehe oben";
        assert_eq!(dedup_headings(input), input);
    }

    #[test]
    fn test_heading_repeated_after_content_kept() {
        let input = "### Vermögen\n\nText\n\n### Vermögen";
        assert_eq!(dedup_headings(input), input);
    }

    #[test]
    fn test_post_process_full() {
        let input = "## Seite 2\n\nA\nAbzüge 12\n\n### Vermögen\n\n### Vermögen\n\nText";
        let out = post_process_markdown(input, &Heuristics::refined());
        assert_eq!(out, "## Seite 2\n\n**A**\nAbzüge 12\n\n### Vermögen\n\nText");
    }
}
