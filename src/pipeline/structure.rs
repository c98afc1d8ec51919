//! Structuring: re-impose headings on the cleaned, markup-free text.
//!
//! The PDF text layer has no notion of headings, so they are guessed from the
//! shape of a line: short, no closing punctuation, no colon, and either a
//! section number (`4. Einkünfte …`) or a leading capital. The guess trades
//! false positives against false negatives and is tuned by
//! [`Heuristics`]; it is not expected to be exact.
//!
//! Every line gets exactly one [`LineRole`], so the classifier is total over
//! arbitrary input.

use crate::config::Heuristics;
use once_cell::sync::Lazy;
use regex::Regex;

/// Prefix of the page-marker lines produced by the cleaner.
pub const PAGE_MARKER_PREFIX: &str = "## Seite ";

static RE_PAGE_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^## Seite \d+$").unwrap());

static RE_NUMBERED_HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+\.?\s+[A-ZÄÖÜ]").unwrap());

static RE_BARE_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{1,2}$").unwrap());

static RE_INDEX_ENTRY: Lazy<Regex> = Lazy::new(|| Regex::new(r".+\s+\d{1,2}$").unwrap());

/// Markdown heading depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingLevel {
    /// `##`, numbered sections.
    Section,
    /// `###`, capitalised titles without a number.
    Subsection,
}

impl HeadingLevel {
    pub fn marker(self) -> &'static str {
        match self {
            HeadingLevel::Section => "##",
            HeadingLevel::Subsection => "###",
        }
    }
}

/// Role of a cleaned line in the Markdown output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineRole {
    Blank,
    PageMarker,
    Heading(HeadingLevel),
    Body,
}

/// Assign a role to one line. `prev` is the line directly before it in the
/// cleaned text, blank or not.
pub fn classify_line(line: &str, prev: Option<&str>, heuristics: &Heuristics) -> LineRole {
    let stripped = line.trim();
    if stripped.is_empty() {
        LineRole::Blank
    } else if RE_PAGE_MARKER.is_match(stripped) {
        LineRole::PageMarker
    } else if let Some(level) = classify_heading(stripped, prev, heuristics) {
        LineRole::Heading(level)
    } else {
        LineRole::Body
    }
}

/// Decide whether a line is a heading and at which level.
pub fn classify_heading(
    line: &str,
    prev: Option<&str>,
    heuristics: &Heuristics,
) -> Option<HeadingLevel> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    let len = line.chars().count();

    if heuristics.exclude_index_entries && is_index_entry(line, len, heuristics) {
        return None;
    }

    if len >= heuristics.heading_max_len
        || line.ends_with('.')
        || line.ends_with(',')
        || line.contains(':')
    {
        return None;
    }

    if RE_NUMBERED_HEADING.is_match(line) {
        return Some(HeadingLevel::Section);
    }

    let starts_upper = line.chars().next().is_some_and(char::is_uppercase);
    if len >= heuristics.capitalized_heading_max_len
        || !starts_upper
        || ends_with_digit(line, heuristics.trailing_digit_window)
    {
        return None;
    }

    // A capitalised line right after an unfinished sentence is its continuation.
    if heuristics.guard_mid_sentence {
        if let Some(prev) = prev.map(str::trim).filter(|p| !p.is_empty()) {
            if !prev.ends_with('.') {
                return None;
            }
        }
    }

    Some(if heuristics.subsection_headings {
        HeadingLevel::Subsection
    } else {
        HeadingLevel::Section
    })
}

/// Single letters, bare page numbers and `Stichwort 12` lines from the
/// alphabetical index.
fn is_index_entry(line: &str, len: usize, heuristics: &Heuristics) -> bool {
    (len == 1 && line.chars().all(char::is_alphabetic))
        || RE_BARE_NUMBER.is_match(line)
        || (len < heuristics.index_entry_max_len && RE_INDEX_ENTRY.is_match(line))
}

fn ends_with_digit(line: &str, window: usize) -> bool {
    line.chars().rev().take(window).any(char::is_numeric)
}

/// Turn cleaned text into Markdown.
///
/// Headings and page markers are set off by exactly one blank line on each
/// side (no leading blank at the very start), blank runs collapse to one and
/// body lines are emitted trimmed.
pub fn structure_markdown(text: &str, heuristics: &Heuristics) -> String {
    let lines: Vec<&str> = text.split('\n').collect();
    let mut out: Vec<String> = Vec::with_capacity(lines.len() + lines.len() / 4);

    for (i, line) in lines.iter().enumerate() {
        let prev = i.checked_sub(1).map(|p| lines[p]);
        let stripped = line.trim();

        match classify_line(line, prev, heuristics) {
            LineRole::Blank => push_separator(&mut out),
            LineRole::PageMarker => {
                push_separator(&mut out);
                out.push(stripped.to_string());
                out.push(String::new());
            }
            LineRole::Heading(level) => {
                push_separator(&mut out);
                out.push(format!("{} {}", level.marker(), stripped));
                out.push(String::new());
            }
            LineRole::Body => out.push(stripped.to_string()),
        }
    }

    out.join("\n")
}

/// Push a blank line unless output is empty or already ends in one.
fn push_separator(out: &mut Vec<String>) {
    if out.last().is_some_and(|l| !l.trim().is_empty()) {
        out.push(String::new());
    }
}
