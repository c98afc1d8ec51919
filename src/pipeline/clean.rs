//! Artifact cleaning: strip PDF-extraction noise from the flat source text.
//!
//! Text pulled out of the cantonal PDF carries leftovers of its form layer:
//! rows of field numbers, whitelisted field codes such as `13213211`, arrow
//! glyphs from the form widgets and 13-digit field references glued to the
//! end of real sentences. Page numbers survive as lone short numbers and are
//! the only digits worth keeping.
//!
//! Each line is judged on its own ([`classify_line`]); the only cross-line
//! state is whether the last kept line was blank.
//!
//! ## Rule Order
//!
//! First match wins, evaluated on the trimmed line:
//! 1. Form-field code whitelist → dropped
//! 2. Whitespace-separated digit groups → page marker, kept number, or dropped
//! 3. Decorative glyphs only → dropped
//! 4. Anything else → trailing form reference stripped, kept (possibly blank)
//!
//! The whitelist runs before the digit-group rule because every code is also
//! a digit group, and a short code like `111` must not survive as a number.

use crate::config::Heuristics;
use crate::pipeline::structure::PAGE_MARKER_PREFIX;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

static RE_FORM_CODES: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?:13213211|113211|3213211|13211|3211|111)(?:\s+(?:13213211|113211|3213211|13211|3211|111))*$",
    )
    .unwrap()
});

static RE_DIGIT_GROUPS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{1,10}(?:\s+[0-9]{1,10})*$").unwrap());

static RE_GLYPHS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[▲▼◀▸▾▴\s]+$").unwrap());

static RE_FORM_REFERENCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+0\d{12}$").unwrap());

static RE_BLANK_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());

/// The cleaner's decision for a single input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineVerdict<'a> {
    /// Extraction artifact; the line disappears.
    Noise,
    /// A lone page number, rewritten as `## Seite N`.
    PageNumber(&'a str),
    /// Empty after trimming.
    Blank,
    /// Content to keep, trimmed and without a trailing form reference.
    Keep(&'a str),
}

/// Decide what happens to one line of the source text.
pub fn classify_line<'a>(line: &'a str, heuristics: &Heuristics) -> LineVerdict<'a> {
    let stripped = line.trim();

    if RE_FORM_CODES.is_match(stripped) {
        return LineVerdict::Noise;
    }

    if RE_DIGIT_GROUPS.is_match(stripped) {
        let single_number = stripped.bytes().all(|b| b.is_ascii_digit());
        return if single_number && stripped.len() <= heuristics.page_marker_max_digits {
            LineVerdict::PageNumber(stripped)
        } else if single_number && stripped.len() <= heuristics.standalone_number_max_len {
            LineVerdict::Keep(stripped)
        } else {
            LineVerdict::Noise
        };
    }

    if RE_GLYPHS.is_match(stripped) {
        return LineVerdict::Noise;
    }

    let kept = strip_form_reference(line.trim_end()).trim();
    if kept.is_empty() {
        LineVerdict::Blank
    } else {
        LineVerdict::Keep(kept)
    }
}

/// Remove a trailing whitespace-prefixed `0` + 12 digits field reference.
pub fn strip_form_reference(line: &str) -> &str {
    match RE_FORM_REFERENCE.find(line) {
        Some(m) => &line[..m.start()],
        None => line,
    }
}

/// Clean the whole document.
///
/// Blank lines are kept only directly after content, never at the start,
/// and the joined text never contains more than one blank line in a row.
pub fn clean_text(text: &str, heuristics: &Heuristics) -> String {
    let mut cleaned: Vec<String> = Vec::new();
    let mut noise = 0usize;
    let mut pages = 0usize;

    for line in text.split('\n') {
        match classify_line(line, heuristics) {
            LineVerdict::Noise => noise += 1,
            LineVerdict::PageNumber(number) => {
                pages += 1;
                if !cleaned.is_empty() {
                    cleaned.push(String::new());
                }
                cleaned.push(format!("{PAGE_MARKER_PREFIX}{number}"));
                cleaned.push(String::new());
            }
            LineVerdict::Blank => {
                if cleaned.last().is_some_and(|l| !l.trim().is_empty()) {
                    cleaned.push(String::new());
                }
            }
            LineVerdict::Keep(content) => cleaned.push(content.to_string()),
        }
    }

    debug!("Cleaner dropped {} noise lines, found {} page numbers", noise, pages);
    collapse_blank_lines(&cleaned.join("\n"))
}

fn collapse_blank_lines(input: &str) -> String {
    RE_BLANK_RUNS.replace_all(input, "\n\n").into_owned()
}

// ── Tests ────────────────────────────────────────────────────────────────────
