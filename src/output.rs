//! Result types returned by the conversion entry points.

use crate::pipeline::structure::PAGE_MARKER_PREFIX;

/// The assembled Markdown plus run statistics.
#[derive(Debug, Clone, Default)]
pub struct ConversionOutput {
    /// Final Markdown document: header, optional TOC and structured body.
    pub markdown: String,
    pub stats: ConversionStats,
}

/// Counters reported after a conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionStats {
    /// Lines in the source text.
    pub input_lines: usize,
    /// Lines in the assembled Markdown, header included.
    pub output_lines: usize,
    /// `##`/`###` headings in the body, page markers excluded.
    pub headings: usize,
    /// `## Seite N` lines in the body.
    pub page_markers: usize,
    /// `**X**` index markers in the body.
    pub index_entries: usize,
    /// Bullet items in the extracted table of contents.
    pub toc_entries: usize,
    pub duration_ms: u64,
}

impl ConversionStats {
    /// Count the structural roles present in a finished Markdown body.
    pub(crate) fn tally_body(&mut self, body: &str) {
        for line in body.lines() {
            if line.starts_with(PAGE_MARKER_PREFIX) {
                self.page_markers += 1;
            } else if line.starts_with("## ") || line.starts_with("### ") {
                self.headings += 1;
            } else if is_index_marker(line) {
                self.index_entries += 1;
            }
        }
    }
}

fn is_index_marker(line: &str) -> bool {
    let bytes = line.as_bytes();
    bytes.len() == 5 && line.starts_with("**") && line.ends_with("**") && bytes[2].is_ascii_uppercase()
}
