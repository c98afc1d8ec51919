//! Assembly: front matter, optional table of contents, then the body.
//!
//! The header is a fixed template; only the constant metadata in
//! [`DocumentHeader`] is interpolated. The table of contents is scraped from
//! the body on a best-effort basis and may well come out empty.

use crate::config::{DocumentHeader, Heuristics};

/// Body text that opens the table of contents in the source document.
const TOC_MARKER: &str = "Inhalt";

/// Topic words that make a line after the marker a TOC item.
const TOC_KEYWORDS: [&str; 3] = ["Einkünfte", "Abzüge", "Vermögen"];

/// Render the fixed front-matter block.
pub fn render_header(header: &DocumentHeader) -> String {
    let DocumentHeader {
        title,
        canton,
        authority,
        tax_period,
        source,
        extended,
    } = header;

    let mut out = format!("# {title} {tax_period}\n## Kanton {canton} - {authority}\n\n");

    if *extended {
        // Two trailing spaces keep the blockquote lines apart when rendered.
        out.push_str(&format!(
            "> Dieses Dokument wurde aus der offiziellen Wegleitung des Kantons {canton} erstellt.  \n\
             > Steuerperiode: {tax_period}  \n\
             > Stand: {tax_period}  \n\
             > Quelle: {source}\n\n"
        ));
        out.push_str(&format!(
            "**Wichtiger Hinweis:** Dieses Dokument dient als Knowledge Base für RAG-Systeme. \
             Für offizielle Steuerfragen konsultieren Sie bitte die Originaldokumente oder \
             wenden Sie sich an das {authority}.\n"
        ));
    } else {
        out.push_str(&format!(
            "> Dieses Dokument wurde aus der offiziellen Wegleitung des Kantons {canton} erstellt.\n\
             > Steuerperiode: {tax_period}\n\
             > Stand: {tax_period}\n"
        ));
    }

    out.push_str("\n---\n\n");
    out
}

/// Scrape table-of-contents items from the structured body.
///
/// Once a line mentioning [`TOC_MARKER`] has been seen, every later non-blank,
/// non-heading line containing one of [`TOC_KEYWORDS`] becomes a bullet.
/// Scanning stops when more than `toc_scan_limit` items were collected and
/// at most `toc_emit_limit` are returned.
pub fn extract_toc(body: &str, heuristics: &Heuristics) -> Vec<String> {
    let mut entries = Vec::new();
    let mut in_toc = false;

    for line in body.split('\n') {
        if line.contains(TOC_MARKER) {
            in_toc = true;
        }
        if !in_toc || line.trim().is_empty() || line.starts_with('#') {
            continue;
        }
        if TOC_KEYWORDS.iter().any(|k| line.contains(k)) {
            entries.push(format!("- {line}"));
        }
        if entries.len() > heuristics.toc_scan_limit {
            break;
        }
    }

    entries.truncate(heuristics.toc_emit_limit);
    entries
}

/// Join header, the TOC section (when extracted) and the body.
pub fn assemble_document(header: &DocumentHeader, toc: Option<&[String]>, body: &str) -> String {
    let mut doc = render_header(header);

    if let Some(items) = toc {
        doc.push_str("## Inhaltsverzeichnis\n\n");
        if !items.is_empty() {
            doc.push_str(&items.join("\n"));
            doc.push_str("\n\n");
        }
        doc.push_str("---\n\n");
    }

    doc.push_str(body);
    ensure_final_newline(&doc)
}

fn ensure_final_newline(input: &str) -> String {
    let trimmed = input.trim_end();
    if trimmed.is_empty() {
        String::from("\n")
    } else {
        format!("{}\n", trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Profile;

    #[test]
    fn test_basic_header() {
        let header = DocumentHeader {
            extended: false,
            ..DocumentHeader::default()
        };
        let out = render_header(&header);
        assert!(out.starts_with("# Wegleitung zur Steuererklärung 2025\n## Kanton Zürich - Steueramt\n\n"));
        assert!(out.contains("> Steuerperiode: 2025\n> Stand: 2025\n\n---\n\n"));
        assert!(!out.contains("Quelle"));
        assert!(!out.contains("Wichtiger Hinweis"));
    }

    #[test]
    fn test_basic_header_exact_text() {
        let header = DocumentHeader::for_profile(Profile::Initial);
        assert_eq!(
            render_header(&header),
            "# Wegleitung zur Steuererklärung 2025\n\
             ## Kanton Zürich - Steueramt\n\
             \n\
             > Dieses Dokument wurde aus der offiziellen Wegleitung des Kantons Zürich erstellt.\n\
             > Steuerperiode: 2025\n\
             > Stand: 2025\n\
             \n\
             ---\n\
             \n"
        );
    }

    #[test]
    fn test_extended_header() {
        let out = render_header(&DocumentHeader::default());
        assert!(out.contains("> Steuerperiode: 2025  \n"));
        assert!(out.contains("> Quelle: Kantonales Steueramt Zürich\n\n**Wichtiger Hinweis:**"));
        assert!(out.contains("wenden Sie sich an das Steueramt."));
        assert!(out.ends_with("\n---\n\n"));
    }

    #[test]
    fn test_toc_requires_marker() {
        let body = "Einkünfte aus Arbeit\nAbzüge";
        assert!(extract_toc(body, &Heuristics::refined()).is_empty());
    }

    #[test]
    fn test_toc_collects_keyword_lines_after_marker() {
        let body = "Vorwort\n### Inhaltsverzeichnis\n\nEinkünfte aus Arbeit 5\nKinder 7\n### Abzüge\nAbzüge allgemein 9\nVermögen 11";
        let toc = extract_toc(body, &Heuristics::refined());
        assert_eq!(
            toc,
            vec![
                "- Einkünfte aus Arbeit 5",
                "- Abzüge allgemein 9",
                "- Vermögen 11"
            ]
        );
    }

    #[test]
    fn test_toc_is_capped() {
        let mut body = String::from("Inhalt\n");
        for i in 0..40 {
            body.push_str(&format!("Abzüge Nr. {i}\n"));
        }
        let toc = extract_toc(&body, &Heuristics::refined());
        assert_eq!(toc.len(), 15);
        assert_eq!(toc[0], "- Abzüge Nr. 0");
    }

    #[test]
    fn test_assemble_with_empty_toc() {
        let empty: Vec<String> = Vec::new();
        let out = assemble_document(&DocumentHeader::default(), Some(empty.as_slice()), "Text.");
        assert!(out.contains("## Inhaltsverzeichnis\n\n---\n\nText.\n"));
        assert!(!out.contains("\n\n\n"));
    }

    #[test]
    fn test_assemble_with_toc_items() {
        let items = vec!["- Einkünfte 5".to_string(), "- Abzüge 9".to_string()];
        let out = assemble_document(&DocumentHeader::default(), Some(items.as_slice()), "Text.");
        assert!(out.contains("## Inhaltsverzeichnis\n\n- Einkünfte 5\n- Abzüge 9\n\n---\n\nText.\n"));
    }

    #[test]
    fn test_assemble_without_toc() {
        let header = DocumentHeader {
            extended: false,
            ..DocumentHeader::default()
        };
        let out = assemble_document(&header, None, "Text.\n\n");
        assert!(out.ends_with("---\n\nText.\n"));
        assert!(!out.contains("Inhaltsverzeichnis"));
    }
}
