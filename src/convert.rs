//! Conversion entry points.
//!
//! [`convert`] runs the in-memory pipeline on text the caller already holds.
//! [`convert_to_file`] adds the file I/O around it: read the source, convert,
//! then write the Markdown atomically.

use crate::config::ConversionConfig;
use crate::error::Wegleitung2MdError;
use crate::output::{ConversionOutput, ConversionStats};
use crate::pipeline::{assemble, clean, input, postprocess, structure};
use crate::progress::Stage;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Convert extracted Wegleitung text to Markdown.
///
/// Never fails: lines that match no rule end up as body text.
pub fn convert(text: impl AsRef<str>, config: &ConversionConfig) -> ConversionOutput {
    let start = Instant::now();
    let text = text.as_ref();
    let heuristics = &config.heuristics;
    info!("Starting conversion ({} profile)", config.profile);

    // ── Step 1: Strip extraction artifacts ───────────────────────────────
    report_stage(config, Stage::Cleaning);
    let cleaned = clean::clean_text(text, heuristics);
    debug!("Cleaned text has {} lines", cleaned.lines().count());

    // ── Step 2: Headings and page markers ────────────────────────────────
    report_stage(config, Stage::Structuring);
    let mut body = structure::structure_markdown(&cleaned, heuristics);

    // ── Step 3: Dedup headings, index letters ────────────────────────────
    if heuristics.post_process {
        report_stage(config, Stage::PostProcessing);
        body = postprocess::post_process_markdown(&body, heuristics);
    }

    // ── Step 4: Header and table of contents ─────────────────────────────
    report_stage(config, Stage::Assembling);
    let toc = heuristics
        .extract_toc
        .then(|| assemble::extract_toc(&body, heuristics));
    let markdown = assemble::assemble_document(&config.header, toc.as_deref(), &body);

    let mut stats = ConversionStats {
        input_lines: text.lines().count(),
        output_lines: markdown.lines().count(),
        toc_entries: toc.as_ref().map_or(0, Vec::len),
        ..ConversionStats::default()
    };
    stats.tally_body(&body);
    stats.duration_ms = start.elapsed().as_millis() as u64;

    info!(
        "Conversion complete: {} → {} lines, {} headings, {} page markers, {} index entries, {} TOC entries",
        stats.input_lines,
        stats.output_lines,
        stats.headings,
        stats.page_markers,
        stats.index_entries,
        stats.toc_entries
    );

    ConversionOutput { markdown, stats }
}

/// Read `input_path`, convert it and write the Markdown to `output_path`.
///
/// Uses atomic write (temp file + rename) to prevent partial files. A
/// missing or unreadable input fails before the output path is touched.
pub fn convert_to_file(
    input_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    config: &ConversionConfig,
) -> Result<ConversionStats, Wegleitung2MdError> {
    let input_path = input_path.as_ref();
    let path = output_path.as_ref();

    report_stage(config, Stage::Reading);
    let text = input::read_document(input_path)?;

    let output = convert(&text, config);

    report_stage(config, Stage::Writing);
    write_atomic(path, &output.markdown)?;
    info!("Wrote {} bytes to {}", output.markdown.len(), path.display());

    if let Some(ref cb) = config.progress_callback {
        cb.on_conversion_complete(&output.stats);
    }

    Ok(output.stats)
}

fn write_atomic(path: &Path, contents: &str) -> Result<(), Wegleitung2MdError> {
    let write_failed = |source| Wegleitung2MdError::OutputWriteFailed {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(write_failed)?;
    }

    let tmp_path = path.with_extension("md.tmp");
    std::fs::write(&tmp_path, contents).map_err(write_failed)?;
    if let Err(e) = std::fs::rename(&tmp_path, path) {
        if let Err(cleanup) = std::fs::remove_file(&tmp_path) {
            warn!("Could not remove {}: {}", tmp_path.display(), cleanup);
        }
        return Err(write_failed(e));
    }
    Ok(())
}

fn report_stage(config: &ConversionConfig, stage: Stage) {
    debug!("Stage: {}", stage);
    if let Some(ref cb) = config.progress_callback {
        cb.on_stage_start(stage);
    }
}
