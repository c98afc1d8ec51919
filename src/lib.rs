//! # wegleitung2md
//!
//! Turn the flat text extracted from the Kanton Zürich tax guide
//! ("Wegleitung zur Steuererklärung") into clean Markdown for retrieval and
//! indexing.
//!
//! ## Why this crate?
//!
//! PDF text extraction keeps the words but loses the document: form-field
//! numbers end up as rows of digits, arrow glyphs from form widgets become
//! lines of their own, page numbers float between paragraphs, and nothing
//! marks a heading any more. This crate strips the noise and guesses the
//! structure back from the shape of each line.
//!
//! ## Pipeline Overview
//!
//! ```text
//! TXT
//!  │
//!  ├─ 1. Input      read the whole file, normalise line endings
//!  ├─ 2. Clean      drop digit runs, form codes, glyphs; `## Seite N` markers
//!  ├─ 3. Structure  classify lines, emit `##` / `###` headings
//!  ├─ 4. Polish     dedup repeated headings, bold index letters (refined)
//!  ├─ 5. Assemble   fixed header + scraped table of contents
//!  └─ 6. Output     atomic write + line statistics
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use wegleitung2md::{convert, ConversionConfig};
//!
//! let config = ConversionConfig::default();
//! let output = convert("1234567 1234567\nWelcome Text.\n42\n", &config);
//! assert!(output.markdown.contains("## Seite 42"));
//! assert!(!output.markdown.contains("1234567"));
//! ```
//!
//! ## Profiles
//!
//! | Profile | Default | Description |
//! |---------|---------|-------------|
//! | `Refined` | on | Tighter heading rules, `###` subsections, post-processing, TOC |
//! | `Initial` | | Looser heading rules, `##` only, basic header |
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `wegleitung2md` binary (clap + anyhow + tracing-subscriber) |

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod convert;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod progress;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{
    ConversionConfig, ConversionConfigBuilder, DocumentHeader, Heuristics, Profile,
    DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_FILE,
};
pub use convert::{convert, convert_to_file};
pub use error::Wegleitung2MdError;
pub use output::{ConversionOutput, ConversionStats};
pub use progress::{ConversionProgressCallback, NoopProgressCallback, ProgressCallback, Stage};
