//! Pipeline stages for text-to-Markdown conversion.
//!
//! Each submodule implements exactly one transformation step. Every stage
//! except [`input`] is a pure `&str → String` function, so each is testable
//! on its own.
//!
//! ## Data Flow
//!
//! ```text
//! input ──▶ clean ──▶ structure ──▶ postprocess ──▶ assemble
//! (file)    (noise)   (headings)    (dedup/index)   (header/TOC)
//! ```
//!
//! 1. [`input`]       — read the source file, normalise line endings
//! 2. [`clean`]       — drop form-field digits, glyphs and field references;
//!    rewrite lone page numbers as `## Seite N`
//! 3. [`structure`]   — classify lines and emit `##`/`###` headings
//! 4. [`postprocess`] — drop repeated headings, bold the index letters
//!    (refined profile only)
//! 5. [`assemble`]    — prepend the fixed header and the scraped TOC

pub mod assemble;
pub mod clean;
pub mod input;
pub mod postprocess;
pub mod structure;
