//! Error types for the wegleitung2md library.
//!
//! Only file I/O can fail. The text pipeline itself is total: every input
//! line falls through to some role, so cleaning and structuring never return
//! an error. [`Wegleitung2MdError`] therefore covers reading the source text,
//! writing the Markdown, and rejecting an inconsistent configuration.

use std::path::PathBuf;
use thiserror::Error;

/// All fatal errors returned by the wegleitung2md library.
#[derive(Debug, Error)]
pub enum Wegleitung2MdError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// Input file was not found at the given path.
    #[error("Input file not found: '{path}'\nCheck the path exists and is readable.")]
    FileNotFound { path: PathBuf },

    /// Process does not have read permission on the file.
    #[error("Permission denied reading '{path}'\nTry: chmod +r {path:?}")]
    PermissionDenied { path: PathBuf },

    /// The file exists but could not be read as UTF-8 text.
    #[error("Failed to read input file '{path}': {source}")]
    InputReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── I/O errors ────────────────────────────────────────────────────────
    /// Could not create or write the output Markdown file.
    #[error("Failed to write output file '{path}': {source}")]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
