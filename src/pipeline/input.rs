//! Loader: read the extracted source text into memory.
//!
//! The whole document is held as one string for the rest of the run. Line
//! endings are normalised to `\n` here so that every later stage can split
//! on a single character, and a leading byte-order mark is dropped so the
//! first line is judged like any other.

use crate::error::Wegleitung2MdError;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

/// Read the input document, mapping I/O failures onto the library errors.
///
/// Fails before anything is written, so a missing input never produces a
/// partial output file.
pub fn read_document(path: &Path) -> Result<String, Wegleitung2MdError> {
    let raw = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => Wegleitung2MdError::FileNotFound {
            path: path.to_path_buf(),
        },
        ErrorKind::PermissionDenied => Wegleitung2MdError::PermissionDenied {
            path: path.to_path_buf(),
        },
        _ => Wegleitung2MdError::InputReadFailed {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    debug!("Read {} bytes from {}", raw.len(), path.display());
    Ok(normalise_source(&raw))
}

/// Drop a leading UTF-8 byte-order mark and normalise line endings.
pub fn normalise_source(input: &str) -> String {
    normalise_line_endings(input.strip_prefix('\u{FEFF}').unwrap_or(input))
}

/// CRLF and bare CR both become LF.
pub fn normalise_line_endings(input: &str) -> String {
    if !input.contains('\r') {
        return input.to_string();
    }
    input.replace("\r\n", "\n").replace('\r', "\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_normalise_line_endings() {
        assert_eq!(normalise_line_endings("a\r\nb\rc"), "a\nb\nc");
        assert_eq!(normalise_line_endings("plain\n"), "plain\n");
    }

    #[test]
    fn test_normalise_source_strips_bom() {
        assert_eq!(normalise_source("\u{FEFF}13213211\r\nText."), "13213211\nText.");
        // Only a leading mark is a BOM.
        assert_eq!(normalise_source("a\u{FEFF}b"), "a\u{FEFF}b");
    }

    #[test]
    fn test_reads_file_with_bom() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        tmp.write_all(b"\xEF\xBB\xBF13213211\nText.").unwrap();
        let text = read_document(tmp.path()).unwrap();
        assert_eq!(text, "13213211\nText.");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fehlt.txt");
        let err = read_document(&path).unwrap_err();
        assert!(matches!(err, Wegleitung2MdError::FileNotFound { .. }));
    }

    #[test]
    fn test_reads_utf8_with_umlauts() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        tmp.write_all("Einkünfte\r\nAbzüge\r\n".as_bytes()).unwrap();
        let text = read_document(tmp.path()).unwrap();
        assert_eq!(text, "Einkünfte\nAbzüge\n");
    }

    #[test]
    fn test_invalid_utf8_is_read_error() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        tmp.write_all(&[0x66, 0xff, 0xfe, 0x0a]).unwrap();
        let err = read_document(tmp.path()).unwrap_err();
        assert!(matches!(err, Wegleitung2MdError::InputReadFailed { .. }));
    }
}
