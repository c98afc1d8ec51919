//! Configuration types for the Wegleitung-to-Markdown conversion.
//!
//! All conversion behaviour is controlled through [`ConversionConfig`], built
//! via its [`ConversionConfigBuilder`]. The heuristic thresholds were tuned
//! against one source document, so they live in [`Heuristics`] as plain data
//! instead of being hard-coded in the pipeline stages. A [`Profile`] picks a
//! consistent preset of those thresholds.

use crate::error::Wegleitung2MdError;
use crate::progress::ProgressCallback;
use std::fmt;

/// Default input file: the flat text extracted from the cantonal PDF.
pub const DEFAULT_INPUT_FILE: &str = "Kanton Zürich.txt";

/// Default output file for the assembled Markdown.
pub const DEFAULT_OUTPUT_FILE: &str = "Kanton_Zuerich_Wegleitung_2025.md";

/// Configuration for a text-to-Markdown conversion.
///
/// Built via [`ConversionConfig::builder()`] or using
/// [`ConversionConfig::default()`] (refined profile, Zürich 2025 header).
///
/// # Example
/// ```rust
/// use wegleitung2md::{ConversionConfig, Profile};
///
/// let config = ConversionConfig::builder()
///     .profile(Profile::Initial)
///     .tax_period(2024)
///     .build()
///     .unwrap();
/// assert_eq!(config.heuristics.heading_max_len, 100);
/// ```
#[derive(Clone)]
pub struct ConversionConfig {
    /// Which pipeline variant the heuristics were preset from. Default: Refined.
    pub profile: Profile,

    /// Thresholds and switches used by the cleaning, structuring and
    /// post-processing stages.
    pub heuristics: Heuristics,

    /// Constant metadata interpolated into the document header.
    pub header: DocumentHeader,

    /// Optional progress callback, invoked once per pipeline stage.
    pub progress_callback: Option<ProgressCallback>,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        let profile = Profile::default();
        Self {
            profile,
            heuristics: profile.heuristics(),
            header: DocumentHeader::for_profile(profile),
            progress_callback: None,
        }
    }
}

impl fmt::Debug for ConversionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConversionConfig")
            .field("profile", &self.profile)
            .field("heuristics", &self.heuristics)
            .field("header", &self.header)
            .field(
                "progress_callback",
                &self
                    .progress_callback
                    .as_ref()
                    .map(|_| "<dyn ConversionProgressCallback>"),
            )
            .finish()
    }
}

impl ConversionConfig {
    /// Create a new builder for `ConversionConfig`.
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`ConversionConfig`].
#[derive(Debug)]
pub struct ConversionConfigBuilder {
    config: ConversionConfig,
}

impl ConversionConfigBuilder {
    /// Select a profile. Resets the heuristics and the header style to the
    /// profile's preset, so call this before any fine-grained setter.
    pub fn profile(mut self, profile: Profile) -> Self {
        self.config.profile = profile;
        self.config.heuristics = profile.heuristics();
        self.config.header.extended = profile == Profile::Refined;
        self
    }

    /// Replace the heuristics wholesale, e.g. a preset with a tweaked field.
    pub fn heuristics(mut self, heuristics: Heuristics) -> Self {
        self.config.heuristics = heuristics;
        self
    }

    /// Replace the whole front-matter metadata.
    pub fn header(mut self, header: DocumentHeader) -> Self {
        self.config.header = header;
        self
    }

    /// Document title; the tax period is appended when rendered.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.config.header.title = title.into();
        self
    }

    pub fn canton(mut self, canton: impl Into<String>) -> Self {
        self.config.header.canton = canton.into();
        self
    }

    pub fn tax_period(mut self, year: u16) -> Self {
        self.config.header.tax_period = year;
        self
    }

    pub fn progress_callback(mut self, cb: ProgressCallback) -> Self {
        self.config.progress_callback = Some(cb);
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<ConversionConfig, Wegleitung2MdError> {
        let h = &self.config.heuristics;
        if h.heading_max_len == 0 {
            return Err(Wegleitung2MdError::InvalidConfig(
                "heading_max_len must be ≥ 1".into(),
            ));
        }
        if h.page_marker_max_digits > h.standalone_number_max_len {
            return Err(Wegleitung2MdError::InvalidConfig(format!(
                "page_marker_max_digits ({}) exceeds standalone_number_max_len ({})",
                h.page_marker_max_digits, h.standalone_number_max_len
            )));
        }
        if h.extract_toc && h.toc_emit_limit == 0 {
            return Err(Wegleitung2MdError::InvalidConfig(
                "toc_emit_limit must be ≥ 1 when TOC extraction is enabled".into(),
            ));
        }
        if self.config.header.title.trim().is_empty() {
            return Err(Wegleitung2MdError::InvalidConfig(
                "document title must not be empty".into(),
            ));
        }
        Ok(self.config)
    }
}

// ── Enums ────────────────────────────────────────────────────────────────

/// The two historical variants of the pipeline.
///
/// | Profile | Behaviour |
/// |---------|-----------|
/// | Initial | Looser headings (< 100 chars), all headings `##`, numbers up to 4 digits kept, no post-processing |
/// | Refined | Tighter headings, `###` subsections, index entries excluded, heading dedup, index letters, TOC (default) |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Profile {
    Initial,
    #[default]
    Refined,
}

impl Profile {
    /// The heuristic preset for this profile.
    pub fn heuristics(self) -> Heuristics {
        match self {
            Profile::Initial => Heuristics::initial(),
            Profile::Refined => Heuristics::refined(),
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Profile::Initial => f.write_str("initial"),
            Profile::Refined => f.write_str("refined"),
        }
    }
}

/// Empirically tuned thresholds for the line heuristics.
///
/// Lengths are counted in characters, not bytes, so umlauts count once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heuristics {
    /// A standalone number with at most this many digits is a page number
    /// and becomes `## Seite N`.
    pub page_marker_max_digits: usize,
    /// A standalone number with at most this many digits survives cleaning;
    /// longer digit runs are form-field noise.
    pub standalone_number_max_len: usize,
    /// Heading candidates must be shorter than this.
    pub heading_max_len: usize,
    /// Un-numbered (capitalised) headings must be shorter than this.
    pub capitalized_heading_max_len: usize,
    /// None of the last N characters of a capitalised heading may be a digit.
    pub trailing_digit_window: usize,
    /// Emit capitalised headings as `###` instead of `##`.
    pub subsection_headings: bool,
    /// Demote a capitalised heading when the preceding line is a sentence
    /// fragment (non-blank, not ending in `.`).
    pub guard_mid_sentence: bool,
    /// Never promote single letters, bare page numbers or `Begriff 12`
    /// index lines to headings.
    pub exclude_index_entries: bool,
    /// Lines ending in a 1–2 digit page reference are index entries when
    /// shorter than this.
    pub index_entry_max_len: usize,
    /// Run the heading-dedup / index-letter pass.
    pub post_process: bool,
    /// Single-letter lines are index markers only within this many lines.
    pub index_letter_line_limit: usize,
    /// Extract a table of contents into the header.
    pub extract_toc: bool,
    /// Stop collecting TOC items once more than this many were found.
    pub toc_scan_limit: usize,
    /// Emit at most this many TOC items.
    pub toc_emit_limit: usize,
}

impl Heuristics {
    /// Preset of the first pipeline version.
    pub fn initial() -> Self {
        Self {
            page_marker_max_digits: 2,
            standalone_number_max_len: 4,
            heading_max_len: 100,
            capitalized_heading_max_len: 80,
            trailing_digit_window: 5,
            subsection_headings: false,
            guard_mid_sentence: false,
            exclude_index_entries: false,
            index_entry_max_len: 60,
            post_process: false,
            index_letter_line_limit: 300,
            extract_toc: false,
            toc_scan_limit: 20,
            toc_emit_limit: 15,
        }
    }

    /// Preset of the refined pipeline version.
    pub fn refined() -> Self {
        Self {
            standalone_number_max_len: 2,
            heading_max_len: 80,
            trailing_digit_window: 10,
            subsection_headings: true,
            guard_mid_sentence: true,
            exclude_index_entries: true,
            post_process: true,
            extract_toc: true,
            ..Self::initial()
        }
    }
}

impl Default for Heuristics {
    fn default() -> Self {
        Self::refined()
    }
}

/// Constant metadata for the front-matter block. Never derived from input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentHeader {
    pub title: String,
    pub canton: String,
    pub authority: String,
    pub tax_period: u16,
    pub source: String,
    /// Render the source line, the disclaimer and the TOC section.
    pub extended: bool,
}

impl DocumentHeader {
    pub fn for_profile(profile: Profile) -> Self {
        Self {
            extended: profile == Profile::Refined,
            ..Self::default()
        }
    }
}

impl Default for DocumentHeader {
    fn default() -> Self {
        Self {
            title: "Wegleitung zur Steuererklärung".to_string(),
            canton: "Zürich".to_string(),
            authority: "Steueramt".to_string(),
            tax_period: 2025,
            source: "Kantonales Steueramt Zürich".to_string(),
            extended: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_refined() {
        let config = ConversionConfig::default();
        assert_eq!(config.profile, Profile::Refined);
        assert_eq!(config.heuristics, Heuristics::refined());
        assert!(config.header.extended);
    }

    #[test]
    fn initial_profile_preset() {
        let config = ConversionConfig::builder()
            .profile(Profile::Initial)
            .build()
            .unwrap();
        assert_eq!(config.heuristics.heading_max_len, 100);
        assert_eq!(config.heuristics.standalone_number_max_len, 4);
        assert!(!config.heuristics.post_process);
        assert!(!config.header.extended);
    }

    #[test]
    fn refined_differs_only_in_tuned_fields() {
        let initial = Heuristics::initial();
        let refined = Heuristics::refined();
        assert_eq!(initial.page_marker_max_digits, refined.page_marker_max_digits);
        assert_eq!(initial.capitalized_heading_max_len, 80);
        assert_eq!(refined.heading_max_len, 80);
        assert_eq!(refined.trailing_digit_window, 10);
    }

    #[test]
    fn rejects_zero_heading_length() {
        let h = Heuristics {
            heading_max_len: 0,
            ..Heuristics::refined()
        };
        let err = ConversionConfig::builder().heuristics(h).build().unwrap_err();
        assert!(matches!(err, Wegleitung2MdError::InvalidConfig(_)));
    }

    #[test]
    fn rejects_page_marker_longer_than_kept_numbers() {
        let h = Heuristics {
            page_marker_max_digits: 3,
            ..Heuristics::refined()
        };
        assert!(ConversionConfig::builder().heuristics(h).build().is_err());
    }

    #[test]
    fn header_setters() {
        let config = ConversionConfig::builder()
            .canton("Bern")
            .tax_period(2024)
            .build()
            .unwrap();
        assert_eq!(config.header.canton, "Bern");
        assert_eq!(config.header.tax_period, 2024);
    }

    #[test]
    fn header_and_title_setters() {
        let header = DocumentHeader {
            canton: "Luzern".to_string(),
            authority: "Dienststelle Steuern".to_string(),
            extended: false,
            ..DocumentHeader::default()
        };
        let config = ConversionConfig::builder()
            .header(header)
            .title("Anleitung zur Steuererklärung")
            .build()
            .unwrap();
        assert_eq!(config.header.title, "Anleitung zur Steuererklärung");
        assert_eq!(config.header.canton, "Luzern");
        assert_eq!(config.header.authority, "Dienststelle Steuern");
        assert!(!config.header.extended);
    }

    #[test]
    fn rejects_blank_title() {
        let err = ConversionConfig::builder().title("  ").build().unwrap_err();
        assert!(matches!(err, Wegleitung2MdError::InvalidConfig(_)));
    }

    #[test]
    fn profile_display() {
        assert_eq!(Profile::Initial.to_string(), "initial");
        assert_eq!(Profile::Refined.to_string(), "refined");
    }
}
