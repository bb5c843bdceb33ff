//! Configuration loading and constants for the book loader.
//!
//! The configuration descriptor is a JSON object:
//!
//! ```json
//! {
//!   "doc_path": "book.docx",
//!   "markers": {
//!     "chapter": "^CHAPTER \\d+",
//!     "slice": ["^Prologue", "^Epilogue"],
//!     "header": "^The Book Title$",
//!     "references": "^\\[\\d+\\]",
//!     "undesirables": "^Page \\d+$",
//!     "na_span": ["^Notes$", "^End of notes$"]
//!   }
//! }
//! ```
//!
//! Only `chapter` is required. Unknown keys are rejected.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{BookError, Result};

/// Configuration file looked up when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "parameters.json";

/// Path of the main document part inside a `.docx` container.
pub const DOCUMENT_PART: &str = "word/document.xml";

/// Text wrap width for CLI output.
pub const TEXT_WRAP_WIDTH: usize = 100;

/// Marker patterns as written in the configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MarkerConfig {
    /// Chapter boundary pattern (required).
    pub chapter: Option<String>,

    /// Start and end patterns of the slice to keep.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slice: Option<[String; 2]>,

    /// Running header pattern, deduplicated when repeated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,

    /// Reference paragraph pattern, removed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub references: Option<String>,

    /// Undesirable paragraph pattern, removed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub undesirables: Option<String>,

    /// Start and end patterns of non-applicable spans.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub na_span: Option<[String; 2]>,
}

impl MarkerConfig {
    /// Create a marker configuration with only a chapter pattern.
    #[must_use]
    pub fn with_chapter(pattern: impl Into<String>) -> Self {
        Self {
            chapter: Some(pattern.into()),
            ..Self::default()
        }
    }
}

/// The loader configuration: where the document is and how to segment it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoaderConfig {
    /// Path of the document to extract.
    pub doc_path: PathBuf,

    /// Marker patterns.
    pub markers: MarkerConfig,
}

impl LoaderConfig {
    /// Parse a configuration from JSON text.
    ///
    /// # Errors
    /// Returns `BookError::Config` on malformed JSON, unknown keys or
    /// wrongly shaped marker pairs, and `BookError::MissingChapterMarker`
    /// when no chapter pattern is given.
    ///
    /// # Examples
    /// ```
    /// use bookloader::config::LoaderConfig;
    ///
    /// let config = LoaderConfig::from_json(
    ///     r#"{"doc_path": "book.docx", "markers": {"chapter": "^CHAPTER"}}"#,
    /// ).unwrap();
    /// assert_eq!(config.markers.chapter.as_deref(), Some("^CHAPTER"));
    ///
    /// assert!(LoaderConfig::from_json(r#"{"doc_path": "book.docx", "markers": {}}"#).is_err());
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).map_err(BookError::Config)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the invariants serde cannot express.
    ///
    /// # Errors
    /// Returns `BookError::MissingChapterMarker` when no chapter pattern is set.
    pub fn validate(&self) -> Result<()> {
        if self.markers.chapter.is_none() {
            return Err(BookError::MissingChapterMarker);
        }
        Ok(())
    }

    /// Resolve a relative document path against a base directory.
    #[must_use]
    pub fn resolve_doc_path(mut self, base_dir: &Path) -> Self {
        if self.doc_path.is_relative() {
            self.doc_path = base_dir.join(&self.doc_path);
        }
        self
    }
}

/// Load the configuration descriptor from disk.
///
/// A relative `doc_path` is resolved against the directory holding the
/// configuration file.
///
/// # Errors
/// Returns `BookError::Io` if the file cannot be read, or any error of
/// [`LoaderConfig::from_json`].
pub fn load_config(path: impl AsRef<Path>) -> Result<LoaderConfig> {
    let path = path.as_ref();
    let json = fs::read_to_string(path)?;
    let config = LoaderConfig::from_json(&json)?;

    let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
    Ok(config.resolve_doc_path(base_dir))
}
