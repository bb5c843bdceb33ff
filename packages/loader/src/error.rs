//! Error types for the book loader.
//!
//! `BookError` covers configuration, document structure, range
//! preconditions and the container reader. Reader failures are propagated
//! as-is; the only tolerated irregularity is an unknown element, which is
//! reported by the parse engine and skipped by its callers.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the book loader library.
#[derive(Debug, Error)]
pub enum BookError {
    /// The configuration has no `chapter` marker.
    #[error("Missing required 'chapter' marker in configuration")]
    MissingChapterMarker,

    /// A marker pattern failed to compile.
    #[error("Invalid pattern for marker '{marker}': {source}")]
    InvalidPattern {
        marker: String,
        #[source]
        source: regex::Error,
    },

    /// The configuration descriptor is malformed or has unknown keys.
    #[error("Invalid configuration: {0}")]
    Config(#[source] serde_json::Error),

    /// A running-text node did not hold exactly one text value.
    #[error("Exactly one text value expected in paragraph, found {found}")]
    InvalidParagraph { found: usize },

    /// The document path does not exist.
    #[error("Document not found: {}", .0.display())]
    DocumentNotFound(PathBuf),

    /// The requested chapter range is inverted.
    #[error("Invalid chapter range: last ({last}) must not be before first ({first})")]
    InvalidRange { first: usize, last: usize },

    /// The requested chapter range runs past the last chapter.
    #[error("Chapter {last} out of range: document has {available} chapters")]
    ChapterOutOfRange { last: usize, available: usize },

    /// A required part is missing from the document container.
    #[error("Missing part '{part}' in document container")]
    MissingPart { part: String },

    /// XML parsing failed.
    #[error("XML parsing failed: {0}")]
    XmlParse(#[from] roxmltree::Error),

    /// Unknown XML element encountered.
    #[error("No handler for element <{tag_name}>{}", .context.as_ref().map(|c| format!(" in {c}")).unwrap_or_default())]
    UnknownElement {
        tag_name: String,
        context: Option<String>,
    },

    /// The document container is not a readable ZIP archive.
    #[error("Container error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed.
    #[error("JSON serialization failed: {0}")]
    Json(#[source] serde_json::Error),

    /// YAML serialization failed.
    #[error("YAML serialization failed: {0}")]
    YamlSerialization(#[from] serde_yaml_ng::Error),
}

impl BookError {
    /// Whether this error stems from the configuration rather than the document.
    #[must_use]
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Self::MissingChapterMarker | Self::InvalidPattern { .. } | Self::Config(_)
        )
    }

    /// Whether this error is a violated precondition of a public operation.
    #[must_use]
    pub fn is_precondition_error(&self) -> bool {
        matches!(self, Self::DocumentNotFound(_) | Self::InvalidRange { .. })
    }
}

/// Result type alias for book loader operations.
pub type Result<T> = std::result::Result<T, BookError>;
