//! Compiled marker patterns used by every segmentation stage.
//!
//! A [`Marker`] can test a paragraph two ways. [`Marker::matches`] only
//! accepts a match starting at the first character of the paragraph; it is
//! what recognizes chapter headings, running headers and span bounds.
//! [`Marker::is_found`] accepts a match anywhere; slice bounds, references
//! and undesirables use it.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::config::MarkerConfig;
use crate::error::{BookError, Result};

/// Pattern matching any paragraph, newlines included.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static MATCH_ANYTHING: LazyLock<Marker> =
    LazyLock::new(|| Marker::new("(?s).*").expect("valid regex"));

/// Pattern matching no paragraph.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static MATCH_NOTHING: LazyLock<Marker> =
    LazyLock::new(|| Marker::new("a^").expect("valid regex"));

/// A compiled, Unicode-aware text pattern.
#[derive(Clone)]
pub struct Marker {
    regex: Regex,
}

impl Marker {
    /// Compile a pattern.
    ///
    /// # Errors
    /// Returns the regex compile error for an invalid pattern.
    ///
    /// # Examples
    /// ```
    /// use bookloader::markers::Marker;
    ///
    /// let marker = Marker::new(r"CHAPTER \d+").unwrap();
    /// assert!(marker.matches("CHAPTER 12"));
    /// assert!(!marker.matches("See CHAPTER 12"));
    /// assert!(marker.is_found("See CHAPTER 12"));
    /// ```
    pub fn new(pattern: &str) -> std::result::Result<Self, regex::Error> {
        Regex::new(pattern).map(Self::from)
    }

    /// A marker that matches every paragraph.
    #[must_use]
    pub fn anything() -> Self {
        MATCH_ANYTHING.clone()
    }

    /// A marker that matches no paragraph.
    #[must_use]
    pub fn nothing() -> Self {
        MATCH_NOTHING.clone()
    }

    /// Check whether the pattern matches at the start of `text`.
    ///
    /// The leftmost match starts at 0 whenever any match does.
    #[must_use]
    pub fn matches(&self, text: &str) -> bool {
        self.regex.find(text).is_some_and(|m| m.start() == 0)
    }

    /// Check whether the pattern matches anywhere in `text`.
    #[must_use]
    pub fn is_found(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// The source pattern.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

impl fmt::Debug for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Marker").field(&self.as_str()).finish()
    }
}

impl From<Regex> for Marker {
    fn from(regex: Regex) -> Self {
        Self { regex }
    }
}

/// Start and end markers of a bounded region.
#[derive(Debug, Clone)]
pub struct MarkerPair {
    pub start: Marker,
    pub end: Marker,
}

impl MarkerPair {
    /// Create a pair of markers.
    #[must_use]
    pub fn new(start: impl Into<Marker>, end: impl Into<Marker>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Check whether either bound is found in `text`.
    #[must_use]
    pub fn either_found(&self, text: &str) -> bool {
        self.start.is_found(text) || self.end.is_found(text)
    }
}

/// The full set of markers driving segmentation.
///
/// Only `chapter` is required; every other marker defaults to a value that
/// turns its stage into a no-op.
#[derive(Debug, Clone)]
pub struct MarkerSet {
    pub chapter: Marker,
    pub slice: MarkerPair,
    pub header: Marker,
    pub references: Marker,
    pub undesirables: Marker,
    pub na_span: MarkerPair,
}

impl MarkerSet {
    /// Create a marker set from a chapter marker, all others defaulted.
    #[must_use]
    pub fn new(chapter: impl Into<Marker>) -> Self {
        Self {
            chapter: chapter.into(),
            slice: MarkerPair::new(Marker::anything(), Marker::anything()),
            header: Marker::nothing(),
            references: Marker::nothing(),
            undesirables: Marker::nothing(),
            na_span: MarkerPair::new(Marker::nothing(), Marker::nothing()),
        }
    }

    /// Set the slice markers.
    #[must_use]
    pub fn with_slice(mut self, start: impl Into<Marker>, end: impl Into<Marker>) -> Self {
        self.slice = MarkerPair::new(start, end);
        self
    }

    /// Set the header marker.
    #[must_use]
    pub fn with_header(mut self, header: impl Into<Marker>) -> Self {
        self.header = header.into();
        self
    }

    /// Set the references marker.
    #[must_use]
    pub fn with_references(mut self, references: impl Into<Marker>) -> Self {
        self.references = references.into();
        self
    }

    /// Set the undesirables marker.
    #[must_use]
    pub fn with_undesirables(mut self, undesirables: impl Into<Marker>) -> Self {
        self.undesirables = undesirables.into();
        self
    }

    /// Set the non-applicable span markers.
    #[must_use]
    pub fn with_na_span(mut self, start: impl Into<Marker>, end: impl Into<Marker>) -> Self {
        self.na_span = MarkerPair::new(start, end);
        self
    }

    /// Compile a marker set from its configuration.
    ///
    /// # Errors
    /// Returns `BookError::MissingChapterMarker` when no chapter pattern is
    /// configured and `BookError::InvalidPattern` for a pattern that does not
    /// compile.
    pub fn from_config(config: &MarkerConfig) -> Result<Self> {
        let chapter = config
            .chapter
            .as_deref()
            .ok_or(BookError::MissingChapterMarker)?;
        let mut markers = Self::new(compile("chapter", chapter)?);

        if let Some([start, end]) = &config.slice {
            markers = markers.with_slice(compile("slice", start)?, compile("slice", end)?);
        }
        if let Some(header) = &config.header {
            markers = markers.with_header(compile("header", header)?);
        }
        if let Some(references) = &config.references {
            markers = markers.with_references(compile("references", references)?);
        }
        if let Some(undesirables) = &config.undesirables {
            markers = markers.with_undesirables(compile("undesirables", undesirables)?);
        }
        if let Some([start, end]) = &config.na_span {
            markers = markers.with_na_span(compile("na_span", start)?, compile("na_span", end)?);
        }

        Ok(markers)
    }
}

fn compile(marker: &str, pattern: &str) -> Result<Marker> {
    Marker::new(pattern).map_err(|source| BookError::InvalidPattern {
        marker: marker.to_string(),
        source,
    })
}
