//! The segmentation stages.

use std::sync::LazyLock;

use regex::Regex;

use super::stage::Stage;
use crate::markers::{Marker, MarkerPair};

/// A word fragment, a hyphen, one whitespace character and another fragment.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static BISECTION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\w+)-\s(\w+)").expect("valid regex"));

/// Trims paragraphs at both ends of the stream until one is found by
/// either slice marker.
///
/// The first and last such paragraphs are kept. A stream in which neither
/// marker is found anywhere is trimmed to nothing.
#[derive(Debug, Clone)]
pub struct SliceTrim {
    bounds: MarkerPair,
}

impl SliceTrim {
    #[must_use]
    pub fn new(bounds: MarkerPair) -> Self {
        Self { bounds }
    }
}

impl Stage for SliceTrim {
    fn name(&self) -> &'static str {
        "slice"
    }

    fn apply(&self, mut paragraphs: Vec<String>) -> Vec<String> {
        let in_slice = |p: &String| self.bounds.either_found(p);

        let Some(first) = paragraphs.iter().position(in_slice) else {
            return Vec::new();
        };
        let last = paragraphs.iter().rposition(in_slice).unwrap_or(first);

        paragraphs.truncate(last + 1);
        paragraphs.drain(..first);
        paragraphs
    }
}

/// Drops a header paragraph identical to the paragraph kept just before it.
///
/// Only adjacent repeats collapse; paragraphs the header marker does not
/// match are never dropped.
#[derive(Debug, Clone)]
pub struct HeaderDedup {
    header: Marker,
}

impl HeaderDedup {
    #[must_use]
    pub fn new(header: Marker) -> Self {
        Self { header }
    }
}

impl Stage for HeaderDedup {
    fn name(&self) -> &'static str {
        "header"
    }

    fn apply(&self, paragraphs: Vec<String>) -> Vec<String> {
        let mut kept: Vec<String> = Vec::with_capacity(paragraphs.len());
        for paragraph in paragraphs {
            let repeated = kept.last() == Some(&paragraph);
            if repeated && self.header.matches(&paragraph) {
                continue;
            }
            kept.push(paragraph);
        }
        kept
    }
}

/// Tracks whether the stream is currently inside a non-applicable span.
///
/// Single-consumer: feed every paragraph, in order, to [`SpanValidator::next`].
#[derive(Debug)]
pub struct SpanValidator<'a> {
    bounds: &'a MarkerPair,
    valid: bool,
}

impl<'a> SpanValidator<'a> {
    #[must_use]
    pub fn new(bounds: &'a MarkerPair) -> Self {
        Self {
            bounds,
            valid: true,
        }
    }

    /// Advance over one paragraph and report whether it is kept.
    ///
    /// The paragraph opening a span is dropped along with everything up to
    /// the closing paragraph, which is kept.
    pub fn next(&mut self, paragraph: &str) -> bool {
        if self.valid && self.bounds.start.matches(paragraph) {
            self.valid = false;
        } else if !self.valid && self.bounds.end.matches(paragraph) {
            self.valid = true;
        }
        self.valid
    }

    /// Whether the stream is currently outside any span.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.valid
    }
}

/// Drops the paragraphs of non-applicable spans.
#[derive(Debug, Clone)]
pub struct SpanFilter {
    bounds: MarkerPair,
}

impl SpanFilter {
    #[must_use]
    pub fn new(bounds: MarkerPair) -> Self {
        Self { bounds }
    }
}

impl Stage for SpanFilter {
    fn name(&self) -> &'static str {
        "na_span"
    }

    fn apply(&self, paragraphs: Vec<String>) -> Vec<String> {
        let mut validator = SpanValidator::new(&self.bounds);
        let filtered: Vec<String> = paragraphs
            .into_iter()
            .filter(|p| validator.next(p))
            .collect();

        if !validator.is_valid() {
            tracing::warn!("Non-applicable span still open at end of document");
        }
        filtered
    }
}

/// Drops every paragraph in which the marker is found.
#[derive(Debug, Clone)]
pub struct Removal {
    name: &'static str,
    marker: Marker,
}

impl Removal {
    /// Removal of reference paragraphs.
    #[must_use]
    pub fn references(marker: Marker) -> Self {
        Self {
            name: "references",
            marker,
        }
    }

    /// Removal of undesirable paragraphs.
    #[must_use]
    pub fn undesirables(marker: Marker) -> Self {
        Self {
            name: "undesirables",
            marker,
        }
    }
}

impl Stage for Removal {
    fn name(&self) -> &'static str {
        self.name
    }

    fn apply(&self, mut paragraphs: Vec<String>) -> Vec<String> {
        paragraphs.retain(|p| !self.marker.is_found(p));
        paragraphs
    }
}

/// Rejoins words split across a line by a hyphen and one whitespace character.
///
/// A legitimately hyphenated compound followed by a single space and
/// another word is joined as well.
#[derive(Debug, Clone, Copy, Default)]
pub struct BisectionJoin;

impl Stage for BisectionJoin {
    fn name(&self) -> &'static str {
        "bisections"
    }

    fn apply(&self, paragraphs: Vec<String>) -> Vec<String> {
        paragraphs.iter().map(|p| join_bisections(p)).collect()
    }
}

/// Rejoin the bisected words of one paragraph.
///
/// # Examples
/// ```
/// use bookloader::segmentation::join_bisections;
///
/// assert_eq!(join_bisections("inter-\nnational"), "international");
/// assert_eq!(join_bisections("inter-  national"), "inter-  national");
/// ```
#[must_use]
pub fn join_bisections(text: &str) -> String {
    BISECTION_PATTERN.replace_all(text, "${1}${2}").into_owned()
}
