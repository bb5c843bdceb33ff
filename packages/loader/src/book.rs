//! The book loader: ties the reader, normalizer and segmentation together.

use std::path::Path;

use crate::config::{load_config, LoaderConfig};
use crate::error::{BookError, Result};
use crate::markers::MarkerSet;
use crate::normalize::ParagraphNormalizer;
use crate::reader::read_document;
use crate::segmentation::{group_chapters, SegmentationPipeline};
use crate::types::{Chapter, ContentBlock};

/// A document split into chapters.
///
/// The chapters are computed once, at construction, and never change.
#[derive(Debug, Clone)]
pub struct BookLoader {
    markers: MarkerSet,
    chapters: Vec<Chapter>,
}

impl BookLoader {
    /// Load and segment a `.docx` document.
    ///
    /// # Errors
    /// Returns `DocumentNotFound` if `doc_path` does not exist,
    /// `InvalidParagraph` for a malformed text node, and reader errors
    /// unchanged.
    pub fn new(doc_path: impl AsRef<Path>, markers: MarkerSet) -> Result<Self> {
        let doc_path = doc_path.as_ref();
        let blocks = read_document(doc_path)?;
        let book = Self::from_blocks(blocks, markers)?;

        tracing::info!(
            path = %doc_path.display(),
            chapters = book.chapters.len(),
            "Loaded book"
        );
        Ok(book)
    }

    /// Load the document described by a configuration.
    ///
    /// # Errors
    /// Returns configuration errors for invalid markers, and any error of
    /// [`BookLoader::new`].
    pub fn from_config(config: &LoaderConfig) -> Result<Self> {
        let markers = MarkerSet::from_config(&config.markers)?;
        Self::new(&config.doc_path, markers)
    }

    /// Segment content blocks produced by a container reader.
    ///
    /// # Errors
    /// Returns `InvalidParagraph` for a text block without exactly one text value.
    pub fn from_blocks(blocks: Vec<ContentBlock>, markers: MarkerSet) -> Result<Self> {
        let paragraphs = ParagraphNormalizer::new().normalize(blocks)?;
        Ok(Self::from_paragraphs(paragraphs, markers))
    }

    /// Segment an already normalized paragraph stream.
    ///
    /// # Examples
    /// ```
    /// use bookloader::markers::{Marker, MarkerSet};
    /// use bookloader::BookLoader;
    ///
    /// let markers = MarkerSet::new(Marker::new(r"^CHAPTER \d+").unwrap());
    /// let paragraphs = ["Title", "CHAPTER 1", "Intro", "CHAPTER 2", "Body"]
    ///     .map(String::from)
    ///     .to_vec();
    /// let book = BookLoader::from_paragraphs(paragraphs, markers);
    ///
    /// assert_eq!(book.chapter_lengths(), [1, 2, 2]);
    /// assert_eq!(book.read_chapters(1, 1).unwrap(), ["Intro"]);
    /// ```
    #[must_use]
    pub fn from_paragraphs(paragraphs: Vec<String>, markers: MarkerSet) -> Self {
        let pipeline = SegmentationPipeline::from_markers(&markers);
        let chapters = group_chapters(pipeline.run(paragraphs), &markers.chapter);
        Self { markers, chapters }
    }

    /// The chapters, front matter first.
    #[must_use]
    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    /// The markers the book was segmented with.
    #[must_use]
    pub fn markers(&self) -> &MarkerSet {
        &self.markers
    }

    /// Number of paragraphs in each chapter.
    #[must_use]
    pub fn chapter_lengths(&self) -> Vec<usize> {
        self.chapters.iter().map(Chapter::len).collect()
    }

    /// Read the text of chapters `first..=last`.
    ///
    /// Each chapter's first paragraph (its heading, or the first paragraph of
    /// the front matter) is dropped and the rest joined with newlines. The
    /// result holds exactly `last - first + 1` strings.
    ///
    /// # Errors
    /// Returns `InvalidRange` if `last < first`, checked before anything
    /// else, and `ChapterOutOfRange` if `last` is not a chapter index.
    pub fn read_chapters(&self, first: usize, last: usize) -> Result<Vec<String>> {
        if last < first {
            return Err(BookError::InvalidRange { first, last });
        }

        let selected = self
            .chapters
            .get(first..=last)
            .ok_or(BookError::ChapterOutOfRange {
                last,
                available: self.chapters.len(),
            })?;

        Ok(selected.iter().map(Chapter::body_text).collect())
    }

    /// Read the text of every chapter from `first` to the last one.
    ///
    /// # Errors
    /// Returns `ChapterOutOfRange` if `first` is not a chapter index.
    pub fn read_chapters_from(&self, first: usize) -> Result<Vec<String>> {
        let last = self.chapters.len().saturating_sub(1);
        if first > last {
            return Err(BookError::ChapterOutOfRange {
                last: first,
                available: self.chapters.len(),
            });
        }
        self.read_chapters(first, last)
    }
}

/// Load the book described by a configuration file and read chapters `first..=last`.
///
/// # Errors
/// Returns `InvalidRange` if `last < first` before the configuration is
/// even read, then any configuration, document or range error.
pub fn read_chapters(
    config_path: impl AsRef<Path>,
    first: usize,
    last: usize,
) -> Result<Vec<String>> {
    if last < first {
        return Err(BookError::InvalidRange { first, last });
    }

    let config = load_config(config_path)?;
    BookLoader::from_config(&config)?.read_chapters(first, last)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markers::Marker;
    use crate::types::ContentNode;
    use pretty_assertions::assert_eq;

    fn markers() -> MarkerSet {
        MarkerSet::new(Marker::new(r"^CHAPTER \d+").unwrap())
    }

    fn book(texts: &[&str]) -> BookLoader {
        let paragraphs = texts.iter().map(|s| (*s).to_string()).collect();
        BookLoader::from_paragraphs(paragraphs, markers())
    }

    #[test]
    fn test_scenario() {
        let book = book(&["Title", "CHAPTER 1", "Intro", "CHAPTER 2", "Body"]);
        assert_eq!(
            book.chapters(),
            [
                Chapter::from(vec!["Title"]),
                Chapter::from(vec!["CHAPTER 1", "Intro"]),
                Chapter::from(vec!["CHAPTER 2", "Body"]),
            ]
        );
        assert_eq!(book.read_chapters(1, 1).unwrap(), ["Intro"]);
    }

    #[test]
    fn test_read_front_matter_drops_first_paragraph() {
        let book = book(&["Title", "Note", "CHAPTER 1", "Intro"]);
        assert_eq!(book.read_chapters(0, 0).unwrap(), ["Note"]);
    }

    #[test]
    fn test_read_range_joins_with_newlines() {
        let book = book(&["Title", "CHAPTER 1", "a", "b", "CHAPTER 2", "c"]);
        let texts = book.read_chapters(0, 2).unwrap();
        assert_eq!(texts, ["", "a\nb", "c"]);
    }

    #[test]
    fn test_read_inverted_range() {
        let book = book(&["Title", "CHAPTER 1", "Intro", "CHAPTER 2", "Body"]);
        let err = book.read_chapters(2, 1).unwrap_err();
        assert!(matches!(err, BookError::InvalidRange { first: 2, last: 1 }));
        assert!(err.is_precondition_error());
    }

    #[test]
    fn test_read_past_last_chapter() {
        let book = book(&["Title", "CHAPTER 1", "Intro"]);
        let err = book.read_chapters(0, 2).unwrap_err();
        assert!(matches!(
            err,
            BookError::ChapterOutOfRange {
                last: 2,
                available: 2
            }
        ));
    }

    #[test]
    fn test_read_chapters_from() {
        let book = book(&["Title", "CHAPTER 1", "Intro", "CHAPTER 2", "Body"]);
        assert_eq!(book.read_chapters_from(1).unwrap(), ["Intro", "Body"]);
        assert!(book.read_chapters_from(3).is_err());
    }

    #[test]
    fn test_chapter_count_matches_boundaries() {
        let texts = ["a", "CHAPTER 1", "b", "CHAPTER 2", "CHAPTER 3", "c"];
        let book = book(&texts);
        let boundaries = texts.iter().filter(|t| t.starts_with("CHAPTER")).count();
        assert_eq!(book.chapters().len(), 1 + boundaries);
    }

    #[test]
    fn test_from_blocks() {
        let blocks = vec![
            ContentBlock::paragraph("Title"),
            ContentBlock::new(vec![ContentNode::Empty]),
            ContentBlock::paragraph("CHAPTER 1"),
            ContentBlock::table(vec![ContentNode::row(["a", "b"]), ContentNode::row(["c", "d"])]),
        ];
        let book = BookLoader::from_blocks(blocks, markers()).unwrap();
        assert_eq!(book.read_chapters(1, 1).unwrap(), ["a b c d"]);
    }

    #[test]
    fn test_missing_document() {
        let err = BookLoader::new("/nonexistent/book.docx", markers()).unwrap_err();
        assert!(matches!(err, BookError::DocumentNotFound(_)));
    }

    #[test]
    fn test_read_chapters_checks_range_first() {
        let err = read_chapters("/nonexistent/parameters.json", 3, 1).unwrap_err();
        assert!(matches!(err, BookError::InvalidRange { .. }));
    }
}
