//! Chapter numbering and grouping.

use crate::markers::Marker;
use crate::types::Chapter;

/// Assigns a chapter index to each paragraph of the stream.
///
/// The index starts at 0 (front matter) and is incremented on every
/// paragraph the chapter marker matches, before that paragraph is numbered.
#[derive(Debug)]
pub struct ChapterIndexer<'a> {
    chapter: &'a Marker,
    current: usize,
}

impl<'a> ChapterIndexer<'a> {
    #[must_use]
    pub fn new(chapter: &'a Marker) -> Self {
        Self { chapter, current: 0 }
    }

    /// Advance over one paragraph and return its chapter index.
    pub fn next(&mut self, paragraph: &str) -> usize {
        if self.chapter.matches(paragraph) {
            self.current += 1;
        }
        self.current
    }
}

/// Group paragraphs into chapters.
///
/// The result always holds the front-matter chapter at index 0, even when
/// it is empty, followed by one chapter per chapter-marker match.
///
/// # Examples
/// ```
/// use bookloader::markers::Marker;
/// use bookloader::segmentation::group_chapters;
///
/// let marker = Marker::new(r"CHAPTER \d+").unwrap();
/// let paragraphs = ["Title", "CHAPTER 1", "Intro"].map(String::from).to_vec();
/// let chapters = group_chapters(paragraphs, &marker);
///
/// assert_eq!(chapters.len(), 2);
/// assert_eq!(chapters[1].paragraphs(), ["CHAPTER 1", "Intro"]);
/// ```
#[must_use]
pub fn group_chapters(paragraphs: Vec<String>, chapter: &Marker) -> Vec<Chapter> {
    let mut indexer = ChapterIndexer::new(chapter);
    let mut chapters = vec![Chapter::default()];

    for paragraph in paragraphs {
        let index = indexer.next(&paragraph);
        if index == chapters.len() {
            chapters.push(Chapter::default());
        }
        chapters[index].push(paragraph);
    }

    chapters
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn chapter_marker() -> Marker {
        Marker::new(r"^CHAPTER \d+").unwrap()
    }

    fn paragraphs(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_indexer_increments_before_assigning() {
        let marker = chapter_marker();
        let mut indexer = ChapterIndexer::new(&marker);
        assert_eq!(indexer.next("Title"), 0);
        assert_eq!(indexer.next("CHAPTER 1"), 1);
        assert_eq!(indexer.next("Intro"), 1);
        assert_eq!(indexer.next("CHAPTER 2"), 2);
    }

    #[test]
    fn test_group_chapters() {
        let chapters = group_chapters(
            paragraphs(&["Title", "CHAPTER 1", "Intro", "CHAPTER 2", "Body"]),
            &chapter_marker(),
        );
        assert_eq!(
            chapters,
            vec![
                Chapter::from(vec!["Title"]),
                Chapter::from(vec!["CHAPTER 1", "Intro"]),
                Chapter::from(vec!["CHAPTER 2", "Body"]),
            ]
        );
    }

    #[test]
    fn test_front_matter_always_present() {
        let chapters = group_chapters(paragraphs(&["CHAPTER 1", "Intro"]), &chapter_marker());
        assert_eq!(chapters.len(), 2);
        assert!(chapters[0].is_empty());

        let chapters = group_chapters(Vec::new(), &chapter_marker());
        assert_eq!(chapters, vec![Chapter::default()]);
    }

    #[test]
    fn test_consecutive_boundaries() {
        let chapters = group_chapters(
            paragraphs(&["CHAPTER 1", "CHAPTER 2", "Text"]),
            &chapter_marker(),
        );
        assert_eq!(chapters.len(), 3);
        assert_eq!(chapters[1], Chapter::from(vec!["CHAPTER 1"]));
        assert_eq!(chapters[2], Chapter::from(vec!["CHAPTER 2", "Text"]));
    }
}
