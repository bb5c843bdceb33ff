//! Conversion of content blocks into flat paragraph strings.
//!
//! A block of running text must hold exactly one text value; other nodes
//! beside it are dropped. A table block is flattened to one paragraph:
//! every text value of every cell, row by row, separated by single spaces.
//! Blocks of any other kind are skipped with a warning.

use crate::error::{BookError, Result};
use crate::types::{ContentBlock, ContentNode};

/// Converts content blocks into paragraphs.
#[derive(Debug, Default, Clone, Copy)]
pub struct ParagraphNormalizer;

impl ParagraphNormalizer {
    /// Create a new normalizer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Convert blocks into paragraphs, document order preserved.
    ///
    /// Empty nodes are dropped first, and blocks left without nodes are
    /// dropped entirely.
    ///
    /// # Errors
    /// Returns `InvalidParagraph` when a text block holds more than one
    /// text value.
    ///
    /// # Examples
    /// ```
    /// use bookloader::normalize::ParagraphNormalizer;
    /// use bookloader::types::{ContentBlock, ContentNode};
    ///
    /// let blocks = vec![
    ///     ContentBlock::paragraph("Title"),
    ///     ContentBlock::new(vec![ContentNode::Empty]),
    ///     ContentBlock::table(vec![ContentNode::row(["a", "b"]), ContentNode::row(["c", "d"])]),
    /// ];
    /// let paragraphs = ParagraphNormalizer::new().normalize(blocks).unwrap();
    /// assert_eq!(paragraphs, ["Title", "a b c d"]);
    /// ```
    pub fn normalize(&self, blocks: Vec<ContentBlock>) -> Result<Vec<String>> {
        let mut paragraphs = Vec::with_capacity(blocks.len());

        for block in blocks {
            let nodes: Vec<ContentNode> =
                block.nodes.into_iter().filter(|n| !n.is_empty()).collect();

            let kind = nodes
                .iter()
                .find(|n| matches!(n, ContentNode::Text(_) | ContentNode::TableRow(_)));
            match (kind, nodes.first()) {
                (_, None) => {}
                (Some(ContentNode::TableRow(_)), _) => paragraphs.push(table_to_text(&nodes)),
                (Some(_), _) => paragraphs.push(single_text(nodes)?),
                (None, Some(other)) => {
                    tracing::warn!(kind = %other.kind(), "Skipping unsupported content block");
                }
            }
        }

        Ok(paragraphs)
    }
}

/// Take the only text value of a running-text block.
///
/// Nodes other than text inside the block contribute nothing.
fn single_text(nodes: Vec<ContentNode>) -> Result<String> {
    let mut texts = Vec::with_capacity(1);
    for node in nodes {
        match node {
            ContentNode::Text(text) => texts.push(text),
            other => {
                tracing::debug!(kind = %other.kind(), "Dropping non-text node from paragraph");
            }
        }
    }

    let found = texts.len();
    match texts.pop() {
        Some(text) if found == 1 => Ok(text),
        _ => Err(BookError::InvalidParagraph { found }),
    }
}

/// Flatten table rows into a single space-separated paragraph.
///
/// Non-row nodes in a table block contribute nothing.
///
/// # Examples
/// ```
/// use bookloader::normalize::table_to_text;
/// use bookloader::types::ContentNode;
///
/// let rows = [ContentNode::row(["a", "b"]), ContentNode::row(["c", "d"])];
/// assert_eq!(table_to_text(&rows), "a b c d");
/// ```
#[must_use]
pub fn table_to_text(rows: &[ContentNode]) -> String {
    let texts: Vec<&str> = rows
        .iter()
        .filter_map(|row| match row {
            ContentNode::TableRow(cells) => Some(cells),
            _ => None,
        })
        .flatten()
        .flat_map(|cell| cell.texts.iter().map(String::as_str))
        .collect();
    texts.join(" ")
}
