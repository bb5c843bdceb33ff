//! Core data types for the book loader.
//!
//! Content nodes are what the container reader emits; chapters are what
//! the segmentation produces.

use serde::{Deserialize, Serialize};

/// An atomic unit emitted by the container reader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "kebab-case")]
pub enum ContentNode {
    /// A run of text.
    Text(String),

    /// A table row with its cells in order.
    TableRow(Vec<TableCell>),

    /// A node without content (e.g. a blank paragraph).
    Empty,

    /// A node the reader does not model, carrying its tag name.
    Other(String),
}

impl ContentNode {
    /// Create a text node.
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Create a table row from cell texts.
    #[must_use]
    pub fn row<I, C>(cells: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<TableCell>,
    {
        Self::TableRow(cells.into_iter().map(Into::into).collect())
    }

    /// The type discriminator of this node.
    #[must_use]
    pub fn kind(&self) -> &str {
        match self {
            Self::Text(_) => "text",
            Self::TableRow(_) => "table-row",
            Self::Empty => "empty",
            Self::Other(tag) => tag,
        }
    }

    /// Check whether this node is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// A table cell holding the text values of its content in order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableCell {
    /// Text values of the cell.
    pub texts: Vec<String>,
}

impl TableCell {
    /// Create a cell from its text values.
    #[must_use]
    pub fn new(texts: Vec<String>) -> Self {
        Self { texts }
    }
}

impl From<&str> for TableCell {
    fn from(text: &str) -> Self {
        Self::new(vec![text.to_string()])
    }
}

impl From<String> for TableCell {
    fn from(text: String) -> Self {
        Self::new(vec![text])
    }
}

impl From<Vec<String>> for TableCell {
    fn from(texts: Vec<String>) -> Self {
        Self::new(texts)
    }
}

/// The nodes of one body-level element (a paragraph or a table), in order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentBlock {
    /// Nodes of the block.
    pub nodes: Vec<ContentNode>,
}

impl ContentBlock {
    /// Create a block from its nodes.
    #[must_use]
    pub fn new(nodes: Vec<ContentNode>) -> Self {
        Self { nodes }
    }

    /// A block holding a single text value.
    #[must_use]
    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::new(vec![ContentNode::text(text)])
    }

    /// A block holding table rows.
    #[must_use]
    pub fn table(rows: Vec<ContentNode>) -> Self {
        Self::new(rows)
    }
}

/// An ordered sequence of paragraphs.
///
/// Chapter 0 holds the front matter; every other chapter starts with the
/// paragraph that matched the chapter marker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Chapter(Vec<String>);

impl Chapter {
    /// Create a chapter from its paragraphs.
    #[must_use]
    pub fn new(paragraphs: Vec<String>) -> Self {
        Self(paragraphs)
    }

    /// All paragraphs, heading included.
    #[must_use]
    pub fn paragraphs(&self) -> &[String] {
        &self.0
    }

    /// The first paragraph, by convention the chapter heading.
    #[must_use]
    pub fn heading(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    /// Paragraphs after the heading.
    #[must_use]
    pub fn body(&self) -> &[String] {
        self.0.get(1..).unwrap_or_default()
    }

    /// Body paragraphs joined by newlines.
    #[must_use]
    pub fn body_text(&self) -> String {
        self.body().join("\n")
    }

    /// Number of paragraphs, heading included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check whether the chapter has no paragraphs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn push(&mut self, paragraph: String) {
        self.0.push(paragraph);
    }
}

impl From<Vec<&str>> for Chapter {
    fn from(paragraphs: Vec<&str>) -> Self {
        Self(paragraphs.into_iter().map(String::from).collect())
    }
}
