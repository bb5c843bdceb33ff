//! Types for the element registry system.

use std::collections::BTreeMap;

use crate::types::ContentNode;

/// Classification of element types for processing strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementType {
    /// Container elements (p, tbl, tr, tc).
    Structural,
    /// Text-level elements (r, t, br, hyperlink).
    Inline,
    /// Elements standing in for non-text content (drawing, object).
    Embedded,
}

/// Result from parsing an element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseResult {
    /// The content nodes produced by the element, in document order.
    pub nodes: Vec<ContentNode>,
}

impl ParseResult {
    /// Create a parse result from nodes.
    #[must_use]
    pub fn new(nodes: Vec<ContentNode>) -> Self {
        Self { nodes }
    }

    /// Create a parse result holding a single text node.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::new(vec![ContentNode::text(text)])
    }

    /// Create an empty parse result.
    #[must_use]
    pub fn empty() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Check whether the element produced nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Merge consecutive text nodes into one.
    #[must_use]
    pub fn merge_text(self) -> Self {
        let mut merged: Vec<ContentNode> = Vec::with_capacity(self.nodes.len());
        for node in self.nodes {
            if let ContentNode::Text(text) = &node {
                if let Some(ContentNode::Text(previous)) = merged.last_mut() {
                    previous.push_str(text);
                    continue;
                }
            }
            merged.push(node);
        }
        Self::new(merged)
    }
}

/// Context passed through parsing operations.
#[derive(Debug, Default)]
pub struct ParseContext {
    /// Tags without a handler, with the number of times each was skipped.
    pub unknown_tags: BTreeMap<String, usize>,

    /// Embedded objects left out of the text, by tag.
    pub embedded_objects: BTreeMap<String, usize>,
}

impl ParseContext {
    /// Create a new parse context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that an element without a handler was skipped.
    pub fn record_unknown(&mut self, tag_name: &str) {
        *self.unknown_tags.entry(tag_name.to_string()).or_default() += 1;
    }

    /// Record that an embedded object was left out of the text.
    pub fn record_embedded(&mut self, tag_name: &str) {
        *self.embedded_objects.entry(tag_name.to_string()).or_default() += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_result_text() {
        let result = ParseResult::text("hello");
        assert_eq!(result.nodes, vec![ContentNode::text("hello")]);
    }

    #[test]
    fn test_parse_result_empty() {
        assert!(ParseResult::empty().is_empty());
    }

    #[test]
    fn test_merge_text() {
        let result = ParseResult::new(vec![
            ContentNode::text("inter-"),
            ContentNode::text("\n"),
            ContentNode::text("national"),
            ContentNode::Other("drawing".to_string()),
            ContentNode::text("caption"),
        ])
        .merge_text();

        assert_eq!(
            result.nodes,
            vec![
                ContentNode::text("inter-\nnational"),
                ContentNode::Other("drawing".to_string()),
                ContentNode::text("caption"),
            ]
        );
    }

    #[test]
    fn test_record_unknown() {
        let mut ctx = ParseContext::new();
        ctx.record_unknown("oMath");
        ctx.record_unknown("oMath");
        ctx.record_unknown("ruby");
        assert_eq!(ctx.unknown_tags.get("oMath"), Some(&2));
        assert_eq!(ctx.unknown_tags.get("ruby"), Some(&1));
        assert!(ctx.embedded_objects.is_empty());
    }
}
