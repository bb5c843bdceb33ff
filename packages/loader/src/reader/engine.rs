//! Recursive walk of a document body through the element registry.

use roxmltree::{Document, Node};

use super::core::{ElementRegistry, Lookup};
use super::types::{ParseContext, ParseResult};
use crate::error::{BookError, Result};
use crate::types::{ContentBlock, ContentNode};
use crate::xml::{child_elements, first_child, local_name};

/// Dispatches elements to the handlers of a registry.
///
/// An element without a handler is an error at the level it is parsed
/// from; inside a handled element it is tallied in the [`ParseContext`]
/// and contributes nothing.
pub struct ParseEngine {
    registry: ElementRegistry,
}

impl ParseEngine {
    #[must_use]
    pub fn new(registry: ElementRegistry) -> Self {
        Self { registry }
    }

    #[must_use]
    pub fn registry(&self) -> &ElementRegistry {
        &self.registry
    }

    /// Parse one element and its subtree.
    ///
    /// # Errors
    /// Returns `UnknownElement`, naming the parent element, if no handler
    /// accepts `node` and its tag is not skipped.
    pub fn parse(&self, node: Node<'_, '_>, context: &mut ParseContext) -> Result<ParseResult> {
        let handler = match self.registry.lookup(node) {
            Lookup::Handler(handler) => handler,
            Lookup::Skip => return Ok(ParseResult::empty()),
            Lookup::Unknown => {
                return Err(BookError::UnknownElement {
                    tag_name: local_name(node).to_string(),
                    context: node
                        .parent_element()
                        .map(|parent| format!("<{}>", local_name(parent))),
                });
            }
        };

        let recurse = |child: Node<'_, '_>, ctx: &mut ParseContext| -> ParseResult {
            match self.parse(child, ctx) {
                Ok(result) => result,
                Err(err) => {
                    tracing::debug!(error = %err, "Skipping element without handler");
                    ctx.record_unknown(local_name(child));
                    ParseResult::empty()
                }
            }
        };

        tracing::trace!(tag = local_name(node), kind = ?handler.element_type(), "Parsing element");
        Ok(handler.handle(node, context, &recurse))
    }

    /// Parse every element of `<w:body>` into one content block each.
    ///
    /// Elements producing nothing (section properties, content controls)
    /// yield no block. A body-level element without a handler yields a block
    /// holding a single [`ContentNode::Other`] with its tag name.
    ///
    /// # Errors
    /// Returns `MissingPart` if the document has no body.
    pub fn parse_body(&self, doc: &Document<'_>) -> Result<Vec<ContentBlock>> {
        let Some(body) = first_child(doc.root_element(), "body") else {
            return Err(BookError::MissingPart {
                part: "w:body".to_string(),
            });
        };

        let mut context = ParseContext::new();
        let mut blocks = Vec::new();

        for element in child_elements(body) {
            match self.parse(element, &mut context) {
                Ok(result) if result.is_empty() => {}
                Ok(result) => blocks.push(ContentBlock::new(result.nodes)),
                Err(BookError::UnknownElement { tag_name, .. }) => {
                    tracing::debug!(tag = %tag_name, "Unsupported body element");
                    blocks.push(ContentBlock::new(vec![ContentNode::Other(tag_name)]));
                }
                Err(err) => return Err(err),
            }
        }

        if !context.unknown_tags.is_empty() {
            tracing::warn!(
                tags = ?context.unknown_tags,
                "Skipped unsupported elements inside document body"
            );
        }
        if !context.embedded_objects.is_empty() {
            tracing::warn!(
                objects = ?context.embedded_objects,
                "Left embedded objects out of the text"
            );
        }

        Ok(blocks)
    }
}
