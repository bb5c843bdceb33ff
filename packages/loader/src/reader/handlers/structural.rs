//! Structural element handlers for container elements.
//!
//! These handlers process the body-level elements of a document:
//! paragraphs (`<w:p>`) and tables (`<w:tbl>`).

use roxmltree::Node;

use crate::reader::handler::{collect_children, ElementHandler, RecurseFn};
use crate::reader::types::{ElementType, ParseContext, ParseResult};
use crate::types::{ContentNode, TableCell};
use crate::xml::children_named;

/// Handler for `<w:p>` (paragraph) elements.
///
/// Consecutive text is merged into a single text node, so a plain
/// paragraph yields exactly one. A paragraph without any visible text
/// yields [`ContentNode::Empty`].
pub struct ParagraphHandler;

impl ElementHandler for ParagraphHandler {
    fn element_type(&self) -> ElementType {
        ElementType::Structural
    }

    fn handle<'a, 'input>(
        &self,
        node: Node<'a, 'input>,
        context: &mut ParseContext,
        recurse: &RecurseFn<'a, 'input>,
    ) -> ParseResult {
        let result = ParseResult::new(collect_children(node, context, recurse)).merge_text();

        let blank = result.nodes.iter().all(|n| match n {
            ContentNode::Text(text) => text.trim().is_empty(),
            ContentNode::Empty => true,
            ContentNode::TableRow(_) | ContentNode::Other(_) => false,
        });
        if blank {
            return ParseResult::new(vec![ContentNode::Empty]);
        }

        result
    }
}

/// Handler for `<w:tbl>` (table) elements.
///
/// Produces one [`ContentNode::TableRow`] per `<w:tr>`, each cell holding
/// the text values of its paragraphs in order. Text of tables nested in a
/// cell is folded into that cell.
pub struct TableHandler;

impl ElementHandler for TableHandler {
    fn element_type(&self) -> ElementType {
        ElementType::Structural
    }

    fn handle<'a, 'input>(
        &self,
        node: Node<'a, 'input>,
        context: &mut ParseContext,
        recurse: &RecurseFn<'a, 'input>,
    ) -> ParseResult {
        let rows = children_named(node, "tr")
            .map(|row| {
                let cells = children_named(row, "tc")
                    .map(|cell| {
                        let nodes = collect_children(cell, context, recurse);
                        TableCell::new(cell_texts(nodes))
                    })
                    .collect();
                ContentNode::TableRow(cells)
            })
            .collect();

        ParseResult::new(rows)
    }
}

/// Flatten the nodes of a cell into its text values.
fn cell_texts(nodes: Vec<ContentNode>) -> Vec<String> {
    let mut texts = Vec::new();
    for node in nodes {
        match node {
            ContentNode::Text(text) => texts.push(text),
            ContentNode::TableRow(cells) => {
                texts.extend(cells.into_iter().flat_map(|cell| cell.texts));
            }
            ContentNode::Empty | ContentNode::Other(_) => {}
        }
    }
    texts
}
