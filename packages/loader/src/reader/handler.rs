//! The element handler seam of the reader.

use roxmltree::Node;

use super::types::{ElementType, ParseContext, ParseResult};
use crate::types::ContentNode;
use crate::xml::child_elements;

/// Callback parsing a child element through the engine.
///
/// Children without a handler come back empty and are tallied in the
/// context.
pub type RecurseFn<'a, 'input> = dyn Fn(Node<'a, 'input>, &mut ParseContext) -> ParseResult + 'a;

/// Turns one WordprocessingML element into content nodes.
pub trait ElementHandler: Send + Sync {
    fn element_type(&self) -> ElementType;

    /// Produce the content of `node`, parsing children through `recurse`.
    fn handle<'a, 'input>(
        &self,
        node: Node<'a, 'input>,
        context: &mut ParseContext,
        recurse: &RecurseFn<'a, 'input>,
    ) -> ParseResult;
}

/// Content of every element child of `node`, in document order.
///
/// Character data between child elements is ignored; WordprocessingML
/// keeps text inside `<w:t>`.
pub fn collect_children<'a, 'input>(
    node: Node<'a, 'input>,
    context: &mut ParseContext,
    recurse: &RecurseFn<'a, 'input>,
) -> Vec<ContentNode> {
    child_elements(node)
        .flat_map(|child| recurse(child, context).nodes)
        .collect()
}
