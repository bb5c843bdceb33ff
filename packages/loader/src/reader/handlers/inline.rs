//! Inline element handlers for text-level elements.
//!
//! These handlers process elements that appear inside a paragraph: runs,
//! text, breaks and the wrappers around runs (hyperlinks, tracked
//! insertions, fields).

use roxmltree::Node;

use crate::reader::handler::{collect_children, ElementHandler, RecurseFn};
use crate::reader::types::{ElementType, ParseContext, ParseResult};

/// Handler for `<w:t>` (text) elements.
///
/// Returns the element's character data verbatim; `xml:space` is honored
/// by keeping surrounding whitespace.
pub struct TextHandler;

impl ElementHandler for TextHandler {
    fn element_type(&self) -> ElementType {
        ElementType::Inline
    }

    fn handle<'a, 'input>(
        &self,
        node: Node<'a, 'input>,
        _context: &mut ParseContext,
        _recurse: &RecurseFn<'a, 'input>,
    ) -> ParseResult {
        match node.text() {
            Some(text) if !text.is_empty() => ParseResult::text(text),
            _ => ParseResult::empty(),
        }
    }
}

/// Handler for elements standing for a single character.
///
/// Used for `<w:br>` / `<w:cr>` (newline), `<w:tab>` (tab) and
/// `<w:noBreakHyphen>` (hyphen).
pub struct CharacterHandler {
    character: &'static str,
}

impl CharacterHandler {
    /// Create a handler emitting the given character.
    #[must_use]
    pub fn new(character: &'static str) -> Self {
        Self { character }
    }
}

impl ElementHandler for CharacterHandler {
    fn element_type(&self) -> ElementType {
        ElementType::Inline
    }

    fn handle<'a, 'input>(
        &self,
        _node: Node<'a, 'input>,
        _context: &mut ParseContext,
        _recurse: &RecurseFn<'a, 'input>,
    ) -> ParseResult {
        ParseResult::text(self.character)
    }
}

/// Handler for elements whose content is that of their children.
///
/// Used for runs (`<w:r>`) and run wrappers such as `<w:hyperlink>`,
/// `<w:ins>`, `<w:smartTag>` and `<w:fldSimple>`.
pub struct PassthroughHandler;

impl ElementHandler for PassthroughHandler {
    fn element_type(&self) -> ElementType {
        ElementType::Inline
    }

    fn handle<'a, 'input>(
        &self,
        node: Node<'a, 'input>,
        context: &mut ParseContext,
        recurse: &RecurseFn<'a, 'input>,
    ) -> ParseResult {
        ParseResult::new(collect_children(node, context, recurse))
    }
}

/// Handler for embedded non-text content (`<w:drawing>`, `<w:pict>`, `<w:object>`).
///
/// The object contributes no content; it is tallied in the context so the
/// engine can report what was left out. Text around it stays one value.
pub struct EmbeddedObjectHandler;

impl ElementHandler for EmbeddedObjectHandler {
    fn element_type(&self) -> ElementType {
        ElementType::Embedded
    }

    fn handle<'a, 'input>(
        &self,
        node: Node<'a, 'input>,
        context: &mut ParseContext,
        _recurse: &RecurseFn<'a, 'input>,
    ) -> ParseResult {
        context.record_embedded(node.tag_name().name());
        ParseResult::empty()
    }
}
