//! Tag table mapping WordprocessingML elements to handlers.

use std::collections::HashMap;

use roxmltree::Node;

use super::handler::ElementHandler;
use crate::xml::local_name;

/// What the registry knows about a tag.
enum Entry {
    /// Content comes from this handler.
    Handled(Box<dyn ElementHandler>),
    /// The element and its subtree contribute nothing.
    Skipped,
}

/// Outcome of looking an element up in the registry.
pub enum Lookup<'r> {
    /// The handler registered for the tag.
    Handler(&'r dyn ElementHandler),
    /// The tag is ignored with its subtree.
    Skip,
    /// No handler is registered for the tag.
    Unknown,
}

/// Registry of element handlers keyed by local tag name.
///
/// A tag is either handled or skipped; registering one kind replaces the
/// other.
#[derive(Default)]
pub struct ElementRegistry {
    entries: HashMap<String, Entry>,
}

impl ElementRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle `tag_name` with `handler`.
    pub fn register(
        &mut self,
        tag_name: impl Into<String>,
        handler: impl ElementHandler + 'static,
    ) {
        self.entries
            .insert(tag_name.into(), Entry::Handled(Box::new(handler)));
    }

    /// Ignore every listed tag together with its subtree.
    pub fn skip(&mut self, tag_names: impl IntoIterator<Item = impl Into<String>>) {
        self.entries
            .extend(tag_names.into_iter().map(|tag| (tag.into(), Entry::Skipped)));
    }

    /// Look up how an element is processed.
    #[must_use]
    pub fn lookup(&self, node: Node<'_, '_>) -> Lookup<'_> {
        match self.entries.get(local_name(node)) {
            Some(Entry::Handled(handler)) => Lookup::Handler(handler.as_ref()),
            Some(Entry::Skipped) => Lookup::Skip,
            None => Lookup::Unknown,
        }
    }

    /// Whether `tag_name` is ignored.
    #[must_use]
    pub fn should_skip(&self, tag_name: &str) -> bool {
        matches!(self.entries.get(tag_name), Some(Entry::Skipped))
    }

    /// Whether a handler is registered for `tag_name`.
    #[must_use]
    pub fn has_handler(&self, tag_name: &str) -> bool {
        matches!(self.entries.get(tag_name), Some(Entry::Handled(_)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::handler::RecurseFn;
    use crate::reader::{ElementType, ParseContext, ParseResult};
    use roxmltree::Document;

    struct FixedText(&'static str);

    impl ElementHandler for FixedText {
        fn element_type(&self) -> ElementType {
            ElementType::Inline
        }

        fn handle<'a, 'input>(
            &self,
            _node: Node<'a, 'input>,
            _context: &mut ParseContext,
            _recurse: &RecurseFn<'a, 'input>,
        ) -> ParseResult {
            ParseResult::text(self.0)
        }
    }

    #[test]
    fn test_lookup_namespaced_tag() {
        let mut registry = ElementRegistry::new();
        registry.register("t", FixedText("x"));

        let xml = r#"<w:t xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"/>"#;
        let doc = Document::parse(xml).unwrap();

        assert!(matches!(registry.lookup(doc.root_element()), Lookup::Handler(_)));
    }

    #[test]
    fn test_skip_replaces_handler() {
        let mut registry = ElementRegistry::new();
        registry.register("pPr", FixedText("x"));
        registry.skip(["pPr", "rPr"]);

        assert!(registry.should_skip("pPr"));
        assert!(registry.should_skip("rPr"));
        assert!(!registry.has_handler("pPr"));

        let doc = Document::parse("<pPr/>").unwrap();
        assert!(matches!(registry.lookup(doc.root_element()), Lookup::Skip));
    }

    #[test]
    fn test_unregistered_tag() {
        let registry = ElementRegistry::new();
        let doc = Document::parse("<oMath/>").unwrap();

        assert!(!registry.has_handler("oMath"));
        assert!(!registry.should_skip("oMath"));
        assert!(matches!(registry.lookup(doc.root_element()), Lookup::Unknown));
    }
}
