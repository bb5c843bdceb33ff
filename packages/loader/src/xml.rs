//! Helpers for walking WordprocessingML trees.
//!
//! Lookups compare local names only, so `w:p` and `p` are the same tag.

use roxmltree::Node;

/// The local name of an element, without namespace prefix.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use bookloader::xml::local_name;
///
/// let xml = r#"<w:p xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"/>"#;
/// let doc = Document::parse(xml).unwrap();
/// assert_eq!(local_name(doc.root_element()), "p");
/// ```
pub fn local_name<'a>(node: Node<'a, '_>) -> &'a str {
    node.tag_name().name()
}

/// Whether `node` is an element with the given local name.
#[must_use]
pub fn is_tag(node: Node<'_, '_>, tag: &str) -> bool {
    node.is_element() && local_name(node) == tag
}

/// Element children of `node`; character data between them is skipped.
pub fn child_elements<'a, 'input>(
    node: Node<'a, 'input>,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(Node::is_element)
}

/// The first element child named `tag`.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use bookloader::xml::first_child;
///
/// let doc = Document::parse("<document><body/></document>").unwrap();
/// assert!(first_child(doc.root_element(), "body").is_some());
/// assert!(first_child(doc.root_element(), "missing").is_none());
/// ```
pub fn first_child<'a, 'input>(node: Node<'a, 'input>, tag: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|child| is_tag(*child, tag))
}

/// Every element child named `tag`, in document order.
pub fn children_named<'a, 'input>(
    node: Node<'a, 'input>,
    tag: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(move |child| is_tag(*child, tag))
}

#[cfg(test)]
mod tests {
    use super::*;
    use roxmltree::Document;

    const W: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

    #[test]
    fn test_local_name_drops_prefix() {
        let xml = format!(r#"<w:body xmlns:w="{W}"><w:p/></w:body>"#);
        let doc = Document::parse(&xml).unwrap();
        assert_eq!(local_name(doc.root_element()), "body");
    }

    #[test]
    fn test_is_tag_rejects_text() {
        let doc = Document::parse("<r>text<t/></r>").unwrap();
        let mut children = doc.root_element().children();
        let text = children.next().unwrap();
        let t = children.next().unwrap();

        assert!(!is_tag(text, "t"));
        assert!(is_tag(t, "t"));
        assert!(!is_tag(t, "r"));
    }

    #[test]
    fn test_child_elements() {
        let doc = Document::parse("<p>a<r/>b<r/><hyperlink/></p>").unwrap();
        let names: Vec<&str> = child_elements(doc.root_element()).map(local_name).collect();
        assert_eq!(names, ["r", "r", "hyperlink"]);
    }

    #[test]
    fn test_children_named_in_table_row() {
        let xml = format!(r#"<w:tr xmlns:w="{W}"><w:trPr/><w:tc/><w:tc/><w:tc/></w:tr>"#);
        let doc = Document::parse(&xml).unwrap();

        assert_eq!(children_named(doc.root_element(), "tc").count(), 3);
        assert_eq!(first_child(doc.root_element(), "trPr").map(local_name), Some("trPr"));
    }
}
