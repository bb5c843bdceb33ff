//! Registry configuration for WordprocessingML content parsing.

use super::core::ElementRegistry;
use super::handlers::{
    CharacterHandler, EmbeddedObjectHandler, ParagraphHandler, PassthroughHandler, TableHandler,
    TextHandler,
};

/// Create a content registry configured for `word/document.xml`.
///
/// This registry includes handlers for the element types that carry the
/// text of a document body.
#[must_use]
pub fn create_docx_registry() -> ElementRegistry {
    let mut registry = ElementRegistry::new();

    // Structural handlers
    registry.register("p", ParagraphHandler);
    registry.register("tbl", TableHandler);

    // Inline handlers
    registry.register("t", TextHandler);
    registry.register("br", CharacterHandler::new("\n"));
    registry.register("cr", CharacterHandler::new("\n"));
    registry.register("tab", CharacterHandler::new("\t"));
    registry.register("noBreakHyphen", CharacterHandler::new("-"));

    // Passthrough handlers (content is that of the children)
    registry.register("r", PassthroughHandler);
    registry.register("hyperlink", PassthroughHandler);
    registry.register("ins", PassthroughHandler);
    registry.register("moveTo", PassthroughHandler);
    registry.register("smartTag", PassthroughHandler);
    registry.register("fldSimple", PassthroughHandler);
    registry.register("customXml", PassthroughHandler);

    // Embedded objects are tallied and contribute no text
    registry.register("drawing", EmbeddedObjectHandler);
    registry.register("pict", EmbeddedObjectHandler);
    registry.register("object", EmbeddedObjectHandler);

    // Skip tags - elements that don't contribute to the text
    //
    // Properties:
    //   - pPr/rPr/tblPr/tblGrid/trPr/tcPr/sectPr: formatting and layout
    //
    // Annotations:
    //   - bookmarkStart/bookmarkEnd, commentRange*, commentReference
    //   - proofErr: spelling and grammar marks
    //   - permStart/permEnd: editing permissions
    //   - footnoteReference/endnoteReference: note anchors (notes live in other parts)
    //
    // Revisions and fields:
    //   - del/moveFrom/delText: deleted text
    //   - fldChar/instrText: complex field codes
    //   - softHyphen, lastRenderedPageBreak: layout hints
    //
    // Content controls:
    //   - sdt: structured document tags (tables of contents, cover pages)
    registry.skip([
        "pPr",
        "rPr",
        "tblPr",
        "tblGrid",
        "trPr",
        "tcPr",
        "sectPr",
        "bookmarkStart",
        "bookmarkEnd",
        "commentRangeStart",
        "commentRangeEnd",
        "commentReference",
        "proofErr",
        "permStart",
        "permEnd",
        "footnoteReference",
        "endnoteReference",
        "del",
        "moveFrom",
        "delText",
        "fldChar",
        "instrText",
        "softHyphen",
        "lastRenderedPageBreak",
        "sdt",
    ]);

    registry
}
