//! End-to-end tests of the loader on real `.docx` containers.

mod common;

use std::fs;

use bookloader::reader::read_document;
use bookloader::{
    load_config, read_chapters, BookError, BookLoader, Chapter, ContentBlock, ContentNode,
    Marker, MarkerSet,
};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

use common::{paragraph, table, write_container, write_docx, write_sample_book};

#[test]
fn test_read_document_blocks() {
    let dir = TempDir::new().unwrap();
    let body = [
        paragraph("Title"),
        "<w:p/>".to_string(),
        table(&[&["a", "b"], &["c", "d"]]),
    ]
    .concat();
    let path = write_docx(dir.path(), "blocks.docx", &body);

    let blocks = read_document(&path).unwrap();
    assert_eq!(
        blocks,
        vec![
            ContentBlock::paragraph("Title"),
            ContentBlock::new(vec![ContentNode::Empty]),
            ContentBlock::table(vec![ContentNode::row(["a", "b"]), ContentNode::row(["c", "d"])]),
        ]
    );
}

#[test]
fn test_container_without_document_part() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.docx");
    write_container(&path, &[("word/styles.xml", "<styles/>")]);

    let err = read_document(&path).unwrap_err();
    assert!(matches!(err, BookError::MissingPart { ref part } if part == "word/document.xml"));
}

#[test]
fn test_not_a_container() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("plain.docx");
    fs::write(&path, "just text").unwrap();

    let err = read_document(&path).unwrap_err();
    assert!(matches!(err, BookError::Zip(_)));
}

#[test]
fn test_load_sample_book() {
    let dir = TempDir::new().unwrap();
    let config_path = write_sample_book(dir.path());

    let config = load_config(&config_path).unwrap();
    assert_eq!(config.doc_path, dir.path().join("book.docx"));

    let book = BookLoader::from_config(&config).unwrap();
    assert_eq!(
        book.chapters(),
        [
            Chapter::from(vec!["PROLOGUE", "A Tale"]),
            Chapter::from(vec![
                "CHAPTER 1",
                "The cat sat on the mat.",
                "A Tale",
                "It was an international cat.",
            ]),
            Chapter::from(vec![
                "CHAPTER 2",
                "Name Age Tom 3",
                "END NOTES",
                "The end.",
                "EPILOGUE",
            ]),
        ]
    );
    assert_eq!(book.chapter_lengths(), [2, 4, 5]);
}

#[test]
fn test_read_chapters_from_config_file() {
    let dir = TempDir::new().unwrap();
    let config_path = write_sample_book(dir.path());

    let texts = read_chapters(&config_path, 1, 2).unwrap();
    assert_eq!(
        texts,
        [
            "The cat sat on the mat.\nA Tale\nIt was an international cat.",
            "Name Age Tom 3\nEND NOTES\nThe end.\nEPILOGUE",
        ]
    );
}

#[test]
fn test_read_chapters_out_of_range() {
    let dir = TempDir::new().unwrap();
    let config_path = write_sample_book(dir.path());

    let err = read_chapters(&config_path, 0, 3).unwrap_err();
    assert!(matches!(
        err,
        BookError::ChapterOutOfRange {
            last: 3,
            available: 3
        }
    ));
}

#[test]
fn test_default_markers_keep_everything() {
    let dir = TempDir::new().unwrap();
    let body = [
        paragraph("Title"),
        paragraph("Title"),
        paragraph("Chapter One"),
        paragraph("text"),
    ]
    .concat();
    let path = write_docx(dir.path(), "plain.docx", &body);

    let markers = MarkerSet::new(Marker::new("^Chapter").unwrap());
    let book = BookLoader::new(&path, markers).unwrap();
    assert_eq!(book.chapter_lengths(), [2, 2]);
    assert_eq!(book.read_chapters(0, 1).unwrap(), ["Title", "text"]);
}

#[test]
fn test_paragraphs_with_drawings_keep_their_text() {
    let dir = TempDir::new().unwrap();
    let body = [
        paragraph("CHAPTER 1"),
        r#"<w:p><w:r><w:t>Figure 1 shows the map</w:t></w:r><w:r><w:drawing/></w:r></w:p>"#
            .to_string(),
        r#"<w:p><w:r><w:drawing/></w:r><w:r><w:t>Caption text</w:t></w:r></w:p>"#.to_string(),
        paragraph("after"),
    ]
    .concat();
    let path = write_docx(dir.path(), "figures.docx", &body);

    let markers = MarkerSet::new(Marker::new("^CHAPTER").unwrap());
    let book = BookLoader::new(&path, markers).unwrap();
    assert_eq!(book.chapter_lengths(), [0, 4]);
    assert_eq!(
        book.read_chapters(1, 1).unwrap(),
        ["Figure 1 shows the map", "Caption text", "after"]
    );
}

#[test]
fn test_config_without_chapter_marker() {
    let dir = TempDir::new().unwrap();
    let config_path = common::write_config(
        dir.path(),
        r#"{"doc_path": "book.docx", "markers": {"header": "^x$"}}"#,
    );

    let err = load_config(&config_path).unwrap_err();
    assert!(matches!(err, BookError::MissingChapterMarker));
    assert!(err.is_configuration_error());
}

#[test]
fn test_config_with_invalid_pattern() {
    let dir = TempDir::new().unwrap();
    write_sample_book(dir.path());
    let config_path = common::write_config(
        dir.path(),
        r#"{"doc_path": "book.docx", "markers": {"chapter": "CHAPTER (\\d+"}}"#,
    );

    let config = load_config(&config_path).unwrap();
    let err = BookLoader::from_config(&config).unwrap_err();
    assert!(matches!(err, BookError::InvalidPattern { ref marker, .. } if marker == "chapter"));
}

#[test]
fn test_config_pointing_at_missing_document() {
    let dir = TempDir::new().unwrap();
    let config_path = common::write_config(
        dir.path(),
        r#"{"doc_path": "absent.docx", "markers": {"chapter": "^CH"}}"#,
    );

    let err = read_chapters(&config_path, 0, 0).unwrap_err();
    assert!(matches!(err, BookError::DocumentNotFound(_)));
}
