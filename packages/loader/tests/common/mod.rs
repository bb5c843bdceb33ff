//! Shared fixtures: real `.docx` containers written to a temporary directory.

#![allow(dead_code)]

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="xml" ContentType="application/xml"/></Types>"#;

/// Wrap body markup in a complete document part.
pub fn document_xml(body: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{body}<w:sectPr/></w:body></w:document>"#
    )
}

/// Markup of one paragraph holding a single run.
pub fn paragraph(text: &str) -> String {
    format!(r#"<w:p><w:r><w:t xml:space="preserve">{text}</w:t></w:r></w:p>"#)
}

/// Markup of a table, one inner slice per row.
pub fn table(rows: &[&[&str]]) -> String {
    let rows: String = rows
        .iter()
        .map(|cells| {
            let cells: String = cells
                .iter()
                .map(|cell| format!("<w:tc>{}</w:tc>", paragraph(cell)))
                .collect();
            format!("<w:tr>{cells}</w:tr>")
        })
        .collect();
    format!("<w:tbl><w:tblPr/><w:tblGrid/>{rows}</w:tbl>")
}

/// Write a ZIP container holding the given parts.
pub fn write_container(path: &Path, parts: &[(&str, &str)]) {
    let file = File::create(path).unwrap();
    let mut zip = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);

    for (name, content) in parts {
        zip.start_file(*name, options).unwrap();
        zip.write_all(content.as_bytes()).unwrap();
    }
    zip.finish().unwrap();
}

/// Write a `.docx` file whose body is the given markup.
pub fn write_docx(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    let xml = document_xml(body);
    write_container(
        &path,
        &[
            ("[Content_Types].xml", CONTENT_TYPES),
            ("word/document.xml", xml.as_str()),
        ],
    );
    path
}

/// Write a configuration file next to the document.
pub fn write_config(dir: &Path, json: &str) -> PathBuf {
    let path = dir.join("parameters.json");
    fs::write(&path, json).unwrap();
    path
}

/// The body of a small book: front matter, a table of contents, two
/// chapters with running headers, a reference and a span of notes.
pub fn sample_book_body() -> String {
    [
        paragraph("Cover page"),
        paragraph("PROLOGUE"),
        paragraph("A Tale"),
        paragraph("CHAPTER 1"),
        paragraph("The cat sat on the mat."),
        paragraph("A Tale"),
        paragraph("A Tale"),
        paragraph("It was an inter- national cat."),
        paragraph("[1] Cat studies, vol. 2."),
        "<w:p/>".to_string(),
        paragraph("CHAPTER 2"),
        table(&[&["Name", "Age"], &["Tom", "3"]]),
        paragraph("NOTES"),
        paragraph("a note"),
        paragraph("END NOTES"),
        paragraph("The end."),
        paragraph("EPILOGUE"),
        paragraph("Back cover"),
    ]
    .concat()
}

/// Configuration matching [`sample_book_body`].
pub const SAMPLE_CONFIG: &str = r#"{
    "doc_path": "book.docx",
    "markers": {
        "chapter": "CHAPTER \\d+",
        "slice": ["^PROLOGUE$", "^EPILOGUE$"],
        "header": "^A Tale$",
        "references": "^\\[\\d+\\]",
        "na_span": ["^NOTES$", "^END NOTES$"]
    }
}"#;

/// Write the sample book and its configuration; returns the configuration path.
pub fn write_sample_book(dir: &Path) -> PathBuf {
    write_docx(dir, "book.docx", &sample_book_body());
    write_config(dir, SAMPLE_CONFIG)
}
