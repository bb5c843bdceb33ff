//! Container reader for `.docx` documents.
//!
//! A `.docx` file is a ZIP container whose `word/document.xml` part holds
//! the document body. This module opens the container, parses that part
//! and turns every body-level element into a [`ContentBlock`] using a
//! registry of element handlers keyed by tag name.

mod config;
mod core;
mod engine;
mod handler;
pub mod handlers;
mod types;

use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;

use roxmltree::Document;
use zip::ZipArchive;

pub use config::create_docx_registry;
pub use core::{ElementRegistry, Lookup};
pub use engine::ParseEngine;
pub use handler::{collect_children, ElementHandler, RecurseFn};
pub use types::{ElementType, ParseContext, ParseResult};

use crate::config::DOCUMENT_PART;
use crate::error::{BookError, Result};
use crate::types::ContentBlock;

/// Read the content blocks of a `.docx` file.
///
/// # Errors
/// Returns `DocumentNotFound` if `path` does not exist, and any container,
/// IO or XML error from reading the document unchanged.
pub fn read_document(path: impl AsRef<Path>) -> Result<Vec<ContentBlock>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(BookError::DocumentNotFound(path.to_path_buf()));
    }

    tracing::debug!(path = %path.display(), "Reading document container");
    let file = File::open(path)?;
    read_document_from_reader(file)
}

/// Read the content blocks of a `.docx` container from any [`Read`] + [`Seek`] source.
///
/// # Errors
/// Returns `Zip` for an unreadable container, `MissingPart` if it has no
/// `word/document.xml`, and `XmlParse` if that part is not well-formed.
pub fn read_document_from_reader<R: Read + Seek>(reader: R) -> Result<Vec<ContentBlock>> {
    let mut archive = ZipArchive::new(reader)?;

    let xml = {
        let mut part = match archive.by_name(DOCUMENT_PART) {
            Ok(part) => part,
            Err(zip::result::ZipError::FileNotFound) => {
                return Err(BookError::MissingPart {
                    part: DOCUMENT_PART.to_string(),
                });
            }
            Err(e) => return Err(e.into()),
        };
        let mut bytes = Vec::new();
        part.read_to_end(&mut bytes)?;
        String::from_utf8_lossy(strip_bom(&bytes)).into_owned()
    };

    parse_document_xml(&xml)
}

/// Parse the XML of a document part into content blocks.
///
/// # Errors
/// Returns `XmlParse` for malformed XML and `MissingPart` if there is no body.
pub fn parse_document_xml(xml: &str) -> Result<Vec<ContentBlock>> {
    let doc = Document::parse(xml)?;
    let engine = ParseEngine::new(create_docx_registry());
    let blocks = engine.parse_body(&doc)?;

    tracing::debug!(blocks = blocks.len(), "Parsed document body");
    Ok(blocks)
}

/// Strip UTF-8 BOM (byte order mark) if present.
fn strip_bom(data: &[u8]) -> &[u8] {
    data.strip_prefix(&[0xEF, 0xBB, 0xBF]).unwrap_or(data)
}
