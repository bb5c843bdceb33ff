//! BookLoader - Extract structured chapters from word-processor documents.
//!
//! This crate reads a `.docx` document, flattens its body into paragraphs
//! and segments them into chapters driven by configurable regex markers.
//!
//! # Example
//!
//! ```
//! use bookloader::markers::{Marker, MarkerSet};
//! use bookloader::BookLoader;
//!
//! let markers = MarkerSet::new(Marker::new(r"^CHAPTER \d+").unwrap());
//! let paragraphs = ["Title", "CHAPTER 1", "Intro"].map(String::from).to_vec();
//!
//! let book = BookLoader::from_paragraphs(paragraphs, markers);
//! assert_eq!(book.read_chapters(1, 1).unwrap(), ["Intro"]);
//! ```
//!
//! # Architecture
//!
//! The loader is organized into several modules:
//!
//! - [`config`]: Configuration loading and constants
//! - [`types`]: Core data types (ContentNode, ContentBlock, Chapter)
//! - [`error`]: Error types and Result alias
//! - [`markers`]: Compiled marker patterns
//! - [`xml`]: XML utilities
//! - [`reader`]: `.docx` container reader with extensible element handlers
//! - [`normalize`]: Content blocks to paragraphs
//! - [`segmentation`]: Paragraph stream stages and chapter grouping
//! - [`book`]: The `BookLoader` aggregate
//! - [`cli`]: Command-line interface

pub mod book;
pub mod cli;
pub mod config;
pub mod error;
pub mod markers;
pub mod normalize;
pub mod reader;
pub mod segmentation;
pub mod types;
pub mod xml;

// Re-export main functions
pub use book::{read_chapters, BookLoader};

// Re-export commonly used items
pub use config::{load_config, LoaderConfig, MarkerConfig};
pub use error::{BookError, Result};
pub use markers::{Marker, MarkerSet};
pub use types::{Chapter, ContentBlock, ContentNode, TableCell};
