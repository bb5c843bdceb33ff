//! Extractive summarization of chapter text.
//!
//! The [`Summarizer`] trait is the boundary between chapter extraction and
//! summarization: it takes newline-joined chapter text and returns the
//! selected sentences, one per line. [`TextRank`] is the bundled
//! implementation.
//!
//! # Example
//!
//! ```
//! use bookloader_summarizer::{accept_all, Summarizer, TextRank};
//!
//! let text = "The cat sat on the mat. The cat sat on the mat today.\nStocks fell.";
//! let summary = TextRank::default().summarize(text, 1, &accept_all);
//! assert_eq!(summary.lines().count(), 1);
//! ```

pub mod sentences;
pub mod textrank;

pub use sentences::{get_sentences, split_sentences};
pub use textrank::TextRank;

/// Selects the most representative sentences of a text.
pub trait Summarizer {
    /// Summarize `text` into at most `sentence_count` sentences.
    ///
    /// Only sentences accepted by `filter` are candidates. Selected
    /// sentences keep their original order and are joined by newlines.
    fn summarize(&self, text: &str, sentence_count: usize, filter: &dyn Fn(&str) -> bool)
        -> String;
}

/// A sentence filter accepting every sentence.
#[must_use]
pub fn accept_all(_sentence: &str) -> bool {
    true
}
