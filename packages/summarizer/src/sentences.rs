//! Sentence splitting.

use unicode_segmentation::UnicodeSegmentation;

/// Split one paragraph into sentences.
///
/// Boundaries follow the Unicode sentence rules: closing quotes stay with
/// their sentence, and a period inside a number or before a lowercase word
/// does not end one.
///
/// # Examples
/// ```
/// use bookloader_summarizer::split_sentences;
///
/// assert_eq!(
///     split_sentences("It rained. Did it? Yes!"),
///     ["It rained.", "Did it?", "Yes!"]
/// );
/// ```
#[must_use]
pub fn split_sentences(paragraph: &str) -> Vec<String> {
    paragraph
        .unicode_sentences()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Split newline-separated text into candidate sentences.
///
/// Blank sentences and sentences rejected by `filter` are dropped.
#[must_use]
pub fn get_sentences(text: &str, filter: &dyn Fn(&str) -> bool) -> Vec<String> {
    text.split('\n')
        .flat_map(split_sentences)
        .filter(|s| filter(s.as_str()))
        .collect()
}
