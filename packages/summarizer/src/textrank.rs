//! TextRank sentence ranking.
//!
//! Sentences become bag-of-words vectors over lower-cased word tokens.
//! Pairwise cosine similarities below the threshold are dropped, the
//! similarity matrix is row-normalized, and ranks are obtained by power
//! iteration from a uniform start.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::sentences::get_sentences;
use crate::Summarizer;

#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").expect("valid regex"));

/// Default damping factor.
pub const DEFAULT_DAMPING_FACTOR: f64 = 0.8;

/// Default minimum similarity for two sentences to be linked.
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.8;

/// Default number of power iterations.
pub const DEFAULT_ITERATIONS: usize = 80;

/// Extractive summarizer ranking sentences with TextRank.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextRank {
    pub damping_factor: f64,
    pub similarity_threshold: f64,
    pub iterations: usize,
}

impl Default for TextRank {
    fn default() -> Self {
        Self {
            damping_factor: DEFAULT_DAMPING_FACTOR,
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
            iterations: DEFAULT_ITERATIONS,
        }
    }
}

/// Sparse term-frequency vector of a sentence.
#[derive(Debug, Default)]
struct TermVector {
    terms: HashMap<String, f64>,
    norm: f64,
}

impl TermVector {
    fn new(sentence: &str) -> Self {
        let mut terms: HashMap<String, f64> = HashMap::new();
        for word in WORD.find_iter(sentence) {
            *terms.entry(word.as_str().to_lowercase()).or_default() += 1.0;
        }
        let norm = terms.values().map(|c| c * c).sum::<f64>().sqrt();
        Self { terms, norm }
    }

    fn cosine(&self, other: &Self) -> f64 {
        if self.norm == 0.0 || other.norm == 0.0 {
            return 0.0;
        }
        let dot: f64 = self
            .terms
            .iter()
            .filter_map(|(term, count)| other.terms.get(term).map(|c| c * count))
            .sum();
        (dot / (self.norm * other.norm)).abs()
    }
}

impl TextRank {
    /// Create a ranker with the given damping factor and default settings otherwise.
    #[must_use]
    pub fn new(damping_factor: f64) -> Self {
        Self {
            damping_factor,
            ..Self::default()
        }
    }

    /// Set the minimum similarity for two sentences to be linked.
    #[must_use]
    pub fn with_similarity_threshold(mut self, threshold: f64) -> Self {
        self.similarity_threshold = threshold;
        self
    }

    /// Set the number of power iterations.
    #[must_use]
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Rank sentences; a higher rank means more central.
    #[must_use]
    pub fn rank(&self, sentences: &[String]) -> Vec<f64> {
        let n = sentences.len();
        if n == 0 {
            return Vec::new();
        }

        let vectors: Vec<TermVector> = sentences.iter().map(|s| TermVector::new(s)).collect();

        let mut matrix = vec![vec![0.0; n]; n];
        for i in 0..n {
            for j in (i + 1)..n {
                let similarity = vectors[i].cosine(&vectors[j]);
                if similarity >= self.similarity_threshold {
                    matrix[i][j] = similarity;
                    matrix[j][i] = similarity;
                }
            }
        }

        normalize_rows(&mut matrix);
        for row in &mut matrix {
            for value in row.iter_mut() {
                *value *= self.damping_factor;
            }
        }
        normalize_rows(&mut matrix);

        let mut ranks = vec![1.0 / n as f64; n];
        for _ in 0..self.iterations {
            let mut next = vec![0.0; n];
            for (i, row) in matrix.iter().enumerate() {
                for (j, value) in row.iter().enumerate() {
                    next[j] += value * ranks[i];
                }
            }
            ranks = next;
        }

        ranks
    }
}

impl Summarizer for TextRank {
    fn summarize(
        &self,
        text: &str,
        sentence_count: usize,
        filter: &dyn Fn(&str) -> bool,
    ) -> String {
        let sentences = get_sentences(text, filter);
        let ranks = self.rank(&sentences);
        tracing::debug!(
            sentences = sentences.len(),
            selected = sentence_count.min(sentences.len()),
            "Ranked sentences"
        );

        select_top_preserving_order(&sentences, &ranks, sentence_count).join("\n")
    }
}

/// Divide every non-zero row by its sum.
fn normalize_rows(matrix: &mut [Vec<f64>]) {
    for row in matrix {
        let sum: f64 = row.iter().sum();
        if sum != 0.0 {
            for value in row.iter_mut() {
                *value /= sum;
            }
        }
    }
}

/// Pick the `k` highest-ranked texts and return them in their original order.
///
/// Ties go to the earlier text.
fn select_top_preserving_order<'a>(texts: &'a [String], ranks: &[f64], k: usize) -> Vec<&'a str> {
    let mut indices: Vec<usize> = (0..texts.len()).collect();
    indices.sort_by(|&a, &b| ranks[b].total_cmp(&ranks[a]));
    indices.truncate(k);
    indices.sort_unstable();
    indices.into_iter().map(|i| texts[i].as_str()).collect()
}
