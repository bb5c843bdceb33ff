//! The stage abstraction of the segmentation pipeline.

/// A transform from a paragraph sequence to a paragraph sequence.
///
/// Stages keep no state between calls; any state a stage needs while
/// walking the stream lives only for the duration of [`Stage::apply`].
pub trait Stage: Send + Sync {
    /// Short name used in diagnostics.
    fn name(&self) -> &'static str;

    /// Transform the paragraphs, preserving their relative order.
    fn apply(&self, paragraphs: Vec<String>) -> Vec<String>;
}
