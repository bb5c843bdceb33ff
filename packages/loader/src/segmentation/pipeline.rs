//! The ordered segmentation pipeline.

use super::stage::Stage;
use super::stages::{BisectionJoin, HeaderDedup, Removal, SliceTrim, SpanFilter};
use crate::markers::MarkerSet;

/// An ordered list of stages applied to the paragraph stream.
pub struct SegmentationPipeline {
    stages: Vec<Box<dyn Stage>>,
}

impl SegmentationPipeline {
    /// Build the standard pipeline for a marker set.
    ///
    /// The order is fixed: slice, header, non-applicable spans, references,
    /// undesirables, bisections. Later stages see the output of earlier ones.
    #[must_use]
    pub fn from_markers(markers: &MarkerSet) -> Self {
        Self {
            stages: vec![
                Box::new(SliceTrim::new(markers.slice.clone())),
                Box::new(HeaderDedup::new(markers.header.clone())),
                Box::new(SpanFilter::new(markers.na_span.clone())),
                Box::new(Removal::references(markers.references.clone())),
                Box::new(Removal::undesirables(markers.undesirables.clone())),
                Box::new(BisectionJoin),
            ],
        }
    }

    /// Names of the stages, in application order.
    #[must_use]
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }

    /// Run every stage over the paragraphs.
    #[must_use]
    pub fn run(&self, paragraphs: Vec<String>) -> Vec<String> {
        self.stages.iter().fold(paragraphs, |paragraphs, stage| {
            let before = paragraphs.len();
            let after = stage.apply(paragraphs);
            tracing::debug!(
                stage = stage.name(),
                before,
                after = after.len(),
                "Applied segmentation stage"
            );
            after
        })
    }
}
