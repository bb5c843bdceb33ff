//! Paragraph stream segmentation.
//!
//! The paragraph stream passes through six stages in a fixed order:
//!
//! 1. [`SliceTrim`]: trim paragraphs outside the slice markers
//! 2. [`HeaderDedup`]: collapse adjacent repeated running headers
//! 3. [`SpanFilter`]: drop non-applicable spans
//! 4. [`Removal`] of references
//! 5. [`Removal`] of undesirables
//! 6. [`BisectionJoin`]: rejoin words split by a hyphen and a line break
//!
//! Surviving paragraphs are then numbered by [`ChapterIndexer`] and grouped
//! into chapters.

mod chapters;
mod pipeline;
mod stage;
mod stages;

pub use chapters::{group_chapters, ChapterIndexer};
pub use pipeline::SegmentationPipeline;
pub use stage::Stage;
pub use stages::{
    join_bisections, BisectionJoin, HeaderDedup, Removal, SliceTrim, SpanFilter, SpanValidator,
};
