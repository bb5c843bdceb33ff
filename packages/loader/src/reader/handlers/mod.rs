//! Element handlers for WordprocessingML.

mod inline;
mod structural;

pub use inline::*;
pub use structural::*;
