//! Unicode range catalog and coverage statistics

pub mod coverage;
pub mod registry;

pub use coverage::{analyze, count_range_linear};
pub use registry::RangeRegistry;
