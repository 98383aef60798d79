//! Localized report assembly

pub mod assembler;

pub use assembler::{assemble, format_percent, ReportInput, PERCENT_PRECISION};
