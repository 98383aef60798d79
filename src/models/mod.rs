//! Data types shared across analysis, reporting and the CLI

pub mod config;
pub mod coverage;
pub mod font;
pub mod report;

pub use config::{Config, OutputFormat};
pub use coverage::{CodepointSet, CoverageEntry, CoverageTier, UnicodeRange};
pub use font::{Inspection, MetadataKey, MetadataRecord};
pub use report::Report;
