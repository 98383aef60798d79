//! Font loading, table access and metadata extraction

pub mod axes;
pub mod metadata;
pub mod source;
pub mod tables;

pub use axes::axes;
pub use metadata::extract;
pub use source::{FontSource, LoadedFont};
pub use tables::{FontTables, NameSelector, ParsedFont};
