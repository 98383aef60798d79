//! FontInspect: character coverage, variable axes and metadata reports
//! for OpenType/TrueType fonts.

pub mod analysis;
pub mod cli;
pub mod error;
pub mod font;
pub mod i18n;
pub mod inspector;
pub mod models;
pub mod report;
pub mod utils;

#[cfg(test)]
mod testing;

pub use error::{Error, Result};
pub use inspector::{Inspector, Resources};
