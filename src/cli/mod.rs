//! Command-line interface handling and report output

mod args;
mod output;

pub use args::Args;
pub use output::{write_failure, write_json, write_text};
