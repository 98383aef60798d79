//! The inspection pipeline: load, analyze, assemble

pub mod batch;
pub mod pipeline;
pub mod resources;

pub use batch::read_font_list;
pub use pipeline::Inspector;
pub use resources::Resources;
