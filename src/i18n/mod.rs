//! Localized message templates and display names

pub mod pack;
pub mod template;

pub use pack::{LanguagePack, Localization, MessageKey};
pub use template::render;

/// Language used when a requested language has no pack
pub const DEFAULT_LANGUAGE: &str = "en";
