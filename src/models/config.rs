use std::fmt;
use std::path::PathBuf;

use crate::i18n::DEFAULT_LANGUAGE;

/// Configuration for an inspection run
#[derive(Debug, Clone)]
pub struct Config {
    /// Enable debug output
    pub debug_mode: bool,
    /// Language code used for report labels
    pub language: String,
    /// Range catalog to load instead of the built-in one
    pub ranges_path: Option<PathBuf>,
    /// Localization pack to load instead of the built-in one
    pub lang_pack_path: Option<PathBuf>,
    /// How reports are printed
    pub output_format: OutputFormat,
    /// Face index inside a font collection
    pub face_index: u32,
}

/// Output formats for inspection results
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Localized report lines
    Text,
    /// The full inspection as pretty-printed JSON
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl Config {
    /// Create a new configuration with default settings
    pub fn new(debug_mode: bool) -> Self {
        Self {
            debug_mode,
            language: DEFAULT_LANGUAGE.to_string(),
            ranges_path: None,
            lang_pack_path: None,
            output_format: OutputFormat::Text,
            face_index: 0,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(false)
    }
}
