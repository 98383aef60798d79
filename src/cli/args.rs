use std::path::PathBuf;

use clap::Parser;

use crate::error::Result;
use crate::font::FontSource;
use crate::i18n::DEFAULT_LANGUAGE;
use crate::inspector::read_font_list;
use crate::models::{Config, OutputFormat};

/// FontInspect CLI arguments
///
/// Examples:
///   FontInspect MyFont.ttf                  # English report
///   FontInspect --lang cn MyFont.otf        # Chinese report
///   FontInspect --family "Noto Sans CJK SC" # Inspect an installed font
///   FontInspect --batch fonts.txt --format json
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "FontInspect",
    version,
    about = "Report character coverage, variable axes and metadata of OpenType/TrueType fonts"
)]
pub struct Args {
    /// Font files to inspect
    #[clap(value_name = "FONT")]
    pub fonts: Vec<PathBuf>,

    /// Inspect an installed font by family name
    #[clap(long = "family", short = 'f', value_name = "NAME")]
    pub family: Option<String>,

    /// Inspect every font listed in a file, one path per line
    #[clap(long = "batch", value_name = "FILE")]
    pub batch: Option<PathBuf>,

    /// Report language
    #[clap(long = "lang", short = 'l', default_value = DEFAULT_LANGUAGE)]
    pub language: String,

    /// Unicode range catalog to use instead of the built-in one
    #[clap(long = "ranges", value_name = "FILE")]
    pub ranges: Option<PathBuf>,

    /// Language pack to use instead of the built-in one
    #[clap(long = "lang-pack", value_name = "FILE")]
    pub lang_pack: Option<PathBuf>,

    /// Output format
    #[clap(long = "format", value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Face index inside a font collection (.ttc/.otc)
    #[clap(long = "index", default_value_t = 0)]
    pub face_index: u32,

    /// Enable debug output
    #[clap(long = "debug")]
    pub debug: bool,
}

impl Args {
    pub fn to_config(&self) -> Config {
        Config {
            debug_mode: self.debug,
            language: self.language.clone(),
            ranges_path: self.ranges.clone(),
            lang_pack_path: self.lang_pack.clone(),
            output_format: self.format,
            face_index: self.face_index,
        }
    }

    /// Fonts to inspect: positional files, then the batch list, then the family
    pub fn sources(&self) -> Result<Vec<FontSource>> {
        let mut sources: Vec<FontSource> = self.fonts.iter().cloned().map(FontSource::File).collect();

        if let Some(batch_file) = &self.batch {
            sources.extend(read_font_list(batch_file)?.into_iter().map(FontSource::File));
        }

        if let Some(family) = &self.family {
            sources.push(FontSource::Family(family.clone()));
        }

        Ok(sources)
    }
}
