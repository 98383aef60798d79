use std::collections::HashMap;
use std::fs;
use std::path::Path;

use lazy_static::lazy_static;
use serde::Deserialize;
use tracing::debug;

use super::DEFAULT_LANGUAGE;
use crate::error::{Error, Result};

const BUILTIN_LANG_PACK: &str = include_str!("../../resources/lang_pack.json");

lazy_static! {
    static ref EMPTY_PACK: LanguagePack = LanguagePack::default();
}

/// Report templates looked up in a [`LanguagePack`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKey {
    ReportTitle,
    CharCount,
    Axes,
    NoAxes,
    Section,
    SectionItem,
}

impl MessageKey {
    pub fn as_str(self) -> &'static str {
        match self {
            MessageKey::ReportTitle => "report_title",
            MessageKey::CharCount => "char_count",
            MessageKey::Axes => "axes",
            MessageKey::NoAxes => "no_axes",
            MessageKey::Section => "section",
            MessageKey::SectionItem => "section_item",
        }
    }
}

/// Templates and labels for one language
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LanguagePack {
    /// Range id to display name
    #[serde(default)]
    section_names: HashMap<String, String>,
    /// Metadata key (plus `title`) to label
    #[serde(default)]
    metadata: HashMap<String, String>,
    #[serde(flatten)]
    messages: HashMap<String, String>,
}

impl LanguagePack {
    pub fn message(&self, key: MessageKey) -> Option<&str> {
        self.messages.get(key.as_str()).map(String::as_str)
    }

    pub fn section_name(&self, range_id: &str) -> Option<&str> {
        self.section_names.get(range_id).map(String::as_str)
    }

    /// Label for a metadata key, or the section heading for `"title"`
    pub fn metadata_label(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str)
    }
}

/// Every loaded language pack
#[derive(Debug, Clone, Default)]
pub struct Localization {
    packs: HashMap<String, LanguagePack>,
}

impl Localization {
    /// Parse a JSON localization file; the default language must be present
    pub fn load(json: &str) -> Result<Self> {
        let packs: HashMap<String, LanguagePack> = serde_json::from_str(json)
            .map_err(|e| Error::Config(format!("invalid language pack: {}", e)))?;

        if !packs.contains_key(DEFAULT_LANGUAGE) {
            return Err(Error::Config(format!(
                "language pack has no '{}' entry",
                DEFAULT_LANGUAGE
            )));
        }

        debug!("Loaded {} language packs", packs.len());
        Ok(Self { packs })
    }

    /// Read and parse a localization file
    pub fn from_path(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("cannot read {}: {}", path.display(), e)))?;
        Self::load(&json)
    }

    /// The packs shipped with the binary
    pub fn builtin() -> Result<Self> {
        Self::load(BUILTIN_LANG_PACK)
    }

    pub fn has_language(&self, language: &str) -> bool {
        self.packs.contains_key(language)
    }

    /// Language codes, sorted
    pub fn languages(&self) -> Vec<&str> {
        let mut languages: Vec<_> = self.packs.keys().map(String::as_str).collect();
        languages.sort_unstable();
        languages
    }

    /// Pack for `language`, or the whole default pack if it is missing.
    ///
    /// Keys missing from the returned pack are never filled in from
    /// another language. A localization without a default pack resolves
    /// to an empty one.
    pub fn pack(&self, language: &str) -> &LanguagePack {
        self.packs
            .get(language)
            .or_else(|| self.packs.get(DEFAULT_LANGUAGE))
            .unwrap_or(&*EMPTY_PACK)
    }
}
