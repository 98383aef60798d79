use ttf_parser::{Face, PlatformId, Tag};

use crate::error::{Error, Result};
use crate::models::CodepointSet;

/// Platform/encoding/language triple identifying a `name` record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NameSelector {
    pub platform_id: u16,
    pub encoding_id: u16,
    pub language_id: u16,
}

impl NameSelector {
    /// Windows platform, Unicode BMP encoding, US English
    pub const WINDOWS_US_ENGLISH: NameSelector = NameSelector {
        platform_id: 3,
        encoding_id: 1,
        language_id: 0x0409,
    };
}

/// Typed access to the font tables an inspection needs
pub trait FontTables {
    /// Union of every character map subtable
    fn codepoints(&self) -> CodepointSet;

    /// Variation axis tags in declaration order, empty without `fvar`
    fn axis_tags(&self) -> Vec<String>;

    /// Decoded string for an exact `name` record match
    fn name(&self, name_id: u16, selector: NameSelector) -> Option<String>;
}

/// A font face parsed by `ttf-parser`, borrowing the raw bytes
pub struct ParsedFont<'a> {
    face: Face<'a>,
}

impl<'a> ParsedFont<'a> {
    /// Parse face `index` of a font file or collection
    pub fn parse(data: &'a [u8], index: u32) -> Result<Self> {
        let face = Face::parse(data, index).map_err(|e| Error::FontLoad(e.to_string()))?;

        if face.tables().cmap.is_none() {
            return Err(Error::FontLoad("font has no readable cmap table".to_string()));
        }

        Ok(Self { face })
    }
}

fn platform_code(platform_id: PlatformId) -> u16 {
    match platform_id {
        PlatformId::Unicode => 0,
        PlatformId::Macintosh => 1,
        PlatformId::Iso => 2,
        PlatformId::Windows => 3,
        PlatformId::Custom => 4,
    }
}

fn tag_to_string(tag: Tag) -> String {
    String::from_utf8_lossy(&tag.to_bytes()).into_owned()
}

impl FontTables for ParsedFont<'_> {
    fn codepoints(&self) -> CodepointSet {
        let mut codepoints = Vec::new();
        if let Some(cmap) = self.face.tables().cmap {
            for subtable in cmap.subtables {
                subtable.codepoints(|cp| codepoints.push(cp));
            }
        }
        CodepointSet::from_unsorted(codepoints)
    }

    fn axis_tags(&self) -> Vec<String> {
        self.face
            .variation_axes()
            .into_iter()
            .map(|axis| tag_to_string(axis.tag))
            .collect()
    }

    fn name(&self, name_id: u16, selector: NameSelector) -> Option<String> {
        self.face
            .names()
            .into_iter()
            .find(|record| {
                record.name_id == name_id
                    && platform_code(record.platform_id) == selector.platform_id
                    && record.encoding_id == selector.encoding_id
                    && record.language_id == selector.language_id
            })
            .and_then(|record| record.to_string())
    }
}
