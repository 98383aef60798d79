use std::fmt;
use std::fs;
use std::path::PathBuf;

use font_kit::family_name::FamilyName;
use font_kit::handle::Handle;
use font_kit::properties::Properties;
use font_kit::source::SystemSource;
use tracing::debug;

use crate::error::{Error, Result};

/// Where the bytes of a font come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontSource {
    /// A font file or collection on disk
    File(PathBuf),
    /// An installed font, looked up by family name
    Family(String),
}

impl fmt::Display for FontSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontSource::File(path) => write!(f, "{}", path.display()),
            FontSource::Family(family) => write!(f, "family '{}'", family),
        }
    }
}

/// Raw font bytes plus the face to read from them
#[derive(Debug, Clone)]
pub struct LoadedFont {
    /// Path or family name shown in reports
    pub label: String,
    pub data: Vec<u8>,
    pub face_index: u32,
}

/// Check the sfnt signature: TrueType, CFF OpenType, Apple `true`, or a collection
pub fn has_font_magic(data: &[u8]) -> bool {
    matches!(
        data.get(..4),
        Some([0x00, 0x01, 0x00, 0x00])
            | Some([0x4F, 0x54, 0x54, 0x4F])
            | Some([0x74, 0x72, 0x75, 0x65])
            | Some([0x74, 0x74, 0x63, 0x66])
    )
}

impl FontSource {
    /// Read the font bytes; `face_index` applies to file sources
    pub fn load(&self, face_index: u32) -> Result<LoadedFont> {
        match self {
            FontSource::File(path) => {
                if !path.is_file() {
                    return Err(Error::InvalidPath(path.clone()));
                }

                let data = fs::read(path)?;
                if !has_font_magic(&data) {
                    return Err(Error::FontLoad(format!(
                        "{} is not an OpenType or TrueType font",
                        path.display()
                    )));
                }

                debug!("Read {} bytes from {}", data.len(), path.display());
                Ok(LoadedFont {
                    label: path.display().to_string(),
                    data,
                    face_index,
                })
            }
            FontSource::Family(family) => load_system_font(family),
        }
    }
}

fn load_system_font(family: &str) -> Result<LoadedFont> {
    let handle = SystemSource::new()
        .select_best_match(&[FamilyName::Title(family.to_string())], &Properties::new())
        .map_err(|e| Error::FontNotFound(format!("{}: {}", family, e)))?;

    match handle {
        Handle::Path { path, font_index } => {
            debug!("Family '{}' resolved to {} (face {})", family, path.display(), font_index);
            let data = fs::read(&path)?;
            Ok(LoadedFont {
                label: path.display().to_string(),
                data,
                face_index: font_index,
            })
        }
        Handle::Memory { bytes, font_index } => {
            debug!("Family '{}' resolved to an in-memory font (face {})", family, font_index);
            Ok(LoadedFont {
                label: family.to_string(),
                data: bytes.to_vec(),
                face_index: font_index,
            })
        }
    }
}
