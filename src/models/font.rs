use serde::ser::{Serialize, SerializeMap, Serializer};

use super::{CoverageEntry, Report};

/// Metadata fields read from the `name` table, in report order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetadataKey {
    Copyright,
    Family,
    Subfamily,
    UniqueId,
    FullName,
    Version,
    PostscriptName,
    Trademark,
}

impl MetadataKey {
    pub const ALL: [MetadataKey; 8] = [
        MetadataKey::Copyright,
        MetadataKey::Family,
        MetadataKey::Subfamily,
        MetadataKey::UniqueId,
        MetadataKey::FullName,
        MetadataKey::Version,
        MetadataKey::PostscriptName,
        MetadataKey::Trademark,
    ];

    /// OpenType name ID holding this field
    pub fn name_id(self) -> u16 {
        match self {
            MetadataKey::Copyright => 0,
            MetadataKey::Family => 1,
            MetadataKey::Subfamily => 2,
            MetadataKey::UniqueId => 3,
            MetadataKey::FullName => 4,
            MetadataKey::Version => 5,
            MetadataKey::PostscriptName => 6,
            MetadataKey::Trademark => 7,
        }
    }

    /// Key used in localization packs and JSON output
    pub fn as_str(self) -> &'static str {
        match self {
            MetadataKey::Copyright => "copyright",
            MetadataKey::Family => "family",
            MetadataKey::Subfamily => "subfamily",
            MetadataKey::UniqueId => "unique_id",
            MetadataKey::FullName => "full_name",
            MetadataKey::Version => "version",
            MetadataKey::PostscriptName => "postscript_name",
            MetadataKey::Trademark => "trademark",
        }
    }

    fn index(self) -> usize {
        usize::from(self.name_id())
    }
}

/// Values for every [`MetadataKey`]; a missing record is an empty string
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataRecord {
    values: [String; 8],
}

impl MetadataRecord {
    pub fn get(&self, key: MetadataKey) -> &str {
        &self.values[key.index()]
    }

    pub fn set(&mut self, key: MetadataKey, value: String) {
        self.values[key.index()] = value;
    }

    /// All fields in fixed key order
    pub fn iter(&self) -> impl Iterator<Item = (MetadataKey, &str)> + '_ {
        MetadataKey::ALL.into_iter().map(move |key| (key, self.get(key)))
    }
}

impl Serialize for MetadataRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(MetadataKey::ALL.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key.as_str(), value)?;
        }
        map.end()
    }
}

/// Everything produced by inspecting one font
#[derive(Debug, Clone, serde::Serialize)]
pub struct Inspection {
    /// Label the font was loaded under, usually its path
    pub font: String,
    pub char_count: usize,
    pub axes: Vec<String>,
    pub coverage: Vec<CoverageEntry>,
    pub metadata: MetadataRecord,
    pub report: Report,
}
