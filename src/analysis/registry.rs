use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::coverage::MAX_CODEPOINT;
use crate::models::UnicodeRange;

const BUILTIN_RANGES: &str = include_str!("../../resources/unicode_ranges.json");

/// Named Unicode ranges in definition order
#[derive(Debug, Clone, Default)]
pub struct RangeRegistry {
    ranges: Vec<UnicodeRange>,
    index: HashMap<String, usize>,
}

/// `{ "id": [start, end], ... }` with source order and duplicates kept
struct RawRanges(Vec<(String, (i64, i64))>);

struct RawRangesVisitor;

impl<'de> Visitor<'de> for RawRangesVisitor {
    type Value = RawRanges;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a map of range ids to [start, end] pairs")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> std::result::Result<RawRanges, A::Error> {
        let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some(entry) = access.next_entry::<String, (i64, i64)>()? {
            entries.push(entry);
        }
        Ok(RawRanges(entries))
    }
}

impl<'de> Deserialize<'de> for RawRanges {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_map(RawRangesVisitor)
    }
}

fn to_codepoint(id: &str, value: i64) -> Result<u32> {
    u32::try_from(value)
        .ok()
        .filter(|&cp| cp <= MAX_CODEPOINT)
        .ok_or_else(|| Error::Config(format!("range '{}' bound {} is outside U+0000..U+10FFFF", id, value)))
}

impl RangeRegistry {
    /// Build a registry, rejecting inverted ranges and duplicate ids
    pub fn new(ranges: Vec<UnicodeRange>) -> Result<Self> {
        let mut index = HashMap::with_capacity(ranges.len());

        for (position, range) in ranges.iter().enumerate() {
            if range.start > range.end {
                return Err(Error::Config(format!(
                    "range '{}' starts after it ends ({:#X} > {:#X})",
                    range.id, range.start, range.end
                )));
            }
            if range.end > MAX_CODEPOINT {
                return Err(Error::Config(format!("range '{}' ends beyond U+10FFFF", range.id)));
            }
            if index.insert(range.id.clone(), position).is_some() {
                return Err(Error::Config(format!("duplicate range id '{}'", range.id)));
            }
        }

        Ok(Self { ranges, index })
    }

    /// Parse a JSON range catalog
    pub fn load(json: &str) -> Result<Self> {
        let RawRanges(entries) = serde_json::from_str(json)
            .map_err(|e| Error::Config(format!("invalid range catalog: {}", e)))?;

        let ranges = entries
            .into_iter()
            .map(|(id, (start, end))| {
                let start = to_codepoint(&id, start)?;
                let end = to_codepoint(&id, end)?;
                Ok(UnicodeRange::new(id, start, end))
            })
            .collect::<Result<Vec<_>>>()?;

        let registry = Self::new(ranges)?;
        debug!("Loaded {} Unicode ranges", registry.len());
        Ok(registry)
    }

    /// Read and parse a range catalog file
    pub fn from_path(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("cannot read {}: {}", path.display(), e)))?;
        Self::load(&json)
    }

    /// The catalog shipped with the binary
    pub fn builtin() -> Result<Self> {
        Self::load(BUILTIN_RANGES)
    }

    pub fn get(&self, id: &str) -> Option<&UnicodeRange> {
        self.index.get(id).map(|&position| &self.ranges[position])
    }

    /// Ranges in definition order
    pub fn iter(&self) -> impl Iterator<Item = &UnicodeRange> + '_ {
        self.ranges.iter()
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}
