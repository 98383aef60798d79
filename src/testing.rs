//! Test helpers: an in-memory table provider and a minimal TrueType writer

use std::collections::HashMap;

use crate::font::{FontTables, NameSelector};
use crate::models::CodepointSet;

/// Table provider backed by plain values
#[derive(Debug, Default, Clone)]
pub struct FakeTables {
    pub codepoints: Vec<u32>,
    pub axes: Vec<String>,
    pub names: HashMap<(u16, NameSelector), String>,
}

impl FakeTables {
    pub fn with_name(mut self, name_id: u16, selector: NameSelector, value: &str) -> Self {
        self.names.insert((name_id, selector), value.to_string());
        self
    }
}

impl FontTables for FakeTables {
    fn codepoints(&self) -> CodepointSet {
        CodepointSet::from_unsorted(self.codepoints.clone())
    }

    fn axis_tags(&self) -> Vec<String> {
        self.axes.clone()
    }

    fn name(&self, name_id: u16, selector: NameSelector) -> Option<String> {
        self.names.get(&(name_id, selector)).cloned()
    }
}

struct NameEntry {
    name_id: u16,
    selector: NameSelector,
    value: String,
}

/// Writes just enough of a TrueType font for `ttf-parser` to accept it:
/// `head`, `hhea`, `maxp`, a format 12 `cmap`, `name` and optionally `fvar`.
#[derive(Default)]
pub struct FontBuilder {
    codepoints: Vec<u32>,
    axes: Vec<[u8; 4]>,
    names: Vec<NameEntry>,
}

impl FontBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn codepoints(mut self, codepoints: impl IntoIterator<Item = u32>) -> Self {
        self.codepoints.extend(codepoints);
        self
    }

    pub fn axis(mut self, tag: &[u8; 4]) -> Self {
        self.axes.push(*tag);
        self
    }

    pub fn name(mut self, name_id: u16, selector: NameSelector, value: &str) -> Self {
        self.names.push(NameEntry { name_id, selector, value: value.to_string() });
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let mut tables: Vec<(&[u8; 4], Vec<u8>)> = vec![
            (b"cmap", self.cmap()),
            (b"head", head()),
            (b"hhea", hhea()),
            (b"maxp", maxp()),
            (b"name", self.name_table()),
        ];
        if !self.axes.is_empty() {
            tables.push((b"fvar", self.fvar()));
        }
        tables.sort_by(|a, b| a.0.cmp(b.0));

        let num_tables = tables.len() as u16;
        let mut font = Vec::new();
        push_u32(&mut font, 0x0001_0000);
        push_u16(&mut font, num_tables);
        push_u16(&mut font, 0); // searchRange
        push_u16(&mut font, 0); // entrySelector
        push_u16(&mut font, 0); // rangeShift

        let mut offset = 12 + 16 * tables.len();
        for (tag, data) in &tables {
            font.extend_from_slice(*tag);
            push_u32(&mut font, 0); // checksum
            push_u32(&mut font, offset as u32);
            push_u32(&mut font, data.len() as u32);
            offset += padded_len(data.len());
        }
        for (_, data) in &tables {
            font.extend_from_slice(data);
            font.resize(padded_len(font.len()), 0);
        }
        font
    }

    fn cmap(&self) -> Vec<u8> {
        let mut codepoints = self.codepoints.clone();
        codepoints.sort_unstable();
        codepoints.dedup();

        let mut groups: Vec<(u32, u32)> = Vec::new();
        for cp in codepoints {
            match groups.last_mut() {
                Some((_, end)) if *end + 1 == cp => *end = cp,
                _ => groups.push((cp, cp)),
            }
        }

        let mut data = Vec::new();
        push_u16(&mut data, 0); // version
        push_u16(&mut data, 1); // numTables
        push_u16(&mut data, 3); // Windows
        push_u16(&mut data, 10); // Unicode full repertoire
        push_u32(&mut data, 12);

        push_u16(&mut data, 12); // format
        push_u16(&mut data, 0);
        push_u32(&mut data, 16 + 12 * groups.len() as u32);
        push_u32(&mut data, 0); // language
        push_u32(&mut data, groups.len() as u32);
        for (start, end) in groups {
            push_u32(&mut data, start);
            push_u32(&mut data, end);
            push_u32(&mut data, 1); // startGlyphID
        }
        data
    }

    fn name_table(&self) -> Vec<u8> {
        let mut storage = Vec::new();
        let mut records = Vec::new();
        for entry in &self.names {
            let encoded: Vec<u8> = if entry.selector.platform_id == 3 {
                entry.value.encode_utf16().flat_map(|unit| unit.to_be_bytes()).collect()
            } else {
                entry.value.as_bytes().to_vec()
            };
            records.push((entry, storage.len() as u16, encoded.len() as u16));
            storage.extend(encoded);
        }

        let mut data = Vec::new();
        push_u16(&mut data, 0); // format
        push_u16(&mut data, records.len() as u16);
        push_u16(&mut data, 6 + 12 * records.len() as u16);
        for (entry, offset, length) in records {
            push_u16(&mut data, entry.selector.platform_id);
            push_u16(&mut data, entry.selector.encoding_id);
            push_u16(&mut data, entry.selector.language_id);
            push_u16(&mut data, entry.name_id);
            push_u16(&mut data, length);
            push_u16(&mut data, offset);
        }
        data.extend(storage);
        data
    }

    fn fvar(&self) -> Vec<u8> {
        let axis_count = self.axes.len() as u16;
        let mut data = Vec::new();
        push_u16(&mut data, 1); // majorVersion
        push_u16(&mut data, 0); // minorVersion
        push_u16(&mut data, 16); // axesArrayOffset
        push_u16(&mut data, 2); // reserved
        push_u16(&mut data, axis_count);
        push_u16(&mut data, 20); // axisSize
        push_u16(&mut data, 0); // instanceCount
        push_u16(&mut data, 4 + 4 * axis_count);
        for (i, tag) in self.axes.iter().enumerate() {
            data.extend_from_slice(tag);
            push_u32(&mut data, 100 << 16);
            push_u32(&mut data, 400 << 16);
            push_u32(&mut data, 900 << 16);
            push_u16(&mut data, 0); // flags
            push_u16(&mut data, 256 + i as u16);
        }
        data
    }
}

fn head() -> Vec<u8> {
    let mut data = Vec::new();
    push_u32(&mut data, 0x0001_0000); // version
    push_u32(&mut data, 0x0001_0000); // fontRevision
    push_u32(&mut data, 0); // checksumAdjustment
    push_u32(&mut data, 0x5F0F_3CF5); // magicNumber
    push_u16(&mut data, 0); // flags
    push_u16(&mut data, 1000); // unitsPerEm
    data.extend_from_slice(&[0; 16]); // created, modified
    data.extend_from_slice(&[0; 8]); // bbox
    push_u16(&mut data, 0); // macStyle
    push_u16(&mut data, 8); // lowestRecPPEM
    push_u16(&mut data, 2); // fontDirectionHint
    push_u16(&mut data, 0); // indexToLocFormat
    push_u16(&mut data, 0); // glyphDataFormat
    data
}

fn hhea() -> Vec<u8> {
    let mut data = Vec::new();
    push_u32(&mut data, 0x0001_0000); // version
    push_u16(&mut data, 800); // ascender
    push_u16(&mut data, (-200i16) as u16); // descender
    push_u16(&mut data, 0); // lineGap
    push_u16(&mut data, 500); // advanceWidthMax
    data.extend_from_slice(&[0; 6]); // minLeftSideBearing, minRightSideBearing, xMaxExtent
    push_u16(&mut data, 1); // caretSlopeRise
    push_u16(&mut data, 0); // caretSlopeRun
    push_u16(&mut data, 0); // caretOffset
    data.extend_from_slice(&[0; 8]); // reserved
    push_u16(&mut data, 0); // metricDataFormat
    push_u16(&mut data, 1); // numberOfHMetrics
    data
}

fn maxp() -> Vec<u8> {
    let mut data = Vec::new();
    push_u32(&mut data, 0x0000_5000);
    push_u16(&mut data, 2); // numGlyphs
    data
}

fn padded_len(len: usize) -> usize {
    (len + 3) & !3
}

fn push_u16(data: &mut Vec<u8>, value: u16) {
    data.extend_from_slice(&value.to_be_bytes());
}

fn push_u32(data: &mut Vec<u8>, value: u32) {
    data.extend_from_slice(&value.to_be_bytes());
}

#[test]
fn builder_writes_aligned_table_directory() {
    let font = FontBuilder::new().codepoints([0x41]).axis(b"wght").build();
    assert_eq!(&font[0..4], &[0x00, 0x01, 0x00, 0x00]);
    assert_eq!(u16::from_be_bytes([font[4], font[5]]), 6);
    assert_eq!(&font[12..16], b"cmap");
    assert_eq!(&font[28..32], b"fvar");
    assert_eq!(font.len() % 4, 0);
}
