use crate::models::{CodepointSet, CoverageEntry, UnicodeRange};

use super::RangeRegistry;

/// Compute coverage for every registry range, in registry order.
///
/// Each range is counted with two binary searches over the sorted
/// codepoint set, so large CJK fonts cost `O(ranges * log n)`.
pub fn analyze(codepoints: &CodepointSet, registry: &RangeRegistry) -> Vec<CoverageEntry> {
    registry
        .iter()
        .map(|range| {
            let count = codepoints.count_between(range.start, range.end);
            entry_for(range, count)
        })
        .collect()
}

/// Count codepoints inside `range` by scanning every codepoint
pub fn count_range_linear(codepoints: &CodepointSet, range: &UnicodeRange) -> usize {
    codepoints.iter().filter(|&cp| range.contains(cp)).count()
}

fn entry_for(range: &UnicodeRange, count: usize) -> CoverageEntry {
    // A range never holds more than 0x110000 codepoints, so the count fits.
    let count = u32::try_from(count).unwrap_or(u32::MAX).min(range.size());
    CoverageEntry::new(range.id.clone(), count, range.size())
}
