use serde::Serialize;

/// Highest valid Unicode scalar value
pub const MAX_CODEPOINT: u32 = 0x10FFFF;

/// A named, inclusive interval of codepoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnicodeRange {
    /// Registry key, also used to look up the display name
    pub id: String,
    /// First codepoint of the range
    pub start: u32,
    /// Last codepoint of the range (inclusive)
    pub end: u32,
}

impl UnicodeRange {
    pub fn new(id: impl Into<String>, start: u32, end: u32) -> Self {
        Self { id: id.into(), start, end }
    }

    /// Number of codepoints in the range, zero for an inverted range
    pub fn size(&self) -> u32 {
        if self.start > self.end {
            0
        } else {
            self.end - self.start + 1
        }
    }

    pub fn contains(&self, codepoint: u32) -> bool {
        self.start <= codepoint && codepoint <= self.end
    }
}

/// Sorted, deduplicated set of codepoints encoded by a font
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodepointSet {
    codepoints: Vec<u32>,
}

impl CodepointSet {
    /// Build a set from codepoints in any order, dropping values above U+10FFFF
    pub fn from_unsorted(mut codepoints: Vec<u32>) -> Self {
        codepoints.retain(|&cp| cp <= MAX_CODEPOINT);
        codepoints.sort_unstable();
        codepoints.dedup();
        Self { codepoints }
    }

    pub fn len(&self) -> usize {
        self.codepoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codepoints.is_empty()
    }

    pub fn contains(&self, codepoint: u32) -> bool {
        self.codepoints.binary_search(&codepoint).is_ok()
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.codepoints.iter().copied()
    }

    /// Count codepoints in `start..=end` with two binary searches
    pub fn count_between(&self, start: u32, end: u32) -> usize {
        if start > end {
            return 0;
        }
        let lower = self.codepoints.partition_point(|&cp| cp < start);
        let upper = self.codepoints.partition_point(|&cp| cp <= end);
        upper - lower
    }
}

impl FromIterator<u32> for CodepointSet {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        Self::from_unsorted(iter.into_iter().collect())
    }
}

/// Coverage band used to classify how well a font supports a range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CoverageTier {
    /// 90% and above
    Full,
    /// 60% up to 90%
    High,
    /// 30% up to 60%
    Partial,
    /// Below 30%
    Low,
}

impl CoverageTier {
    pub fn from_percent(percent: f64) -> Self {
        match percent {
            p if p >= 90.0 => CoverageTier::Full,
            p if p >= 60.0 => CoverageTier::High,
            p if p >= 30.0 => CoverageTier::Partial,
            _ => CoverageTier::Low,
        }
    }
}

/// Supported character statistics for one registry range
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoverageEntry {
    pub range_id: String,
    pub count: u32,
    pub total: u32,
    pub percent: f64,
    pub tier: CoverageTier,
}

impl CoverageEntry {
    /// Build an entry, treating an empty range as 0% covered
    pub fn new(range_id: impl Into<String>, count: u32, total: u32) -> Self {
        let percent = if total == 0 {
            0.0
        } else {
            f64::from(count) / f64::from(total) * 100.0
        };

        Self {
            range_id: range_id.into(),
            count,
            total,
            percent,
            tier: CoverageTier::from_percent(percent),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codepoint_set_sorts_dedups_and_clamps() {
        let set = CodepointSet::from_unsorted(vec![0x41, 0x30, 0x41, 0x110000, 0x10FFFF]);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![0x30, 0x41, 0x10FFFF]);
        assert_eq!(set.len(), 3);
        assert!(set.contains(0x41));
        assert!(!set.contains(0x110000));
    }

    #[test]
    fn count_between_is_inclusive() {
        let set: CodepointSet = [0x30, 0x31, 0x39, 0x3A, 0x41].into_iter().collect();
        assert_eq!(set.count_between(0x30, 0x39), 3);
        assert_eq!(set.count_between(0x3A, 0x3A), 1);
        assert_eq!(set.count_between(0x42, 0x50), 0);
        assert_eq!(set.count_between(0x39, 0x30), 0);
    }

    #[test]
    fn range_size() {
        assert_eq!(UnicodeRange::new("digit", 0x30, 0x39).size(), 10);
        assert_eq!(UnicodeRange::new("single", 0x41, 0x41).size(), 1);
        assert_eq!(UnicodeRange::new("all", 0, 0x10FFFF).size(), 0x110000);
    }

    #[test]
    fn coverage_entry_percent() {
        let entry = CoverageEntry::new("digit", 2, 10);
        assert_eq!(entry.percent, 20.0);
        assert_eq!(entry.tier, CoverageTier::Low);

        let empty = CoverageEntry::new("empty", 0, 0);
        assert_eq!(empty.percent, 0.0);
    }

    #[test]
    fn tier_thresholds() {
        assert_eq!(CoverageTier::from_percent(100.0), CoverageTier::Full);
        assert_eq!(CoverageTier::from_percent(90.0), CoverageTier::Full);
        assert_eq!(CoverageTier::from_percent(89.99), CoverageTier::High);
        assert_eq!(CoverageTier::from_percent(60.0), CoverageTier::High);
        assert_eq!(CoverageTier::from_percent(30.0), CoverageTier::Partial);
        assert_eq!(CoverageTier::from_percent(29.9), CoverageTier::Low);
        assert_eq!(CoverageTier::from_percent(0.0), CoverageTier::Low);
    }
}
