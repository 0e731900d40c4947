//! Per-run decision counters

/// Counts of how each input line was handled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DedupStats {
    /// Every line handed to the deduplicator, blank ones included
    pub lines_seen: u64,

    /// Lines that were empty after trimming trailing whitespace
    pub blank: u64,

    /// URLs with an empty path, kept unconditionally
    pub root_kept: u64,

    /// URLs dropped because of a static asset suffix
    pub ignored: u64,

    /// URLs kept because of a web page suffix
    pub page_kept: u64,

    /// URLs with a single path segment, kept unconditionally
    pub single_segment_kept: u64,

    /// URLs that started a new pattern
    pub new_pattern: u64,

    /// URLs dropped as redundant with a kept URL
    pub redundant: u64,

    /// Kept URLs that were replaced by a better representative
    pub replaced: u64,

    /// URLs kept next to an existing one with a different query shape
    pub variants_added: u64,
}

impl DedupStats {
    /// Number of non-blank URLs processed
    pub fn urls_processed(&self) -> u64 {
        self.lines_seen - self.blank
    }

    /// Number of URLs dropped without ever being kept
    pub fn dropped(&self) -> u64 {
        self.ignored + self.redundant
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_counts() {
        let stats = DedupStats {
            lines_seen: 10,
            blank: 2,
            ignored: 3,
            redundant: 1,
            ..Default::default()
        };

        assert_eq!(stats.urls_processed(), 8);
        assert_eq!(stats.dropped(), 4);
    }
}
