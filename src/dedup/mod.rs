//! Deduplication module for UDdup
//!
//! The [`Deduplicator`] walks input URLs one at a time and decides, for each,
//! whether it is redundant with a URL already in the [`KeptSet`], whether it
//! starts a new pattern, or whether it should replace a kept URL because it
//! is a strictly better representative of the same pattern.
//!
//! # Example
//!
//! ```
//! use uddup::dedup::{Deduplicator, KeptSet};
//!
//! let mut kept = KeptSet::new();
//! let mut dedup = Deduplicator::new(&mut kept);
//! dedup.process("https://example.com/shop/view?id=1");
//! dedup.process("https://example.com/shop/view?id=2");
//! dedup.process("https://example.com/shop/view?id=1&cat=2");
//!
//! let urls: Vec<String> = dedup.snapshot().iter().map(|u| u.to_string()).collect();
//! assert_eq!(urls, vec!["https://example.com/shop/view?id=1&cat=2"]);
//! ```

mod kept_set;
mod query;
mod stats;

pub use kept_set::KeptSet;
pub use query::{all_params_exist, has_more_params, query_keys};
pub use stats::DedupStats;

use crate::url::{classify_path, ParsedUrl, PathClass};
use tracing::{debug, trace};

/// Decides which URLs of a stream are worth keeping
///
/// The caller owns the [`KeptSet`] and lends it for the duration of the run.
pub struct Deduplicator<'a> {
    kept: &'a mut KeptSet,
    stats: DedupStats,
}

impl<'a> Deduplicator<'a> {
    pub fn new(kept: &'a mut KeptSet) -> Self {
        Self {
            kept,
            stats: DedupStats::default(),
        }
    }

    /// Consumes one raw URL line
    ///
    /// Trailing whitespace is trimmed and blank lines are skipped. Any other
    /// string is accepted: parsing cannot fail, malformed input just lands in
    /// one of the keep or drop branches.
    pub fn process(&mut self, url_text: &str) {
        self.stats.lines_seen += 1;

        let line = url_text.trim_end();
        if line.is_empty() {
            self.stats.blank += 1;
            return;
        }

        let url = ParsedUrl::parse(line);
        match classify_path(url.trimmed_path()) {
            PathClass::Root => {
                debug!("Keeping root URL: {}", url);
                self.stats.root_kept += 1;
                self.kept.insert(url);
            }
            PathClass::Ignored => {
                debug!("Ignoring static asset: {}", url);
                self.stats.ignored += 1;
            }
            PathClass::WebPage => {
                debug!("Keeping web page: {}", url);
                self.stats.page_kept += 1;
                self.kept.insert(url);
            }
            PathClass::SingleSegment => {
                debug!("Keeping single-segment URL: {}", url);
                self.stats.single_segment_kept += 1;
                self.kept.insert(url);
            }
            PathClass::Patterned { pattern } => self.process_patterned(url, &pattern),
        }
    }

    /// Returns the kept URLs sorted by their canonical string form
    pub fn snapshot(&self) -> Vec<ParsedUrl> {
        self.kept.sorted()
    }

    pub fn stats(&self) -> &DedupStats {
        &self.stats
    }

    fn process_patterned(&mut self, url: ParsedUrl, pattern: &str) {
        // Snapshot taken before any mutation below
        let existing = self.kept.matching_pattern(pattern);

        if existing.is_empty() {
            debug!("New pattern '{}': {}", pattern, url);
            self.stats.new_pattern += 1;
            self.kept.insert(url);
            return;
        }

        if !url.has_query() {
            debug!("Dropping {}: pattern '{}' already covered", url, pattern);
            self.stats.redundant += 1;
            return;
        }

        let mut acted = false;
        for old in &existing {
            // Favor URLs with parameters over those without
            if !old.has_query()
                || (all_params_exist(old.query(), url.query())
                    && has_more_params(old.query(), url.query()))
            {
                self.replace(old, &url);
                acted = true;
            } else if !all_params_exist(url.query(), old.query()) {
                trace!("{} has parameters that {} lacks", url, old);
                if self.kept.insert(url.clone()) {
                    debug!("Keeping query variant of pattern '{}': {}", pattern, url);
                    self.stats.variants_added += 1;
                    acted = true;
                }
            }
        }

        if !acted {
            debug!("Dropping {}: no new parameters", url);
            self.stats.redundant += 1;
        }
    }

    fn replace(&mut self, old: &ParsedUrl, new: &ParsedUrl) {
        debug!("Replacing {} with {}", old, new);
        if self.kept.remove(old) {
            self.stats.replaced += 1;
        }
        self.kept.insert(new.clone());
    }
}
