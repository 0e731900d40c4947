use crate::url::ParsedUrl;
use std::collections::{BTreeMap, HashMap};

/// The working set of URLs that survived deduplication so far
///
/// Membership is by component-wise equality of [`ParsedUrl`]. Members are
/// iterated in insertion order so that the decision procedure gives the same
/// answer on every run; re-inserting a kept URL keeps its original position.
#[derive(Debug, Default, Clone)]
pub struct KeptSet {
    /// URL -> insertion sequence number
    index: HashMap<ParsedUrl, u64>,
    /// Insertion sequence number -> URL
    order: BTreeMap<u64, ParsedUrl>,
    next_seq: u64,
}

impl KeptSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn contains(&self, url: &ParsedUrl) -> bool {
        self.index.contains_key(url)
    }

    /// Adds a URL; returns false if an equal URL was already kept
    pub fn insert(&mut self, url: ParsedUrl) -> bool {
        if self.index.contains_key(&url) {
            return false;
        }

        let seq = self.next_seq;
        self.next_seq += 1;
        self.order.insert(seq, url.clone());
        self.index.insert(url, seq);
        true
    }

    /// Removes a URL; returns false if it was not kept
    pub fn remove(&mut self, url: &ParsedUrl) -> bool {
        match self.index.remove(url) {
            Some(seq) => {
                self.order.remove(&seq);
                true
            }
            None => false,
        }
    }

    /// Iterates the kept URLs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &ParsedUrl> {
        self.order.values()
    }

    /// Returns a snapshot of every kept URL whose trimmed path starts with
    /// `pattern`
    ///
    /// This is a plain string prefix test: `"a/b"` also matches `"a/bc/d"`.
    /// The result is owned so the caller can mutate the set while walking it.
    pub fn matching_pattern(&self, pattern: &str) -> Vec<ParsedUrl> {
        self.iter()
            .filter(|url| url.trimmed_path().starts_with(pattern))
            .cloned()
            .collect()
    }

    /// Returns every kept URL sorted by its canonical string form
    pub fn sorted(&self) -> Vec<ParsedUrl> {
        let mut urls: Vec<(String, ParsedUrl)> = self
            .iter()
            .map(|url| (url.to_string(), url.clone()))
            .collect();
        urls.sort_by(|a, b| a.0.cmp(&b.0));
        urls.into_iter().map(|(_, url)| url).collect()
    }
}
