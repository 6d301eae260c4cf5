//! Surface → count aggregation.

use rustc_hash::FxHashMap;
use zhfreq_types::RankedEntry;

/// Occurrence counts keyed by surface string.
///
/// Entries are stored in first-occurrence order. Ranking sorts that order
/// stably, which is what breaks ties between equal counts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyMap {
    index: FxHashMap<String, usize>,
    entries: Vec<RankedEntry>,
}

impl FrequencyMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one occurrence of `surface`.
    pub fn record(&mut self, surface: &str) {
        match self.index.get(surface) {
            Some(&slot) => self.entries[slot].count += 1,
            None => {
                self.index.insert(surface.to_owned(), self.entries.len());
                self.entries.push(RankedEntry::new(surface, 1));
            }
        }
    }

    /// Occurrence count of `surface`, if it was recorded.
    pub fn get(&self, surface: &str) -> Option<usize> {
        self.index.get(surface).map(|&slot| self.entries[slot].count)
    }

    /// Number of distinct surfaces.
    #[inline(always)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing was recorded.
    #[inline(always)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = &RankedEntry> {
        self.entries.iter()
    }

    /// Highest count, or 0 when empty.
    pub fn max_count(&self) -> usize {
        self.entries.iter().map(|e| e.count).max().unwrap_or(0)
    }

    /// Keeps only entries occurring at least `min_frequency` times.
    pub fn retain_min(self, min_frequency: usize) -> Self {
        if self.entries.iter().all(|e| e.count >= min_frequency) {
            return self;
        }

        self.entries
            .into_iter()
            .filter(|e| e.count >= min_frequency)
            .collect()
    }

    /// Entries sorted by count descending, ties in first-occurrence order,
    /// truncated to `top_n`.
    pub fn ranked(&self, top_n: usize) -> Vec<RankedEntry> {
        let mut ranked = self.entries.clone();
        // `sort_by` is stable; equal counts keep insertion order.
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked.truncate(top_n);
        ranked
    }
}

impl FromIterator<RankedEntry> for FrequencyMap {
    fn from_iter<I: IntoIterator<Item = RankedEntry>>(iter: I) -> Self {
        let mut map = FrequencyMap::new();
        for entry in iter {
            match map.index.get(&entry.surface) {
                Some(&slot) => map.entries[slot].count += entry.count,
                None => {
                    map.index.insert(entry.surface.clone(), map.entries.len());
                    map.entries.push(entry);
                }
            }
        }
        map
    }
}

impl<'a> IntoIterator for &'a FrequencyMap {
    type Item = &'a RankedEntry;
    type IntoIter = core::slice::Iter<'a, RankedEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
