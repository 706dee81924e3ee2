//! Per-position load tallies.
//!
//! A [`LoadTally`] counts how many times each bit position was hit while
//! inserting. Comparing the number of distinct positions with the total
//! number of hits shows how evenly a hash family spreads keys over the
//! table: an ideal family touches `m·(1 − e^{−kn/m})` positions.

use crate::filters::BloomFilter;
use crate::hash::HashStrategy;
use std::collections::BTreeMap;
use std::fmt;

/// Hit counts keyed by bit position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadTally {
    hits: BTreeMap<usize, u64>,
    total: u64,
}

impl LoadTally {
    /// Create an empty tally.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one hit on `position`.
    pub fn record(&mut self, position: usize) {
        *self.hits.entry(position).or_insert(0) += 1;
        self.total += 1;
    }

    /// Count one hit on every position `key` maps to in `filter`.
    pub fn record_key<S: HashStrategy>(&mut self, filter: &BloomFilter<S>, key: u64) {
        for position in filter.positions(key) {
            self.record(position);
        }
    }

    /// Number of positions hit at least once.
    #[must_use]
    pub fn distinct_positions(&self) -> usize {
        self.hits.len()
    }

    /// Total number of recorded hits.
    #[must_use]
    pub fn total_hits(&self) -> u64 {
        self.total
    }

    /// Hits recorded on `position`.
    #[must_use]
    pub fn hits(&self, position: usize) -> u64 {
        self.hits.get(&position).copied().unwrap_or(0)
    }

    /// Largest hit count on any one position.
    #[must_use]
    pub fn max_load(&self) -> u64 {
        self.hits.values().copied().max().unwrap_or(0)
    }

    /// Mean hits per touched position, `None` when nothing was recorded.
    #[must_use]
    pub fn mean_load(&self) -> Option<f64> {
        if self.hits.is_empty() {
            return None;
        }
        Some(self.total as f64 / self.hits.len() as f64)
    }

    /// `(position, hits)` pairs in ascending position order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, u64)> + '_ {
        self.hits.iter().map(|(&position, &hits)| (position, hits))
    }
}

impl fmt::Display for LoadTally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mean_load() {
            Some(mean) => write!(
                f,
                "positions: {}, hits: {}, mean load: {:.4}, max load: {}",
                self.distinct_positions(),
                self.total,
                mean,
                self.max_load()
            ),
            None => f.write_str("positions: 0, hits: 0, mean load: undefined, max load: 0"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::UniversalAffine;
    use crate::core::FilterParams;

    #[test]
    fn test_empty_tally() {
        let tally = LoadTally::new();
        assert_eq!(tally.distinct_positions(), 0);
        assert_eq!(tally.total_hits(), 0);
        assert_eq!(tally.mean_load(), None);
        assert_eq!(tally.max_load(), 0);
        assert!(tally.to_string().contains("undefined"));
    }

    #[test]
    fn test_record_counts() {
        let mut tally = LoadTally::new();
        tally.record(3);
        tally.record(3);
        tally.record(7);

        assert_eq!(tally.distinct_positions(), 2);
        assert_eq!(tally.total_hits(), 3);
        assert_eq!(tally.hits(3), 2);
        assert_eq!(tally.hits(4), 0);
        assert_eq!(tally.max_load(), 2);
        assert_eq!(tally.mean_load(), Some(1.5));
        assert_eq!(tally.iter().collect::<Vec<_>>(), vec![(3, 2), (7, 1)]);
    }

    #[test]
    fn test_record_key_uses_filter_positions() {
        // (3x + 0) mod 7 and (4x + 0) mod 7
        let strategy = UniversalAffine::from_parts(vec![(3, 0), (4, 0)], 7).unwrap();
        let params = FilterParams::new(1, 10, 2).unwrap();
        let filter = BloomFilter::with_strategy(params, strategy).unwrap();

        let mut tally = LoadTally::new();
        tally.record_key(&filter, 1);
        tally.record_key(&filter, 1);

        assert_eq!(tally.hits(3), 2);
        assert_eq!(tally.hits(4), 2);
        assert_eq!(tally.total_hits(), 4);
    }
}
