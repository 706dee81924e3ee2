//! Bloom filter over integer keys with a pluggable hash family.
//!
//! # Algorithm
//!
//! The filter owns a table of `m = c·n` bits and a [`HashStrategy`] with `k`
//! slots.
//!
//! - Insert: set bit `hᵢ(x)` for every slot `i`
//! - Query: report present only if every bit `hᵢ(x)` is set
//!
//! # Properties
//!
//! - **False negatives**: never (bits are only ever set)
//! - **False positives**: possible, roughly `(1 - e^(-kn/m))^k`
//! - **Time complexity**: O(k) for both insert and query
//! - **Lifetime**: `m` and `k` are fixed at construction; there is no
//!   resize, clear or delete
//!
//! # Examples
//!
//! ```
//! use bloomtrial::filters::BloomFilter;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut rng = ChaCha8Rng::seed_from_u64(1);
//! let mut filter = BloomFilter::universal(100, 10, 4, &mut rng)?;
//!
//! for key in 1..100 {
//!     filter.insert(key);
//! }
//! assert!(filter.contains(50));
//! # Ok(())
//! # }
//! ```

use crate::core::{BitTable, FilterParams};
use crate::error::{BloomTrialError, Result};
use crate::hash::{AnyStrategy, HashStrategy, SeededGenerator, StrategyKind, UniversalAffine};
use rand::Rng;
use std::fmt;

/// Bloom filter composed of one [`BitTable`] and one [`HashStrategy`].
///
/// # Type Parameters
///
/// * `S` - Hash family. Use [`AnyStrategy`] when the family is chosen at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BloomFilter<S = AnyStrategy> {
    /// Validated `(n, c, k)` and derived `m`
    params: FilterParams,

    /// Underlying bit table of `m` bits
    bits: BitTable,

    /// Hash family with exactly `k` slots
    strategy: S,
}

impl BloomFilter<SeededGenerator> {
    /// Create a filter using the seeded-generator family.
    ///
    /// # Errors
    ///
    /// Returns an error if `(n, c, k)` is invalid (see [`FilterParams::new`]).
    pub fn seeded<G: Rng + ?Sized>(n: usize, c: usize, k: usize, rng: &mut G) -> Result<Self> {
        let params = FilterParams::new(n, c, k)?;
        Self::with_strategy(params, SeededGenerator::new(k, rng)?)
    }
}

impl BloomFilter<UniversalAffine> {
    /// Create a filter using the universal affine family.
    ///
    /// # Errors
    ///
    /// Returns an error if `(n, c, k)` is invalid (see [`FilterParams::new`]).
    pub fn universal<G: Rng + ?Sized>(n: usize, c: usize, k: usize, rng: &mut G) -> Result<Self> {
        let params = FilterParams::new(n, c, k)?;
        Self::with_strategy(params, UniversalAffine::new(k, rng)?)
    }
}

impl BloomFilter<AnyStrategy> {
    /// Create a filter whose hash family is chosen at runtime.
    ///
    /// # Errors
    ///
    /// Returns an error if `(n, c, k)` is invalid (see [`FilterParams::new`]).
    ///
    /// # Examples
    ///
    /// ```
    /// use bloomtrial::filters::BloomFilter;
    /// use bloomtrial::hash::StrategyKind;
    ///
    /// let mut rng = rand::thread_rng();
    /// let filter = BloomFilter::new(StrategyKind::SeededGenerator, 1000, 8, 5, &mut rng).unwrap();
    /// assert_eq!(filter.size(), 8000);
    /// assert_eq!(filter.strategy_kind(), StrategyKind::SeededGenerator);
    /// ```
    pub fn new<G: Rng + ?Sized>(
        kind: StrategyKind,
        n: usize,
        c: usize,
        k: usize,
        rng: &mut G,
    ) -> Result<Self> {
        let params = FilterParams::new(n, c, k)?;
        Self::with_strategy(params, AnyStrategy::new(kind, k, rng)?)
    }
}

impl<S: HashStrategy> BloomFilter<S> {
    /// Create a filter from validated parameters and an existing strategy.
    ///
    /// # Errors
    ///
    /// Returns [`BloomTrialError::StrategyMismatch`] if the strategy's slot
    /// count differs from `params.hash_count()`.
    pub fn with_strategy(params: FilterParams, strategy: S) -> Result<Self> {
        if strategy.hash_count() != params.hash_count() {
            return Err(BloomTrialError::strategy_mismatch(
                params.hash_count(),
                strategy.hash_count(),
            ));
        }

        let bits = BitTable::new(params.table_size()).map_err(|_| {
            BloomTrialError::invalid_filter_size(params.expected_items(), params.bits_per_item())
        })?;

        tracing::debug!(
            n = params.expected_items(),
            c = params.bits_per_item(),
            m = params.table_size(),
            k = params.hash_count(),
            strategy = strategy.name(),
            "constructed bloom filter"
        );

        Ok(Self {
            params,
            bits,
            strategy,
        })
    }

    /// Parameters this filter was built with.
    #[must_use]
    #[inline]
    pub const fn params(&self) -> &FilterParams {
        &self.params
    }

    /// Table size in bits (`m`).
    #[must_use]
    #[inline]
    pub const fn size(&self) -> usize {
        self.params.table_size()
    }

    /// Number of hash slots (`k`).
    #[must_use]
    #[inline]
    pub const fn hash_count(&self) -> usize {
        self.params.hash_count()
    }

    /// Expected subset size (`n`).
    #[must_use]
    #[inline]
    pub const fn expected_items(&self) -> usize {
        self.params.expected_items()
    }

    /// Bits-per-element multiplier (`c`).
    #[must_use]
    #[inline]
    pub const fn bits_per_item(&self) -> usize {
        self.params.bits_per_item()
    }

    /// The hash family in use.
    #[must_use]
    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Which hash family this filter uses.
    #[must_use]
    pub fn strategy_kind(&self) -> StrategyKind {
        self.strategy.kind()
    }

    /// Insert a key. Idempotent.
    #[inline]
    pub fn insert(&mut self, key: u64) {
        let m = self.size();
        for slot in 0..self.hash_count() {
            let position = self.strategy.hash(slot, key, m);
            self.bits.set(position);
        }
    }

    /// Check if a key might be in the filter.
    ///
    /// Stops at the first unset position.
    ///
    /// # Returns
    ///
    /// - `true`: key might be in the set (or false positive)
    /// - `false`: key is definitely not in the set
    #[must_use]
    #[inline]
    pub fn contains(&self, key: u64) -> bool {
        let m = self.size();
        (0..self.hash_count()).all(|slot| self.bits.test(self.strategy.hash(slot, key, m)))
    }

    /// Insert every key in `keys`.
    pub fn insert_batch(&mut self, keys: &[u64]) {
        for &key in keys {
            self.insert(key);
        }
    }

    /// Query every key in `keys`, preserving order.
    #[must_use]
    pub fn contains_batch(&self, keys: &[u64]) -> Vec<bool> {
        keys.iter().map(|&key| self.contains(key)).collect()
    }

    /// Table positions `key` maps to, in slot order.
    #[must_use]
    pub fn positions(&self, key: u64) -> Vec<usize> {
        self.strategy.positions(key, self.size())
    }

    /// Number of bits currently set.
    #[must_use]
    pub fn count_set_bits(&self) -> usize {
        self.bits.count_ones()
    }

    /// Whether no key has been inserted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count_set_bits() == 0
    }

    /// Fraction of set bits, in `[0, 1]`.
    #[must_use]
    pub fn fill_ratio(&self) -> f64 {
        self.bits.fill_ratio()
    }

    /// False-positive rate implied by the current fill: `fill^k`.
    #[must_use]
    pub fn estimated_fp_rate(&self) -> f64 {
        self.fill_ratio().powi(self.hash_count() as i32)
    }

    /// Theoretical false-positive rate after `inserted` distinct keys.
    #[must_use]
    pub fn expected_fp_rate(&self, inserted: usize) -> f64 {
        self.params.expected_fp_rate(inserted)
    }

    /// Heap bytes held by the bit table.
    #[must_use]
    pub fn memory_usage(&self) -> usize {
        self.bits.memory_usage()
    }
}

impl<S: HashStrategy> fmt::Display for BloomFilter<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BloomFilter {{ strategy: {}, n: {}, c: {}, m: {}, k: {}, fill: {:.2}% }}",
            self.strategy.name(),
            self.expected_items(),
            self.bits_per_item(),
            self.size(),
            self.hash_count(),
            self.fill_ratio() * 100.0
        )
    }
}
