//! Builder for Bloom filters.
//!
//! # Type-State Pattern
//!
//! The builder progresses through states, and `build*` is only available
//! once both required parameters are set:
//!
//! ```text
//! Initial → WithItems → Complete → BloomFilter<S>
//!     ↓         ↓           ↓
//!   .expected_items()  .bits_per_item()  .build_seeded() / .build_universal() / .build()
//! ```
//!
//! # Examples
//!
//! ## Minimal Configuration
//!
//! ```
//! use bloomtrial::builder::BloomFilterBuilder;
//!
//! let mut rng = rand::thread_rng();
//! let filter = BloomFilterBuilder::new()
//!     .expected_items(100)
//!     .bits_per_item(10)
//!     .build_seeded(&mut rng)
//!     .unwrap();
//!
//! assert_eq!(filter.size(), 1000);
//! ```
//!
//! ## Explicit Slot Count and Runtime Family
//!
//! ```
//! use bloomtrial::builder::BloomFilterBuilder;
//! use bloomtrial::hash::StrategyKind;
//!
//! let mut rng = rand::thread_rng();
//! let filter = BloomFilterBuilder::new()
//!     .expected_items(100)
//!     .bits_per_item(10)
//!     .hash_count(4)
//!     .build(StrategyKind::UniversalAffine, &mut rng)
//!     .unwrap();
//!
//! assert_eq!(filter.hash_count(), 4);
//! ```
//!
//! ## Error Handling
//!
//! ```
//! use bloomtrial::builder::BloomFilterBuilder;
//!
//! let mut rng = rand::thread_rng();
//! let result = BloomFilterBuilder::new()
//!     .expected_items(0)
//!     .bits_per_item(10)
//!     .build_universal(&mut rng);
//!
//! assert!(result.is_err());
//! ```

use crate::core::params::{optimal_hash_count, FilterParams};
use crate::error::Result;
use crate::filters::standard::BloomFilter;
use crate::hash::{AnyStrategy, SeededGenerator, StrategyKind, UniversalAffine};
use rand::Rng;
use std::marker::PhantomData;

/// Type-state marker: no parameters set.
#[derive(Debug)]
pub struct Initial;

/// Type-state marker: `n` is set.
#[derive(Debug)]
pub struct WithItems;

/// Type-state marker: `n` and `c` are set.
#[derive(Debug)]
pub struct Complete;

/// Builder for [`BloomFilter`] with type-state guarantees.
///
/// Values are only validated by the `build*` methods, so an invalid `n` or
/// `c` is reported as an error rather than a panic.
#[derive(Debug)]
pub struct BloomFilterBuilder<State> {
    expected_items: usize,
    bits_per_item: usize,
    hash_count: Option<usize>,
    _state: PhantomData<State>,
}

impl BloomFilterBuilder<Initial> {
    /// Create a new builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            expected_items: 0,
            bits_per_item: 0,
            hash_count: None,
            _state: PhantomData,
        }
    }

    /// Set the expected subset size `n`.
    ///
    /// This is a required parameter. Transitions builder to `WithItems` state.
    #[must_use]
    pub fn expected_items(self, items: usize) -> BloomFilterBuilder<WithItems> {
        BloomFilterBuilder {
            expected_items: items,
            bits_per_item: self.bits_per_item,
            hash_count: self.hash_count,
            _state: PhantomData,
        }
    }
}

impl Default for BloomFilterBuilder<Initial> {
    fn default() -> Self {
        Self::new()
    }
}

impl BloomFilterBuilder<WithItems> {
    /// Set the bits-per-element multiplier `c`.
    ///
    /// This is a required parameter. Transitions builder to `Complete` state.
    ///
    /// # Examples
    ///
    /// ```
    /// use bloomtrial::builder::BloomFilterBuilder;
    ///
    /// let builder = BloomFilterBuilder::new()
    ///     .expected_items(10_000)
    ///     .bits_per_item(8);
    /// assert_eq!(builder.resolved_hash_count(), 6);
    /// ```
    #[must_use]
    pub fn bits_per_item(self, multiplier: usize) -> BloomFilterBuilder<Complete> {
        BloomFilterBuilder {
            expected_items: self.expected_items,
            bits_per_item: multiplier,
            hash_count: self.hash_count,
            _state: PhantomData,
        }
    }

    /// Set the slot count `k` (optional).
    #[must_use]
    pub fn hash_count(mut self, k: usize) -> Self {
        self.hash_count = Some(k);
        self
    }
}

impl BloomFilterBuilder<Complete> {
    /// Set the slot count `k` (optional, can be set in Complete state too).
    #[must_use]
    pub fn hash_count(mut self, k: usize) -> Self {
        self.hash_count = Some(k);
        self
    }

    /// Slot count the filter will be built with.
    #[must_use]
    pub fn resolved_hash_count(&self) -> usize {
        self.hash_count
            .unwrap_or_else(|| optimal_hash_count(self.bits_per_item))
    }

    fn params(&self) -> Result<FilterParams> {
        FilterParams::new(
            self.expected_items,
            self.bits_per_item,
            self.resolved_hash_count(),
        )
    }

    /// Build a filter over the seeded-generator family.
    ///
    /// # Errors
    ///
    /// Returns an error if `(n, c, k)` is invalid (see [`FilterParams::new`]).
    pub fn build_seeded<G: Rng + ?Sized>(self, rng: &mut G) -> Result<BloomFilter<SeededGenerator>> {
        let params = self.params()?;
        BloomFilter::with_strategy(params, SeededGenerator::new(params.hash_count(), rng)?)
    }

    /// Build a filter over the universal affine family.
    ///
    /// # Errors
    ///
    /// Returns an error if `(n, c, k)` is invalid (see [`FilterParams::new`]).
    pub fn build_universal<G: Rng + ?Sized>(self, rng: &mut G) -> Result<BloomFilter<UniversalAffine>> {
        let params = self.params()?;
        BloomFilter::with_strategy(params, UniversalAffine::new(params.hash_count(), rng)?)
    }

    /// Build a filter whose family is chosen at runtime.
    ///
    /// # Errors
    ///
    /// Returns an error if `(n, c, k)` is invalid (see [`FilterParams::new`]).
    pub fn build<G: Rng + ?Sized>(
        self,
        kind: StrategyKind,
        rng: &mut G,
    ) -> Result<BloomFilter<AnyStrategy>> {
        let params = self.params()?;
        BloomFilter::with_strategy(params, AnyStrategy::new(kind, params.hash_count(), rng)?)
    }

    /// Build the filter and return it with metadata.
    ///
    /// # Errors
    ///
    /// Returns an error if `(n, c, k)` is invalid (see [`FilterParams::new`]).
    ///
    /// # Examples
    ///
    /// ```
    /// use bloomtrial::builder::BloomFilterBuilder;
    /// use bloomtrial::hash::StrategyKind;
    ///
    /// let mut rng = rand::thread_rng();
    /// let (_filter, metadata) = BloomFilterBuilder::new()
    ///     .expected_items(10_000)
    ///     .bits_per_item(10)
    ///     .hash_count(4)
    ///     .build_with_metadata(StrategyKind::SeededGenerator, &mut rng)
    ///     .unwrap();
    ///
    /// assert_eq!(metadata.filter_size, 100_000);
    /// assert!((metadata.expected_fp_rate - 0.0118).abs() < 0.0005);
    /// ```
    pub fn build_with_metadata<G: Rng + ?Sized>(
        self,
        kind: StrategyKind,
        rng: &mut G,
    ) -> Result<(BloomFilter<AnyStrategy>, FilterMetadata)> {
        let params = self.params()?;
        let filter =
            BloomFilter::with_strategy(params, AnyStrategy::new(kind, params.hash_count(), rng)?)?;

        let metadata = FilterMetadata {
            expected_items: params.expected_items(),
            bits_per_item: params.bits_per_item(),
            filter_size: params.table_size(),
            num_hashes: params.hash_count(),
            strategy: kind,
            expected_fp_rate: params.expected_fp_rate(params.expected_items()),
        };

        Ok((filter, metadata))
    }
}

/// Metadata about a constructed filter.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterMetadata {
    /// Expected subset size `n`
    pub expected_items: usize,
    /// Bits per element `c`
    pub bits_per_item: usize,
    /// Table size `m` in bits
    pub filter_size: usize,
    /// Number of hash slots `k`
    pub num_hashes: usize,
    /// Hash family
    pub strategy: StrategyKind,
    /// Theoretical false-positive rate once `n` keys are inserted
    pub expected_fp_rate: f64,
}

impl FilterMetadata {
    /// Theoretical memory usage in bytes.
    #[must_use]
    pub fn memory_bytes(&self) -> usize {
        (self.filter_size + 7) / 8
    }

    /// Theoretical memory usage in kilobytes.
    #[must_use]
    pub fn memory_kb(&self) -> f64 {
        self.memory_bytes() as f64 / 1024.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BloomTrialError;
    use crate::hash::HashStrategy;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(99)
    }

    #[test]
    fn test_builder_minimal() {
        let filter = BloomFilterBuilder::new()
            .expected_items(1_000)
            .bits_per_item(10)
            .build_seeded(&mut rng())
            .unwrap();

        assert_eq!(filter.size(), 10_000);
        assert_eq!(filter.hash_count(), 7);
        assert!(filter.is_empty());
    }

    #[test]
    fn test_hash_count_before_and_after_multiplier() {
        let before = BloomFilterBuilder::new()
            .expected_items(100)
            .hash_count(3)
            .bits_per_item(10)
            .build_universal(&mut rng())
            .unwrap();
        let after = BloomFilterBuilder::new()
            .expected_items(100)
            .bits_per_item(10)
            .hash_count(3)
            .build_universal(&mut rng())
            .unwrap();

        assert_eq!(before.hash_count(), 3);
        assert_eq!(after.hash_count(), 3);
        assert_eq!(before, after);
    }

    #[test]
    fn test_build_runtime_kind() {
        for kind in StrategyKind::ALL {
            let filter = BloomFilterBuilder::new()
                .expected_items(100)
                .bits_per_item(10)
                .hash_count(4)
                .build(kind, &mut rng())
                .unwrap();
            assert_eq!(filter.strategy_kind(), kind);
            assert_eq!(filter.strategy().hash_count(), 4);
        }
    }

    #[test]
    fn test_builder_invalid_items() {
        let result = BloomFilterBuilder::new()
            .expected_items(0)
            .bits_per_item(10)
            .build_seeded(&mut rng());
        assert!(matches!(result, Err(BloomTrialError::InvalidItemCount { count: 0 })));
    }

    #[test]
    fn test_builder_invalid_multiplier() {
        let result = BloomFilterBuilder::new()
            .expected_items(100)
            .bits_per_item(0)
            .build_universal(&mut rng());
        assert!(matches!(result, Err(BloomTrialError::InvalidMultiplier { .. })));
    }

    #[test]
    fn test_builder_invalid_hash_count() {
        let result = BloomFilterBuilder::new()
            .expected_items(100)
            .bits_per_item(10)
            .hash_count(33)
            .build(StrategyKind::SeededGenerator, &mut rng());
        assert!(matches!(result, Err(BloomTrialError::InvalidHashCount { .. })));
    }

    #[test]
    fn test_small_multiplier_uses_one_slot() {
        let builder = BloomFilterBuilder::new().expected_items(10).bits_per_item(1);
        assert_eq!(builder.resolved_hash_count(), 1);
    }

    #[test]
    fn test_builder_with_metadata() {
        let (filter, metadata) = BloomFilterBuilder::new()
            .expected_items(1_000)
            .bits_per_item(16)
            .build_with_metadata(StrategyKind::UniversalAffine, &mut rng())
            .unwrap();

        assert_eq!(metadata.expected_items, 1_000);
        assert_eq!(metadata.bits_per_item, 16);
        assert_eq!(metadata.filter_size, filter.size());
        assert_eq!(metadata.num_hashes, filter.hash_count());
        assert_eq!(metadata.strategy, StrategyKind::UniversalAffine);
        assert!(metadata.expected_fp_rate > 0.0 && metadata.expected_fp_rate < 0.001);
    }

    #[test]
    fn test_metadata_memory_calculations() {
        let metadata = FilterMetadata {
            expected_items: 1_000,
            bits_per_item: 10,
            filter_size: 10_001,
            num_hashes: 7,
            strategy: StrategyKind::SeededGenerator,
            expected_fp_rate: 0.008,
        };
        assert_eq!(metadata.memory_bytes(), 1_251);
        assert!((metadata.memory_kb() - 1_251.0 / 1024.0).abs() < 1e-12);
    }

    #[test]
    fn test_filter_functionality() {
        let mut filter = BloomFilterBuilder::new()
            .expected_items(500)
            .bits_per_item(10)
            .build_seeded(&mut rng())
            .unwrap();

        for key in 1..500 {
            filter.insert(key);
        }
        for key in 1..500 {
            assert!(filter.contains(key));
        }
    }
}
