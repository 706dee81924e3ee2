//! Bloom filter implementations.
//!
//! A single filter type, [`BloomFilter`], is generic over its hash family.
//! Both families share one insert/query implementation; only the mapping
//! from `(slot, key)` to a bit position differs.
//!
//! # Choosing a Hash Family
//!
//! | Type | Family | Construction |
//! |------|--------|--------------|
//! | `BloomFilter<SeededGenerator>` | re-seeded generator | [`BloomFilter::seeded`] |
//! | `BloomFilter<UniversalAffine>` | `((a·x + b) mod P) mod m` | [`BloomFilter::universal`] |
//! | `BloomFilter<AnyStrategy>` | chosen at runtime | [`BloomFilter::new`] |
//!
//! # Examples
//!
//! ```
//! use bloomtrial::filters::BloomFilter;
//! use bloomtrial::hash::StrategyKind;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(3);
//! for kind in StrategyKind::ALL {
//!     let mut filter = BloomFilter::new(kind, 1_000, 10, 7, &mut rng).unwrap();
//!     filter.insert(17);
//!     assert!(filter.contains(17));
//! }
//! ```

pub mod standard;
pub use standard::BloomFilter;
