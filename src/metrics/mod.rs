//! Diagnostics for Bloom filter bit usage.
//!
//! Collectors here observe a filter without changing it. They are compiled
//! only with the `metrics` feature (enabled by default).
//!
//! # Examples
//!
//! ```
//! use bloomtrial::filters::BloomFilter;
//! use bloomtrial::metrics::LoadTally;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(8);
//! let mut filter = BloomFilter::universal(100, 10, 3, &mut rng).unwrap();
//! let mut tally = LoadTally::new();
//!
//! for key in 1..100 {
//!     filter.insert(key);
//!     tally.record_key(&filter, key);
//! }
//!
//! assert_eq!(tally.total_hits(), 99 * 3);
//! assert_eq!(tally.distinct_positions(), filter.count_set_bits());
//! ```

pub mod load;

pub use load::LoadTally;

/// Prelude for convenient imports.
pub mod prelude {
    pub use super::LoadTally;
}
