//! Builder pattern for Bloom filter construction.
//!
//! # Type-State Pattern
//!
//! The builder enforces at compile time that `n` and `c` are supplied before
//! a filter can be built. The slot count `k` is optional and defaults to
//! [`optimal_hash_count`](crate::core::params::optimal_hash_count) for the
//! chosen `c`.
//!
//! # Examples
//!
//! ```
//! use bloomtrial::builder::BloomFilterBuilder;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(11);
//! let filter = BloomFilterBuilder::new()
//!     .expected_items(10_000)
//!     .bits_per_item(10)
//!     .build_universal(&mut rng)
//!     .unwrap();
//!
//! assert_eq!(filter.size(), 100_000);
//! assert_eq!(filter.hash_count(), 7);
//! ```

#![allow(clippy::module_name_repetitions)]

pub mod standard;

pub use standard::{BloomFilterBuilder, Complete, FilterMetadata, Initial, WithItems};

/// Prelude for convenient builder imports.
pub mod prelude {
    pub use super::{BloomFilterBuilder, FilterMetadata};
}
