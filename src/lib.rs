//! bloomtrial: Bloom filters with interchangeable hash families and a
//! false-positive trial harness.
//!
//! A Bloom filter answers set-membership queries over integer keys using a
//! table of `m = c·n` bits and `k` hash functions. It never reports a false
//! negative; its false-positive rate depends on `c`, `k` and on how well the
//! hash family spreads keys. This crate builds the same filter over two
//! families and measures the difference:
//!
//! - **Seeded generator**: each slot re-seeds a deterministic generator with
//!   `seedᵢ + x` and keeps its first output
//! - **Universal affine**: `((aᵢ·x + bᵢ) mod P) mod m` with random `(aᵢ, bᵢ)`
//!
//! # Quick Start
//!
//! ```
//! use bloomtrial::filters::BloomFilter;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(2024);
//! let mut filter = BloomFilter::seeded(100, 10, 4, &mut rng).unwrap();
//!
//! for key in 1..100 {
//!     filter.insert(key);
//! }
//!
//! assert!(filter.contains(50));          // inserted keys are always found
//! assert_eq!(filter.size(), 1000);       // m = c·n
//! ```
//!
//! # Using the Builder
//!
//! ```
//! use bloomtrial::builder::BloomFilterBuilder;
//!
//! let mut rng = rand::thread_rng();
//! let filter = BloomFilterBuilder::new()
//!     .expected_items(10_000)
//!     .bits_per_item(10)
//!     .build_universal(&mut rng)
//!     .unwrap();
//!
//! assert_eq!(filter.hash_count(), 7); // round(10 · ln 2)
//! ```
//!
//! # Running Trials
//!
//! ```
//! use bloomtrial::trial::{run_sweep, SweepConfig};
//!
//! let config = SweepConfig {
//!     expected_items: 1_000,
//!     hash_counts: 4..=4,
//!     trials_per_point: 3,
//!     probes: 1_000,
//!     seed: Some(1),
//!     ..SweepConfig::default()
//! };
//!
//! for row in run_sweep(&config).unwrap() {
//!     println!("{}", row); // c: 10, k: 4, Pseudorandom: …, Universal: …
//! }
//! ```
//!
//! # Features
//!
//! - `parallel` (default) - run the trials of a sweep point on a rayon pool
//! - `metrics` (default) - per-position load diagnostics
//!
//! # Randomness
//!
//! Nothing in the crate reads a global RNG implicitly. Constructors and trials
//! take `&mut impl Rng`; pass a seeded `ChaCha8Rng` for reproducible runs.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::manual_range_contains)]
#![cfg_attr(docsrs, feature(doc_cfg))]

/// Bit table and parameter calculations
pub mod core;

/// Error types and result aliases
pub mod error;

/// Filter implementation
pub mod filters;

/// Hash families and the strategy abstraction
pub mod hash;

/// Type-safe filter builder
pub mod builder;

/// False-positive trials and sweeps
pub mod trial;

/// Load diagnostics (requires `metrics` feature)
#[cfg(feature = "metrics")]
#[cfg_attr(docsrs, doc(cfg(feature = "metrics")))]
pub mod metrics;

// Re-export commonly used types at crate root
pub use error::{BloomTrialError, Result};

pub use builder::BloomFilterBuilder;
pub use filters::BloomFilter;
pub use hash::{AnyStrategy, HashStrategy, SeededGenerator, StrategyKind, UniversalAffine};

#[cfg(feature = "metrics")]
pub use metrics::LoadTally;

/// Prelude module for convenient imports.
///
/// # Examples
///
/// ```
/// use bloomtrial::prelude::*;
///
/// let mut rng = rand::thread_rng();
/// let mut filter = BloomFilter::new(StrategyKind::UniversalAffine, 1000, 10, 5, &mut rng).unwrap();
/// filter.insert(42);
/// assert!(filter.contains(42));
/// ```
pub mod prelude {
    pub use crate::builder::{BloomFilterBuilder, FilterMetadata};
    pub use crate::core::params::{expected_fp_rate, optimal_hash_count, FilterParams};
    pub use crate::error::{BloomTrialError, Result};
    pub use crate::filters::BloomFilter;
    pub use crate::hash::{
        AnyStrategy, HashStrategy, MinStdRand, SeededGenerator, StrategyKind, UniversalAffine,
    };
    pub use crate::trial::{
        run_sweep, run_trial, SweepConfig, SweepRow, TrialConfig, TrialOutcome, TrialReport,
        Workload,
    };

    #[cfg(feature = "metrics")]
    pub use crate::metrics::LoadTally;
}
