//! False-positive trial harness.
//!
//! A *trial* builds one filter per hash family with the same `(n, c, k)`,
//! feeds both the identical insert and probe sequences, and classifies every
//! probe against an exact set. A *sweep* repeats trials over a grid of
//! `(c, k)` and reports the median false-positive rate per point.
//!
//! # Reproducibility
//!
//! Every entry point takes its randomness from the caller. A sweep derives
//! one seed per trial from a master [`ChaCha8Rng`](rand_chacha::ChaCha8Rng)
//! before running anything, so its rows do not depend on whether the
//! `parallel` feature is used.
//!
//! # Examples
//!
//! ```
//! use bloomtrial::trial::{run_trial, TrialConfig};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let config = TrialConfig {
//!     expected_items: 1_000,
//!     probes: 2_000,
//!     ..TrialConfig::default()
//! };
//! let report = run_trial(&config, &mut ChaCha8Rng::seed_from_u64(5)).unwrap();
//!
//! assert_eq!(report.seeded.probes(), 2_000);
//! assert!(report.universal.false_positive_rate().unwrap() < 0.1);
//! ```

pub mod config;
pub mod runner;
pub mod scatter;
pub mod stats;
pub mod sweep;

pub use config::{SweepConfig, TrialConfig, Workload, KEY_DOMAIN};
pub use runner::{classify, run_trial, TrialOutcome, TrialReport};
pub use scatter::{scatter_samples, ScatterMode, ScatterPoint};
pub use stats::{mean, median};
pub use sweep::{run_sweep, SweepRow};

#[cfg(feature = "metrics")]
pub use runner::run_trial_with_loads;
