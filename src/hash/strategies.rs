//! The hash strategy abstraction shared by both hash families.
//!
//! A strategy owns `k` independently drawn parameter sets, one per slot, and
//! maps `(slot, key)` to a table position. Filters are generic over the
//! strategy, so the two families share one insert/query implementation.
//!
//! # Strategy Comparison
//!
//! | Strategy          | Per-slot state | Guarantee                           |
//! |-------------------|----------------|-------------------------------------|
//! | `SeededGenerator` | one `i64` seed | heuristic, depends on the generator |
//! | `UniversalAffine` | `(a, b)` pair  | collision bound over random `(a, b)` |
//!
//! # Runtime Selection
//!
//! [`StrategyKind`] names a family; [`AnyStrategy`] holds either one when the
//! choice is made at runtime:
//!
//! ```
//! use bloomtrial::hash::{AnyStrategy, HashStrategy, StrategyKind};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(1);
//! for kind in StrategyKind::ALL {
//!     let strategy = AnyStrategy::new(kind, 4, &mut rng).unwrap();
//!     assert_eq!(strategy.kind(), kind);
//!     assert!(strategy.positions(42, 1000).iter().all(|&p| p < 1000));
//! }
//! ```

use super::seeded::SeededGenerator;
use super::universal::UniversalAffine;
use crate::core::params::{MAX_HASH_FUNCTIONS, MIN_HASH_FUNCTIONS};
use crate::error::{BloomTrialError, Result};
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// Maps `(slot, key)` to a position in a table of `table_size` bits.
///
/// Implementations must be pure: for fixed parameters the same
/// `(slot, key, table_size)` always yields the same position, and the result
/// is always in `[0, table_size)`.
pub trait HashStrategy {
    /// Number of slots `k`.
    fn hash_count(&self) -> usize;

    /// Position of `key` under slot `slot`.
    ///
    /// # Panics
    ///
    /// Panics if `slot >= hash_count()` or `table_size == 0`.
    fn hash(&self, slot: usize, key: u64, table_size: usize) -> usize;

    /// Which family this strategy belongs to.
    fn kind(&self) -> StrategyKind;

    /// Display name used in reports.
    fn name(&self) -> &'static str {
        self.kind().name()
    }

    /// Positions of `key` under every slot, in slot order.
    fn positions(&self, key: u64, table_size: usize) -> Vec<usize> {
        (0..self.hash_count())
            .map(|slot| self.hash(slot, key, table_size))
            .collect()
    }
}

pub(crate) fn validate_slot_count(k: usize) -> Result<()> {
    if !(MIN_HASH_FUNCTIONS..=MAX_HASH_FUNCTIONS).contains(&k) {
        return Err(BloomTrialError::invalid_hash_count(
            k,
            MIN_HASH_FUNCTIONS,
            MAX_HASH_FUNCTIONS,
        ));
    }
    Ok(())
}

/// Hash family selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StrategyKind {
    /// Re-seeded pseudorandom generator.
    #[default]
    SeededGenerator,
    /// `((a·x + b) mod P) mod m`.
    UniversalAffine,
}

impl StrategyKind {
    /// Both families, in report order.
    pub const ALL: [StrategyKind; 2] = [Self::SeededGenerator, Self::UniversalAffine];

    /// Display name used in reports.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SeededGenerator => "Pseudorandom",
            Self::UniversalAffine => "Universal",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StrategyKind {
    type Err = BloomTrialError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "seeded" | "pseudorandom" | "seeded-generator" => Ok(Self::SeededGenerator),
            "universal" | "affine" | "universal-affine" => Ok(Self::UniversalAffine),
            other => Err(BloomTrialError::invalid_parameters(format!(
                "unknown hash strategy '{}' (expected 'seeded' or 'universal')",
                other
            ))),
        }
    }
}

/// Either hash family, chosen at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnyStrategy {
    /// Seeded-generator family with the default generator.
    Seeded(SeededGenerator),
    /// Universal affine family.
    Universal(UniversalAffine),
}

impl AnyStrategy {
    /// Draw a fresh `k`-slot strategy of the given family.
    ///
    /// # Errors
    ///
    /// Returns [`BloomTrialError::InvalidHashCount`] if `k` is out of range.
    pub fn new<G: Rng + ?Sized>(kind: StrategyKind, k: usize, rng: &mut G) -> Result<Self> {
        Ok(match kind {
            StrategyKind::SeededGenerator => Self::Seeded(SeededGenerator::new(k, rng)?),
            StrategyKind::UniversalAffine => Self::Universal(UniversalAffine::new(k, rng)?),
        })
    }
}

impl From<SeededGenerator> for AnyStrategy {
    fn from(strategy: SeededGenerator) -> Self {
        Self::Seeded(strategy)
    }
}

impl From<UniversalAffine> for AnyStrategy {
    fn from(strategy: UniversalAffine) -> Self {
        Self::Universal(strategy)
    }
}

impl HashStrategy for AnyStrategy {
    #[inline]
    fn hash_count(&self) -> usize {
        match self {
            Self::Seeded(s) => s.hash_count(),
            Self::Universal(s) => s.hash_count(),
        }
    }

    #[inline]
    fn hash(&self, slot: usize, key: u64, table_size: usize) -> usize {
        match self {
            Self::Seeded(s) => s.hash(slot, key, table_size),
            Self::Universal(s) => s.hash(slot, key, table_size),
        }
    }

    fn kind(&self) -> StrategyKind {
        match self {
            Self::Seeded(_) => StrategyKind::SeededGenerator,
            Self::Universal(_) => StrategyKind::UniversalAffine,
        }
    }
}
