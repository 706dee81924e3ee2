//! Universal (affine modular) hash family.
//!
//! Carter & Wegman's classical construction: for a prime `P` and coefficients
//! drawn uniformly with `a ∈ [1, P−1]` and `b ∈ [0, P−1]`,
//!
//! ```text
//! hᵢ(x) = ((aᵢ·x + bᵢ) mod P) mod m
//! ```
//!
//! For any two distinct keys below `P`, a random `(a, b)` maps them to the
//! same residue mod `P` with probability 0 and to the same bucket mod `m`
//! with probability at most about `1/m`. The bound holds regardless of how the
//! keys are distributed, which is what the heuristic seeded family lacks.
//!
//! The default modulus is `2³¹ − 1` (`i32::MAX`), a Mersenne prime.
//!
//! # Overflow
//!
//! `a·x + b` is evaluated in `u128`, so any `u64` key is safe.
//!
//! # Examples
//!
//! ```
//! use bloomtrial::hash::{HashStrategy, UniversalAffine};
//!
//! let strategy = UniversalAffine::from_coefficients(vec![(3, 5)]).unwrap();
//! // (3·10 + 5) mod (2³¹ − 1) mod 100
//! assert_eq!(strategy.hash(0, 10, 100), 35);
//! ```
//!
//! # References
//!
//! - Carter, J. L., & Wegman, M. N. (1979). "Universal classes of hash functions"

use super::strategies::{validate_slot_count, HashStrategy, StrategyKind};
use crate::error::{BloomTrialError, Result};
use rand::Rng;

/// Default modulus `P = 2³¹ − 1`.
pub const DEFAULT_MODULUS: u64 = i32::MAX as u64;

/// One `(a, b)` pair per slot over a fixed modulus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniversalAffine {
    coefficients: Vec<(u64, u64)>,
    modulus: u64,
}

impl UniversalAffine {
    /// Draw `k` coefficient pairs over [`DEFAULT_MODULUS`].
    ///
    /// # Errors
    ///
    /// Returns [`BloomTrialError::InvalidHashCount`] if `k` is out of range.
    pub fn new<G: Rng + ?Sized>(k: usize, rng: &mut G) -> Result<Self> {
        Self::with_modulus(k, DEFAULT_MODULUS, rng)
    }

    /// Draw `k` coefficient pairs over `modulus`.
    ///
    /// # Errors
    ///
    /// - [`BloomTrialError::InvalidHashCount`] if `k` is out of range
    /// - [`BloomTrialError::InvalidModulus`] if `modulus < 2`
    pub fn with_modulus<G: Rng + ?Sized>(k: usize, modulus: u64, rng: &mut G) -> Result<Self> {
        validate_slot_count(k)?;
        validate_modulus(modulus)?;

        let coefficients = (0..k)
            .map(|_| {
                let a = rng.gen_range(1..modulus);
                let b = rng.gen_range(0..modulus);
                (a, b)
            })
            .collect();

        Ok(Self {
            coefficients,
            modulus,
        })
    }

    /// Build from explicit `(a, b)` pairs over [`DEFAULT_MODULUS`].
    ///
    /// # Errors
    ///
    /// See [`UniversalAffine::from_parts`].
    pub fn from_coefficients(coefficients: Vec<(u64, u64)>) -> Result<Self> {
        Self::from_parts(coefficients, DEFAULT_MODULUS)
    }

    /// Build from explicit `(a, b)` pairs over `modulus`.
    ///
    /// # Errors
    ///
    /// - [`BloomTrialError::InvalidHashCount`] if the pair count is out of range
    /// - [`BloomTrialError::InvalidModulus`] if `modulus < 2`
    /// - [`BloomTrialError::InvalidParameters`] if a pair lies outside
    ///   `[1, P−1] × [0, P−1]`
    pub fn from_parts(coefficients: Vec<(u64, u64)>, modulus: u64) -> Result<Self> {
        validate_slot_count(coefficients.len())?;
        validate_modulus(modulus)?;

        if let Some(&(a, b)) = coefficients
            .iter()
            .find(|&&(a, b)| a == 0 || a >= modulus || b >= modulus)
        {
            return Err(BloomTrialError::invalid_parameters(format!(
                "coefficients ({}, {}) outside [1, {}] x [0, {}]",
                a,
                b,
                modulus - 1,
                modulus - 1
            )));
        }

        Ok(Self {
            coefficients,
            modulus,
        })
    }

    /// Coefficient pairs in slot order.
    #[must_use]
    pub fn coefficients(&self) -> &[(u64, u64)] {
        &self.coefficients
    }

    /// Modulus `P`.
    #[must_use]
    #[inline]
    pub const fn modulus(&self) -> u64 {
        self.modulus
    }
}

fn validate_modulus(modulus: u64) -> Result<()> {
    if modulus < 2 {
        return Err(BloomTrialError::invalid_modulus(modulus));
    }
    Ok(())
}

impl HashStrategy for UniversalAffine {
    #[inline]
    fn hash_count(&self) -> usize {
        self.coefficients.len()
    }

    #[inline]
    fn hash(&self, slot: usize, key: u64, table_size: usize) -> usize {
        let (a, b) = self.coefficients[slot];
        let residue = (u128::from(a) * u128::from(key) + u128::from(b)) % u128::from(self.modulus);
        (residue % table_size as u128) as usize
    }

    fn kind(&self) -> StrategyKind {
        StrategyKind::UniversalAffine
    }
}
