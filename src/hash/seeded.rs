//! Hash family built from a re-seeded pseudorandom generator.
//!
//! Each slot `i` owns one random 64-bit seed drawn at construction. Hashing a
//! key re-seeds a fresh generator with `seed[i] + x` and keeps only its first
//! output:
//!
//! ```text
//! hᵢ(x) = first_output(R::seed_from_u64(seedᵢ + x)) mod m
//! ```
//!
//! Re-seeding on every call costs a generator construction per slot, but it
//! makes `hᵢ` a pure function of `x` without storing any table, which is what
//! lets `insert` and `contains` agree on where a key's bits live.
//!
//! # Choice of generator
//!
//! The generator defaults to [`ChaCha8Rng`], whose `seed_from_u64` expands
//! the seed before the first block, so nearby seeds give unrelated outputs.
//!
//! [`MinStdRand`](super::MinStdRand) is available as
//! `SeededGenerator<MinStdRand>` to reproduce measurements taken with the
//! Park–Miller generator. Its first output is `16807 · (seedᵢ + x) mod
//! (2³¹ − 1)`, which is affine in `x` with the same multiplier in every slot.
//! The k slots are then fixed offsets of one linear map, so a key's positions
//! are correlated and the false-positive rate sits well above
//! `(1 − e^(−kn/m))^k`.
//!
//! # Examples
//!
//! ```
//! use bloomtrial::hash::{HashStrategy, SeededGenerator};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(7);
//! let strategy: SeededGenerator = SeededGenerator::new(4, &mut rng).unwrap();
//!
//! let h = strategy.hash(0, 42, 1000);
//! assert!(h < 1000);
//! assert_eq!(h, strategy.hash(0, 42, 1000));
//! ```

use super::strategies::{validate_slot_count, HashStrategy, StrategyKind};
use crate::error::Result;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use rand_core::{RngCore, SeedableRng};
use std::marker::PhantomData;

/// Seeded-generator hash family over generator `R`.
///
/// `R` defaults to [`ChaCha8Rng`]; any `SeedableRng + RngCore` works, e.g.
/// `SeededGenerator<MinStdRand>` (see the module docs for its slot correlation).
///
/// [`MinStdRand`]: super::MinStdRand
#[derive(Debug)]
pub struct SeededGenerator<R = ChaCha8Rng> {
    seeds: Vec<i64>,
    _generator: PhantomData<fn() -> R>,
}

impl<R> Clone for SeededGenerator<R> {
    fn clone(&self) -> Self {
        Self {
            seeds: self.seeds.clone(),
            _generator: PhantomData,
        }
    }
}

impl<R> PartialEq for SeededGenerator<R> {
    fn eq(&self, other: &Self) -> bool {
        self.seeds == other.seeds
    }
}

impl<R> Eq for SeededGenerator<R> {}

impl<R: SeedableRng + RngCore> SeededGenerator<R> {
    /// Draw `k` independent seeds from `rng`.
    ///
    /// `rng` is only consulted here; it never feeds the per-call generators.
    ///
    /// # Errors
    ///
    /// Returns [`crate::BloomTrialError::InvalidHashCount`] if `k` is out of range.
    pub fn new<G: Rng + ?Sized>(k: usize, rng: &mut G) -> Result<Self> {
        validate_slot_count(k)?;
        let seeds = (0..k).map(|_| rng.gen::<i64>()).collect();
        Ok(Self {
            seeds,
            _generator: PhantomData,
        })
    }

    /// Build from explicit seeds, one per slot.
    ///
    /// # Errors
    ///
    /// Returns [`crate::BloomTrialError::InvalidHashCount`] if the seed count is out of range.
    pub fn from_seeds(seeds: Vec<i64>) -> Result<Self> {
        validate_slot_count(seeds.len())?;
        Ok(Self {
            seeds,
            _generator: PhantomData,
        })
    }

    /// Seeds in slot order.
    #[must_use]
    pub fn seeds(&self) -> &[i64] {
        &self.seeds
    }
}

impl<R: SeedableRng + RngCore> HashStrategy for SeededGenerator<R> {
    #[inline]
    fn hash_count(&self) -> usize {
        self.seeds.len()
    }

    #[inline]
    fn hash(&self, slot: usize, key: u64, table_size: usize) -> usize {
        let seed = self.seeds[slot].wrapping_add(key as i64);
        let mut generator = R::seed_from_u64(seed as u64);
        (u64::from(generator.next_u32()) % table_size as u64) as usize
    }

    fn kind(&self) -> StrategyKind {
        StrategyKind::SeededGenerator
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::minstd::{MinStdRand, MINSTD_MODULUS, MINSTD_MULTIPLIER};
    use std::collections::HashSet;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(0x5eed)
    }

    #[test]
    fn test_draws_k_seeds() {
        let strategy = SeededGenerator::<MinStdRand>::new(7, &mut rng()).unwrap();
        assert_eq!(strategy.hash_count(), 7);
        assert_eq!(strategy.seeds().len(), 7);
    }

    #[test]
    fn test_seeds_are_distinct() {
        let strategy = SeededGenerator::<MinStdRand>::new(16, &mut rng()).unwrap();
        let mut seeds = strategy.seeds().to_vec();
        seeds.sort_unstable();
        seeds.dedup();
        assert_eq!(seeds.len(), 16);
    }

    #[test]
    fn test_zero_slots_rejected() {
        assert!(SeededGenerator::<MinStdRand>::new(0, &mut rng()).is_err());
        assert!(SeededGenerator::<MinStdRand>::from_seeds(Vec::new()).is_err());
    }

    #[test]
    fn test_hash_matches_first_generator_output() {
        let strategy = SeededGenerator::<MinStdRand>::from_seeds(vec![1_000]).unwrap();
        let m = 1000;
        let expected = ((1_000u64 + 10) * MINSTD_MULTIPLIER % MINSTD_MODULUS) % m as u64;
        assert_eq!(strategy.hash(0, 10, m) as u64, expected);
    }

    #[test]
    fn test_seed_plus_key_wraps() {
        let strategy = SeededGenerator::<MinStdRand>::from_seeds(vec![i64::MAX]).unwrap();
        // Must not panic on overflow
        let h = strategy.hash(0, u64::MAX, 1000);
        assert!(h < 1000);
    }

    #[test]
    fn test_deterministic_across_calls() {
        let strategy = SeededGenerator::<MinStdRand>::new(4, &mut rng()).unwrap();
        for slot in 0..4 {
            let first = strategy.hash(slot, 10, 1000);
            for _ in 0..10 {
                assert_eq!(strategy.hash(slot, 10, 1000), first);
            }
        }
    }

    #[test]
    fn test_same_seeds_same_hashes() {
        let a = SeededGenerator::<MinStdRand>::new(4, &mut rng()).unwrap();
        let b = SeededGenerator::<MinStdRand>::new(4, &mut rng()).unwrap();
        assert_eq!(a, b);
        for key in 0..100 {
            assert_eq!(a.positions(key, 997), b.positions(key, 997));
        }
    }

    #[test]
    fn test_default_generator() {
        let strategy: SeededGenerator = SeededGenerator::new(3, &mut rng()).unwrap();
        let explicit = SeededGenerator::<ChaCha8Rng>::new(3, &mut rng()).unwrap();
        for key in 0..1000 {
            let h = strategy.hash(2, key, 123);
            assert!(h < 123);
            assert_eq!(h, strategy.hash(2, key, 123));
            assert_eq!(h, explicit.hash(2, key, 123));
        }
    }

    /// Distinct values of `(h₀(x) − h₁(x)) mod m` over keys `1..=1000`.
    fn slot_offsets<R: SeedableRng + RngCore>(m: usize) -> usize {
        let strategy = SeededGenerator::<R>::from_seeds(vec![91_733, 4_000_217]).unwrap();
        (1..=1000u64)
            .map(|key| (strategy.hash(0, key, m) + m - strategy.hash(1, key, m)) % m)
            .collect::<HashSet<_>>()
            .len()
    }

    #[test]
    fn test_minstd_slots_are_shifted_copies() {
        // 16807·(s₀ + x) − 16807·(s₁ + x) is constant mod 2³¹ − 1
        assert!(slot_offsets::<MinStdRand>(1000) <= 2);
    }

    #[test]
    fn test_default_slots_are_unrelated() {
        // ~632 distinct offsets expected for 1000 keys over 1000 buckets
        let distinct = slot_offsets::<ChaCha8Rng>(1000);
        assert!(distinct > 500, "only {} distinct slot offsets", distinct);
    }

    #[test]
    fn test_kind() {
        let strategy = SeededGenerator::<MinStdRand>::new(1, &mut rng()).unwrap();
        assert_eq!(strategy.kind(), StrategyKind::SeededGenerator);
        assert_eq!(strategy.name(), "Pseudorandom");
    }
}
