//! Park–Miller "minimal standard" linear congruential generator.
//!
//! ```text
//! stateₙ₊₁ = stateₙ × 16807 mod (2³¹ − 1)
//! ```
//!
//! `SeededGenerator<MinStdRand>` re-seeds it on every call, so seeding must be
//! cheap and the first output must be a pure function of the seed. Both hold
//! for an LCG with a single word of state. That first output is affine in the
//! seed, which correlates the slots of a seeded filter; the seeded family
//! therefore defaults to ChaCha8 and keeps this generator as an opt-in.
//!
//! Seeding follows the usual convention for multiplicative LCGs: the seed is
//! reduced modulo the modulus, and a zero state (which would make the
//! generator emit zeros forever) is replaced by 1.
//!
//! # Examples
//!
//! ```
//! use bloomtrial::hash::MinStdRand;
//! use rand_core::{RngCore, SeedableRng};
//!
//! let mut rng = MinStdRand::seed_from_u64(1);
//! assert_eq!(rng.next_u32(), 16_807);
//! assert_eq!(rng.next_u32(), 282_475_249);
//! ```
//!
//! # References
//!
//! - Park, S. K., & Miller, K. W. (1988). "Random number generators: good ones are hard to find"

use rand_core::{impls, Error, RngCore, SeedableRng};

/// Modulus `2³¹ − 1`.
pub const MINSTD_MODULUS: u64 = 2_147_483_647;

/// Multiplier of the original 1988 parameterization.
pub const MINSTD_MULTIPLIER: u64 = 16_807;

/// Minimal standard LCG. Outputs lie in `[1, 2³¹ − 2]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinStdRand {
    state: u64,
}

impl MinStdRand {
    /// Current internal state, always in `[1, 2³¹ − 2]`.
    #[must_use]
    #[inline]
    pub const fn state(&self) -> u64 {
        self.state
    }
}

impl RngCore for MinStdRand {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        // state < 2³¹ and multiplier < 2¹⁵, so the product fits in u64
        self.state = (self.state * MINSTD_MULTIPLIER) % MINSTD_MODULUS;
        self.state as u32
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for MinStdRand {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::seed_from_u64(u64::from_le_bytes(seed))
    }

    fn seed_from_u64(seed: u64) -> Self {
        let state = seed % MINSTD_MODULUS;
        Self {
            state: if state == 0 { 1 } else { state },
        }
    }
}
