//! Shared key generators for all benchmarks
#![allow(dead_code)]

use bloomtrial::trial::KEY_DOMAIN;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Filter sizes benchmarked (expected items `n`)
pub const SIZES: &[usize] = &[1_000, 10_000, 100_000];

/// Hash counts benchmarked
pub const HASH_COUNTS: &[usize] = &[1, 4, 7, 10];

/// Fixed seed so every run benchmarks the same keys
pub const BENCH_SEED: u64 = 0xb100_f11e;

/// Keys drawn uniformly from the trial key domain
pub fn random_keys(count: usize) -> Vec<u64> {
    let mut rng = ChaCha8Rng::seed_from_u64(BENCH_SEED);
    (0..count).map(|_| rng.gen_range(KEY_DOMAIN)).collect()
}

/// Keys `1..=count`
pub fn sequential_keys(count: usize) -> Vec<u64> {
    (1..=count as u64).collect()
}

/// Deterministic RNG for strategy construction
pub fn bench_rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(BENCH_SEED ^ 0x5eed)
}
