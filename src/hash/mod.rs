//! Hash families for Bloom filters.
//!
//! # Module Structure
//!
//! ```text
//! hash/
//! ├── strategies.rs - HashStrategy trait, StrategyKind, AnyStrategy
//! ├── seeded.rs     - Re-seeded pseudorandom generator family
//! ├── universal.rs  - Universal affine modular family
//! ├── minstd.rs     - Park–Miller generator, opt-in for the seeded family
//! └── mod.rs        - This file (public API)
//! ```
//!
//! # Choosing a Family
//!
//! | Family              | Cost per slot            | Collision guarantee              |
//! |---------------------|--------------------------|----------------------------------|
//! | [`SeededGenerator`] | seed + one generator step | none beyond the generator's quality |
//! | [`UniversalAffine`] | one multiply-add, two mods | ≈ `1/m` for any pair of distinct keys |
//!
//! Both families draw their per-slot parameters from a caller-owned RNG at
//! construction; nothing in this module keeps global random state.
//!
//! # Examples
//!
//! ```
//! use bloomtrial::hash::{HashStrategy, UniversalAffine};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(3);
//! let strategy = UniversalAffine::new(4, &mut rng).unwrap();
//!
//! let positions = strategy.positions(1234, 1000);
//! assert_eq!(positions.len(), 4);
//! assert!(positions.iter().all(|&p| p < 1000));
//! ```

pub mod minstd;
pub mod seeded;
pub mod strategies;
pub mod universal;

pub use minstd::MinStdRand;
pub use seeded::SeededGenerator;
pub use strategies::{AnyStrategy, HashStrategy, StrategyKind};
pub use universal::{UniversalAffine, DEFAULT_MODULUS};
