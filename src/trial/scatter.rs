//! Raw hash values for scatter plots.
//!
//! Each point draws a fresh single-slot strategy of each family over a table
//! of `100 · 10` bits and records where one key lands. Plotting `key` against
//! the two positions shows whether either family leaks structure from its
//! input, which sequential keys expose most clearly.

use super::config::KEY_DOMAIN;
use crate::core::params::FilterParams;
use crate::error::{BloomTrialError, Result};
use crate::hash::{HashStrategy, SeededGenerator, UniversalAffine};
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// Expected items of the table each point hashes into.
pub const SCATTER_ITEMS: usize = 100;

/// Bits per element of the table each point hashes into.
pub const SCATTER_MULTIPLIER: usize = 10;

/// Key selection for scatter samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScatterMode {
    /// Keys drawn uniformly from [`KEY_DOMAIN`]
    #[default]
    Random,
    /// Keys `0, 1, 2, …`
    Increasing,
}

impl FromStr for ScatterMode {
    type Err = BloomTrialError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "random" => Ok(Self::Random),
            "increasing" | "sequential" => Ok(Self::Increasing),
            other => Err(BloomTrialError::invalid_parameters(format!(
                "unknown scatter mode '{}' (expected 'random' or 'increasing')",
                other
            ))),
        }
    }
}

/// One key and its position under each family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScatterPoint {
    /// Input key
    pub key: u64,
    /// Position under a fresh seeded-generator slot
    pub seeded: usize,
    /// Position under a fresh universal affine slot
    pub universal: usize,
}

impl fmt::Display for ScatterPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.key, self.seeded, self.universal)
    }
}

/// Draw `count` scatter points.
///
/// # Errors
///
/// Returns an error only if the fixed table parameters were invalid, which
/// cannot happen for the constants above.
///
/// # Examples
///
/// ```
/// use bloomtrial::trial::{scatter_samples, ScatterMode};
///
/// let mut rng = rand::thread_rng();
/// let points = scatter_samples(ScatterMode::Increasing, 5, &mut rng).unwrap();
///
/// assert_eq!(points.iter().map(|p| p.key).collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
/// assert!(points.iter().all(|p| p.seeded < 1000 && p.universal < 1000));
/// ```
pub fn scatter_samples<G: Rng + ?Sized>(
    mode: ScatterMode,
    count: usize,
    rng: &mut G,
) -> Result<Vec<ScatterPoint>> {
    let params = FilterParams::new(SCATTER_ITEMS, SCATTER_MULTIPLIER, 1)?;
    let m = params.table_size();

    let mut points = Vec::with_capacity(count);
    for i in 0..count {
        let seeded: SeededGenerator = SeededGenerator::new(1, rng)?;
        let universal = UniversalAffine::new(1, rng)?;
        let key = match mode {
            ScatterMode::Random => rng.gen_range(KEY_DOMAIN),
            ScatterMode::Increasing => i as u64,
        };
        points.push(ScatterPoint {
            key,
            seeded: seeded.hash(0, key, m),
            universal: universal.hash(0, key, m),
        });
    }

    tracing::debug!(count, ?mode, m, "drew scatter samples");
    Ok(points)
}
