//! Trial and sweep configuration.
//!
//! Defaults reproduce the reference experiment: `n = 10 000`, `c = 10`,
//! `k = 4..=10`, ten trials per point and 9 999 random probes.

use crate::core::params::FilterParams;
use crate::error::{BloomTrialError, Result};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Keys drawn by random workloads, `[1, 2³¹ − 2]`.
pub const KEY_DOMAIN: RangeInclusive<u64> = 1..=(i32::MAX as u64 - 1);

/// How a trial chooses inserted keys and probes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Workload {
    /// `n − 1` keys and every probe drawn uniformly from [`KEY_DOMAIN`].
    #[default]
    Random,
    /// Insert `1..n`, probe `1..=probes`.
    Sequential,
}

impl fmt::Display for Workload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Random => f.write_str("random"),
            Self::Sequential => f.write_str("sequential"),
        }
    }
}

impl FromStr for Workload {
    type Err = BloomTrialError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "random" => Ok(Self::Random),
            "sequential" | "increasing" => Ok(Self::Sequential),
            other => Err(BloomTrialError::invalid_parameters(format!(
                "unknown workload '{}' (expected 'random' or 'sequential')",
                other
            ))),
        }
    }
}

/// Parameters of a single trial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrialConfig {
    /// Expected subset size `n`; a trial inserts `n − 1` keys
    pub expected_items: usize,
    /// Bits per element `c`
    pub bits_per_item: usize,
    /// Hash slots `k`
    pub hash_count: usize,
    /// Number of membership probes
    pub probes: usize,
    /// Key selection
    pub workload: Workload,
}

impl Default for TrialConfig {
    fn default() -> Self {
        Self {
            expected_items: 10_000,
            bits_per_item: 10,
            hash_count: 4,
            probes: 9_999,
            workload: Workload::Random,
        }
    }
}

impl TrialConfig {
    /// Small sequential experiment: `n = 100`, `c = 10`, `k = 4`, 999 probes.
    #[must_use]
    pub fn sequential() -> Self {
        Self {
            expected_items: 100,
            bits_per_item: 10,
            hash_count: 4,
            probes: 999,
            workload: Workload::Sequential,
        }
    }

    /// Check the filter parameters and return them.
    ///
    /// # Errors
    ///
    /// Returns an error if `(n, c, k)` is invalid (see [`FilterParams::new`]).
    pub fn validate(&self) -> Result<FilterParams> {
        FilterParams::new(self.expected_items, self.bits_per_item, self.hash_count)
    }
}

/// Parameters of a `(c, k)` sweep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepConfig {
    /// Expected subset size `n`, shared by every point
    pub expected_items: usize,
    /// Values of `c`, outer loop
    pub bits_per_item: Vec<usize>,
    /// Values of `k`, inner loop
    pub hash_counts: RangeInclusive<usize>,
    /// Trials whose median is reported per point
    pub trials_per_point: usize,
    /// Probes per trial
    pub probes: usize,
    /// Master seed; drawn from the thread RNG when `None`
    pub seed: Option<u64>,
    /// Run the trials of each point on the rayon pool
    pub parallel: bool,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            expected_items: 10_000,
            bits_per_item: vec![10],
            hash_counts: 4..=10,
            trials_per_point: 10,
            probes: 9_999,
            seed: None,
            parallel: false,
        }
    }
}

impl SweepConfig {
    /// Trial configuration of the point `(c, k)`.
    #[must_use]
    pub fn point(&self, bits_per_item: usize, hash_count: usize) -> TrialConfig {
        TrialConfig {
            expected_items: self.expected_items,
            bits_per_item,
            hash_count,
            probes: self.probes,
            workload: Workload::Random,
        }
    }

    /// Check every point of the grid up front.
    ///
    /// # Errors
    ///
    /// - [`BloomTrialError::InvalidParameters`] if the grid is empty or
    ///   `trials_per_point == 0`
    /// - Any error of [`FilterParams::new`] for a point of the grid
    pub fn validate(&self) -> Result<()> {
        if self.trials_per_point == 0 {
            return Err(BloomTrialError::invalid_parameters(
                "trials per point must be greater than 0",
            ));
        }
        if self.bits_per_item.is_empty() || self.hash_counts.is_empty() {
            return Err(BloomTrialError::invalid_parameters(
                "sweep grid must contain at least one (c, k) point",
            ));
        }
        for &c in &self.bits_per_item {
            for k in self.hash_counts.clone() {
                self.point(c, k).validate()?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_domain_bounds() {
        assert_eq!(*KEY_DOMAIN.start(), 1);
        assert_eq!(*KEY_DOMAIN.end(), 2_147_483_646);
    }

    #[test]
    fn test_trial_defaults() {
        let config = TrialConfig::default();
        let params = config.validate().unwrap();
        assert_eq!(params.table_size(), 100_000);
        assert_eq!(config.probes, 9_999);
        assert_eq!(config.workload, Workload::Random);
    }

    #[test]
    fn test_sequential_preset() {
        let config = TrialConfig::sequential();
        assert_eq!(config.expected_items, 100);
        assert_eq!(config.probes, 999);
        assert_eq!(config.validate().unwrap().table_size(), 1_000);
    }

    #[test]
    fn test_trial_validate_rejects_zero_k() {
        let config = TrialConfig {
            hash_count: 0,
            ..TrialConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(BloomTrialError::InvalidHashCount { count: 0, .. })
        ));
    }

    #[test]
    fn test_sweep_defaults_are_valid() {
        let config = SweepConfig::default();
        config.validate().unwrap();
        assert_eq!(config.hash_counts.clone().count(), 7);
        assert_eq!(config.point(10, 4), TrialConfig::default());
    }

    #[test]
    fn test_sweep_rejects_zero_trials() {
        let config = SweepConfig {
            trials_per_point: 0,
            ..SweepConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_sweep_rejects_empty_grid() {
        let config = SweepConfig {
            bits_per_item: Vec::new(),
            ..SweepConfig::default()
        };
        assert!(config.validate().is_err());

        #[allow(clippy::reversed_empty_ranges)]
        let config = SweepConfig {
            hash_counts: 5..=4,
            ..SweepConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_sweep_rejects_bad_point() {
        let config = SweepConfig {
            hash_counts: 30..=33,
            ..SweepConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(BloomTrialError::InvalidHashCount { count: 33, .. })
        ));
    }

    #[test]
    fn test_workload_parse() {
        assert_eq!("Random".parse::<Workload>().unwrap(), Workload::Random);
        assert_eq!("sequential".parse::<Workload>().unwrap(), Workload::Sequential);
        assert!("zipf".parse::<Workload>().is_err());
        assert_eq!(Workload::Sequential.to_string(), "sequential");
    }
}
