//! Median false-positive rates over a `(c, k)` grid.

use super::config::{SweepConfig, TrialConfig};
use super::runner::{run_trial, TrialReport};
use super::stats::median;
use crate::core::params::expected_fp_rate;
use crate::error::Result;
use crate::hash::StrategyKind;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::fmt;

/// Result of one sweep point.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepRow {
    /// Bits per element `c`
    pub bits_per_item: usize,
    /// Hash slots `k`
    pub hash_count: usize,
    /// Median seeded-family rate; `None` if every trial was undefined
    pub seeded_median: Option<f64>,
    /// Median universal-family rate; `None` if every trial was undefined
    pub universal_median: Option<f64>,
    /// Seeded-family trials with a defined rate, i.e. the median's sample size
    pub seeded_trials: usize,
    /// Universal-family trials with a defined rate
    pub universal_trials: usize,
    /// `(1 − e^{−k(n−1)/m})^k`
    pub theoretical: f64,
}

fn write_rate(f: &mut fmt::Formatter<'_>, rate: Option<f64>) -> fmt::Result {
    match rate {
        Some(rate) => write!(f, "{:.4}", rate),
        None => f.write_str("undefined"),
    }
}

impl fmt::Display for SweepRow {
    /// `c: 10, k: 4, Pseudorandom: 0.0118, Universal: 0.0121`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "c: {}, k: {}, {}: ",
            self.bits_per_item,
            self.hash_count,
            StrategyKind::SeededGenerator
        )?;
        write_rate(f, self.seeded_median)?;
        write!(f, ", {}: ", StrategyKind::UniversalAffine)?;
        write_rate(f, self.universal_median)
    }
}

/// Run every point of the sweep grid, `c` in the outer loop and `k` inner.
///
/// # Errors
///
/// Returns an error if the configuration is invalid (see
/// [`SweepConfig::validate`]).
///
/// # Examples
///
/// ```
/// use bloomtrial::trial::{run_sweep, SweepConfig};
///
/// let config = SweepConfig {
///     expected_items: 500,
///     hash_counts: 4..=5,
///     trials_per_point: 3,
///     probes: 1_000,
///     seed: Some(7),
///     ..SweepConfig::default()
/// };
/// let rows = run_sweep(&config).unwrap();
///
/// assert_eq!(rows.len(), 2);
/// assert!(rows[0].to_string().starts_with("c: 10, k: 4, Pseudorandom: "));
/// ```
pub fn run_sweep(config: &SweepConfig) -> Result<Vec<SweepRow>> {
    config.validate()?;

    let seed = config.seed.unwrap_or_else(|| rand::thread_rng().gen());
    let mut master = ChaCha8Rng::seed_from_u64(seed);
    tracing::info!(
        seed,
        n = config.expected_items,
        trials = config.trials_per_point,
        probes = config.probes,
        parallel = config.parallel,
        "starting sweep"
    );

    let mut rows = Vec::new();
    for &c in &config.bits_per_item {
        for k in config.hash_counts.clone() {
            let point = config.point(c, k);
            let seeds: Vec<u64> = (0..config.trials_per_point).map(|_| master.gen()).collect();
            let reports = run_trials(&point, &seeds, config.parallel)?;

            let seeded: Vec<f64> = reports
                .iter()
                .filter_map(|r| r.seeded.false_positive_rate())
                .collect();
            let universal: Vec<f64> = reports
                .iter()
                .filter_map(|r| r.universal.false_positive_rate())
                .collect();

            let trials = reports.len();
            let params = point.validate()?;
            let row = SweepRow {
                bits_per_item: c,
                hash_count: k,
                seeded_median: point_median(
                    &seeded,
                    trials,
                    StrategyKind::SeededGenerator,
                    c,
                    k,
                )?,
                universal_median: point_median(
                    &universal,
                    trials,
                    StrategyKind::UniversalAffine,
                    c,
                    k,
                )?,
                seeded_trials: seeded.len(),
                universal_trials: universal.len(),
                theoretical: expected_fp_rate(
                    params.table_size(),
                    params.expected_items() - 1,
                    k,
                )?,
            };

            tracing::info!(
                c,
                k,
                seeded = ?row.seeded_median,
                universal = ?row.universal_median,
                theoretical = row.theoretical,
                "sweep point complete"
            );
            rows.push(row);
        }
    }

    Ok(rows)
}

/// Median of the defined rates of one point; `trials` counts all trials run.
fn point_median(
    rates: &[f64],
    trials: usize,
    kind: StrategyKind,
    c: usize,
    k: usize,
) -> Result<Option<f64>> {
    if rates.is_empty() {
        tracing::warn!(
            c,
            k,
            strategy = %kind,
            trials,
            "every trial had an undefined false-positive rate"
        );
        return Ok(None);
    }

    let dropped = trials.saturating_sub(rates.len());
    if dropped > 0 {
        tracing::warn!(
            c,
            k,
            strategy = %kind,
            dropped,
            remaining = rates.len(),
            "undefined trials dropped before taking the median"
        );
    }
    median(rates).map(Some)
}

fn run_seeded_trial(config: &TrialConfig, seed: u64) -> Result<TrialReport> {
    run_trial(config, &mut ChaCha8Rng::seed_from_u64(seed))
}

#[cfg(feature = "parallel")]
fn run_trials(config: &TrialConfig, seeds: &[u64], parallel: bool) -> Result<Vec<TrialReport>> {
    use rayon::prelude::*;

    if parallel {
        seeds
            .par_iter()
            .map(|&seed| run_seeded_trial(config, seed))
            .collect()
    } else {
        seeds
            .iter()
            .map(|&seed| run_seeded_trial(config, seed))
            .collect()
    }
}

#[cfg(not(feature = "parallel"))]
fn run_trials(config: &TrialConfig, seeds: &[u64], parallel: bool) -> Result<Vec<TrialReport>> {
    if parallel {
        tracing::warn!("parallel sweep requested but the `parallel` feature is disabled");
    }
    seeds
        .iter()
        .map(|&seed| run_seeded_trial(config, seed))
        .collect()
}
