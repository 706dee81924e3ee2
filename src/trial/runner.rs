//! Single-trial execution and outcome classification.

use super::config::{TrialConfig, Workload, KEY_DOMAIN};
use crate::error::Result;
use crate::filters::BloomFilter;
use crate::hash::{HashStrategy, SeededGenerator, UniversalAffine};
use rand::Rng;
use std::collections::HashSet;
use std::fmt;

#[cfg(feature = "metrics")]
use crate::metrics::LoadTally;

/// Probe counts of one filter in one trial.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrialOutcome {
    /// Probes reported present that were inserted
    pub true_positives: usize,
    /// Probes reported present that were never inserted
    pub false_positives: usize,
    /// Probes reported absent
    pub true_negatives: usize,
}

impl TrialOutcome {
    /// Classify one probe answer against ground truth.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if a member is reported absent, which would be
    /// a false negative.
    pub fn record(&mut self, reported: bool, member: bool) {
        debug_assert!(reported || !member, "bloom filter produced a false negative");
        match (reported, member) {
            (true, true) => self.true_positives += 1,
            (true, false) => self.false_positives += 1,
            (false, _) => self.true_negatives += 1,
        }
    }

    /// Total probes classified.
    #[must_use]
    pub fn probes(&self) -> usize {
        self.true_positives + self.false_positives + self.true_negatives
    }

    /// `fp / (fp + tn)`, or `None` when no probe was a non-member.
    ///
    /// ```
    /// use bloomtrial::trial::TrialOutcome;
    ///
    /// let outcome = TrialOutcome { true_positives: 5, false_positives: 1, true_negatives: 3 };
    /// assert_eq!(outcome.false_positive_rate(), Some(0.25));
    /// assert_eq!(TrialOutcome::default().false_positive_rate(), None);
    /// ```
    #[must_use]
    pub fn false_positive_rate(&self) -> Option<f64> {
        let negatives = self.false_positives + self.true_negatives;
        if negatives == 0 {
            return None;
        }
        Some(self.false_positives as f64 / negatives as f64)
    }
}

impl fmt::Display for TrialOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "fp: {}, tp: {}, neg: {}",
            self.false_positives, self.true_positives, self.true_negatives
        )
    }
}

/// Outcomes of both hash families over the same insert and probe sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrialReport {
    /// Seeded-generator family
    pub seeded: TrialOutcome,
    /// Universal affine family
    pub universal: TrialOutcome,
}

/// Run one trial.
///
/// Both filters are built from `rng`, then receive the identical sequence of
/// inserts and probes.
///
/// # Errors
///
/// Returns an error if the configuration is invalid (see
/// [`TrialConfig::validate`]).
pub fn run_trial<G: Rng + ?Sized>(config: &TrialConfig, rng: &mut G) -> Result<TrialReport> {
    execute(config, rng, |_, _, _| {})
}

/// Run one trial and tally the bit positions each family touched on insert.
///
/// Returns `(report, seeded_loads, universal_loads)`.
///
/// # Errors
///
/// Returns an error if the configuration is invalid (see
/// [`TrialConfig::validate`]).
#[cfg(feature = "metrics")]
pub fn run_trial_with_loads<G: Rng + ?Sized>(
    config: &TrialConfig,
    rng: &mut G,
) -> Result<(TrialReport, LoadTally, LoadTally)> {
    let mut seeded_loads = LoadTally::new();
    let mut universal_loads = LoadTally::new();
    let report = execute(config, rng, |seeded, universal, key| {
        seeded_loads.record_key(seeded, key);
        universal_loads.record_key(universal, key);
    })?;
    Ok((report, seeded_loads, universal_loads))
}

fn execute<G, F>(config: &TrialConfig, rng: &mut G, mut on_insert: F) -> Result<TrialReport>
where
    G: Rng + ?Sized,
    F: FnMut(&BloomFilter<SeededGenerator>, &BloomFilter<UniversalAffine>, u64),
{
    let params = config.validate()?;
    let k = params.hash_count();
    let mut seeded = BloomFilter::with_strategy(params, SeededGenerator::new(k, rng)?)?;
    let mut universal = BloomFilter::with_strategy(params, UniversalAffine::new(k, rng)?)?;

    let inserts = params.expected_items() - 1;
    let mut members = HashSet::with_capacity(inserts);
    for i in 1..=inserts {
        let key = match config.workload {
            Workload::Random => rng.gen_range(KEY_DOMAIN),
            Workload::Sequential => i as u64,
        };
        members.insert(key);
        seeded.insert(key);
        universal.insert(key);
        on_insert(&seeded, &universal, key);
    }

    let probes: Vec<u64> = (1..=config.probes)
        .map(|i| match config.workload {
            Workload::Random => rng.gen_range(KEY_DOMAIN),
            Workload::Sequential => i as u64,
        })
        .collect();

    let report = TrialReport {
        seeded: classify(&seeded, &members, probes.iter().copied()),
        universal: classify(&universal, &members, probes.iter().copied()),
    };

    tracing::debug!(
        n = params.expected_items(),
        c = params.bits_per_item(),
        k,
        workload = %config.workload,
        distinct_members = members.len(),
        seeded_fp = report.seeded.false_positives,
        universal_fp = report.universal.false_positives,
        "trial complete"
    );

    Ok(report)
}

/// Classify `probes` against `filter` and the exact `members` set.
pub fn classify<S: HashStrategy>(
    filter: &BloomFilter<S>,
    members: &HashSet<u64>,
    probes: impl IntoIterator<Item = u64>,
) -> TrialOutcome {
    let mut outcome = TrialOutcome::default();
    for probe in probes {
        outcome.record(filter.contains(probe), members.contains(&probe));
    }
    outcome
}
