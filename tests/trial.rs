//! Statistical behavior of the trial harness.

use bloomtrial::core::params::expected_fp_rate;
use bloomtrial::hash::{HashStrategy, UniversalAffine};
use bloomtrial::trial::{median, run_sweep, run_trial, SweepConfig, TrialConfig, Workload};
use bloomtrial::BloomTrialError;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn median_rates(config: &TrialConfig, trials: u64) -> (f64, f64) {
    let mut seeded = Vec::new();
    let mut universal = Vec::new();
    for seed in 0..trials {
        let report = run_trial(config, &mut ChaCha8Rng::seed_from_u64(seed)).unwrap();
        seeded.push(report.seeded.false_positive_rate().unwrap());
        universal.push(report.universal.false_positive_rate().unwrap());
    }
    (median(&seeded).unwrap(), median(&universal).unwrap())
}

#[test]
fn test_fp_rate_decreases_with_bits_per_item() {
    let base = TrialConfig {
        expected_items: 1_000,
        bits_per_item: 4,
        hash_count: 4,
        probes: 5_000,
        workload: Workload::Random,
    };
    let (seeded_small, universal_small) = median_rates(&base, 5);
    let (seeded_large, universal_large) = median_rates(
        &TrialConfig {
            bits_per_item: 16,
            ..base
        },
        5,
    );

    assert!(seeded_large < seeded_small, "{} !< {}", seeded_large, seeded_small);
    assert!(universal_large < universal_small, "{} !< {}", universal_large, universal_small);
}

#[test]
fn test_both_families_track_theory() {
    let config = TrialConfig {
        expected_items: 2_000,
        bits_per_item: 8,
        hash_count: 4,
        probes: 10_000,
        workload: Workload::Random,
    };
    let (seeded, universal) = median_rates(&config, 5);
    let theory = expected_fp_rate(16_000, 1_999, 4).unwrap();

    for (name, observed) in [("seeded", seeded), ("universal", universal)] {
        assert!(
            (observed - theory).abs() < theory * 0.5,
            "{}: observed {} vs theory {}",
            name,
            observed,
            theory
        );
    }
}

#[test]
fn test_universal_collision_frequency_near_one_over_m() {
    let m = 100;
    let draws = 20_000;
    let mut rng = ChaCha8Rng::seed_from_u64(77);

    let collisions = (0..draws)
        .filter(|_| {
            let strategy = UniversalAffine::new(1, &mut rng).unwrap();
            strategy.hash(0, 1, m) == strategy.hash(0, 2, m)
        })
        .count();
    let frequency = collisions as f64 / draws as f64;

    assert!(
        frequency > 0.003 && frequency < 0.02,
        "collision frequency {} should be close to 1/m = 0.01",
        frequency
    );
}

#[test]
fn test_median_examples() {
    assert!((median(&[0.1, 0.2, 0.3, 0.4]).unwrap() - 0.25).abs() < 1e-12);
    assert!(matches!(
        median(&[]),
        Err(BloomTrialError::EmptySample { .. })
    ));
}

#[test]
fn test_sweep_reproducible_from_seed() {
    let config = SweepConfig {
        expected_items: 500,
        bits_per_item: vec![10],
        hash_counts: 4..=6,
        trials_per_point: 3,
        probes: 1_000,
        seed: Some(2024),
        parallel: true,
    };

    let first = run_sweep(&config).unwrap();
    let second = run_sweep(&config).unwrap();

    assert_eq!(first.len(), 3);
    assert_eq!(first, second);
    for (row, k) in first.iter().zip(4..=6) {
        assert_eq!(row.hash_count, k);
        assert!(row.to_string().starts_with(&format!("c: 10, k: {}, Pseudorandom: ", k)));
    }
}

#[test]
fn test_sequential_workload_reports_all_members() {
    let report = run_trial(&TrialConfig::sequential(), &mut ChaCha8Rng::seed_from_u64(9)).unwrap();
    assert_eq!(report.seeded.true_positives, 99);
    assert_eq!(report.universal.true_positives, 99);
    assert_eq!(report.seeded.probes(), 999);
}
