use anyhow::Context;
use bloomtrial::trial::{
    run_sweep, run_trial, scatter_samples, ScatterMode, SweepConfig, TrialConfig, TrialReport,
    Workload,
};
use clap::{Args, Parser, Subcommand};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Bloom filter false-positive experiments.
#[derive(Parser)]
#[command(name = "bloomtrial", author, version, about = "Bloom filter hash family trials", long_about = None)]
struct Cli {
    #[command(flatten)]
    opts: Options,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct Options {
    /// Master RNG seed; a random seed is drawn and logged when omitted.
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Log filter directive (overrides RUST_LOG), e.g. `info` or `bloomtrial=debug`.
    #[arg(long = "log-level", global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Median false-positive rate over a (c, k) grid.
    Sweep {
        /// Expected items n.
        #[arg(short = 'n', long, default_value_t = 10_000)]
        items: usize,
        /// Bits per element c (comma separated for several).
        #[arg(short = 'c', long = "bits-per-item", value_delimiter = ',', default_value = "10")]
        bits_per_item: Vec<usize>,
        /// Smallest hash count k.
        #[arg(long = "k-min", default_value_t = 4)]
        k_min: usize,
        /// Largest hash count k.
        #[arg(long = "k-max", default_value_t = 10)]
        k_max: usize,
        /// Trials per (c, k) point.
        #[arg(long, default_value_t = 10)]
        trials: usize,
        /// Probes per trial.
        #[arg(long, default_value_t = 9_999)]
        probes: usize,
        /// Run the trials of each point in parallel.
        #[arg(long)]
        parallel: bool,
        /// Append the theoretical rate to each line.
        #[arg(long)]
        theory: bool,
    },

    /// One random-key trial.
    Trial {
        /// Expected items n.
        #[arg(short = 'n', long, default_value_t = 10_000)]
        items: usize,
        /// Bits per element c.
        #[arg(short = 'c', long = "bits-per-item", default_value_t = 10)]
        bits_per_item: usize,
        /// Hash count k.
        #[arg(short = 'k', long = "hash-count", default_value_t = 4)]
        hash_count: usize,
        /// Probes.
        #[arg(long, default_value_t = 9_999)]
        probes: usize,
        /// Print per-position load diagnostics (requires the `metrics` feature).
        #[arg(long)]
        loads: bool,
    },

    /// Sequential keys: insert 1..n, probe 1..=probes.
    Sequential {
        /// Expected items n.
        #[arg(short = 'n', long, default_value_t = 100)]
        items: usize,
        /// Bits per element c.
        #[arg(short = 'c', long = "bits-per-item", default_value_t = 10)]
        bits_per_item: usize,
        /// Hash count k.
        #[arg(short = 'k', long = "hash-count", default_value_t = 4)]
        hash_count: usize,
        /// Probes.
        #[arg(long, default_value_t = 999)]
        probes: usize,
    },

    /// Raw single-slot hash values for scatter plots.
    Scatter {
        /// `random` or `increasing` keys.
        #[arg(long, default_value = "random")]
        mode: ScatterMode,
        /// Number of points.
        #[arg(long, default_value_t = 100)]
        count: usize,
    },
}

fn init_logging(directive: Option<&str>) -> anyhow::Result<()> {
    let filter = match directive {
        Some(directive) => EnvFilter::try_new(directive)
            .with_context(|| format!("invalid log filter '{}'", directive))?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
    Ok(())
}

fn trial_rng(seed: Option<u64>) -> ChaCha8Rng {
    let seed = seed.unwrap_or_else(|| rand::thread_rng().gen());
    tracing::info!(seed, "trial rng seeded");
    ChaCha8Rng::seed_from_u64(seed)
}

fn print_report(report: &TrialReport) {
    println!("seed fp: {}", format_outcome(report.seeded));
    println!("univ fp: {}", format_outcome(report.universal));
}

fn format_outcome(outcome: bloomtrial::trial::TrialOutcome) -> String {
    let rate = outcome
        .false_positive_rate()
        .map_or_else(|| "undefined".to_string(), |r| format!("{:.4}", r));
    format!(
        "{}, tp: {}, neg: {}, rate: {}",
        outcome.false_positives, outcome.true_positives, outcome.true_negatives, rate
    )
}

fn print_vec<T: std::fmt::Display>(name: &str, values: impl IntoIterator<Item = T>) {
    let joined: Vec<String> = values.into_iter().map(|v| v.to_string()).collect();
    println!("{} = [{}]", name, joined.join(", "));
}

#[cfg(feature = "metrics")]
fn random_trial(config: &TrialConfig, rng: &mut ChaCha8Rng, loads: bool) -> anyhow::Result<()> {
    if !loads {
        let report = run_trial(config, rng).context("trial failed")?;
        print_report(&report);
        return Ok(());
    }

    let (report, seeded, universal) =
        bloomtrial::trial::run_trial_with_loads(config, rng).context("trial failed")?;
    print_report(&report);
    println!("seed loads: {}", seeded);
    println!("univ loads: {}", universal);
    Ok(())
}

#[cfg(not(feature = "metrics"))]
fn random_trial(config: &TrialConfig, rng: &mut ChaCha8Rng, loads: bool) -> anyhow::Result<()> {
    if loads {
        tracing::warn!("load diagnostics requested but the `metrics` feature is disabled");
    }
    let report = run_trial(config, rng).context("trial failed")?;
    print_report(&report);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.opts.log_level.as_deref())?;

    match cli.command {
        Commands::Sweep {
            items,
            bits_per_item,
            k_min,
            k_max,
            trials,
            probes,
            parallel,
            theory,
        } => {
            let config = SweepConfig {
                expected_items: items,
                bits_per_item,
                hash_counts: k_min..=k_max,
                trials_per_point: trials,
                probes,
                seed: cli.opts.seed,
                parallel,
            };
            for row in run_sweep(&config).context("sweep failed")? {
                if theory {
                    println!("{}, Theory: {:.4}", row, row.theoretical);
                } else {
                    println!("{}", row);
                }
            }
        }

        Commands::Trial {
            items,
            bits_per_item,
            hash_count,
            probes,
            loads,
        } => {
            let config = TrialConfig {
                expected_items: items,
                bits_per_item,
                hash_count,
                probes,
                workload: Workload::Random,
            };
            random_trial(&config, &mut trial_rng(cli.opts.seed), loads)?;
        }

        Commands::Sequential {
            items,
            bits_per_item,
            hash_count,
            probes,
        } => {
            let config = TrialConfig {
                expected_items: items,
                bits_per_item,
                hash_count,
                probes,
                workload: Workload::Sequential,
            };
            let report = run_trial(&config, &mut trial_rng(cli.opts.seed)).context("trial failed")?;
            print_report(&report);
        }

        Commands::Scatter { mode, count } => {
            let points = scatter_samples(mode, count, &mut trial_rng(cli.opts.seed))
                .context("scatter sampling failed")?;
            print_vec("Numbers", points.iter().map(|p| p.key));
            print_vec("SeedHash", points.iter().map(|p| p.seeded));
            print_vec("UniversalHash", points.iter().map(|p| p.universal));
        }
    }

    Ok(())
}
