use clap::Parser;
use itertools::Itertools;
use rand::{rngs::StdRng, Rng, SeedableRng};
use rayon::prelude::*;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;
use subgraph_patterns::{
    brute_force::brute_force_search,
    builder::GraphBuilder,
    pruned::pruned_search,
    random::{random_combination, random_matrix},
    AdjacencyMatrix, Assignment, MatchMode,
};
use tracing_subscriber::EnvFilter;

/// Benchmark the brute-force resolver against the pruned resolver
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Instances generated per (level, density) pair
    #[arg(short, long, default_value_t = 20)]
    trials: usize,

    /// First size level; level l draws n from [3l, 4l) and m from [2l, 3l)
    #[arg(long, default_value_t = 2)]
    min_level: usize,

    /// Last size level (inclusive)
    #[arg(long, default_value_t = 3)]
    max_level: usize,

    /// Number of density steps; step s uses density s / steps
    #[arg(long, default_value_t = 5)]
    density_steps: usize,

    /// Smallest edge label (inclusive)
    #[arg(long, default_value_t = -100, allow_negative_numbers = true)]
    min_value: i32,

    /// Largest edge label (exclusive)
    #[arg(long, default_value_t = 100, allow_negative_numbers = true)]
    max_value: i32,

    /// Use strict matching
    #[arg(short, long)]
    strict: bool,

    /// Base random seed (if omitted, uses entropy)
    #[arg(long)]
    seed: Option<u64>,

    /// Report file: one "brute_us pruned_us" line per instance
    #[arg(short, long, default_value = "stats.txt")]
    output: PathBuf,
}

/// One benchmark input with the assignments planted into it
struct Trial {
    data: AdjacencyMatrix,
    pattern: AdjacencyMatrix,
    planted: Vec<Assignment>,
}

struct Timing {
    brute_us: u128,
    pruned_us: u128,
    /// Resolvers disagreed or a planted assignment went missing
    failed: bool,
}

/// Build a trial entirely from its own seed.
fn generate_trial(
    seed: u64,
    level: usize,
    density: f64,
    args: &Args,
) -> subgraph_patterns::Result<Trial> {
    let mut rng = StdRng::seed_from_u64(seed);
    let n = rng.gen_range(level * 3..level * 4);
    let m = rng.gen_range(level * 2..level * 3);

    let base = random_matrix(n, args.min_value, args.max_value, density, &mut rng)?;
    let pattern = random_matrix(m, args.min_value, args.max_value, density, &mut rng)?;

    let wanted = rng.gen_range(2..12);
    let mut builder = GraphBuilder::new(base);
    let mut planted = Vec::with_capacity(wanted);
    // Dense patterns collide often; cap the retries so a trial always terminates
    for _ in 0..wanted * 50 {
        if planted.len() == wanted {
            break;
        }
        let assignment = random_combination(n, m, &mut rng)?;
        if builder.put_pattern(&pattern, assignment.as_slice())? {
            planted.push(assignment);
        }
    }

    Ok(Trial {
        data: builder.into_matrix(),
        pattern,
        planted,
    })
}

fn run_trial(trial: &Trial, mode: MatchMode) -> subgraph_patterns::Result<Timing> {
    let start = Instant::now();
    let brute = brute_force_search(&trial.data, &trial.pattern, mode)?;
    let brute_us = start.elapsed().as_micros();

    let start = Instant::now();
    let pruned = pruned_search(&trial.data, &trial.pattern, mode)?;
    let pruned_us = start.elapsed().as_micros();

    let disagree = brute != pruned;
    if disagree {
        tracing::error!(
            n = trial.data.num_vertices(),
            m = trial.pattern.num_vertices(),
            brute = brute.len(),
            pruned = pruned.len(),
            "resolvers disagree"
        );
    }
    let missing = missing_planted(&trial.planted, &pruned);
    if missing > 0 {
        tracing::error!(missing, "planted assignments not recovered");
    }

    Ok(Timing {
        brute_us,
        pruned_us,
        failed: disagree || missing > 0,
    })
}

/// Draw the next `count` trial seeds; reproducible for a given base seed and
/// independent of how many levels or density steps a run has.
fn trial_seeds(seeder: &mut StdRng, count: usize) -> Vec<u64> {
    (0..count).map(|_| seeder.gen()).collect()
}

fn missing_planted(planted: &[Assignment], found: &HashSet<Assignment>) -> usize {
    planted.iter().filter(|a| !found.contains(*a)).count()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    if args.min_level == 0 || args.min_level > args.max_level {
        eprintln!("Error: levels must satisfy 1 <= min_level <= max_level.");
        std::process::exit(1);
    }
    let mode = MatchMode::from_strict(args.strict);
    let base_seed = args.seed.unwrap_or_else(|| rand::thread_rng().gen());

    // Every trial seed is drawn from one stream seeded with the base seed
    let mut seeder = StdRng::seed_from_u64(base_seed);
    let mut timings = Vec::new();
    for level in args.min_level..=args.max_level {
        for step in 1..=args.density_steps {
            let density = step as f64 / args.density_steps as f64;
            let seeds = trial_seeds(&mut seeder, args.trials);

            let trials: Vec<Trial> = seeds
                .par_iter()
                .map(|&seed| generate_trial(seed, level, density, &args))
                .collect::<subgraph_patterns::Result<_>>()?;

            tracing::info!(level, density, trials = trials.len(), "timing trials");
            // Timed runs stay sequential so the measurements do not interfere
            for trial in &trials {
                timings.push(run_trial(trial, mode)?);
            }
        }
    }

    let mut writer = BufWriter::new(File::create(&args.output)?);
    for timing in timings.iter().sorted_by_key(|t| t.brute_us) {
        writeln!(writer, "{} {}", timing.brute_us, timing.pruned_us)?;
    }
    writer.flush()?;

    let total_brute: u128 = timings.iter().map(|t| t.brute_us).sum();
    let total_pruned: u128 = timings.iter().map(|t| t.pruned_us).sum();
    println!("Instances: {}", timings.len());
    println!("Seed: {}", base_seed);
    println!("Total brute force time: {:.3} ms", total_brute as f64 / 1000.0);
    println!("Total pruned time: {:.3} ms", total_pruned as f64 / 1000.0);
    println!("Report written to {:?}", args.output);

    let failures = timings.iter().filter(|t| t.failed).count();
    if failures > 0 {
        eprintln!("Error: {} of {} instances failed verification.", failures, timings.len());
        std::process::exit(2);
    }

    Ok(())
}
