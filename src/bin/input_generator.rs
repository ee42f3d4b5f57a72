use clap::Parser;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use subgraph_patterns::{
    builder::GraphBuilder,
    parser::write_instance,
    random::{random_combination, random_matrix},
    AdjacencyMatrix, Assignment,
};
use tracing_subscriber::EnvFilter;

/// Input Generator for subgraph pattern search instances.
///
/// This tool produces an input file containing a data graph followed by a
/// pattern, in the format expected by `find-patterns`:
///
/// <n>
/// <data graph: n rows of n space-separated integers>
/// <m>
/// <pattern: m rows of m space-separated integers>
///
/// The data graph starts as random noise and then receives `planted` copies of
/// the pattern at random vertex assignments. Copies that would contradict an
/// earlier copy are skipped and retried at another assignment, so every
/// printed assignment is a guaranteed strict-mode match.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Generate random data graphs with planted pattern copies"
)]
struct Args {
    /// Number of vertices in the data graph (n)
    #[arg(long)]
    n: usize,

    /// Number of vertices in the pattern (m), must be <= n
    #[arg(long)]
    m: usize,

    /// Probability that a cell is non-zero, for both the noise and the pattern
    #[arg(long, default_value_t = 0.35)]
    density: f64,

    /// Smallest edge label (inclusive)
    #[arg(long, default_value_t = -10, allow_negative_numbers = true)]
    min_value: i32,

    /// Largest edge label (exclusive)
    #[arg(long, default_value_t = 10, allow_negative_numbers = true)]
    max_value: i32,

    /// Number of pattern copies to plant
    #[arg(long, default_value_t = 3)]
    planted: usize,

    /// Give up after this many rejected placements
    #[arg(long, default_value_t = 1000)]
    max_attempts: usize,

    /// Random seed (if omitted, uses entropy)
    #[arg(long)]
    seed: Option<u64>,

    /// Output file path to write the instance (mandatory)
    #[arg(long)]
    output: PathBuf,
}

/// Plant up to `count` copies of `pattern` at random assignments.
fn plant_patterns<R: Rng>(
    builder: &mut GraphBuilder,
    pattern: &AdjacencyMatrix,
    count: usize,
    max_attempts: usize,
    rng: &mut R,
) -> subgraph_patterns::Result<Vec<Assignment>> {
    let n = builder.matrix().num_vertices();
    let mut planted = Vec::with_capacity(count);
    let mut rejected = 0;

    while planted.len() < count && rejected < max_attempts {
        let assignment = random_combination(n, pattern.num_vertices(), rng)?;
        if builder.put_pattern(pattern, assignment.as_slice())? {
            planted.push(assignment);
        } else {
            rejected += 1;
        }
    }

    if planted.len() < count {
        tracing::warn!(
            planted = planted.len(),
            requested = count,
            rejected,
            "stopped planting after too many collisions"
        );
    }
    Ok(planted)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    if args.n == 0 {
        eprintln!("Error: n must be positive.");
        std::process::exit(1);
    }
    if args.m > args.n {
        eprintln!("Error: m must not exceed n.");
        std::process::exit(1);
    }

    // Initialize RNG
    let mut rng: StdRng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let base = random_matrix(args.n, args.min_value, args.max_value, args.density, &mut rng)?;
    let pattern = random_matrix(args.m, args.min_value, args.max_value, args.density, &mut rng)?;

    let mut builder = GraphBuilder::new(base);
    let planted = plant_patterns(
        &mut builder,
        &pattern,
        args.planted,
        args.max_attempts,
        &mut rng,
    )?;
    let data = builder.into_matrix();

    // Print stats to stdout (not into the file)
    println!("Generated instance:");
    println!("  n = {}", args.n);
    println!("  m = {}", args.m);
    println!("  density = {:.3}", args.density);
    println!("  labels in [{}, {})", args.min_value, args.max_value);
    if let Some(seed) = args.seed {
        println!("  seed = {}", seed);
    }
    println!("  non-zero cells: data = {}, pattern = {}", data.edge_count(), pattern.edge_count());
    println!("  planted {} of {} copies:", planted.len(), args.planted);
    for assignment in &planted {
        println!("    {}", assignment);
    }
    println!("  output file: {:?}", args.output);

    let mut writer = BufWriter::new(File::create(&args.output)?);
    write_instance(&mut writer, &data, &pattern)?;
    writer.flush()?;

    Ok(())
}
