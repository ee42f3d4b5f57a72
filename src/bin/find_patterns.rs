use clap::{Parser, ValueEnum};
use itertools::Itertools;
use std::collections::HashSet;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use subgraph_patterns::{
    brute_force::brute_force_search, parser::parse_input_file, pruned::pruned_search,
    utils::search_space, AdjacencyMatrix, Assignment, MatchMode,
};
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Algorithm {
    /// Every vertex subset, every ordering
    Brute,
    /// Backtracking with incremental checks
    Pruned,
    /// Run both and compare
    Both,
}

/// Locate every placement of a pattern matrix inside a data-graph matrix
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the input file: data graph first, then the pattern
    #[arg(short, long)]
    input: PathBuf,

    /// Require every cell to match; by default zero pattern cells are wildcards
    #[arg(short, long)]
    strict: bool,

    /// Search algorithm to run
    #[arg(short, long, value_enum, default_value_t = Algorithm::Pruned)]
    algorithm: Algorithm,
}

type Search = fn(
    &AdjacencyMatrix,
    &AdjacencyMatrix,
    MatchMode,
) -> subgraph_patterns::Result<HashSet<Assignment>>;

fn timed(
    search: Search,
    data: &AdjacencyMatrix,
    pattern: &AdjacencyMatrix,
    mode: MatchMode,
) -> subgraph_patterns::Result<(HashSet<Assignment>, Duration)> {
    let start = Instant::now();
    let found = search(data, pattern, mode)?;
    Ok((found, start.elapsed()))
}

fn print_assignments(label: &str, found: &HashSet<Assignment>, elapsed: Duration) {
    println!(
        "{}: {} assignment(s) in {:.3} ms",
        label,
        found.len(),
        elapsed.as_secs_f64() * 1000.0
    );
    for (i, assignment) in found.iter().sorted().enumerate() {
        println!("  Assignment {}: {}", i + 1, assignment);
    }
    println!();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let mode = MatchMode::from_strict(args.strict);

    println!("Subgraph Pattern Search");
    println!("==========================================================");
    println!();

    let (data, pattern) = match parse_input_file(&args.input) {
        Ok(matrices) => matrices,
        Err(e) => {
            eprintln!("Error parsing input file: {}", e);
            std::process::exit(1);
        }
    };

    println!("Data graph: {} vertices", data.num_vertices());
    println!("Pattern: {} vertices", pattern.num_vertices());
    println!("Mode: {:?}", mode);
    println!();

    println!("Data graph adjacency matrix:");
    print!("{}", data);
    println!();
    println!("Pattern adjacency matrix:");
    print!("{}", pattern);
    println!();

    tracing::info!(
        brute_force_orderings = search_space(data.num_vertices(), pattern.num_vertices()),
        "instance loaded"
    );

    let brute = match args.algorithm {
        Algorithm::Brute | Algorithm::Both => {
            let (found, elapsed) = timed(brute_force_search, &data, &pattern, mode)?;
            print_assignments("Brute force", &found, elapsed);
            Some(found)
        }
        Algorithm::Pruned => None,
    };

    let pruned = match args.algorithm {
        Algorithm::Pruned | Algorithm::Both => {
            let (found, elapsed) = timed(pruned_search, &data, &pattern, mode)?;
            print_assignments("Pruned", &found, elapsed);
            Some(found)
        }
        Algorithm::Brute => None,
    };

    if let (Some(brute), Some(pruned)) = (brute, pruned) {
        if brute == pruned {
            println!("Both algorithms agree.");
        } else {
            let only_brute = brute.difference(&pruned).count();
            let only_pruned = pruned.difference(&brute).count();
            tracing::error!(only_brute, only_pruned, "result sets differ");
            std::process::exit(2);
        }
    }

    Ok(())
}
