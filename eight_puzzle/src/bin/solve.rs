use anyhow::Context;
use clap::Parser;
use eight_puzzle::config::SolverConfig;
use eight_puzzle::heuristics::Heuristic;
use eight_puzzle::utils::{format_moves, format_path, parse_state};
use eight_puzzle::{solve, PuzzleError, State};
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Solve an 8-puzzle instance with A*", long_about = None)]
struct Args {
    /// Start board, nine numbers row-major, 0 for the blank (e.g. "7,2,4,5,0,6,8,3,1")
    #[clap(short, long)]
    start: String,

    /// Goal board
    #[clap(short, long, default_value = "1,2,3,4,5,6,7,0,8")]
    goal: String,

    /// Heuristic: 1/manhattan or 2/misplaced. Overrides the config file.
    #[clap(long, value_parser = parse_heuristic)]
    heuristic: Option<Heuristic>,

    /// Path to a solver config TOML file
    #[clap(short, long)]
    config: Option<PathBuf>,

    /// Give up after this many expansions. Overrides the config file.
    #[clap(long)]
    max_expansions: Option<u64>,
}

fn parse_heuristic(s: &str) -> Result<Heuristic, PuzzleError> {
    s.parse()
}

fn build_config(args: &Args) -> anyhow::Result<SolverConfig> {
    let mut config = match &args.config {
        Some(path) => SolverConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => SolverConfig::default(),
    };
    if let Some(h) = args.heuristic {
        config.heuristic = h;
    }
    if args.max_expansions.is_some() {
        config.max_expansions = args.max_expansions;
    }
    config.validate();
    Ok(config)
}

fn print_board(title: &str, state: &State) {
    println!("{}", title);
    println!("{}", state);
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let started = Instant::now();

    let start = parse_state(&args.start).context("Invalid start board")?;
    let goal = parse_state(&args.goal).context("Invalid goal board")?;
    let config = build_config(&args)?;

    print_board("Start 8 Puzzle:", &start);
    print_board("Goal 8 Puzzle:", &goal);

    let solution = match solve(&start, &goal, &config) {
        Ok(solution) => solution,
        Err(PuzzleError::Unsolvable) => {
            println!("This state is unsolvable.");
            std::process::exit(1);
        }
        Err(e) => return Err(e).context("Search failed"),
    };

    println!("Steps to achieve goal state:\n");
    println!("{}", format_path(&solution.states));
    println!("States Generated: {}", solution.nodes_generated);
    println!("Explored States: {}", solution.nodes_expanded);
    println!(
        "The number of steps needed for the lowest cost: {}",
        solution.move_count()
    );
    println!("Moves to final solution: {}", format_moves(&solution.moves));
    println!("{}: {}", solution.heuristic, solution.initial_estimate);
    println!(
        "Execution time in seconds: {:.6}",
        started.elapsed().as_secs_f64()
    );
    Ok(())
}
