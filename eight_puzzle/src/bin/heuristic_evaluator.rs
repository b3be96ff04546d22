use eight_puzzle::config::SolverConfig;
use eight_puzzle::heuristics::Heuristic;
use eight_puzzle::{solve, State};
use std::collections::HashMap;
use tracing_subscriber::EnvFilter;

const NUM_RANDOM_BOARDS_FOR_EVALUATION: usize = 20;
const START_SEED: u64 = 0;
const SCRAMBLE_STEPS: usize = 60;

#[derive(Default)]
struct Totals {
    generated: usize,
    expanded: usize,
    moves: usize,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let goal = State::solved();
    let mut totals: HashMap<Heuristic, Totals> = HashMap::new();

    println!(
        "Starting heuristic evaluation for {} boards...",
        NUM_RANDOM_BOARDS_FOR_EVALUATION
    );

    for board_idx in 0..NUM_RANDOM_BOARDS_FOR_EVALUATION {
        let seed = START_SEED + board_idx as u64;
        let start = State::scrambled(seed, SCRAMBLE_STEPS);
        println!("\nEvaluating Board {} (Seed: {})\n{}", board_idx, seed, start);

        let mut lengths = Vec::new();
        for heuristic in Heuristic::ALL {
            let solution = solve(&start, &goal, &SolverConfig::with_heuristic(heuristic))?;
            println!(
                "  Heuristic: {:<20} Moves: {:<4} Generated: {:<8} Expanded: {}",
                heuristic.name(),
                solution.move_count(),
                solution.nodes_generated,
                solution.nodes_expanded
            );
            let entry = totals.entry(heuristic).or_default();
            entry.generated += solution.nodes_generated;
            entry.expanded += solution.nodes_expanded;
            entry.moves += solution.move_count();
            lengths.push(solution.move_count());
        }

        if lengths.windows(2).any(|w| w[0] != w[1]) {
            tracing::error!(seed, ?lengths, "heuristics disagree on the optimal length");
            anyhow::bail!("heuristics returned different path lengths for seed {}", seed);
        }
    }

    println!("\n--- Evaluation Complete ---");
    println!("Number of boards evaluated: {}", NUM_RANDOM_BOARDS_FOR_EVALUATION);
    println!("\n--- Averages ---");

    let n = NUM_RANDOM_BOARDS_FOR_EVALUATION as f64;
    for heuristic in Heuristic::ALL {
        let Some(t) = totals.get(&heuristic) else {
            println!("Heuristic {}: No results recorded.", heuristic.name());
            continue;
        };
        println!(
            "Heuristic {:<20}: Moves = {:.2}, Generated = {:.1}, Expanded = {:.1}",
            heuristic.name(),
            t.moves as f64 / n,
            t.generated as f64 / n,
            t.expanded as f64 / n
        );
    }
    Ok(())
}
