use eight_puzzle::config::SolverConfig;
use eight_puzzle::heuristics::Heuristic;
use eight_puzzle::solvability::is_solvable;
use eight_puzzle::utils::{format_moves, format_path, parse_state};
use eight_puzzle::{solve, State};
use std::io::{self, BufRead, Write};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

const HEURISTIC_MENU: &str = "\nA* (h1): Manhattan\nA* (h2): Misplaced Tiles\nInput '1' for h1 or '2' for h2: ";

/// Prints `prompt` and reads one trimmed line. `None` on end of input.
fn prompt_line(prompt: &str) -> io::Result<Option<String>> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input)? == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}

/// Keeps asking until a valid board is entered.
fn read_board(prompt: &str) -> io::Result<Option<State>> {
    loop {
        let Some(line) = prompt_line(prompt)? else {
            return Ok(None);
        };
        match parse_state(&line) {
            Ok(state) => {
                println!("{}", state);
                return Ok(Some(state));
            }
            Err(e) => println!("{}. Please try again.", e),
        }
    }
}

fn read_heuristic() -> io::Result<Option<Heuristic>> {
    loop {
        let Some(line) = prompt_line(HEURISTIC_MENU)? else {
            return Ok(None);
        };
        match line.parse::<Heuristic>() {
            Ok(h) => return Ok(Some(h)),
            Err(_) => println!("Not valid input, please choose '1' or '2'."),
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    println!("Solve any 8-puzzle configuration using A* search.");

    let Some(start) = read_board("\nStart state (e.g. 7, 2, 4, 5, 0, 6, 8, 3, 1): ")? else {
        return Ok(());
    };
    let Some(goal) = read_board("\nGoal state (e.g. 1, 2, 3, 4, 5, 6, 7, 0, 8): ")? else {
        return Ok(());
    };

    if !is_solvable(&start, &goal) {
        println!("\nThis state is unsolvable.");
        return Ok(());
    }
    println!("\nThis state is solvable.");

    let Some(heuristic) = read_heuristic()? else {
        return Ok(());
    };

    let started = Instant::now();
    let solution = solve(&start, &goal, &SolverConfig::with_heuristic(heuristic))?;

    println!("\nSteps to achieve goal state:\n");
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
