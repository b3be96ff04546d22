//! # 8-Puzzle Solver Library
//!
//! This library finds minimum-length sequences of slides for the 3x3 sliding
//! tile puzzle using A* search.
//!
//! It is used by three binaries:
//! - `solve`: takes start and goal boards on the command line and prints the
//!   optimal path with search statistics.
//! - `interactive`: prompts for the boards and the heuristic on stdin.
//! - `heuristic_evaluator`: compares the two heuristics over seeded random
//!   instances.
//!
//! ## Modules
//! - `engine`: the board (`State`), the slides (`Move`), and successor generation.
//! - `heuristics`: Manhattan distance and misplaced-tile count.
//! - `solvability`: the inversion-parity check run before searching.
//! - `solver`: the A* engine (`SearchEngine`) and the `solve` entry point.
//! - `path`: rebuilding the path and move list from the search tree.
//! - `config`: `SolverConfig`, optionally read from TOML.
//! - `utils`: parsing and formatting helpers for the binaries.

pub mod config;
pub mod engine;
pub mod error;
pub mod heuristics;
pub mod path;
pub mod solvability;
pub mod solver;
pub mod utils;

pub use config::SolverConfig;
pub use engine::{Move, State};
pub use error::{PuzzleError, Result};
pub use heuristics::Heuristic;
pub use solver::{solve, Solution};
