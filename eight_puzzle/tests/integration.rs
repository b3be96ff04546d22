//! End-to-end tests for the solver through the public API.
//!
//! Optimality is checked against an independent breadth-first search over the
//! same move set.

use std::collections::{HashMap, VecDeque};

use eight_puzzle::engine::Move;
use eight_puzzle::heuristics::{manhattan, misplaced_tiles, Heuristic};
use eight_puzzle::solvability::is_solvable;
use eight_puzzle::utils::parse_state;
use eight_puzzle::{solve, PuzzleError, Solution, SolverConfig, State};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Distance from `goal` to every state reachable from it.
fn bfs_distances(goal: State) -> HashMap<State, u32> {
    let mut dist = HashMap::new();
    let mut queue = VecDeque::new();
    dist.insert(goal, 0);
    queue.push_back(goal);
    while let Some(s) = queue.pop_front() {
        let d = dist[&s];
        for (_, next) in s.successors() {
            dist.entry(next).or_insert_with(|| {
                queue.push_back(next);
                d + 1
            });
        }
    }
    dist
}

fn expect_valid_path(solution: &Solution, start: State, goal: State) {
    assert_eq!(solution.states.first(), Some(&start), "path must start at start");
    assert_eq!(solution.states.last(), Some(&goal), "path must end at goal");
    assert_eq!(solution.moves.len(), solution.states.len() - 1);
    for (i, mv) in solution.moves.iter().enumerate() {
        assert_eq!(
            solution.states[i].apply(*mv),
            Some(solution.states[i + 1]),
            "move {} ({}) does not connect consecutive states",
            i,
            mv
        );
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

/// The instance the original command-line script ships with.
#[test]
fn test_reference_instance() {
    let start = parse_state("7, 2, 4, 5, 0, 6, 8, 3, 1").unwrap();
    let goal = parse_state("1, 2, 3, 4, 5, 6, 7, 0, 8").unwrap();
    assert!(is_solvable(&start, &goal));

    let dist = bfs_distances(goal);
    let optimum = dist[&start] as usize;

    for h in Heuristic::ALL {
        let solution = solve(&start, &goal, &SolverConfig::with_heuristic(h)).unwrap();
        expect_valid_path(&solution, start, goal);
        assert_eq!(solution.move_count(), optimum, "{} returned a longer path", h);
        assert!(solution.nodes_expanded <= solution.nodes_generated);
    }
}

#[test]
fn test_single_swap_rejected_before_search() {
    let start = parse_state("1,2,3,4,5,6,8,7,0").unwrap();
    let goal = parse_state("1,2,3,4,5,6,7,8,0").unwrap();
    assert!(!is_solvable(&start, &goal));
    let err = solve(&start, &goal, &SolverConfig::default()).unwrap_err();
    assert!(matches!(err, PuzzleError::Unsolvable));
}

#[test]
fn test_invalid_configuration_rejected() {
    for bad in ["1,2,3,4,5,6,7,8", "1,2,3,4,5,6,7,8,8", "1,2,3,4,5,6,7,8,9"] {
        let err = parse_state(bad).unwrap_err();
        assert!(
            matches!(err, PuzzleError::InvalidConfiguration { .. }),
            "{bad} should be an invalid configuration"
        );
    }
    assert!(State::new([0, 1, 2, 3, 4, 5, 6, 7, 10]).is_err());
}

#[test]
fn test_unknown_heuristic_rejected() {
    let err = "euclidean".parse::<Heuristic>().unwrap_err();
    assert!(matches!(err, PuzzleError::UnknownHeuristic(_)));
}

/// Both heuristics never overestimate, checked against exact distances for a
/// sample of reachable states.
#[test]
fn test_heuristics_admissible() {
    let goal = State::solved();
    let dist = bfs_distances(goal);
    assert_eq!(dist.len(), 181_440);

    for (state, &d) in dist.iter().step_by(97) {
        assert!(manhattan(state, &goal) <= d);
        assert!(misplaced_tiles(state, &goal) <= d);
    }
}

#[test]
fn test_optimal_against_bfs_on_random_instances() {
    let goal = State::solved();
    let dist = bfs_distances(goal);

    for seed in 0..25 {
        let start = State::scrambled(seed, 40);
        let optimum = dist[&start] as usize;
        for h in Heuristic::ALL {
            let solution = solve(&start, &goal, &SolverConfig::with_heuristic(h)).unwrap();
            expect_valid_path(&solution, start, goal);
            assert_eq!(solution.move_count(), optimum, "seed {seed}, {h}");
        }
    }
}

/// The hardest instances of the 3x3 puzzle need 31 moves.
#[test]
fn test_hardest_instance() {
    let start = parse_state("8,6,7,2,5,4,3,0,1").unwrap();
    let goal = State::solved();
    let solution = solve(&start, &goal, &SolverConfig::default()).unwrap();
    expect_valid_path(&solution, start, goal);
    assert_eq!(solution.move_count(), 31);
}

#[test]
fn test_non_canonical_goal() {
    let goal = parse_state("0,1,2,3,4,5,6,7,8").unwrap();
    let start = State::scrambled(99, 30);
    assert!(is_solvable(&start, &goal));
    let dist = bfs_distances(goal);
    let solution = solve(&start, &goal, &SolverConfig::default()).unwrap();
    expect_valid_path(&solution, start, goal);
    assert_eq!(solution.move_count(), dist[&start] as usize);
}

#[test]
fn test_solvability_invariant_under_slides() {
    let goal = parse_state("1,2,3,4,5,6,7,0,8").unwrap();
    let odd = parse_state("2,1,3,4,5,6,7,8,0").unwrap();
    for base in [State::solved(), odd] {
        let verdict = is_solvable(&base, &goal);
        let mut s = base;
        for step in 0..50 {
            let moves = s.successors();
            let (_, next) = moves[step % moves.len()];
            s = next;
            assert_eq!(is_solvable(&s, &goal), verdict);
        }
    }
}

#[test]
fn test_runs_are_reproducible() {
    let start = parse_state("7,2,4,5,0,6,8,3,1").unwrap();
    let goal = parse_state("1,2,3,4,5,6,7,0,8").unwrap();
    for h in Heuristic::ALL {
        let config = SolverConfig::with_heuristic(h);
        let first = solve(&start, &goal, &config).unwrap();
        let second = solve(&start, &goal, &config).unwrap();
        assert_eq!(first.states, second.states);
        assert_eq!(first.moves, second.moves);
        assert_eq!(first.nodes_generated, second.nodes_generated);
        assert_eq!(first.nodes_expanded, second.nodes_expanded);
    }
}

#[test]
fn test_config_from_toml_drives_search() {
    let config = SolverConfig::from_toml_str(
        r#"
        heuristic = "misplaced-tiles"
        max_expansions = 3
        "#,
    )
    .unwrap();
    let start = parse_state("8,6,7,2,5,4,3,0,1").unwrap();
    let err = solve(&start, &State::solved(), &config).unwrap_err();
    assert!(matches!(err, PuzzleError::SearchExhausted { expanded: 3, .. }));
}

#[test]
fn test_moves_match_blank_offsets() {
    let start = parse_state("7,2,4,5,0,6,8,3,1").unwrap();
    let goal = parse_state("1,2,3,4,5,6,7,0,8").unwrap();
    let solution = solve(&start, &goal, &SolverConfig::default()).unwrap();
    for (pair, mv) in solution.states.windows(2).zip(&solution.moves) {
        let delta = pair[1].blank_position() as isize - pair[0].blank_position() as isize;
        assert_eq!(Move::from_offset(delta), Some(*mv));
    }
}
