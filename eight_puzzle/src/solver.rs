//! A* search over 8-puzzle states.
//!
//! The engine keeps three structures for the lifetime of one search:
//! - a node table (`Vec<Node>`), append-only, where parents are referenced by index;
//! - the open set, a `BinaryHeap<OpenEntry>` ordered by `(f, index)`;
//! - the closed set of states already expanded.
//!
//! A state is closed the first time it is popped and never reopened. Nodes are
//! not relaxed when a cheaper route to an enqueued state turns up later. Both
//! are only sound because every available heuristic is consistent; a new
//! heuristic must be consistent too or the returned paths stop being optimal.
use crate::config::SolverConfig;
use crate::engine::{Move, State};
use crate::error::{PuzzleError, Result};
use crate::heuristics::{Heuristic, HeuristicFn};
use crate::path::reconstruct;
use crate::solvability::is_solvable;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};

/// One entry in the search tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    pub state: State,
    /// Index of the parent in the node table, `None` for the root.
    pub parent: Option<usize>,
    /// Slides from the start along the path that discovered this node.
    pub g: u32,
    /// Heuristic value computed when the node was created.
    pub h: u32,
}

impl Node {
    pub fn f(&self) -> u32 {
        self.g + self.h
    }
}

/// Open-set entry. Ordered so that `BinaryHeap::pop` yields the lowest `f`,
/// and among equal `f` the node created first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OpenEntry {
    pub f: u32,
    pub index: usize,
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.index.cmp(&self.index))
    }
}

/// Lifecycle of a search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchPhase {
    Initialized,
    Running,
    Succeeded,
    Exhausted,
}

/// Counters and the goal node of a successful search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchOutcome {
    pub goal_index: usize,
    /// Nodes created, root included.
    pub nodes_generated: usize,
    /// States taken off the open set and expanded.
    pub nodes_expanded: usize,
}

pub struct SearchEngine {
    goal: State,
    heuristic: HeuristicFn,
    max_expansions: Option<u64>,
    nodes: Vec<Node>,
    open: BinaryHeap<OpenEntry>,
    closed: HashSet<State>,
    phase: SearchPhase,
    expanded: usize,
    goal_index: Option<usize>,
}

impl SearchEngine {
    /// Sets up a search from `start` to `goal`: the root node is created and
    /// queued, the closed set is empty.
    ///
    /// The heuristic named in `config` is resolved here, once.
    pub fn new(start: State, goal: State, config: &SolverConfig) -> Self {
        let heuristic = config.heuristic.as_fn();
        let root = Node {
            state: start,
            parent: None,
            g: 0,
            h: heuristic(&start, &goal),
        };
        let mut open = BinaryHeap::new();
        open.push(OpenEntry {
            f: root.f(),
            index: 0,
        });

        tracing::debug!(
            heuristic = %config.heuristic,
            initial_estimate = root.h,
            "search initialized"
        );

        SearchEngine {
            goal,
            heuristic,
            max_expansions: config.max_expansions,
            nodes: vec![root],
            open,
            closed: HashSet::new(),
            phase: SearchPhase::Initialized,
            expanded: 0,
            goal_index: None,
        }
    }

    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    /// The node table built so far, in creation order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn nodes_generated(&self) -> usize {
        self.nodes.len()
    }

    pub fn nodes_expanded(&self) -> usize {
        self.expanded
    }

    /// Number of entries still queued, stale duplicates included.
    pub fn open_len(&self) -> usize {
        self.open.len()
    }

    /// Pops one entry from the open set and handles it.
    ///
    /// # Returns
    /// The phase after this step. Once the search has succeeded or been
    /// exhausted, further calls do nothing and return the same phase.
    pub fn step(&mut self) -> SearchPhase {
        if matches!(self.phase, SearchPhase::Succeeded | SearchPhase::Exhausted) {
            return self.phase;
        }
        self.phase = SearchPhase::Running;

        let Some(entry) = self.open.pop() else {
            self.phase = SearchPhase::Exhausted;
            return self.phase;
        };
        let current = self.nodes[entry.index].clone();

        if current.state == self.goal {
            self.goal_index = Some(entry.index);
            self.phase = SearchPhase::Succeeded;
            return self.phase;
        }

        // The same state can be queued several times before its first expansion.
        if self.closed.contains(&current.state) {
            return self.phase;
        }

        if let Some(cap) = self.max_expansions {
            if self.expanded as u64 >= cap {
                self.phase = SearchPhase::Exhausted;
                return self.phase;
            }
        }

        self.closed.insert(current.state);
        self.expanded += 1;

        for (mv, successor) in current.state.successors() {
            if self.closed.contains(&successor) {
                continue;
            }
            self.push_child(entry.index, &current, mv, successor);
        }

        self.phase
    }

    fn push_child(&mut self, parent: usize, parent_node: &Node, mv: Move, state: State) {
        let node = Node {
            state,
            parent: Some(parent),
            g: parent_node.g + 1,
            h: (self.heuristic)(&state, &self.goal),
        };
        let index = self.nodes.len();
        tracing::trace!(index, parent, %mv, g = node.g, h = node.h, "node generated");
        self.open.push(OpenEntry { f: node.f(), index });
        self.nodes.push(node);
    }

    /// Steps until the goal is dequeued or the search cannot continue.
    ///
    /// # Returns
    /// * `Ok(SearchOutcome)` when the goal was reached.
    /// * `Err(PuzzleError::SearchExhausted)` when the open set emptied or the
    ///   expansion cap was hit first.
    pub fn run(&mut self) -> Result<SearchOutcome> {
        loop {
            match self.step() {
                SearchPhase::Initialized | SearchPhase::Running => continue,
                SearchPhase::Succeeded => break,
                SearchPhase::Exhausted => {
                    tracing::warn!(
                        generated = self.nodes.len(),
                        expanded = self.expanded,
                        open = self.open.len(),
                        "search exhausted without reaching the goal"
                    );
                    return Err(PuzzleError::SearchExhausted {
                        generated: self.nodes.len(),
                        expanded: self.expanded,
                    });
                }
            }
        }

        let goal_index = self
            .goal_index
            .unwrap_or_else(|| unreachable!("succeeded search always records its goal"));
        let outcome = SearchOutcome {
            goal_index,
            nodes_generated: self.nodes.len(),
            nodes_expanded: self.expanded,
        };
        tracing::debug!(
            generated = outcome.nodes_generated,
            expanded = outcome.nodes_expanded,
            depth = self.nodes[goal_index].g,
            "search succeeded"
        );
        Ok(outcome)
    }
}

/// A solved instance.
#[derive(Clone, Debug)]
pub struct Solution {
    /// Boards from start to goal, both included.
    pub states: Vec<State>,
    /// Slide taken between `states[i]` and `states[i + 1]`.
    pub moves: Vec<Move>,
    pub nodes_generated: usize,
    pub nodes_expanded: usize,
    pub heuristic: Heuristic,
    /// Heuristic value of the start state.
    pub initial_estimate: u32,
}

impl Solution {
    pub fn move_count(&self) -> usize {
        self.moves.len()
    }
}

/// Solves `start` → `goal` with the settings in `config`.
///
/// Parity is checked before any search work; an unsolvable pair returns
/// `PuzzleError::Unsolvable` without building a node.
///
/// # Examples
/// ```
/// use eight_puzzle::config::SolverConfig;
/// use eight_puzzle::engine::State;
/// use eight_puzzle::solver::solve;
///
/// let start = State::new([1, 2, 3, 4, 5, 6, 0, 7, 8]).unwrap();
/// let solution = solve(&start, &State::solved(), &SolverConfig::default()).unwrap();
/// assert_eq!(solution.move_count(), 2);
/// ```
pub fn solve(start: &State, goal: &State, config: &SolverConfig) -> Result<Solution> {
    if !is_solvable(start, goal) {
        tracing::info!("start and goal have different inversion parity; skipping search");
        return Err(PuzzleError::Unsolvable);
    }

    let mut engine = SearchEngine::new(*start, *goal, config);
    let outcome = engine.run()?;
    let (states, moves) = reconstruct(engine.nodes(), outcome.goal_index)?;

    tracing::info!(
        heuristic = %config.heuristic,
        moves = moves.len(),
        generated = outcome.nodes_generated,
        expanded = outcome.nodes_expanded,
        "solution found"
    );

    Ok(Solution {
        states,
        moves,
        nodes_generated: outcome.nodes_generated,
        nodes_expanded: outcome.nodes_expanded,
        heuristic: config.heuristic,
        initial_estimate: engine.nodes()[0].h,
    })
}
