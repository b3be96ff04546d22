//! Error types for the 8-puzzle solver.

use thiserror::Error;

/// Every way a solve request can fail.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum PuzzleError {
    /// The start or goal board is not a permutation of `0..=8`.
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    /// Start and goal belong to different parity classes; no sequence of
    /// slides connects them.
    #[error("puzzle is unsolvable: start and goal have different inversion parity")]
    Unsolvable,

    /// The open set ran dry (or the expansion cap was hit) before the goal
    /// was dequeued. For input that passed the solvability check this is a bug.
    #[error("search exhausted after generating {generated} nodes and expanding {expanded}")]
    SearchExhausted { generated: usize, expanded: usize },

    #[error("unknown heuristic '{0}' (expected 1/manhattan or 2/misplaced)")]
    UnknownHeuristic(String),

    /// Two consecutive states on a reconstructed path are not one slide apart.
    #[error("corrupt path: blank moved from {from} to {to} in a single step")]
    CorruptPath { from: usize, to: usize },

    /// A parent index points outside the node table, or the chain loops.
    #[error("broken parent chain at node {index}")]
    BrokenParentChain { index: usize },

    #[error("config error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl PuzzleError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        PuzzleError::InvalidConfiguration {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PuzzleError>;
