use crate::engine::{State, BLANK, CELL_COUNT, GRID_SIDE};
use crate::error::PuzzleError;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Signature every heuristic shares: estimated slides from `state` to `goal`.
pub type HeuristicFn = fn(&State, &State) -> u32;

/// Sum over tiles `1..=8` of the grid distance between each tile's position
/// in `state` and in `goal`. The blank is not counted.
///
/// # Examples
/// ```
/// use eight_puzzle::engine::State;
/// use eight_puzzle::heuristics::manhattan;
/// let goal = State::new([1, 2, 3, 4, 5, 6, 7, 0, 8]).unwrap();
/// let start = State::new([7, 2, 4, 5, 0, 6, 8, 3, 1]).unwrap();
/// assert_eq!(manhattan(&goal, &goal), 0);
/// assert_eq!(manhattan(&start, &goal), 15);
/// ```
pub fn manhattan(state: &State, goal: &State) -> u32 {
    let here = state.positions();
    let there = goal.positions();

    (1..CELL_COUNT)
        .map(|value| {
            let (r1, c1) = (here[value] / GRID_SIDE, here[value] % GRID_SIDE);
            let (r2, c2) = (there[value] / GRID_SIDE, there[value] % GRID_SIDE);
            (r1.abs_diff(r2) + c1.abs_diff(c2)) as u32
        })
        .sum()
}

/// Number of tiles (blank excluded) that are not where `goal` has them.
pub fn misplaced_tiles(state: &State, goal: &State) -> u32 {
    state
        .tiles()
        .iter()
        .zip(goal.tiles().iter())
        .filter(|&(&a, &b)| a != BLANK && a != b)
        .count() as u32
}

/// The two estimates the search can be configured with.
///
/// Both are admissible and consistent for single-tile slides, which is what
/// lets the search close a state on first expansion and never reopen it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Heuristic {
    #[default]
    #[serde(alias = "h1")]
    Manhattan,
    #[serde(alias = "misplaced", alias = "h2")]
    MisplacedTiles,
}

impl Heuristic {
    pub const ALL: [Heuristic; 2] = [Heuristic::Manhattan, Heuristic::MisplacedTiles];

    /// The function this variant stands for. The search resolves it once at
    /// setup and calls the pointer for every node after that.
    pub fn as_fn(&self) -> HeuristicFn {
        match self {
            Heuristic::Manhattan => manhattan,
            Heuristic::MisplacedTiles => misplaced_tiles,
        }
    }

    pub fn evaluate(&self, state: &State, goal: &State) -> u32 {
        (self.as_fn())(state, goal)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Heuristic::Manhattan => "Manhattan Distance",
            Heuristic::MisplacedTiles => "Misplaced Tiles",
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Heuristic {
    type Err = PuzzleError;

    /// Accepts the menu digits `1`/`2` as well as the kebab-case names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "h1" | "manhattan" => Ok(Heuristic::Manhattan),
            "2" | "h2" | "misplaced" | "misplaced-tiles" | "misplaced_tiles" => {
                Ok(Heuristic::MisplacedTiles)
            }
            _ => Err(PuzzleError::UnknownHeuristic(s.trim().to_string())),
        }
    }
}
