//! Board model for the 8-puzzle.
//!
//! This module defines the puzzle's fundamental components:
//! - `State`: an immutable snapshot of the 3x3 grid, used directly as the
//!   dedup key during search.
//! - `Move`: the four slides of the blank, each described by the grid edge it
//!   cannot cross and the index offset it applies.
//!
//! Move generation lives on `State` itself (`State::apply`, `State::successors`).
use crate::error::{PuzzleError, Result};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::fmt;

/// Width and height of the grid.
pub const GRID_SIDE: usize = 3;

/// Number of cells on the board, blank included.
pub const CELL_COUNT: usize = GRID_SIDE * GRID_SIDE;

/// Value used for the empty cell.
pub const BLANK: u8 = 0;

/// A slide of the blank cell.
///
/// The direction names where the blank goes, so `Up` swaps the blank with the
/// tile directly above it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// All moves in the order successors are generated.
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

    /// Linear index offset applied to the blank position.
    ///
    /// # Examples
    /// ```
    /// use eight_puzzle::engine::Move;
    /// assert_eq!(Move::Up.offset(), -3);
    /// assert_eq!(Move::Right.offset(), 1);
    /// ```
    pub fn offset(&self) -> isize {
        match self {
            Move::Up => -(GRID_SIDE as isize),
            Move::Down => GRID_SIDE as isize,
            Move::Left => -1,
            Move::Right => 1,
        }
    }

    /// Blank positions from which this move would leave the grid or wrap
    /// around to another row.
    pub fn forbidden_positions(&self) -> [usize; GRID_SIDE] {
        match self {
            Move::Up => [0, 1, 2],
            Move::Down => [6, 7, 8],
            Move::Left => [0, 3, 6],
            Move::Right => [2, 5, 8],
        }
    }

    /// Returns `true` if the blank at `position` may slide in this direction.
    pub fn is_legal_from(&self, position: usize) -> bool {
        position < CELL_COUNT && !self.forbidden_positions().contains(&position)
    }

    /// Maps a blank-position delta back to the move that produced it.
    ///
    /// Returns `None` for any delta that is not one of the four offsets.
    pub fn from_offset(delta: isize) -> Option<Move> {
        Move::ALL.into_iter().find(|m| m.offset() == delta)
    }

    pub fn opposite(&self) -> Move {
        match self {
            Move::Up => Move::Down,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }

    /// Single-letter code used in compact move listings.
    pub fn to_char(&self) -> char {
        match self {
            Move::Up => 'u',
            Move::Down => 'd',
            Move::Left => 'l',
            Move::Right => 'r',
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Move::Up => "up",
            Move::Down => "down",
            Move::Left => "left",
            Move::Right => "right",
        };
        write!(f, "{}", s)
    }
}

/// One arrangement of the nine cells, stored row-major.
///
/// A `State` is only ever built through a validating constructor, so it always
/// holds each of `0..=8` exactly once. It is `Copy`; a move yields a new value
/// and never changes an existing one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct State {
    tiles: [u8; CELL_COUNT],
}

impl State {
    /// Creates a state from nine row-major values.
    ///
    /// # Returns
    /// * `Ok(State)` if `tiles` is a permutation of `0..=8`.
    /// * `Err(PuzzleError::InvalidConfiguration)` on an out-of-range or
    ///   duplicated value.
    ///
    /// # Examples
    /// ```
    /// use eight_puzzle::engine::State;
    /// let state = State::new([7, 2, 4, 5, 0, 6, 8, 3, 1]).unwrap();
    /// assert_eq!(state.blank_position(), 4);
    /// assert!(State::new([1, 1, 2, 3, 4, 5, 6, 7, 0]).is_err());
    /// ```
    pub fn new(tiles: [u8; CELL_COUNT]) -> Result<Self> {
        let mut seen = [false; CELL_COUNT];
        for (pos, &value) in tiles.iter().enumerate() {
            let idx = value as usize;
            if idx >= CELL_COUNT {
                return Err(PuzzleError::invalid(format!(
                    "value {} at position {} is out of range 0..={}",
                    value,
                    pos,
                    CELL_COUNT - 1
                )));
            }
            if seen[idx] {
                return Err(PuzzleError::invalid(format!(
                    "value {} appears more than once",
                    value
                )));
            }
            seen[idx] = true;
        }
        Ok(State { tiles })
    }

    /// Like [`State::new`], but also rejects slices that are not exactly nine
    /// values long.
    pub fn from_slice(values: &[u8]) -> Result<Self> {
        let tiles: [u8; CELL_COUNT] = values.try_into().map_err(|_| {
            PuzzleError::invalid(format!(
                "expected {} values, found {}",
                CELL_COUNT,
                values.len()
            ))
        })?;
        State::new(tiles)
    }

    /// The canonical solved layout: `1..=8` in order with the blank last.
    pub fn solved() -> Self {
        State {
            tiles: [1, 2, 3, 4, 5, 6, 7, 8, BLANK],
        }
    }

    /// Produces a solvable state by taking `steps` random slides away from
    /// [`State::solved`].
    ///
    /// The walk never immediately undoes its previous slide. The same seed
    /// always produces the same state.
    pub fn scrambled(seed: u64, steps: usize) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut state = State::solved();
        let mut last: Option<Move> = None;

        for _ in 0..steps {
            let candidates: Vec<(Move, State)> = state
                .successors()
                .into_iter()
                .filter(|(m, _)| Some(m.opposite()) != last)
                .collect();
            let (mv, next) = candidates[rng.gen_range(0..candidates.len())];
            state = next;
            last = Some(mv);
        }
        state
    }

    pub fn tiles(&self) -> &[u8; CELL_COUNT] {
        &self.tiles
    }

    /// Returns the value at linear position `pos`.
    ///
    /// # Panics
    /// Panics if `pos >= CELL_COUNT`.
    pub fn tile_at(&self, pos: usize) -> u8 {
        self.tiles[pos]
    }

    /// Linear position (0..=8) of the blank.
    pub fn blank_position(&self) -> usize {
        self.position_of(BLANK)
    }

    /// Linear position of `value`.
    ///
    /// # Panics
    /// Panics if `value` is not on the board, which the constructors rule out
    /// for every `value < CELL_COUNT`.
    pub fn position_of(&self, value: u8) -> usize {
        self.tiles
            .iter()
            .position(|&v| v == value)
            .unwrap_or_else(|| unreachable!("validated state is missing value {}", value))
    }

    /// Inverse index: `result[value]` is the position holding `value`.
    pub fn positions(&self) -> [usize; CELL_COUNT] {
        let mut index = [0; CELL_COUNT];
        for (pos, &value) in self.tiles.iter().enumerate() {
            index[value as usize] = pos;
        }
        index
    }

    /// Slides the blank in direction `mv`.
    ///
    /// # Returns
    /// * `Some(State)` holding the new arrangement.
    /// * `None` if the blank sits on the edge `mv` would cross.
    pub fn apply(&self, mv: Move) -> Option<State> {
        let blank = self.blank_position();
        if !mv.is_legal_from(blank) {
            return None;
        }
        let target = (blank as isize + mv.offset()) as usize;
        let mut tiles = self.tiles;
        tiles.swap(blank, target);
        Some(State { tiles })
    }

    /// Every legal `(move, successor)` pair, in `Move::ALL` order.
    ///
    /// Each successor comes from its own `apply` call; nothing is carried from
    /// one direction to the next.
    pub fn successors(&self) -> Vec<(Move, State)> {
        Move::ALL
            .into_iter()
            .filter_map(|mv| self.apply(mv).map(|next| (mv, next)))
            .collect()
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.tiles.chunks(GRID_SIDE) {
            let line: Vec<String> = row.iter().map(|v| v.to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
