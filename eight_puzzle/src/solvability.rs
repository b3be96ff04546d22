//! Inversion-parity test run once before any search.
//!
//! On a 3x3 grid a horizontal slide leaves the row-major tile order untouched
//! and a vertical slide moves one tile past exactly two others, so the parity of
//! the inversion count never changes. Two boards are therefore connected iff
//! their inversion counts have the same parity.
use crate::engine::{State, BLANK};

/// Number of pairs `i < j` (blank skipped) with `value(i) > value(j)`.
///
/// # Examples
/// ```
/// use eight_puzzle::engine::State;
/// use eight_puzzle::solvability::count_inversions;
/// assert_eq!(count_inversions(&State::solved()), 0);
/// let swapped = State::new([1, 2, 3, 4, 5, 6, 8, 7, 0]).unwrap();
/// assert_eq!(count_inversions(&swapped), 1);
/// ```
pub fn count_inversions(state: &State) -> usize {
    let tiles = state.tiles();
    tiles
        .iter()
        .enumerate()
        .filter(|&(_, &val)| val != BLANK)
        .map(|(i, &val)| {
            tiles[i + 1..]
                .iter()
                .filter(|&&next| next != BLANK && next < val)
                .count()
        })
        .sum()
}

/// Returns `true` if some sequence of slides turns `start` into `goal`.
///
/// The goal is not assumed to be the canonical layout; its own parity is
/// computed and compared.
pub fn is_solvable(start: &State, goal: &State) -> bool {
    count_inversions(start) % 2 == count_inversions(goal) % 2
}
