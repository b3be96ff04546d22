use crate::engine::{Move, State, CELL_COUNT};
use crate::error::{PuzzleError, Result};

/// Parses a board written as nine numbers in row-major order.
///
/// Numbers may be separated by commas, whitespace, or both, so
/// `"7, 2, 4, 5, 0, 6, 8, 3, 1"` and `"7 2 4\n5 0 6\n8 3 1"` give the same
/// state. `0` is the blank.
///
/// # Returns
/// * `Ok(State)` if the input holds exactly nine values forming a permutation
///   of `0..=8`.
/// * `Err(PuzzleError::InvalidConfiguration)` if a token is not a number, the
///   count is wrong, or a value repeats or is out of range.
///
/// # Examples
/// ```
/// use eight_puzzle::utils::parse_state;
/// let state = parse_state("7, 2, 4, 5, 0, 6, 8, 3, 1").unwrap();
/// assert_eq!(state.tiles(), &[7, 2, 4, 5, 0, 6, 8, 3, 1]);
///
/// assert!(parse_state("1, 2, 3").is_err());
/// assert!(parse_state("1, 2, 3, 4, 5, 6, 7, 8, x").is_err());
/// ```
pub fn parse_state(s: &str) -> Result<State> {
    let values = s
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token.parse::<u8>().map_err(|_| {
                PuzzleError::invalid(format!("'{}' is not a tile number", token))
            })
        })
        .collect::<Result<Vec<u8>>>()?;

    if values.len() != CELL_COUNT {
        return Err(PuzzleError::invalid(format!(
            "expected {} values, found {}",
            CELL_COUNT,
            values.len()
        )));
    }
    State::from_slice(&values)
}

/// Renders each board of a path, separated by blank lines.
pub fn format_path(states: &[State]) -> String {
    states
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Compact move listing such as `[u, l, d, r]`.
pub fn format_moves(moves: &[Move]) -> String {
    let letters: Vec<String> = moves.iter().map(|m| m.to_char().to_string()).collect();
    format!("[{}]", letters.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_state_comma_separated() {
        let s = parse_state("1,2,3,4,5,6,7,0,8").unwrap();
        assert_eq!(s.tiles(), &[1, 2, 3, 4, 5, 6, 7, 0, 8]);
    }

    #[test]
    fn test_parse_state_grid_layout() {
        let s = parse_state("7 2 4\n5 0 6\n8 3 1\n").unwrap();
        assert_eq!(s, parse_state("7, 2, 4, 5, 0, 6, 8, 3, 1").unwrap());
    }

    #[test]
    fn test_parse_state_invalid_token() {
        let err = parse_state("1,2,3,4,5,6,7,8,-1").unwrap_err();
        assert!(err.to_string().contains("'-1' is not a tile number"));
    }

    #[test]
    fn test_parse_state_wrong_count() {
        let err = parse_state("1 2 3 4 5 6 7 8 0 0").unwrap_err();
        assert!(err.to_string().contains("expected 9 values, found 10"));
        assert!(parse_state("").is_err());
    }

    #[test]
    fn test_parse_state_duplicate() {
        let err = parse_state("1,1,3,4,5,6,7,8,0").unwrap_err();
        assert!(matches!(err, PuzzleError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_format_path() {
        let a = State::solved();
        let b = a.apply(Move::Up).unwrap();
        assert_eq!(format_path(&[a, b]), "1 2 3\n4 5 6\n7 8 0\n\n1 2 3\n4 5 0\n7 8 6\n");
    }

    #[test]
    fn test_format_moves() {
        assert_eq!(format_moves(&[Move::Up, Move::Left, Move::Down, Move::Right]), "[u, l, d, r]");
        assert_eq!(format_moves(&[]), "[]");
    }
}
