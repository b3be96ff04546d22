//! Turning the node table of a finished search into an answer.
use crate::engine::{Move, State};
use crate::error::{PuzzleError, Result};
use crate::solver::Node;

/// Follows parent links from `goal_index` back to the root.
///
/// # Returns
/// The states from root to goal together with the move taken at each step.
/// `moves.len()` is always `states.len() - 1`.
///
/// A chain that points outside `nodes` or loops back on itself is reported as
/// `PuzzleError::BrokenParentChain`. The walk takes at most `nodes.len()` steps.
pub fn reconstruct(nodes: &[Node], goal_index: usize) -> Result<(Vec<State>, Vec<Move>)> {
    let mut states = Vec::new();
    let mut current = Some(goal_index);
    while let Some(idx) = current {
        if states.len() == nodes.len() {
            return Err(PuzzleError::BrokenParentChain { index: idx });
        }
        let node = nodes
            .get(idx)
            .ok_or(PuzzleError::BrokenParentChain { index: idx })?;
        states.push(node.state);
        current = node.parent;
    }
    states.reverse();

    let moves = decode_moves(&states)?;
    Ok((states, moves))
}

/// Derives the move between each pair of consecutive states from the change
/// in blank position.
///
/// # Returns
/// * `Ok(moves)` with one entry per consecutive pair.
/// * `Err(PuzzleError::CorruptPath)` if a pair is not one legal slide apart.
pub fn decode_moves(states: &[State]) -> Result<Vec<Move>> {
    states
        .windows(2)
        .map(|pair| {
            let from = pair[0].blank_position();
            let to = pair[1].blank_position();
            Move::from_offset(to as isize - from as isize)
                .filter(|mv| pair[0].apply(*mv) == Some(pair[1]))
                .ok_or(PuzzleError::CorruptPath { from, to })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(state: State, parent: Option<usize>, g: u32) -> Node {
        Node {
            state,
            parent,
            g,
            h: 0,
        }
    }

    #[test]
    fn test_root_only_path() {
        let nodes = vec![node(State::solved(), None, 0)];
        let (states, moves) = reconstruct(&nodes, 0).unwrap();
        assert_eq!(states, vec![State::solved()]);
        assert!(moves.is_empty());
    }

    #[test]
    fn test_follows_parents_not_table_order() {
        let root = State::new([1, 2, 3, 4, 5, 6, 0, 7, 8]).unwrap();
        let a = root.apply(Move::Right).unwrap();
        let b = a.apply(Move::Right).unwrap();
        let decoy = root.apply(Move::Up).unwrap();
        let nodes = vec![
            node(root, None, 0),
            node(decoy, Some(0), 1),
            node(a, Some(0), 1),
            node(b, Some(2), 2),
        ];
        let (states, moves) = reconstruct(&nodes, 3).unwrap();
        assert_eq!(states, vec![root, a, b]);
        assert_eq!(moves, vec![Move::Right, Move::Right]);
        assert_eq!(b, State::solved());
    }

    #[test]
    fn test_out_of_range_index_is_an_error() {
        let nodes = vec![node(State::solved(), None, 0)];
        let err = reconstruct(&nodes, 5).unwrap_err();
        assert!(matches!(err, PuzzleError::BrokenParentChain { index: 5 }));

        let dangling = vec![
            node(State::solved(), None, 0),
            node(State::solved().apply(Move::Up).unwrap(), Some(9), 1),
        ];
        let err = reconstruct(&dangling, 1).unwrap_err();
        assert!(matches!(err, PuzzleError::BrokenParentChain { index: 9 }));
    }

    #[test]
    fn test_parent_cycle_terminates() {
        let a = State::solved();
        let b = a.apply(Move::Up).unwrap();
        let nodes = vec![node(a, Some(1), 0), node(b, Some(0), 1)];
        let err = reconstruct(&nodes, 1).unwrap_err();
        assert!(matches!(err, PuzzleError::BrokenParentChain { .. }));

        let self_loop = vec![node(a, Some(0), 0)];
        assert!(reconstruct(&self_loop, 0).is_err());
    }

    #[test]
    fn test_decode_all_directions() {
        let start = State::new([7, 2, 4, 5, 0, 6, 8, 3, 1]).unwrap();
        let mut states = vec![start];
        let script = [Move::Up, Move::Left, Move::Down, Move::Down, Move::Right];
        for mv in script {
            let next = states.last().unwrap().apply(mv).unwrap();
            states.push(next);
        }
        assert_eq!(decode_moves(&states).unwrap(), script.to_vec());
    }

    #[test]
    fn test_decode_rejects_wraparound() {
        // Blank jumps from the end of row one to the start of row two.
        let a = State::new([1, 2, 0, 3, 4, 5, 6, 7, 8]).unwrap();
        let b = State::new([1, 2, 3, 0, 4, 5, 6, 7, 8]).unwrap();
        let err = decode_moves(&[a, b]).unwrap_err();
        assert!(matches!(err, PuzzleError::CorruptPath { from: 2, to: 3 }));
    }

    #[test]
    fn test_decode_rejects_non_adjacent() {
        let a = State::solved();
        let b = State::new([0, 2, 3, 4, 5, 6, 7, 8, 1]).unwrap();
        assert!(decode_moves(&[a, b]).is_err());
    }

    #[test]
    fn test_decode_is_scoped_per_call() {
        let a = State::solved();
        let b = a.apply(Move::Up).unwrap();
        assert_eq!(decode_moves(&[a, b]).unwrap(), vec![Move::Up]);
        assert_eq!(decode_moves(&[b, a]).unwrap(), vec![Move::Down]);
        assert!(decode_moves(&[a]).unwrap().is_empty());
    }
}
