//! Monotonic board invariant: squares never change once set.

use super::super::{GameState, Square};
use super::TransitionInvariant;

/// Invariant: a move fills exactly one empty square and touches nothing else.
///
/// Once a square transitions from Empty to Occupied, it never changes
/// until the whole state is reset.
pub struct MonotonicBoardInvariant;

impl TransitionInvariant<GameState> for MonotonicBoardInvariant {
    fn holds(before: &GameState, after: &GameState) -> bool {
        let mut filled = 0;

        for (old, new) in before.board().squares().iter().zip(after.board().squares()) {
            match (old, new) {
                (Square::Empty, Square::Empty) => {}
                (Square::Empty, Square::Occupied(_)) => filled += 1,
                (Square::Occupied(_), _) if old == new => {}
                _ => return false,
            }
        }

        filled == 1
    }

    fn description() -> &'static str {
        "Board squares are monotonic (one square filled, none overwritten)"
    }
}
