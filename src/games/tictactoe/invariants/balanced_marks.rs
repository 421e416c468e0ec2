//! Balanced marks invariant: X never trails O and leads by at most one.

use super::super::{GameState, Mark};
use super::Invariant;

/// Invariant: the X count equals the O count or exceeds it by one.
pub struct BalancedMarksInvariant;

impl Invariant<GameState> for BalancedMarksInvariant {
    fn holds(state: &GameState) -> bool {
        let x = state.board().count(Mark::X);
        let o = state.board().count(Mark::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "Marks are balanced (X count equals O count or leads by one)"
    }
}
