//! Phase consistency invariant: the phase agrees with the board.

use super::super::phases::Phase;
use super::super::rules::{find_winning_line, is_full};
use super::super::GameState;
use super::Invariant;

/// Invariant: the stored phase is exactly what the board implies.
///
/// - `Won` holds the first completed triple in evaluation order, and all
///   three of its squares carry the winner's mark
/// - `Drawn` means the board is full with no completed triple
/// - `InProgress` means no triple is complete and a square is free
pub struct PhaseConsistentInvariant;

impl Invariant<GameState> for PhaseConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let board = state.board();
        match (state.phase(), find_winning_line(board)) {
            (Phase::Won { winner, line }, Some((mark, found))) => {
                *winner == mark
                    && *line == found
                    && line.positions().iter().all(|p| board.get(*p).mark() == Some(mark))
            }
            (Phase::Drawn, None) => is_full(board),
            (Phase::InProgress, None) => !is_full(board),
            _ => false,
        }
    }

    fn description() -> &'static str {
        "Phase matches the board (winner and line, draw, or in progress)"
    }
}
