//! Status line derived from game state.
//!
//! The status is never stored: it is recomputed from [`GameState`] on
//! every read so it cannot drift from the board.

use super::phases::Phase;
use super::state::GameState;
use super::Mark;
use derive_more::Display;
use serde::Serialize;

/// What the status line reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
pub enum Status {
    /// Game running; the mark is to move.
    #[display("Player {}'s turn", _0)]
    Turn(Mark),
    /// Game won by the mark.
    #[display("Player {} wins!", _0)]
    Winner(Mark),
    /// Board full with no winner.
    #[display("It's a draw.")]
    Draw,
}

impl Status {
    /// Derives the status for `state`.
    pub fn of(state: &GameState) -> Self {
        match state.phase() {
            Phase::Won { winner, .. } => Status::Winner(*winner),
            Phase::Drawn => Status::Draw,
            Phase::InProgress => Status::Turn(state.current_player()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(indices: &[usize]) -> GameState {
        indices
            .iter()
            .try_fold(GameState::new(), |s, &i| s.place_index(i))
            .expect("legal sequence")
    }

    #[test]
    fn test_initial_status() {
        let status = Status::of(&GameState::new());
        assert_eq!(status, Status::Turn(Mark::X));
        assert_eq!(status.to_string(), "Player X's turn");
    }

    #[test]
    fn test_status_after_move() {
        assert_eq!(Status::of(&play(&[4])).to_string(), "Player O's turn");
    }

    #[test]
    fn test_winner_status() {
        let status = Status::of(&play(&[0, 3, 1, 4, 2]));
        assert_eq!(status, Status::Winner(Mark::X));
        assert_eq!(status.to_string(), "Player X wins!");
    }

    #[test]
    fn test_draw_status() {
        let status = Status::of(&play(&[0, 2, 1, 3, 5, 4, 6, 7, 8]));
        assert_eq!(status, Status::Draw);
        assert_eq!(status.to_string(), "It's a draw.");
    }
}
