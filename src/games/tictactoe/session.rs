//! Game session: the single owner of a game's state.

use super::state::GameState;
use super::status::Status;
use super::view::{self, CellView, Snapshot};
use super::Position;
use tracing::{debug, info, instrument};

/// Owns one [`GameState`] and enforces the rules of play.
///
/// The session exposes exactly two mutations, [`apply_move`](Self::apply_move)
/// and [`reset`](Self::reset). Everything else is a read.
#[derive(Debug, Clone, Default)]
pub struct GameSession {
    state: GameState,
}

impl GameSession {
    /// Starts a session with an empty board and X to move.
    #[instrument]
    pub fn new() -> Self {
        info!("Starting game session");
        Self::default()
    }

    /// Returns the current state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the derived status.
    pub fn status(&self) -> Status {
        Status::of(&self.state)
    }

    /// Returns the render model for every cell.
    pub fn cells(&self) -> [CellView; 9] {
        view::cells(&self.state)
    }

    /// Returns a serializable snapshot of the state and status.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from(&self.state)
    }

    /// Places the current player's mark at `index` (0-8).
    ///
    /// Moves on an occupied cell, on a finished game, or outside the
    /// board are ignored and leave the state unchanged. Returns whether
    /// the state changed.
    #[instrument(skip(self), fields(player = %self.state.current_player()))]
    pub fn apply_move(&mut self, index: usize) -> bool {
        match self.state.place_index(index) {
            Ok(next) => {
                self.state = next;
                info!(status = %self.status(), "Move accepted");
                true
            }
            Err(reason) => {
                debug!(%reason, "Move ignored");
                false
            }
        }
    }

    /// Places the current player's mark at `pos`.
    pub fn apply_move_at(&mut self, pos: Position) -> bool {
        self.apply_move(pos.to_index())
    }

    /// Replaces the state with a fresh game.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!("Resetting game");
        self.state = GameState::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Mark, Square};

    #[test]
    fn test_new_session_is_fresh() {
        let session = GameSession::new();
        assert_eq!(session.state(), &GameState::new());
        assert_eq!(session.status(), Status::Turn(Mark::X));
    }

    #[test]
    fn test_apply_move_reports_change() {
        let mut session = GameSession::new();
        assert!(session.apply_move(4));
        assert!(!session.apply_move(4));
        assert!(!session.apply_move(9));
        assert_eq!(
            session.state().board().get(Position::Center),
            Square::Occupied(Mark::X)
        );
        assert_eq!(session.state().current_player(), Mark::O);
    }

    #[test]
    fn test_apply_move_at_position() {
        let mut session = GameSession::new();
        assert!(session.apply_move_at(Position::BottomLeft));
        assert_eq!(
            session.state().board().get(Position::BottomLeft),
            Square::Occupied(Mark::X)
        );
    }

    #[test]
    fn test_reset_after_win() {
        let mut session = GameSession::new();
        for index in [0, 3, 1, 4, 2] {
            session.apply_move(index);
        }
        assert_eq!(session.status(), Status::Winner(Mark::X));

        session.reset();
        assert_eq!(session.state(), &GameState::new());
        assert_eq!(session.status().to_string(), "Player X's turn");
    }
}
