//! Non-interactive play: apply a list of moves and report the result.

use crate::games::tictactoe::GameSession;
use tracing::{debug, instrument};

/// Plays `moves` (board indices) on a fresh session.
///
/// Moves that the rules ignore (occupied cells, moves after the game
/// ended, indices outside 0-8) are skipped exactly as the UI skips them.
#[instrument]
pub fn play_moves(moves: &[usize]) -> GameSession {
    let mut session = GameSession::new();
    for &index in moves {
        if !session.apply_move(index) {
            debug!(index, "Skipped move");
        }
    }
    session
}

/// Formats the board and the status line as plain text.
pub fn format_text(session: &GameSession) -> String {
    format!("{}\n\n{}", session.state().board().display(), session.status())
}

/// Formats the session snapshot as pretty JSON.
pub fn format_json(session: &GameSession) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&session.snapshot())
}
