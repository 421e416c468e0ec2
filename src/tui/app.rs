//! Application state and logic.

use super::input::{self, Action};
use crate::config::Palette;
use crate::games::tictactoe::{GameSession, Position};
use crossterm::event::KeyEvent;
use tracing::{debug, instrument};

/// Main application state.
///
/// Wraps the one [`GameSession`] together with UI-only state: the cursor
/// and the quit flag.
#[derive(Debug, Clone)]
pub struct App {
    session: GameSession,
    cursor: Position,
    palette: Palette,
    should_quit: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new(palette: Palette) -> Self {
        Self {
            session: GameSession::new(),
            cursor: Position::Center,
            palette,
            should_quit: false,
        }
    }

    /// Gets the game session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Gets the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the colors to render with.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles a key press. Returns whether the screen needs a redraw.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match input::action_for(key) {
            Some(action) => self.apply(action),
            None => false,
        }
    }

    /// Performs one action. Returns whether anything visible changed.
    #[instrument(skip(self))]
    pub fn apply(&mut self, action: Action) -> bool {
        match action {
            Action::Cursor(direction) => {
                let next = input::move_cursor(self.cursor, direction);
                let moved = next != self.cursor;
                self.cursor = next;
                moved
            }
            Action::PlaceAtCursor => self.session.apply_move_at(self.cursor),
            Action::Place(pos) => {
                let moved = self.cursor != pos;
                self.cursor = pos;
                self.session.apply_move_at(pos) || moved
            }
            Action::Restart => {
                debug!("Restarting game");
                self.session.reset();
                true
            }
            Action::Quit => {
                debug!("Quit requested");
                self.should_quit = true;
                false
            }
        }
    }
}
