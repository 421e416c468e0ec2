//! Tic Tac Toe library - a two-player game with a terminal front end
//!
//! # Architecture
//!
//! - **Games**: the rules engine. [`GameState`] is an immutable value and
//!   [`GameSession`] is its single owner.
//! - **Play**: headless play from a list of moves.
//! - **TUI**: the interactive ratatui front end.
//! - **Config**: TOML settings for logging and colors.
//!
//! # Example
//!
//! ```
//! use tic_tac_toe::{GameSession, Mark, Status};
//!
//! let mut session = GameSession::new();
//! for index in [0, 3, 1, 4, 2] {
//!     session.apply_move(index);
//! }
//! assert_eq!(session.status(), Status::Winner(Mark::X));
//! assert_eq!(session.status().to_string(), "Player X wins!");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod games;
mod play;

pub mod tui;

// Crate-level exports - Configuration
pub use config::{ConfigError, DEFAULT_CONFIG_PATH, Palette, Settings, Theme};

// Crate-level exports - Headless play
pub use play::{format_json, format_text, play_moves};

// Crate-level exports - Game types
pub use games::tictactoe::{
    Board, CellView, Contract, GameSession, GameState, LegalMove, Mark, MoveContract,
    MoveRejection, NotConcluded, Phase, Position, Snapshot, Square, SquareIsEmpty, Status,
    WinningLine, cells, transition,
};

/// Rule evaluation and state invariants.
pub mod rules {
    pub use crate::games::tictactoe::invariants;
    pub use crate::games::tictactoe::rules::*;
}
