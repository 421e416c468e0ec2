//! Two-player tic-tac-toe.
//!
//! [`GameSession`] owns a [`GameState`] and exposes `apply_move` and
//! `reset`. The state itself is a pure value: [`GameState::place`] returns
//! the next state without touching the current one.

mod action;
mod contracts;
mod phases;
mod position;
mod session;
mod state;
mod status;
mod types;
mod view;

pub mod invariants;
pub mod rules;

pub use action::MoveRejection;
pub use contracts::{Contract, LegalMove, MoveContract, NotConcluded, SquareIsEmpty};
pub use phases::{Phase, WinningLine};
pub use position::Position;
pub use session::GameSession;
pub use state::{GameState, transition};
pub use status::Status;
pub use types::{Board, Mark, Square};
pub use view::{CellView, Snapshot, cells};
