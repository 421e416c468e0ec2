//! Reasons a move leaves the game untouched.
//!
//! A rejected move is not a failure the caller must handle: the session
//! treats it as a no-op. The reason is kept as a value so it can be
//! logged and asserted on in tests.

use super::Position;
use derive_more::{Display, Error};

/// Why a move was not applied.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum MoveRejection {
    /// The index does not name a board cell.
    #[display("Index {} is outside the board (0-8)", _0)]
    OutOfBounds(#[error(not(source))] usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// A postcondition failed after the move was applied.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(#[error(not(source))] String),
}
