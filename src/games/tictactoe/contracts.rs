//! Contract-based validation for tic-tac-toe.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::MoveRejection;
use super::invariants::{
    InvariantSet, MonotonicBoardInvariant, TicTacToeInvariants, TransitionInvariant,
};
use super::state::GameState;
use super::Position;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveRejection>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveRejection>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the game has not concluded.
pub struct NotConcluded;

impl NotConcluded {
    /// Rejects moves on a won or drawn game.
    pub fn check(state: &GameState) -> Result<(), MoveRejection> {
        if state.is_over() {
            Err(MoveRejection::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects moves onto an occupied square.
    pub fn check(pos: Position, state: &GameState) -> Result<(), MoveRejection> {
        if state.board().is_empty(pos) {
            Ok(())
        } else {
            Err(MoveRejection::SquareOccupied(pos))
        }
    }
}

/// Composite precondition: a move is legal if the game is running and the
/// square is empty.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    ///
    /// A concluded game is reported before an occupied square.
    #[instrument(skip(state))]
    pub fn check(pos: Position, state: &GameState) -> Result<(), MoveRejection> {
        NotConcluded::check(state)?;
        SquareIsEmpty::check(pos, state)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions:
/// - Game is in progress
/// - Square must be empty
///
/// Postconditions:
/// - Board is monotonic (exactly one square went from empty to occupied)
/// - Marks stay balanced and turns alternate
/// - Phase agrees with the board
pub struct MoveContract;

impl Contract<GameState, Position> for MoveContract {
    fn pre(state: &GameState, pos: &Position) -> Result<(), MoveRejection> {
        LegalMove::check(*pos, state)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), MoveRejection> {
        let mut descriptions = Vec::new();

        if !MonotonicBoardInvariant::holds(before, after) {
            descriptions.push(MonotonicBoardInvariant::description());
        }

        if let Err(violations) = TicTacToeInvariants::check_all(after) {
            descriptions.extend(violations.iter().map(|v| v.description));
        }

        if descriptions.is_empty() {
            Ok(())
        } else {
            let joined = descriptions.join("; ");
            warn!(violations = %joined, "Postcondition failed");
            Err(MoveRejection::InvariantViolation(format!(
                "Postcondition failed: {}",
                joined
            )))
        }
    }
}
