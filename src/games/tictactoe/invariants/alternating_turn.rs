//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{GameState, Mark};
use super::Invariant;

/// Invariant: the player to move follows from the mark counts.
///
/// While the game runs, X is to move exactly when both marks have been
/// placed equally often. Once it is over, the player to move is frozen at
/// the mark that made the final move.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        let x = state.board().count(Mark::X);
        let o = state.board().count(Mark::O);
        let last_mover = if x > o { Mark::X } else { Mark::O };

        if state.is_over() {
            state.current_player() == last_mover
        } else {
            state.current_player() == last_mover.opponent()
        }
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_holds() {
        assert!(AlternatingTurnInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_holds_through_a_won_game() {
        let mut state = GameState::new();
        for index in [0, 3, 1, 4, 2] {
            state = state.place_index(index).expect("legal move");
            assert!(AlternatingTurnInvariant::holds(&state));
        }
        assert!(state.is_over());
    }

    #[test]
    fn test_wrong_player_violates() {
        let mut state = GameState::new().place_index(4).expect("legal move");
        state.current_player = Mark::X;
        assert!(!AlternatingTurnInvariant::holds(&state));
    }
}
