//! Game state and the pure transition function.
//!
//! [`GameState`] is one cohesive value: board, player to move, and a
//! [`Phase`] tagged union. It changes only by producing a new value from
//! [`GameState::place`]; nothing mutates it field by field.

use super::action::MoveRejection;
use super::contracts::{Contract, MoveContract};
use super::phases::{Phase, WinningLine};
use super::rules;
use super::{Board, Mark, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Complete game state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    pub(super) board: Board,
    pub(super) current_player: Mark,
    pub(super) phase: Phase,
}

impl GameState {
    /// Creates the initial state: empty board, X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Mark::X,
            phase: Phase::InProgress,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark to move.
    ///
    /// Frozen once the game is over: after a win it is the winner, after
    /// a draw it is the mark that filled the last square.
    pub fn current_player(&self) -> Mark {
        self.current_player
    }

    /// Returns the phase.
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Returns the winner, if the game is won.
    pub fn winner(&self) -> Option<Mark> {
        match self.phase {
            Phase::Won { winner, .. } => Some(winner),
            _ => None,
        }
    }

    /// Returns the completed line, if the game is won.
    pub fn winning_line(&self) -> Option<WinningLine> {
        match self.phase {
            Phase::Won { line, .. } => Some(line),
            _ => None,
        }
    }

    /// Returns true if the board filled with no winner.
    pub fn is_draw(&self) -> bool {
        self.phase == Phase::Drawn
    }

    /// Returns true once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.phase.is_terminal()
    }

    /// Places the current player's mark at `pos`, returning the next state.
    ///
    /// The receiver is left untouched. Outcome resolution order: a
    /// completed line wins, otherwise a full board draws, otherwise the
    /// turn passes to the opponent.
    ///
    /// Contract enforcement:
    /// - Preconditions checked always
    /// - Postconditions checked in debug builds only
    #[instrument(skip(self, pos), fields(player = %self.current_player, position = %pos))]
    pub fn place(&self, pos: Position) -> Result<GameState, MoveRejection> {
        MoveContract::pre(self, &pos)?;

        let mut next = self.clone();
        next.board.set(pos, Square::Occupied(self.current_player));
        next.phase = match rules::find_winning_line(&next.board) {
            Some((winner, line)) => Phase::Won { winner, line },
            None if rules::is_full(&next.board) => Phase::Drawn,
            None => {
                next.current_player = self.current_player.opponent();
                Phase::InProgress
            }
        };
        debug!(phase = ?next.phase, "Move applied");

        #[cfg(debug_assertions)]
        MoveContract::post(self, &next)?;

        Ok(next)
    }

    /// Like [`place`](Self::place), addressed by board index (0-8).
    pub fn place_index(&self, index: usize) -> Result<GameState, MoveRejection> {
        let pos = Position::from_index(index).ok_or(MoveRejection::OutOfBounds(index))?;
        self.place(pos)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Pure transition: the state after playing `index` on `state`.
///
/// Rejected moves yield an unchanged copy of `state`.
pub fn transition(state: &GameState, index: usize) -> GameState {
    state.place_index(index).unwrap_or_else(|_| state.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use tracing::Subscriber;
    use tracing::span::{Attributes, Id};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    fn play(indices: &[usize]) -> GameState {
        indices
            .iter()
            .fold(GameState::new(), |state, &index| transition(&state, index))
    }

    #[test]
    fn test_initial_state() {
        let state = GameState::new();
        assert_eq!(state.current_player(), Mark::X);
        assert_eq!(state.phase(), &Phase::InProgress);
        assert_eq!(state.winner(), None);
        assert_eq!(state.winning_line(), None);
        assert!(!state.is_draw());
        assert_eq!(state.board(), &Board::new());
    }

    #[test]
    fn test_place_flips_turn() {
        let state = GameState::new().place(Position::Center).expect("legal move");
        assert_eq!(state.board().get(Position::Center), Square::Occupied(Mark::X));
        assert_eq!(state.current_player(), Mark::O);
        assert!(!state.is_over());
    }

    #[test]
    fn test_place_does_not_touch_receiver() {
        let before = GameState::new();
        let _after = before.place(Position::Center).expect("legal move");
        assert_eq!(before, GameState::new());
    }

    #[test]
    fn test_occupied_square_rejected() {
        let state = play(&[4]);
        assert_eq!(
            state.place(Position::Center),
            Err(MoveRejection::SquareOccupied(Position::Center))
        );
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        assert_eq!(
            GameState::new().place_index(9),
            Err(MoveRejection::OutOfBounds(9))
        );
        assert_eq!(transition(&GameState::new(), 42), GameState::new());
    }

    #[test]
    fn test_win_freezes_current_player() {
        let state = play(&[0, 3, 1, 4, 2]);
        assert_eq!(state.winner(), Some(Mark::X));
        assert_eq!(state.winning_line().map(|l| l.indices()), Some([0, 1, 2]));
        assert_eq!(state.current_player(), Mark::X);
        assert_eq!(state.place_index(8), Err(MoveRejection::GameOver));
    }

    #[test]
    fn test_draw_after_full_board() {
        let state = play(&[0, 2, 1, 3, 5, 4, 6, 7, 8]);
        assert!(state.is_draw());
        assert_eq!(state.winner(), None);
        assert_eq!(state.winning_line(), None);
        assert_eq!(state.current_player(), Mark::X);
    }

    #[test]
    fn test_win_on_last_square_is_not_draw() {
        // X O X / X O O / X X O: X completes the left column with move 9.
        let state = play(&[0, 1, 2, 4, 3, 5, 7, 8, 6]);
        assert_eq!(state.winner(), Some(Mark::X));
        assert_eq!(state.winning_line().map(|l| l.indices()), Some([0, 3, 6]));
        assert!(!state.is_draw());
    }

    /// Records the field names of every span opened while installed.
    struct SpanFields(Arc<Mutex<Vec<(&'static str, Vec<&'static str>)>>>);

    impl<S: Subscriber> Layer<S> for SpanFields {
        fn on_new_span(&self, attrs: &Attributes<'_>, _id: &Id, _ctx: Context<'_, S>) {
            let meta = attrs.metadata();
            let names = meta.fields().iter().map(|f| f.name()).collect();
            if let Ok(mut spans) = self.0.lock() {
                spans.push((meta.name(), names));
            }
        }
    }

    #[test]
    fn test_place_span_records_position_and_player() {
        let spans = Arc::new(Mutex::new(Vec::new()));
        let subscriber = tracing_subscriber::registry().with(SpanFields(Arc::clone(&spans)));

        tracing::subscriber::with_default(subscriber, || {
            GameState::new().place(Position::Center).expect("legal move");
        });

        let spans = spans.lock().expect("lock");
        let (_, fields) = spans
            .iter()
            .find(|(name, _)| *name == "place")
            .expect("place span");
        assert!(fields.contains(&"position"));
        assert!(fields.contains(&"player"));
        assert!(!fields.contains(&"pos"));
    }
}
