//! Read-only presentation model.
//!
//! Everything a renderer needs per cell, derived from [`GameState`]:
//! the mark, whether the cell belongs to the winning line, whether it
//! still accepts a move, and an accessible label.

use super::state::GameState;
use super::status::Status;
use super::{Mark, Position};
use derive_getters::Getters;
use serde::Serialize;

/// Render model for one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize)]
pub struct CellView {
    /// Which cell.
    position: Position,
    /// Mark in the cell, if any.
    mark: Option<Mark>,
    /// Part of the winning line.
    is_winning: bool,
    /// Occupied, or the game is over.
    is_disabled: bool,
    /// Mark the next move would place here.
    next_mark: Mark,
}

impl CellView {
    /// Builds the view of `position` in `state`.
    pub fn of(state: &GameState, position: Position) -> Self {
        let mark = state.board().get(position).mark();
        Self {
            position,
            mark,
            is_winning: state.winning_line().is_some_and(|line| line.contains(position)),
            is_disabled: mark.is_some() || state.is_over(),
            next_mark: state.current_player(),
        }
    }

    /// 1-based cell number, as shown to players.
    pub fn number(&self) -> usize {
        self.position.to_index() + 1
    }

    /// Accessible label: `"Cell 1, X"` when occupied, `"Cell 1, place O"`
    /// when empty.
    pub fn label(&self) -> String {
        match self.mark {
            Some(mark) => format!("Cell {}, {}", self.number(), mark),
            None => format!("Cell {}, place {}", self.number(), self.next_mark),
        }
    }
}

/// Views of all nine cells in index order.
pub fn cells(state: &GameState) -> [CellView; 9] {
    Position::ALL.map(|pos| CellView::of(state, pos))
}

/// Serializable snapshot of the whole read surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// Cells in index order; `null` for empty.
    pub board: [Option<Mark>; 9],
    /// Mark to move (frozen once the game is over).
    pub current_player: Mark,
    /// Winner, if any.
    pub winner: Option<Mark>,
    /// Indices of the winning line; empty unless won.
    pub winning_line: Vec<usize>,
    /// Board full with no winner.
    pub is_draw: bool,
    /// Derived status line.
    pub status: String,
}

impl From<&GameState> for Snapshot {
    fn from(state: &GameState) -> Self {
        Self {
            board: state.board().squares().map(|s| s.mark()),
            current_player: state.current_player(),
            winner: state.winner(),
            winning_line: state
                .winning_line()
                .map(|line| line.indices().to_vec())
                .unwrap_or_default(),
            is_draw: state.is_draw(),
            status: Status::of(state).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_cell_label_names_next_mark() {
        let state = GameState::new();
        let view = CellView::of(&state, Position::TopLeft);
        assert_eq!(view.label(), "Cell 1, place X");
        assert!(!view.is_disabled());
        assert!(!view.is_winning());
    }

    #[test]
    fn test_occupied_cell_label_names_mark() {
        let state = GameState::new().place(Position::TopLeft).expect("legal move");
        let view = CellView::of(&state, Position::TopLeft);
        assert_eq!(view.label(), "Cell 1, X");
        assert_eq!(view.mark(), &Some(Mark::X));
        assert!(view.is_disabled());

        let empty = CellView::of(&state, Position::BottomRight);
        assert_eq!(empty.label(), "Cell 9, place O");
    }

    #[test]
    fn test_winning_cells_highlighted_and_all_disabled() {
        let state = [0, 3, 1, 4, 2]
            .into_iter()
            .try_fold(GameState::new(), |s, i| s.place_index(i))
            .expect("legal sequence");
        let views = cells(&state);

        let winning: Vec<usize> = views
            .iter()
            .filter(|v| *v.is_winning())
            .map(|v| v.position().to_index())
            .collect();
        assert_eq!(winning, vec![0, 1, 2]);
        assert!(views.iter().all(|v| *v.is_disabled()));
    }

    #[test]
    fn test_snapshot_serializes_read_surface() {
        let state = [0, 3, 1, 4, 2]
            .into_iter()
            .try_fold(GameState::new(), |s, i| s.place_index(i))
            .expect("legal sequence");
        let json = serde_json::to_value(Snapshot::from(&state)).expect("serializable");

        assert_eq!(json["winner"], "X");
        assert_eq!(json["winning_line"], serde_json::json!([0, 1, 2]));
        assert_eq!(json["is_draw"], false);
        assert_eq!(json["status"], "Player X wins!");
        assert_eq!(json["board"][5], serde_json::Value::Null);
        assert_eq!(json["board"][3], "O");
    }
}
