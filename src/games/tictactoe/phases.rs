//! Game phase as a tagged union.
//!
//! A finished game ALWAYS carries its outcome: `Won` holds the winner and
//! the completed line, `Drawn` holds nothing. There is no way to express
//! "winner set and draw set" or "winner without a line".

use super::position::Position;
use super::types::Mark;
use serde::{Deserialize, Serialize};

/// One of the eight triples that wins the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine([Position; 3]);

impl WinningLine {
    pub(crate) const fn new(positions: [Position; 3]) -> Self {
        Self(positions)
    }

    /// The three positions of the line, in ascending index order.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// The three board indices of the line.
    pub fn indices(&self) -> [usize; 3] {
        self.0.map(Position::to_index)
    }

    /// Whether `pos` is part of this line.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }
}

/// Phase of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Phase {
    /// Moves are accepted.
    #[default]
    InProgress,
    /// A player completed a line.
    Won {
        /// The mark that completed the line.
        winner: Mark,
        /// The completed line.
        line: WinningLine,
    },
    /// The board filled with no completed line.
    Drawn,
}

impl Phase {
    /// Returns true for `Won` and `Drawn`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Phase::InProgress)
    }
}
