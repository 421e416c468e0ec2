//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board according
//! to tic-tac-toe rules. Rules are separated from board storage so that
//! the transition function and the invariants share one definition.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{WINNING_LINES, find_winning_line};
