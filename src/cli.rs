//! Command-line interface for tic_tac_toe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tic_tac_toe::Position;

/// Tic Tac Toe - a classic, minimalistic two-player game
#[derive(Parser, Debug)]
#[command(name = "tic_tac_toe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML settings file (defaults to ./tic_tac_toe.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to the terminal UI)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Play interactively in the terminal
    Tui,

    /// Apply moves without a UI and print the result
    Play {
        /// Cells as indices 0-8 (row-major from the top-left) or labels
        /// such as `center` or `top-left`
        #[arg(value_parser = parse_move)]
        moves: Vec<usize>,

        /// Print a JSON snapshot instead of the board
        #[arg(long)]
        json: bool,
    },
}

/// Parses a move given as a board index or a cell label.
///
/// Any number is accepted; out-of-range indices reach the game and are
/// ignored there, as in the terminal UI.
fn parse_move(s: &str) -> Result<usize, String> {
    if let Ok(index) = s.trim().parse::<usize>() {
        return Ok(index);
    }
    Position::from_label_or_number(s)
        .map(Position::to_index)
        .ok_or_else(|| format!("expected a cell index 0-8 or a label, got `{}`", s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_tui() {
        let cli = Cli::try_parse_from(["tic_tac_toe"]).expect("parses");
        assert_eq!(cli.command, None);
        assert_eq!(cli.config, None);
    }

    #[test]
    fn test_play_with_moves() {
        let cli = Cli::try_parse_from([
            "tic_tac_toe",
            "--config",
            "t.toml",
            "play",
            "4",
            "0",
            "--json",
        ])
        .expect("parses");
        assert_eq!(cli.config, Some(PathBuf::from("t.toml")));
        assert_eq!(
            cli.command,
            Some(Command::Play {
                moves: vec![4, 0],
                json: true
            })
        );
    }

    #[test]
    fn test_play_with_labels() {
        let cli = Cli::try_parse_from(["tic_tac_toe", "play", "center", "top-left", "Bottom Right"])
            .expect("parses");
        assert_eq!(
            cli.command,
            Some(Command::Play {
                moves: vec![4, 0, 8],
                json: false
            })
        );
    }

    #[test]
    fn test_out_of_range_index_is_passed_through() {
        let cli = Cli::try_parse_from(["tic_tac_toe", "play", "12", "5"]).expect("parses");
        assert_eq!(
            cli.command,
            Some(Command::Play {
                moves: vec![12, 5],
                json: false
            })
        );
    }

    #[test]
    fn test_rejects_unknown_label() {
        assert!(Cli::try_parse_from(["tic_tac_toe", "play", "nowhere"]).is_err());
        assert_eq!(parse_move("middle-left"), Ok(3));
    }
}
