//! Terminal UI for tic-tac-toe.
//!
//! The loop is synchronous: read one terminal event, apply at most one
//! state transition, redraw, repeat.

mod app;
mod input;
mod ui;

pub use app::App;
pub use input::{Action, Direction, action_for, move_cursor};
pub use ui::draw;

use crate::config::Palette;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{error, info, instrument, warn};

type Tty = Terminal<CrosstermBackend<Stdout>>;

/// Runs the interactive game until the user quits.
#[instrument(skip(palette))]
pub fn run_tui(palette: Palette) -> Result<()> {
    info!("Starting terminal UI");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut terminal = setup_with_rollback(setup_terminal, restore_terminal)?;

    let mut app = App::new(palette);
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("Terminal UI closed");

    res
}

fn setup_terminal() -> Result<Tty> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    Terminal::new(CrosstermBackend::new(stdout)).context("Failed to create terminal")
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Runs `setup`; on failure runs `rollback` before returning the error.
fn setup_with_rollback<T>(
    setup: impl FnOnce() -> Result<T>,
    rollback: impl FnOnce() -> Result<()>,
) -> Result<T> {
    setup().or_else(|err| {
        if let Err(restore_err) = rollback() {
            warn!(error = ?restore_err, "Failed to restore terminal");
        }
        Err(err)
    })
}

fn run_app(terminal: &mut Tty, app: &mut App) -> Result<()> {
    terminal.draw(|f| draw(f, app))?;

    while !app.should_quit() {
        let redraw = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
            Event::Resize(_, _) => true,
            _ => false,
        };

        if redraw {
            terminal.draw(|f| draw(f, app))?;
        }
    }

    Ok(())
}
