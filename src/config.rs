//! Settings loaded from a TOML file.

use derive_getters::Getters;
use derive_more::{Display, Error};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info, instrument};

/// Default settings file, looked up in the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "tic_tac_toe.toml";

/// Application settings.
///
/// Every field has a default, so an empty file (or no file) is valid.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// File the terminal UI writes its logs to.
    log_file: PathBuf,

    /// Log filter used when `RUST_LOG` is unset (e.g. `"info"`, `"debug"`).
    log_filter: String,

    /// Colors used by the terminal UI.
    theme: Theme,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from("tic_tac_toe.log"),
            log_filter: "info".to_string(),
            theme: Theme::default(),
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Parses settings from TOML text and validates the theme.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let settings: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        settings.theme.palette()?;
        Ok(settings)
    }

    /// Resolves the settings for this run.
    ///
    /// An explicit path must exist. Without one, [`DEFAULT_CONFIG_PATH`] is
    /// used if present and the built-in defaults otherwise.
    #[instrument]
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => Self::from_file(DEFAULT_CONFIG_PATH),
            None => {
                info!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }
}

/// Color names for the terminal UI.
///
/// Accepts anything ratatui parses: names such as `"blue"` or
/// `"lightred"`, hex such as `"#1976d2"`, or a palette index.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Theme {
    /// Color of X marks.
    x_color: String,
    /// Color of O marks.
    o_color: String,
    /// Background of cells on the winning line.
    win_color: String,
    /// Background of the cursor cell.
    cursor_color: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            x_color: "blue".to_string(),
            o_color: "red".to_string(),
            win_color: "green".to_string(),
            cursor_color: "white".to_string(),
        }
    }
}

/// Parsed theme colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Color of X marks.
    pub x: Color,
    /// Color of O marks.
    pub o: Color,
    /// Background of cells on the winning line.
    pub win: Color,
    /// Background of the cursor cell.
    pub cursor: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            x: Color::Blue,
            o: Color::Red,
            win: Color::Green,
            cursor: Color::White,
        }
    }
}

impl Theme {
    /// Parses every color name.
    pub fn palette(&self) -> Result<Palette, ConfigError> {
        Ok(Palette {
            x: parse_color("x_color", &self.x_color)?,
            o: parse_color("o_color", &self.o_color)?,
            win: parse_color("win_color", &self.win_color)?,
            cursor: parse_color("cursor_color", &self.cursor_color)?,
        })
    }
}

fn parse_color(key: &str, value: &str) -> Result<Color, ConfigError> {
    Color::from_str(value)
        .map_err(|_| ConfigError::new(format!("Unknown color for {}: {:?}", key, value)))
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
