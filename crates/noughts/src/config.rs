//! Game settings from the config file and command line.

use derive_getters::Getters;
use derive_more::{Display, Error};
use noughts_core::Mark;
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Environment variable naming the config file when `--config` is absent.
pub const CONFIG_ENV: &str = "NOUGHTS_CONFIG";

/// Who plays the second seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum, Display)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Human against the AI.
    #[display("ai")]
    Ai,
    /// Two humans at one console.
    #[display("pvp")]
    Pvp,
}

/// Seat the AI takes in [`Mode::Ai`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum, Display)]
#[serde(rename_all = "lowercase")]
pub enum Seat {
    /// Moves first.
    #[display("first")]
    First,
    /// Moves second.
    #[display("second")]
    Second,
}

impl Seat {
    /// Mark played from this seat.
    pub fn mark(self) -> Mark {
        match self {
            Seat::First => Mark::Nought,
            Seat::Second => Mark::Cross,
        }
    }
}

/// Symbols used to draw each mark.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Symbols {
    /// Symbol for the first mover.
    nought: String,
    /// Symbol for the second mover.
    cross: String,
}

impl Symbols {
    /// Creates a symbol set.
    pub fn new(nought: impl Into<String>, cross: impl Into<String>) -> Self {
        Self {
            nought: nought.into(),
            cross: cross.into(),
        }
    }

    /// Symbol for `mark`.
    pub fn of(&self, mark: Mark) -> &str {
        match mark {
            Mark::Nought => &self.nought,
            Mark::Cross => &self.cross,
        }
    }
}

impl Default for Symbols {
    fn default() -> Self {
        Self::new(Mark::Nought.to_string(), Mark::Cross.to_string())
    }
}

/// Contents of a TOML config file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    /// Game mode; asked at the menu when unset.
    pub mode: Option<Mode>,
    /// AI seat.
    pub computer: Option<Seat>,
    /// Offer another game after each result.
    pub replay: Option<bool>,
    /// Mark symbols.
    pub symbols: Option<Symbols>,
}

impl ConfigFile {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::parse(&content)?;
        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }
}

/// Picks the config path: the command line first, then the environment.
pub fn locate(cli_path: Option<PathBuf>, env_value: Option<OsString>) -> Option<PathBuf> {
    cli_path.or_else(|| env_value.filter(|v| !v.is_empty()).map(PathBuf::from))
}

/// Resolved settings for a console session.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Settings {
    /// Fixed mode, or `None` to ask at the menu.
    mode: Option<Mode>,
    /// AI seat.
    computer: Seat,
    /// Offer another game after each result.
    replay: bool,
    /// Mark symbols.
    symbols: Symbols,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mode: None,
            computer: Seat::Second,
            replay: true,
            symbols: Symbols::default(),
        }
    }
}

impl Settings {
    /// Settings from a config file, defaults for missing keys.
    pub fn from_file(file: ConfigFile) -> Self {
        let defaults = Self::default();
        Self {
            mode: file.mode,
            computer: file.computer.unwrap_or(defaults.computer),
            replay: file.replay.unwrap_or(defaults.replay),
            symbols: file.symbols.unwrap_or(defaults.symbols),
        }
    }

    /// Applies command-line overrides.
    pub fn with_overrides(mut self, mode: Option<Mode>, computer: Option<Seat>, no_replay: bool) -> Self {
        if mode.is_some() {
            self.mode = mode;
        }
        if let Some(computer) = computer {
            self.computer = computer;
        }
        if no_replay {
            self.replay = false;
        }
        self
    }
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
