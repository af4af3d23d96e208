//! Engine and game configuration.

use crate::codec::MAX_BOARD_SIZE;
use crate::engine::DoubleUndoGuard;
use crate::process::ProcessTransport;
use crate::transport::TransportError;
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_new::new;
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use strictly_go::Color;
use tracing::{debug, info, instrument};

/// Parameters of a new game.
#[derive(Debug, Clone, PartialEq, Getters, Setters, Serialize, Deserialize, new)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct GameSettings {
    /// Board edge length.
    board_size: usize,

    /// Komi; may be negative.
    komi: f64,

    /// Requested handicap; the engine may accept fewer stones.
    handicap: u32,

    /// Color of the local player.
    player_color: Color,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            board_size: 19,
            komi: 6.5,
            handicap: 0,
            player_color: Color::Black,
        }
    }
}

/// Configuration of a GTP engine and of the games played against it.
#[derive(Debug, Clone, Getters, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Display name of the engine.
    #[serde(default = "default_name")]
    name: String,

    /// Program and arguments that start the engine in GTP mode.
    command: Vec<String>,

    /// Optional working directory for the engine process.
    cwd: Option<PathBuf>,

    /// Optional strength level, sent with `level` after each new game.
    level: Option<u32>,

    /// Whether undo also takes back the engine's reply.
    #[serde(default = "default_allow_double_undo")]
    allow_double_undo: bool,

    /// Extra condition for taking back two plies.
    #[serde(default)]
    double_undo_guard: DoubleUndoGuard,

    /// Game parameters.
    #[serde(default)]
    game: GameSettings,
}

fn default_name() -> String {
    "GTP engine".to_string()
}

fn default_allow_double_undo() -> bool {
    true
}

impl EngineConfig {
    /// Creates a configuration with default game settings.
    #[instrument(skip(command))]
    pub fn new(name: String, command: Vec<String>) -> Self {
        Self {
            name,
            command,
            cwd: None,
            level: None,
            allow_double_undo: default_allow_double_undo(),
            double_undo_guard: DoubleUndoGuard::default(),
            game: GameSettings::default(),
        }
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;
        info!(engine = %config.name, "Config loaded successfully");
        Ok(config)
    }

    /// Parses and validates configuration text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Replaces the game settings.
    pub fn with_game(mut self, game: GameSettings) -> Self {
        self.game = game;
        self
    }

    /// Checks values the engine session would otherwise reject with a panic.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.command.is_empty() {
            return Err(ConfigError::new("Engine command must not be empty"));
        }
        let size = self.game.board_size;
        if size == 0 || size > MAX_BOARD_SIZE {
            return Err(ConfigError::new(format!(
                "Board size {} is outside 1..={}",
                size, MAX_BOARD_SIZE
            )));
        }
        if !self.game.komi.is_finite() {
            return Err(ConfigError::new("Komi must be a finite number"));
        }
        Ok(())
    }

    /// Starts the configured engine process.
    #[instrument(skip(self), fields(engine = %self.name))]
    pub fn spawn(&self) -> Result<ProcessTransport, TransportError> {
        let (program, args) = self
            .command
            .split_first()
            .ok_or_else(|| TransportError::new("Engine command is empty"))?;
        ProcessTransport::spawn(program, args, self.cwd.as_deref())
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
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
