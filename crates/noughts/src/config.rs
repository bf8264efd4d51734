//! Game configuration loaded from an optional TOML file.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info, instrument};

/// Config file read when `--config` is not given, if it exists.
pub const DEFAULT_CONFIG_PATH: &str = "noughts.toml";

/// How the human player enters coordinates.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum InputMode {
    /// Pick a column, then a row, from numbered menus.
    #[default]
    Menu,
    /// Type a coordinate such as `B2`.
    Text,
}

/// Settings for a game session.
///
/// Every field has a default, so an empty file is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Default, Getters, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Play against the computer (human is x, computer is o).
    against_computer: bool,

    /// Seed for the computer's random choices. Random if absent.
    seed: Option<u64>,

    /// How the human enters moves.
    input: InputMode,
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if given, else [`DEFAULT_CONFIG_PATH`] in the working
    /// directory if it exists, else the defaults.
    ///
    /// An explicitly named file that cannot be read is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_from(Path::new("."), path)
    }

    /// Like [`GameConfig::load`], looking for [`DEFAULT_CONFIG_PATH`] in `dir`.
    #[instrument]
    pub fn load_from(dir: &Path, path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::from_file(path);
        }

        let default_path = dir.join(DEFAULT_CONFIG_PATH);
        if default_path.exists() {
            Self::from_file(default_path)
        } else {
            debug!("No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line flags on top of the file settings.
    ///
    /// `against_computer` can only switch computer mode on.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        against_computer: bool,
        seed: Option<u64>,
        input: Option<InputMode>,
    ) -> Self {
        self.against_computer |= against_computer;
        self.seed = seed.or(self.seed);
        self.input = input.unwrap_or(self.input);
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
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
