//! Game configuration.
//!
//! Every field has a default, so an absent or partial `caper.toml` works.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::entities::LocationId;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed config: {0}")]
    Malformed(#[from] toml::de::Error),

    #[error("max_tries must be at least 1")]
    NoTries,
}

/// Rules that the world description does not carry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Catch attempts budget. The game is lost once `max_tries - 1` attempts
    /// have missed.
    pub max_tries: u32,
    /// Where the target really is, unless the world description says otherwise.
    pub target_location: LocationId,
    pub target_name: String,
    /// Commands that end the session immediately. Matched exactly.
    pub quit_commands: Vec<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_tries: 3,
            target_location: LocationId::new("Moscow"),
            target_name: "Carmen Sandiego".to_string(),
            quit_commands: vec!["quit".to_string(), "exit".to_string()],
        }
    }
}

impl GameConfig {
    /// Parse a config from TOML text.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(text)?;
        if config.max_tries == 0 {
            return Err(ConfigError::NoTries);
        }
        Ok(config)
    }

    /// Load a config file, falling back to defaults if it does not exist.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path.as_ref()) {
            Ok(text) => Self::from_toml(&text),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Number of missed catches after which the game is lost.
    pub fn loss_threshold(&self) -> u32 {
        self.max_tries.saturating_sub(1)
    }

    pub fn is_quit(&self, command: &str) -> bool {
        self.quit_commands.iter().any(|q| q == command)
    }
}
