use std::path::Path;

use crate::error::ConfigError;
use crate::game::{BoardConfig, ConnectBoard, MoveOrdering};

/// Search settings for computer players.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Plies to look ahead.
    pub depth: u32,
    /// Shuffle candidate moves so equal moves vary between games.
    pub shuffle: bool,
    /// Seed for the shuffle; random when absent.
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            depth: 3,
            shuffle: true,
            seed: None,
        }
    }
}

impl SearchConfig {
    /// Move ordering matching these settings.
    pub fn ordering(&self) -> MoveOrdering {
        match (self.shuffle, self.seed) {
            (false, _) => MoveOrdering::CenterOut,
            (true, Some(seed)) => MoveOrdering::seeded(seed),
            (true, None) => MoveOrdering::shuffled(),
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub search: SearchConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.board.validate()?;
        if self.search.depth == 0 {
            return Err(ConfigError::Validation("search.depth must be >= 1".into()));
        }
        Ok(())
    }

    /// Empty board built from this configuration.
    pub fn build_board(&self) -> Result<ConnectBoard, ConfigError> {
        Ok(ConnectBoard::with_config(&self.board)?.with_ordering(self.search.ordering()))
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
