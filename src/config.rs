use std::path::Path;

use log::warn;

use crate::ai::EvaluatorKind;
use crate::error::ConfigError;
use crate::game::{COLS, ROWS};
use crate::search::{Algorithm, Depth};

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub search: SearchConfig,
    pub game: GameConfig,
}

/// How the engine searches.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub algorithm: Algorithm,
    /// Fixed depth, or the depth cap when a time budget is set.
    pub depth: Depth,
    pub evaluator: EvaluatorKind,
    /// Per-move thinking time; switches the engine to iterative deepening.
    pub time_budget_ms: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            algorithm: Algorithm::AlphaBeta,
            depth: 4,
            evaluator: EvaluatorKind::Basic,
            time_budget_ms: None,
        }
    }
}

/// Who sits on each side of an interactive game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlayerKind {
    Human,
    Engine,
    Random,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub red: PlayerKind,
    pub yellow: PlayerKind,
    /// Seed for random players; fresh entropy when unset.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            red: PlayerKind::Human,
            yellow: PlayerKind::Engine,
            seed: None,
        }
    }
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
            warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.search.validate()
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}

impl SearchConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let max_depth = (ROWS * COLS) as Depth;
        if self.depth < 1 {
            return Err(ConfigError::Validation("search.depth must be >= 1".into()));
        }
        if self.depth > max_depth {
            return Err(ConfigError::Validation(format!(
                "search.depth must be <= {max_depth}"
            )));
        }
        if self.time_budget_ms == Some(0) {
            return Err(ConfigError::Validation(
                "search.time_budget_ms must be > 0".into(),
            ));
        }
        Ok(())
    }
}
