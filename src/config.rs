//! Application configuration, loadable from TOML

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::engine::SolverKind;
use crate::error::ConfigError;
use crate::search::OrderingKind;

/// Largest board the front-ends accept
pub const MAX_BOARD_SIZE: usize = 19;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub engine: EngineConfig,
    pub ui: UiConfig,
}

/// Board shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Board dimension `m`
    pub size: usize,
    /// Marks in a row needed to win (`k`)
    pub win_length: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: 3,
            win_length: 3,
        }
    }
}

/// Which solver plays, and how it orders moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub solver: SolverKind,
    pub ordering: OrderingKind,
    /// Ply bound for the depth-limited solver
    pub depth: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            solver: SolverKind::Auto,
            ordering: OrderingKind::Default,
            depth: 4,
        }
    }
}

/// Who sits at the board in the interactive front-ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Seat {
    /// Human plays X, engine plays O
    HumanX,
    /// Engine plays X, human plays O
    #[default]
    HumanO,
    /// Two humans share the board, engine gives hints on request
    Hotseat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub seat: Seat,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml(&content)
    }

    /// Parse and validate configuration text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.game.size == 0 {
            return Err(ConfigError::Validation("game.size must be > 0".into()));
        }
        if self.game.size > MAX_BOARD_SIZE {
            return Err(ConfigError::Validation(format!(
                "game.size must be <= {MAX_BOARD_SIZE}"
            )));
        }
        if self.game.win_length == 0 {
            return Err(ConfigError::Validation("game.win_length must be > 0".into()));
        }
        if self.game.win_length > self.game.size {
            return Err(ConfigError::Validation(
                "game.win_length must be <= game.size".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_classic_tic_tac_toe() {
        let config = AppConfig::default();
        assert_eq!(config.game.size, 3);
        assert_eq!(config.game.win_length, 3);
        assert_eq!(config.engine.solver, SolverKind::Auto);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = AppConfig::from_toml(
            r#"
            [game]
            size = 5
            win_length = 4

            [engine]
            solver = "depth_limited"
            ordering = "center_first"
            "#,
        )
        .unwrap();
        assert_eq!(config.game.size, 5);
        assert_eq!(config.game.win_length, 4);
        assert_eq!(config.engine.solver, SolverKind::DepthLimited);
        assert_eq!(config.engine.ordering, OrderingKind::CenterFirst);
        assert_eq!(config.engine.depth, 4);
        assert_eq!(config.ui.seat, Seat::HumanO);
    }

    #[test]
    fn test_rejects_win_length_above_size() {
        let err = AppConfig::from_toml("[game]\nsize = 3\nwin_length = 4\n").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_rejects_oversized_board() {
        let mut config = AppConfig::default();
        config.game.size = MAX_BOARD_SIZE + 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_unknown_solver() {
        let err = AppConfig::from_toml("[engine]\nsolver = \"mcts\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::TomlParse(_)));
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config =
            AppConfig::load_or_default(Path::new("definitely/not/here/mnk.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }
}
