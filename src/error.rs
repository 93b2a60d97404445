//! Error types for the game model and configuration loading

use std::path::PathBuf;

use crate::board::Pos;

/// Why a move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveRejection {
    OutOfBounds,
    Occupied,
}

impl std::fmt::Display for MoveRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveRejection::OutOfBounds => write!(f, "outside the board"),
            MoveRejection::Occupied => write!(f, "already occupied"),
        }
    }
}

/// Errors raised by the game model.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("invalid move {pos}: {reason}")]
    InvalidMove { pos: Pos, reason: MoveRejection },

    #[error("invalid board dimensions m={m}, k={k} (need 1 <= k <= m)")]
    InvalidDimensions { m: usize, k: usize },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
