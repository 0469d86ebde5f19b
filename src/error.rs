use std::path::PathBuf;

/// Errors from attempting a move on a game state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {0} is out of range")]
    InvalidColumn(usize),

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("the game is already over")]
    GameOver,
}

/// Errors from building a position out of a raw grid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PositionError {
    #[error("invalid cell value {value} at row {row}, column {col} (expected 0, 1 or 2)")]
    InvalidCell { row: usize, col: usize, value: u8 },
}

/// Errors that can occur while running a game between agents.
#[derive(Debug, thiserror::Error)]
pub enum PlayError {
    #[error("{agent} selected illegal column {column} (legal: {legal:?})")]
    IllegalMove {
        agent: String,
        column: usize,
        legal: Vec<usize>,
        #[source]
        source: MoveError,
    },

    #[error("{agent} returned no move in a live position")]
    NoMove { agent: String },

    #[error("failed to read player input: {0}")]
    Input(#[from] std::io::Error),
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
