//! Error types for the game controller.

use thiserror::Error;

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;

/// Errors that can occur while running the game.
#[derive(Debug, Error)]
pub enum GameError {
    /// Story content error.
    #[error(transparent)]
    Story(#[from] ev_story::StoryError),

    /// Combat error.
    #[error(transparent)]
    Combat(#[from] ev_combat::CombatError),

    /// The save slot holds something unusable.
    #[error("save error: {0}")]
    Save(String),

    /// Save slot I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Save slot JSON could not be read or written.
    #[error("save data error: {0}")]
    Json(#[from] serde_json::Error),
}
