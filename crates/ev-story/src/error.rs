//! Error types for the story engine.

use thiserror::Error;

/// Result type for story operations.
pub type StoryResult<T> = Result<T, StoryError>;

/// Errors that can occur while loading or walking a story.
#[derive(Debug, Error)]
pub enum StoryError {
    /// No scene with this id exists.
    #[error("scene not found: {0}")]
    SceneNotFound(String),

    /// The current scene has no choice at this index.
    #[error("invalid choice: {0}")]
    InvalidChoice(usize),

    /// The story names a start scene it does not contain.
    #[error("start scene not found: {0}")]
    MissingStart(String),

    /// Story JSON could not be parsed.
    #[error("story parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Story file could not be read.
    #[error("story file error: {0}")]
    Io(#[from] std::io::Error),
}
