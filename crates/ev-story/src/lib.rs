//! Branching narrative for Emberveil.
//!
//! A [`Story`] is a static graph of [`Scene`]s keyed by id. Each scene
//! offers choices that lead either to another scene or into combat. The
//! [`StoryWalker`] tracks which scene the player is looking at.

pub mod error;
pub mod scene;
pub mod story;
pub mod walker;

pub use error::{StoryError, StoryResult};
pub use scene::{Choice, ChoiceTarget, Scene};
pub use story::{DanglingTarget, Story};
pub use walker::{StoryStep, StoryWalker};
