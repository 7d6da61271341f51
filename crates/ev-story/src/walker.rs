//! Walking the scene graph.

use crate::error::{StoryError, StoryResult};
use crate::scene::{ChoiceTarget, Scene};
use crate::story::Story;

/// What happened after a choice was taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoryStep {
    /// The walker moved to this scene.
    Scene(String),
    /// The choice leads into combat. The walker stays where it is.
    EnterCombat,
}

/// Tracks the current scene of a [`Story`].
#[derive(Debug, Clone)]
pub struct StoryWalker {
    story: Story,
    current: String,
}

impl StoryWalker {
    /// Start walking at the story's start scene.
    pub fn new(story: Story) -> Self {
        let current = story.start().to_string();
        Self { story, current }
    }

    /// The story being walked.
    pub fn story(&self) -> &Story {
        &self.story
    }

    /// Id of the current scene.
    pub fn current_scene_id(&self) -> &str {
        &self.current
    }

    /// The current scene, if the current id resolves.
    pub fn current_scene(&self) -> Option<&Scene> {
        self.story.scene(&self.current)
    }

    /// Overwrite the current scene id without checking it.
    ///
    /// An unknown id only surfaces when the scene is next shown.
    pub fn set_current(&mut self, id: impl Into<String>) {
        self.current = id.into();
    }

    /// Return to the story's start scene.
    pub fn reset(&mut self) {
        self.current = self.story.start().to_string();
    }

    /// Make `id` the current scene and return it.
    ///
    /// An unknown id leaves the current scene unchanged.
    pub fn show_scene(&mut self, id: &str) -> StoryResult<&Scene> {
        if !self.story.contains(id) {
            tracing::warn!(scene = id, "scene does not exist");
            return Err(StoryError::SceneNotFound(id.to_string()));
        }
        self.current = id.to_string();
        tracing::debug!(scene = id, "scene shown");
        self.story
            .scene(id)
            .ok_or_else(|| StoryError::SceneNotFound(id.to_string()))
    }

    /// Show the current scene again, e.g. when re-entering the story.
    pub fn show_current(&mut self) -> StoryResult<&Scene> {
        let id = self.current.clone();
        self.show_scene(&id)
    }

    /// Take the choice at `index` (0-based) in the current scene.
    pub fn choose(&mut self, index: usize) -> StoryResult<StoryStep> {
        let scene = self
            .current_scene()
            .ok_or_else(|| StoryError::SceneNotFound(self.current.clone()))?;
        let choice = scene
            .choices
            .get(index)
            .ok_or(StoryError::InvalidChoice(index))?;

        match choice.target.clone() {
            ChoiceTarget::Combat => Ok(StoryStep::EnterCombat),
            ChoiceTarget::Scene(id) => {
                self.show_scene(&id)?;
                Ok(StoryStep::Scene(id))
            }
        }
    }
}
