//! The scene graph and its loaders.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{StoryError, StoryResult};
use crate::scene::{Choice, ChoiceTarget, Scene};

/// Id of the first scene in the built-in story.
pub const DEFAULT_START: &str = "intro";

/// A static map of scenes plus the id the story starts at.
///
/// JSON layout:
///
/// ```json
/// {
///   "start": "intro",
///   "scenes": {
///     "intro": {
///       "text": "...",
///       "background": "default_background",
///       "portrait": "player",
///       "choices": [{ "text": "Prepare for battle", "next_scene": "combat" }]
///     }
///   }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    #[serde(default = "default_start")]
    start: String,
    scenes: BTreeMap<String, Scene>,
}

fn default_start() -> String {
    DEFAULT_START.to_string()
}

/// A choice whose target scene does not exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DanglingTarget {
    /// Scene offering the choice.
    pub scene: String,
    /// Index of the choice within that scene.
    pub choice: usize,
    /// The missing scene id.
    pub target: String,
}

impl Story {
    /// Build a story from scenes. The start scene must be among them.
    pub fn new(
        start: impl Into<String>,
        scenes: impl IntoIterator<Item = Scene>,
    ) -> StoryResult<Self> {
        let story = Self {
            start: start.into(),
            scenes: scenes
                .into_iter()
                .map(|scene| (scene.id.clone(), scene))
                .collect(),
        };
        story.validate_start()?;
        Ok(story)
    }

    /// The story shipped with the game: a ruin, a mysterious creature, and
    /// a guardian.
    pub fn builtin() -> Self {
        let scenes = [
            Scene::new(
                "intro",
                "You are a brave adventurer exploring an ancient ruin. \
                 Suddenly, you come face to face with a mysterious creature...",
            )
            .with_background("default_background")
            .with_portrait("player")
            .with_choice(Choice::scene("Talk to the creature", "talk"))
            .with_choice(Choice::combat("Prepare for battle")),
            Scene::new(
                "talk",
                "You decide to speak with the creature. It seems friendly, \
                 and tells you about the secrets of the ruin...",
            )
            .with_background("default_background")
            .with_portrait("player")
            .with_choice(Choice::scene("Keep exploring", "explore")),
            Scene::new(
                "explore",
                "Exploring deeper, you find an ancient chest. As you approach, \
                 a guardian appears!",
            )
            .with_background("default_background")
            .with_portrait("player")
            .with_choice(Choice::combat("Prepare for battle")),
        ];
        Self {
            start: DEFAULT_START.to_string(),
            scenes: scenes
                .into_iter()
                .map(|scene| (scene.id.clone(), scene))
                .collect(),
        }
    }

    /// Parse a story from JSON.
    pub fn from_json_str(json: &str) -> StoryResult<Self> {
        let mut story: Story = serde_json::from_str(json)?;
        for (id, scene) in &mut story.scenes {
            scene.id.clone_from(id);
        }
        story.validate_start()?;
        Ok(story)
    }

    /// Read and parse a story file.
    pub fn from_json_file(path: impl AsRef<Path>) -> StoryResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let story = Self::from_json_str(&json)?;
        tracing::info!(path = %path.display(), scenes = story.len(), "story loaded");
        Ok(story)
    }

    /// Serialize the story as pretty JSON.
    pub fn to_json_string(&self) -> StoryResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Id of the first scene.
    pub fn start(&self) -> &str {
        &self.start
    }

    /// Look up a scene.
    pub fn scene(&self, id: &str) -> Option<&Scene> {
        self.scenes.get(id)
    }

    /// Whether a scene exists.
    pub fn contains(&self, id: &str) -> bool {
        self.scenes.contains_key(id)
    }

    /// All scenes, ordered by id.
    pub fn scenes(&self) -> impl Iterator<Item = &Scene> {
        self.scenes.values()
    }

    /// Number of scenes.
    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    /// Whether the story has no scenes.
    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    /// Choices that point at scenes the story does not contain.
    pub fn dangling_targets(&self) -> Vec<DanglingTarget> {
        let mut dangling = Vec::new();
        for scene in self.scenes.values() {
            for (index, choice) in scene.choices.iter().enumerate() {
                let target = match &choice.target {
                    ChoiceTarget::Scene(id) if !self.scenes.contains_key(id) => id,
                    _ => continue,
                };
                dangling.push(DanglingTarget {
                    scene: scene.id.clone(),
                    choice: index,
                    target: target.clone(),
                });
            }
        }
        dangling
    }

    fn validate_start(&self) -> StoryResult<()> {
        if self.scenes.contains_key(&self.start) {
            Ok(())
        } else {
            Err(StoryError::MissingStart(self.start.clone()))
        }
    }
}

impl Default for Story {
    fn default() -> Self {
        Self::builtin()
    }
}
