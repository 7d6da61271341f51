//! Scenes and the choices that connect them.

use serde::{Deserialize, Serialize};

/// Target string that sends the player into combat instead of another scene.
pub const COMBAT_TARGET: &str = "combat";

/// Where a choice leads.
///
/// Serialized as a plain string: the reserved value `"combat"` is
/// [`ChoiceTarget::Combat`], anything else is a scene id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ChoiceTarget {
    /// Move to the scene with this id.
    Scene(String),
    /// Leave the story and start a battle.
    Combat,
}

impl ChoiceTarget {
    /// Target for a scene id, honoring the combat sentinel.
    pub fn parse(target: impl Into<String>) -> Self {
        let target = target.into();
        if target == COMBAT_TARGET {
            Self::Combat
        } else {
            Self::Scene(target)
        }
    }

    /// The scene id, if this target is a scene.
    pub fn scene_id(&self) -> Option<&str> {
        match self {
            Self::Scene(id) => Some(id),
            Self::Combat => None,
        }
    }
}

impl From<String> for ChoiceTarget {
    fn from(target: String) -> Self {
        Self::parse(target)
    }
}

impl From<ChoiceTarget> for String {
    fn from(target: ChoiceTarget) -> Self {
        match target {
            ChoiceTarget::Scene(id) => id,
            ChoiceTarget::Combat => COMBAT_TARGET.to_string(),
        }
    }
}

/// One option offered by a scene.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    /// Label shown to the player.
    pub text: String,
    /// Where the choice leads.
    #[serde(rename = "next_scene")]
    pub target: ChoiceTarget,
}

impl Choice {
    /// A choice leading to another scene.
    pub fn scene(text: impl Into<String>, scene_id: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            target: ChoiceTarget::parse(scene_id),
        }
    }

    /// A choice that starts combat.
    pub fn combat(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            target: ChoiceTarget::Combat,
        }
    }
}

/// A single narrative scene.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scene {
    /// Unique id. Taken from the scene's key when loaded from JSON.
    #[serde(default, skip_serializing)]
    pub id: String,
    /// Narrative text.
    pub text: String,
    /// Background asset key.
    #[serde(default)]
    pub background: String,
    /// Character portrait asset key.
    #[serde(default)]
    pub portrait: String,
    /// Options, in display order.
    #[serde(default)]
    pub choices: Vec<Choice>,
}

impl Scene {
    /// Create a scene with no choices and no artwork.
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            background: String::new(),
            portrait: String::new(),
            choices: Vec::new(),
        }
    }

    /// Set the background asset key.
    pub fn with_background(mut self, background: impl Into<String>) -> Self {
        self.background = background.into();
        self
    }

    /// Set the portrait asset key.
    pub fn with_portrait(mut self, portrait: impl Into<String>) -> Self {
        self.portrait = portrait.into();
        self
    }

    /// Add a choice.
    pub fn with_choice(mut self, choice: Choice) -> Self {
        self.choices.push(choice);
        self
    }
}
