//! Top-level modes and the player intents that drive them.

use std::fmt;

/// Which screen the game is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Title screen.
    #[default]
    MainMenu,
    /// Reading the story.
    Narrative,
    /// In a battle.
    Combat,
    /// The player was defeated.
    GameOver,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::MainMenu => "main menu",
            Self::Narrative => "narrative",
            Self::Combat => "combat",
            Self::GameOver => "game over",
        };
        f.write_str(name)
    }
}

/// A discrete player input, already mapped from whatever device produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Begin playing from the main menu.
    Start,
    /// Load the save slot from the main menu.
    Load,
    /// Write the save slot while reading the story.
    Save,
    /// Leave the game.
    Quit,
    /// Cast Fireball.
    Skill,
    /// Summon the ally.
    Summon,
    /// Return to the main menu after a defeat.
    Restart,
    /// Take a story choice (0-based).
    Choose(usize),
}

impl Intent {
    /// Whether this intent means anything in `mode`.
    pub fn applies_to(self, mode: Mode) -> bool {
        matches!(
            (mode, self),
            (Mode::MainMenu, Self::Start | Self::Load | Self::Quit)
                | (Mode::Narrative, Self::Save | Self::Choose(_))
                | (Mode::Combat, Self::Skill | Self::Summon)
                | (Mode::GameOver, Self::Restart | Self::Quit)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_mode_is_main_menu() {
        assert_eq!(Mode::default(), Mode::MainMenu);
    }

    #[test]
    fn intents_are_scoped_to_modes() {
        assert!(Intent::Start.applies_to(Mode::MainMenu));
        assert!(!Intent::Start.applies_to(Mode::Narrative));
        assert!(Intent::Choose(3).applies_to(Mode::Narrative));
        assert!(Intent::Skill.applies_to(Mode::Combat));
        assert!(!Intent::Save.applies_to(Mode::Combat));
        assert!(Intent::Quit.applies_to(Mode::GameOver));
        assert!(!Intent::Quit.applies_to(Mode::Combat));
        assert!(!Intent::Restart.applies_to(Mode::MainMenu));
    }

    #[test]
    fn mode_display() {
        assert_eq!(Mode::GameOver.to_string(), "game over");
    }
}
