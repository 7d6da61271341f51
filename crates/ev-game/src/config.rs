//! Configuration for a game.

use ev_combat::CombatConfig;
use ev_combat::rules::VICTORY_EXPERIENCE;

/// Name of the save slot when none is given.
pub const DEFAULT_SAVE_SLOT: &str = "savegame";

/// Configuration for a game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// RNG seed for combat rolls.
    pub seed: u64,
    /// Save slot name (file stem for file-backed stores).
    pub save_slot: String,
    /// Battle log capacity. 0 = unlimited.
    pub max_log_lines: usize,
    /// Experience announced after a victory.
    pub reward_experience: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            save_slot: DEFAULT_SAVE_SLOT.to_string(),
            max_log_lines: 0,
            reward_experience: VICTORY_EXPERIENCE,
        }
    }
}

impl GameConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the save slot name. Blank names fall back to the default slot.
    pub fn with_save_slot(mut self, slot: impl Into<String>) -> Self {
        let slot = slot.into();
        self.save_slot = if slot.trim().is_empty() {
            DEFAULT_SAVE_SLOT.to_string()
        } else {
            slot
        };
        self
    }

    /// Set the battle log capacity (0 = unlimited).
    pub fn with_max_log_lines(mut self, max: usize) -> Self {
        self.max_log_lines = max;
        self
    }

    /// Set the experience announced after a victory.
    pub fn with_reward_experience(mut self, experience: u32) -> Self {
        self.reward_experience = experience;
        self
    }

    /// The subset of settings the combat scheduler needs.
    pub fn combat_config(&self) -> CombatConfig {
        CombatConfig::default()
            .with_seed(self.seed)
            .with_max_log_lines(self.max_log_lines)
            .with_reward_experience(self.reward_experience)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.seed, 42);
        assert_eq!(cfg.save_slot, "savegame");
        assert_eq!(cfg.max_log_lines, 0);
        assert_eq!(cfg.reward_experience, 100);
    }

    #[test]
    fn builder_methods() {
        let cfg = GameConfig::default()
            .with_seed(7)
            .with_save_slot("slot2")
            .with_max_log_lines(20)
            .with_reward_experience(5);
        assert_eq!(cfg.seed, 7);
        assert_eq!(cfg.save_slot, "slot2");

        let combat = cfg.combat_config();
        assert_eq!(combat.seed, 7);
        assert_eq!(combat.max_log_lines, 20);
        assert_eq!(combat.reward_experience, 5);
    }

    #[test]
    fn blank_slot_falls_back() {
        let cfg = GameConfig::default().with_save_slot("  ");
        assert_eq!(cfg.save_slot, "savegame");
    }
}
