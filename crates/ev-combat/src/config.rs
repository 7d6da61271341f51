//! Configuration for a combat scheduler.

use crate::rules;

/// Knobs that do not change the rules of a battle.
#[derive(Debug, Clone)]
pub struct CombatConfig {
    /// RNG seed for damage spread and targeting.
    pub seed: u64,
    /// Battle log capacity (oldest lines dropped when exceeded). 0 = unlimited.
    pub max_log_lines: usize,
    /// Experience announced in the victory line.
    pub reward_experience: u32,
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            max_log_lines: 0,
            reward_experience: rules::VICTORY_EXPERIENCE,
        }
    }
}

impl CombatConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
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
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values() {
        let cfg = CombatConfig::default();
        assert_eq!(cfg.seed, 42);
        assert_eq!(cfg.max_log_lines, 0);
        assert_eq!(cfg.reward_experience, 100);
    }

    #[test]
    fn builder_chain() {
        let cfg = CombatConfig::default()
            .with_seed(9)
            .with_max_log_lines(50)
            .with_reward_experience(250);
        assert_eq!(cfg.seed, 9);
        assert_eq!(cfg.max_log_lines, 50);
        assert_eq!(cfg.reward_experience, 250);
    }
}
