//! Combatant stats and mutable combat state.
//!
//! Hit points and mana are clamped between zero and their maximum; the
//! only way to change them is through the damage, heal, and mana
//! operations, which report how much actually changed.

use serde::{Deserialize, Serialize};

use crate::rules::{self, StatLine};

/// One combatant: fixed stats, current hp/mp, and three cooldown timers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    /// Display name.
    pub name: String,
    /// Maximum hit points.
    pub max_hp: u32,
    /// Maximum mana.
    pub max_mp: u32,
    /// Attack power.
    pub attack: u32,
    /// Defense rating.
    pub defense: u32,
    /// Speed rating.
    pub speed: u32,
    current_hp: u32,
    current_mp: u32,
    /// Seconds until the next automatic attack.
    pub attack_cooldown: f64,
    /// Seconds until the skill is available again.
    pub skill_cooldown: f64,
    /// Seconds until any skill is available again.
    pub global_cooldown: f64,
}

impl Character {
    /// Create a character at full hp/mp with all cooldowns ready.
    pub fn new(
        name: impl Into<String>,
        max_hp: u32,
        max_mp: u32,
        attack: u32,
        defense: u32,
        speed: u32,
    ) -> Self {
        Self {
            name: name.into(),
            max_hp,
            max_mp,
            attack,
            defense,
            speed,
            current_hp: max_hp,
            current_mp: max_mp,
            attack_cooldown: 0.0,
            skill_cooldown: 0.0,
            global_cooldown: 0.0,
        }
    }

    /// Build a character from a roster stat line.
    pub fn from_stats(stats: &StatLine) -> Self {
        Self::new(
            stats.name,
            stats.max_hp,
            stats.max_mp,
            stats.attack,
            stats.defense,
            stats.speed,
        )
    }

    /// The player character.
    pub fn hero() -> Self {
        Self::from_stats(&rules::HERO)
    }

    /// The baseline enemy.
    pub fn ruin_guardian() -> Self {
        Self::from_stats(&rules::RUIN_GUARDIAN)
    }

    /// The summoned ally.
    pub fn spirit_wolf() -> Self {
        Self::from_stats(&rules::SPIRIT_WOLF)
    }

    /// Current hit points.
    pub fn hp(&self) -> u32 {
        self.current_hp
    }

    /// Current mana.
    pub fn mp(&self) -> u32 {
        self.current_mp
    }

    /// Set hit points directly, clamped to `0..=max_hp`.
    pub fn set_hp(&mut self, hp: u32) {
        self.current_hp = hp.min(self.max_hp);
    }

    /// Set mana directly, clamped to `0..=max_mp`.
    pub fn set_mp(&mut self, mp: u32) {
        self.current_mp = mp.min(self.max_mp);
    }

    /// Returns true while the character has hit points left.
    pub fn is_alive(&self) -> bool {
        self.current_hp > 0
    }

    /// Damage that a raw hit of `raw` would deal after defense.
    ///
    /// Half the defense (rounded down) is subtracted, but at least one
    /// point always lands.
    pub fn mitigate(&self, raw: u32) -> u32 {
        raw.saturating_sub(self.defense / 2).max(1)
    }

    /// Apply a raw hit. Returns the hit points actually removed.
    pub fn take_damage(&mut self, raw: u32) -> u32 {
        let applied = self.mitigate(raw).min(self.current_hp);
        self.current_hp -= applied;
        applied
    }

    /// Restore hit points up to the maximum. Returns the amount restored.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let applied = amount.min(self.max_hp - self.current_hp);
        self.current_hp += applied;
        applied
    }

    /// Spend mana if enough is available.
    ///
    /// Either the full amount is deducted and `true` returned, or nothing
    /// changes and `false` is returned.
    pub fn use_mp(&mut self, amount: u32) -> bool {
        if self.current_mp < amount {
            return false;
        }
        self.current_mp -= amount;
        true
    }

    /// Seconds between automatic attacks: faster characters attack more
    /// often, down to a fixed floor.
    pub fn attack_interval(&self) -> f64 {
        (rules::BASE_ATTACK_INTERVAL - f64::from(self.speed) * rules::INTERVAL_PER_SPEED)
            .max(rules::MIN_ATTACK_INTERVAL)
    }

    /// Count every cooldown down by `elapsed` seconds, stopping at zero.
    pub fn decay_cooldowns(&mut self, elapsed: f64) {
        self.attack_cooldown = (self.attack_cooldown - elapsed).max(0.0);
        self.skill_cooldown = (self.skill_cooldown - elapsed).max(0.0);
        self.global_cooldown = (self.global_cooldown - elapsed).max(0.0);
    }

    /// Refill hp and mp and clear all cooldowns.
    pub fn restore(&mut self) {
        self.current_hp = self.max_hp;
        self.current_mp = self.max_mp;
        self.attack_cooldown = 0.0;
        self.skill_cooldown = 0.0;
        self.global_cooldown = 0.0;
    }

    /// Re-establish a positive max hp, the hp/mp bounds, and non-negative
    /// cooldowns.
    ///
    /// Used after deserializing a character from outside data.
    pub fn normalize(&mut self) {
        self.max_hp = self.max_hp.max(1);
        self.current_hp = self.current_hp.min(self.max_hp);
        self.current_mp = self.current_mp.min(self.max_mp);
        for cooldown in [
            &mut self.attack_cooldown,
            &mut self.skill_cooldown,
            &mut self.global_cooldown,
        ] {
            if !cooldown.is_finite() || *cooldown < 0.0 {
                *cooldown = 0.0;
            }
        }
    }

    /// Fraction of hit points remaining (0.0 to 1.0).
    pub fn hp_fraction(&self) -> f64 {
        fraction(self.current_hp, self.max_hp)
    }

    /// Fraction of mana remaining (0.0 to 1.0). A character without a
    /// mana pool reports 1.0.
    pub fn mp_fraction(&self) -> f64 {
        fraction(self.current_mp, self.max_mp)
    }
}

fn fraction(current: u32, max: u32) -> f64 {
    if max == 0 {
        return 1.0;
    }
    f64::from(current) / f64::from(max)
}

impl std::fmt::Display for Character {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} HP {}/{} MP {}/{}",
            self.name, self.current_hp, self.max_hp, self.current_mp, self.max_mp
        )
    }
}
