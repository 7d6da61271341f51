//! Fixed combat rules: costs, cooldowns, damage spreads, and the roster.
//!
//! These values are part of the game's design and are intentionally not
//! configurable.

/// Mana cost of the Fireball skill.
pub const FIREBALL_COST: u32 = 10;
/// Seconds before Fireball can be cast again.
pub const FIREBALL_COOLDOWN: f64 = 5.0;
/// Shared cooldown started by any skill cast.
pub const GLOBAL_COOLDOWN: f64 = 1.5;
/// Damage spread applied to Fireball (`attack * 2 * factor`).
pub const FIREBALL_SPREAD: (f64, f64) = (0.9, 1.1);

/// Mana cost of summoning the ally.
pub const SUMMON_COST: u32 = 20;

/// Damage spread applied to automatic attacks (`attack * factor`).
pub const ATTACK_SPREAD: (f64, f64) = (0.8, 1.2);
/// Probability that the enemy strikes a living ally instead of the player.
pub const ALLY_TARGET_CHANCE: f64 = 0.5;

/// Attack interval of a character with zero speed.
pub const BASE_ATTACK_INTERVAL: f64 = 2.0;
/// Interval reduction per point of speed.
pub const INTERVAL_PER_SPEED: f64 = 0.1;
/// Shortest possible attack interval.
pub const MIN_ATTACK_INTERVAL: f64 = 0.5;

/// Experience announced after a victory.
pub const VICTORY_EXPERIENCE: u32 = 100;

/// Stat line used to build a roster character.
#[derive(Debug, Clone, Copy)]
pub struct StatLine {
    /// Display name.
    pub name: &'static str,
    /// Maximum hit points.
    pub max_hp: u32,
    /// Maximum mana.
    pub max_mp: u32,
    /// Attack power.
    pub attack: u32,
    /// Defense (half of it, rounded down, is subtracted from each hit).
    pub defense: u32,
    /// Speed (shortens the attack interval).
    pub speed: u32,
}

/// The player character.
pub const HERO: StatLine = StatLine {
    name: "Hero",
    max_hp: 100,
    max_mp: 50,
    attack: 10,
    defense: 5,
    speed: 5,
};

/// The baseline enemy met in every battle.
pub const RUIN_GUARDIAN: StatLine = StatLine {
    name: "Ruin Guardian",
    max_hp: 80,
    max_mp: 0,
    attack: 8,
    defense: 4,
    speed: 4,
};

/// The summoned ally.
pub const SPIRIT_WOLF: StatLine = StatLine {
    name: "Spirit Wolf",
    max_hp: 60,
    max_mp: 0,
    attack: 7,
    defense: 3,
    speed: 6,
};
