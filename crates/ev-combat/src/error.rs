//! Error types for the combat engine.
//!
//! None of these are fatal: every variant describes an action that was
//! refused and left the battle untouched. The `Display` text doubles as the
//! battle log line shown to the player.

/// Reasons a player action can be refused.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CombatError {
    /// The battle is not running (not started, or already resolved).
    #[error("The battle is not active.")]
    NotActive,

    /// The skill or the global cooldown has not run out yet.
    #[error("Not ready yet ({remaining:.1}s).")]
    OnCooldown {
        /// Seconds until the action becomes available.
        remaining: f64,
    },

    /// The caster does not have enough mana.
    #[error("Not enough mana (need {needed}, have {available}).")]
    InsufficientMana {
        /// Mana the action costs.
        needed: u32,
        /// Mana the caster currently has.
        available: u32,
    },

    /// An ally has already been summoned this battle.
    #[error("An ally has already been summoned!")]
    AllyPresent,
}

/// Convenience result type for combat operations.
pub type CombatResult<T> = Result<T, CombatError>;
