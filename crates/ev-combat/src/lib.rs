//! Real-time combat engine for Emberveil.
//!
//! A battle is a fixed cast of combatants (the player, one enemy and an
//! optional summoned ally) driven by per-character cooldowns. The
//! [`CombatScheduler`] owns the cast and exposes a plain `tick` function
//! that the caller invokes at display-refresh cadence with the current
//! time, so the engine itself never touches a real timer.

pub mod character;
pub mod clock;
pub mod config;
pub mod error;
pub mod log;
pub mod roll;
pub mod rules;
pub mod scheduler;

pub use character::Character;
pub use clock::{BattleClock, ManualTime, MonotonicTime, TimeSource};
pub use config::CombatConfig;
pub use error::{CombatError, CombatResult};
pub use log::{BattleLog, LogKind, LogLine};
pub use roll::{FixedRolls, RollSource, SeededRolls};
pub use scheduler::{BattleOutcome, BattleState, Combatant, CombatScheduler};
