//! Game flow for Emberveil: the mode controller that ties the story walker
//! and the combat scheduler together, the save slot, and the per-frame
//! views consumed by a front end.
//!
//! A front end owns one [`Game`], forwards player input as [`Intent`]s,
//! calls [`Game::update`] every frame with the current time, and renders
//! whatever [`Game::view`] returns.

pub mod config;
pub mod error;
pub mod game;
pub mod mode;
pub mod save;
pub mod view;

pub use config::GameConfig;
pub use error::{GameError, GameResult};
pub use game::{Game, POST_BATTLE_DELAY, PendingTransition};
pub use mode::{Intent, Mode};
pub use save::{JsonFileStore, MemoryStore, SaveStore, Snapshot};
pub use view::{CombatView, CombatantView, NarrativeView, View};
