//! Terminal front end for Emberveil.
//!
//! Draws the [`ev_game::View`] of each frame with ratatui and forwards key
//! presses to the game as intents.

pub mod app;
pub mod keys;
pub mod screens;
pub mod terminal;
