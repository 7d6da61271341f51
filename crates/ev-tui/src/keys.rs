//! Key bindings per mode.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ev_game::{Intent, Mode};

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Leave immediately, whatever the mode.
    ForceQuit,
    /// Forward an intent to the game.
    Intent(Intent),
}

/// Map a key press to an action in `mode`. Unbound keys map to `None`.
pub fn action_for(mode: Mode, key: KeyEvent) -> Option<KeyAction> {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(KeyAction::ForceQuit);
    }

    let intent = match (mode, key.code) {
        (Mode::MainMenu, KeyCode::Enter | KeyCode::Char('s')) => Intent::Start,
        (Mode::MainMenu, KeyCode::Char('l')) => Intent::Load,
        (Mode::MainMenu | Mode::GameOver, KeyCode::Char('q')) => Intent::Quit,
        (Mode::Narrative, KeyCode::Char('s')) => Intent::Save,
        (Mode::Narrative, KeyCode::Char(c)) => Intent::Choose(choice_index(c)?),
        (Mode::Combat, KeyCode::Char('f' | '1')) => Intent::Skill,
        (Mode::Combat, KeyCode::Char('w' | '2')) => Intent::Summon,
        (Mode::GameOver, KeyCode::Enter | KeyCode::Char('r')) => Intent::Restart,
        _ => return None,
    };
    Some(KeyAction::Intent(intent))
}

/// `'1'..='9'` to a 0-based choice index.
fn choice_index(c: char) -> Option<usize> {
    match c.to_digit(10) {
        Some(d @ 1..=9) => Some(d as usize - 1),
        _ => None,
    }
}

/// One-line key reminder for the status bar.
pub fn hint(mode: Mode) -> &'static str {
    match mode {
        Mode::MainMenu => " Enter/s start | l load | q quit ",
        Mode::Narrative => " 1-9 choose | s save | Ctrl+C quit ",
        Mode::Combat => " f/1 Fireball | w/2 Summon | Ctrl+C quit ",
        Mode::GameOver => " r restart | q quit ",
    }
}
