//! Top-level application state: the game, the clock, and the status line.

use crossterm::event::KeyEvent;
use ev_combat::{MonotonicTime, TimeSource};
use ev_game::{Game, View};

use crate::keys::{self, KeyAction};

/// Seconds a notice stays in the status bar.
pub const NOTICE_SECONDS: f64 = 3.0;

/// Main application state for the terminal front end.
#[derive(Debug)]
pub struct TuiApp {
    /// The game being played.
    pub game: Game,
    /// Whether the app should quit regardless of game state.
    pub force_quit: bool,
    time: MonotonicTime,
    notice: Option<(String, f64)>,
}

impl TuiApp {
    /// Wrap a game, starting the clock now.
    pub fn new(game: Game) -> Self {
        Self {
            game,
            force_quit: false,
            time: MonotonicTime::new(),
            notice: None,
        }
    }

    /// Seconds since the app started.
    pub fn now(&self) -> f64 {
        self.time.now()
    }

    /// Whether the main loop should stop.
    pub fn should_quit(&self) -> bool {
        self.force_quit || self.game.should_quit()
    }

    /// Apply a key press at the current time.
    pub fn handle_key(&mut self, key: KeyEvent) {
        let now = self.now();
        self.handle_key_at(key, now);
    }

    /// Apply a key press at time `now`.
    pub fn handle_key_at(&mut self, key: KeyEvent, now: f64) {
        match keys::action_for(self.game.mode(), key) {
            Some(KeyAction::ForceQuit) => self.force_quit = true,
            Some(KeyAction::Intent(intent)) => {
                self.game.dispatch(intent, now);
                self.collect_notices(now);
            }
            None => {}
        }
    }

    /// Advance the game to the current time. Call once per frame.
    pub fn update(&mut self) {
        let now = self.now();
        self.update_at(now);
    }

    /// Advance the game to time `now`.
    pub fn update_at(&mut self, now: f64) {
        if let Err(err) = self.game.update(now) {
            tracing::warn!(%err, "update failed");
            self.notice = Some((err.to_string(), now));
        }
        self.collect_notices(now);
        if self
            .notice
            .as_ref()
            .is_some_and(|(_, shown_at)| now - shown_at >= NOTICE_SECONDS)
        {
            self.notice = None;
        }
    }

    /// The notice currently on screen, if any.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_ref().map(|(text, _)| text.as_str())
    }

    /// What to draw this frame.
    pub fn view(&self) -> View {
        self.game.view()
    }

    fn collect_notices(&mut self, now: f64) {
        if let Some(latest) = self.game.take_notices().pop() {
            self.notice = Some((latest, now));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};
    use ev_game::{GameConfig, MemoryStore, Mode};
    use ev_story::Story;

    fn app() -> TuiApp {
        TuiApp::new(Game::new(
            Story::builtin(),
            GameConfig::default(),
            MemoryStore::new(),
        ))
    }

    fn press(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
    }

    #[test]
    fn keys_drive_the_game() {
        let mut app = app();
        app.handle_key_at(press('s'), 0.0);
        assert_eq!(app.game.mode(), Mode::Narrative);
        app.handle_key_at(press('2'), 0.0);
        assert_eq!(app.game.mode(), Mode::Combat);
        app.handle_key_at(press('f'), 0.0);
        assert_eq!(app.game.combat().player().mp(), 40);
    }

    #[test]
    fn notices_expire() {
        let mut app = app();
        app.handle_key_at(press('l'), 1.0);
        assert_eq!(app.notice(), Some("No save found."));
        app.update_at(2.0);
        assert_eq!(app.notice(), Some("No save found."));
        app.update_at(4.0);
        assert_eq!(app.notice(), None);
    }

    #[test]
    fn quit_paths() {
        let mut app = app();
        app.handle_key_at(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL), 0.0);
        assert!(app.should_quit());

        let mut app = self::app();
        app.handle_key_at(press('q'), 0.0);
        assert!(app.should_quit());
    }
}
