//! One drawing module per game mode, plus the shared frame layout.

pub mod combat;
pub mod game_over;
pub mod menu;
pub mod narrative;

use ev_game::{Mode, View};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::keys;

/// Draw a full frame: the current view and the status bar.
pub fn draw(frame: &mut Frame, view: &View, notice: Option<&str>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    let mode = match view {
        View::MainMenu { has_save } => {
            menu::draw(frame, chunks[0], *has_save);
            Mode::MainMenu
        }
        View::Narrative(scene) => {
            narrative::draw(frame, chunks[0], scene);
            Mode::Narrative
        }
        View::Combat(battle) => {
            combat::draw(frame, chunks[0], battle);
            Mode::Combat
        }
        View::GameOver => {
            game_over::draw(frame, chunks[0]);
            Mode::GameOver
        }
    };

    let status = match notice {
        Some(text) => Paragraph::new(format!(" {text} "))
            .style(Style::default().fg(Color::Black).bg(Color::Yellow)),
        None => Paragraph::new(keys::hint(mode))
            .style(Style::default().fg(Color::Black).bg(Color::White)),
    };
    frame.render_widget(status, chunks[1]);
}

/// Create a centered rectangle as a percentage of the given area.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(rows[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use ev_game::{Game, GameConfig, Intent, MemoryStore};
    use ev_story::Story;
    use ratatui::backend::TestBackend;

    fn render(view: &View, notice: Option<&str>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| draw(frame, view, notice)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn menu_screen() {
        let out = render(&View::MainMenu { has_save: true }, None);
        assert!(out.contains("EMBERVEIL"));
        assert!(out.contains("Load game"));
        assert!(out.contains("q quit"));
    }

    #[test]
    fn narrative_screen_lists_choices() {
        let mut game = Game::new(Story::builtin(), GameConfig::default(), MemoryStore::new());
        game.handle(Intent::Start, 0.0).unwrap();
        let out = render(&game.view(), None);
        assert!(out.contains("[1] Talk to the creature"));
        assert!(out.contains("[2] Prepare for battle"));
        assert!(out.contains("intro · default_background"));
        assert!(out.contains(" player "));
    }

    #[test]
    fn combat_screen_shows_bars_and_log() {
        let mut game = Game::new(Story::builtin(), GameConfig::default(), MemoryStore::new());
        game.handle(Intent::Start, 0.0).unwrap();
        game.handle(Intent::Choose(1), 0.0).unwrap();
        let out = render(&game.view(), None);
        assert!(out.contains("Hero"));
        assert!(out.contains("Ruin Guardian"));
        assert!(out.contains("HP 100/100"));
        assert!(out.contains("Battle start!"));
        assert!(out.contains("Fireball"));
    }

    #[test]
    fn notice_replaces_hint() {
        let out = render(&View::GameOver, Some("Game saved."));
        assert!(out.contains("Game saved."));
        assert!(out.contains("GAME OVER"));
    }

    #[test]
    fn centered_rect_is_inside() {
        let area = Rect::new(0, 0, 100, 50);
        let inner = centered_rect(50, 50, area);
        assert_eq!(inner.width, 50);
        assert_eq!(inner.height, 25);
        assert!(inner.x > 0 && inner.y > 0);
    }
}
