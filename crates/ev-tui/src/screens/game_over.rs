//! Defeat screen.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use super::centered_rect;

/// Draw the game over screen.
pub fn draw(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from("GAME OVER").style(Style::default().fg(Color::Red).bold()),
        Line::from(""),
        Line::from("You have fallen in the ruin."),
        Line::from(""),
        Line::from("[r] Return to title   [q] Quit"),
    ];
    let panel = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(panel, centered_rect(60, 40, area));
}
