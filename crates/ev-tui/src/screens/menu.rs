//! Title screen.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use super::centered_rect;

/// Draw the main menu.
pub fn draw(frame: &mut Frame, area: Rect, has_save: bool) {
    let box_area = centered_rect(50, 50, area);

    let load_style = if has_save {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let lines = vec![
        Line::from("EMBERVEIL").style(Style::default().fg(Color::LightRed).bold()),
        Line::from(""),
        Line::from("[Enter] New game"),
        Line::from("[l] Load game").style(load_style),
        Line::from("[q] Quit"),
    ];

    let menu = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red)),
    );
    frame.render_widget(menu, box_area);
}
