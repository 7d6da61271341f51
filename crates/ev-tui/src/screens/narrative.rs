//! Story scenes.

use ev_game::NarrativeView;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

/// Draw a story scene: text on top, numbered choices below.
pub fn draw(frame: &mut Frame, area: Rect, scene: &NarrativeView) {
    let choice_rows = u16::try_from(scene.choices.len()).unwrap_or(u16::MAX);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),
            Constraint::Length(choice_rows.saturating_add(2)),
        ])
        .split(area);

    let title = if scene.background.is_empty() {
        format!(" {} ", scene.scene_id)
    } else {
        format!(" {} · {} ", scene.scene_id, scene.background)
    };
    let mut block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    if !scene.portrait.is_empty() {
        block = block.title(
            Line::styled(format!(" {} ", scene.portrait), Style::default().fg(Color::Magenta))
                .right_aligned(),
        );
    }
    let text = Paragraph::new(scene.text.as_str())
        .wrap(Wrap { trim: true })
        .block(block);
    frame.render_widget(text, chunks[0]);

    let choices: Vec<Line> = scene
        .choices
        .iter()
        .enumerate()
        .map(|(i, label)| {
            Line::from(vec![
                Span::styled(format!("[{}] ", i + 1), Style::default().fg(Color::Yellow)),
                Span::raw(label.as_str()),
            ])
        })
        .collect();
    let list =
        Paragraph::new(choices).block(Block::default().title(" Choices ").borders(Borders::ALL));
    frame.render_widget(list, chunks[1]);
}
