//! The battle screen: combatant bars, the battle log, and the action bar.

use ev_combat::rules::{FIREBALL_COST, SUMMON_COST};
use ev_game::{CombatView, CombatantView};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Gauge, Paragraph};

/// Draw a battle.
pub fn draw(frame: &mut Frame, area: Rect, battle: &CombatView) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Combatants
            Constraint::Min(3),    // Log
            Constraint::Length(3), // Actions
        ])
        .split(area);

    draw_combatants(frame, chunks[0], battle);
    draw_log(frame, chunks[1], &battle.log);
    draw_actions(frame, chunks[2], battle);
}

fn draw_combatants(frame: &mut Frame, area: Rect, battle: &CombatView) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    draw_combatant(frame, columns[0], &battle.player, Color::Green);
    match &battle.ally {
        Some(ally) => draw_combatant(frame, columns[1], ally, Color::Cyan),
        None => {
            let empty = Paragraph::new("No ally")
                .style(Style::default().fg(Color::DarkGray))
                .block(Block::default().borders(Borders::ALL));
            frame.render_widget(empty, columns[1]);
        }
    }
    draw_combatant(frame, columns[2], &battle.enemy, Color::Red);
}

fn draw_combatant(frame: &mut Frame, area: Rect, who: &CombatantView, border: Color) {
    let title = if who.alive {
        format!(" {} ", who.name)
    } else {
        format!(" {} (down) ", who.name)
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 {
        return;
    }

    let hp_row = Rect::new(inner.x, inner.y, inner.width, 1);
    frame.render_widget(
        bar(
            format!("HP {}/{}", who.hp, who.max_hp),
            who.hp_percent,
            hp_color(who.hp_percent),
        ),
        hp_row,
    );

    if inner.height > 1 && who.max_mp > 0 {
        let mp_row = Rect::new(inner.x, inner.y + 1, inner.width, 1);
        frame.render_widget(
            bar(format!("MP {}/{}", who.mp, who.max_mp), who.mp_percent, Color::Blue),
            mp_row,
        );
    }
}

fn bar(label: String, percent: u16, color: Color) -> Gauge<'static> {
    Gauge::default()
        .gauge_style(Style::default().fg(color).bg(Color::DarkGray))
        .percent(percent.min(100))
        .label(Span::styled(label, Style::default().fg(Color::White)))
}

fn hp_color(percent: u16) -> Color {
    if percent < 30 {
        Color::Red
    } else if percent < 60 {
        Color::Yellow
    } else {
        Color::Green
    }
}

fn draw_log(frame: &mut Frame, area: Rect, log: &[String]) {
    let block = Block::default().title(" Battle Log ").borders(Borders::ALL);
    let inner = block.inner(area);
    let visible = usize::from(inner.height);
    let start = log.len().saturating_sub(visible);
    let lines: Vec<Line> = log[start..].iter().map(|l| Line::from(l.as_str())).collect();
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_actions(frame: &mut Frame, area: Rect, battle: &CombatView) {
    let cooling_down = battle.active && !battle.skill_enabled && battle.skill_cooldown > 0.0;
    let fireball = if cooling_down {
        format!("[f] Fireball ({:.1}s)", battle.skill_cooldown)
    } else {
        format!("[f] Fireball ({FIREBALL_COST} MP)")
    };
    let summon = format!("[w] Summon Spirit Wolf ({SUMMON_COST} MP)");

    let line = Line::from(vec![
        Span::styled(fireball, action_style(battle.skill_enabled)),
        Span::raw("    "),
        Span::styled(summon, action_style(battle.summon_enabled)),
    ]);
    let actions =
        Paragraph::new(line).block(Block::default().title(" Actions ").borders(Borders::ALL));
    frame.render_widget(actions, area);
}

fn action_style(enabled: bool) -> Style {
    if enabled {
        Style::default().fg(Color::Yellow).bold()
    } else {
        Style::default().fg(Color::DarkGray)
    }
}
