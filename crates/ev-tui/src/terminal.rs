//! Terminal setup, teardown, and the frame loop.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::*;

use crate::app::TuiApp;
use crate::screens;

/// How long to wait for input before running the next frame.
const FRAME_POLL: Duration = Duration::from_millis(16);

/// Launch the terminal UI and run until the player quits.
pub fn run(mut app: TuiApp) -> Result<(), String> {
    enable_raw_mode().map_err(|e| format!("terminal error: {e}"))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(|e| format!("terminal error: {e}"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(|e| format!("terminal error: {e}"))?;

    let result = run_loop(&mut terminal, &mut app);

    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    result
}

/// Draw, poll input for one frame, then advance the game.
fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut TuiApp,
) -> Result<(), String> {
    loop {
        let view = app.view();
        let notice = app.notice().map(str::to_string);
        terminal
            .draw(|frame| screens::draw(frame, &view, notice.as_deref()))
            .map_err(|e| format!("draw error: {e}"))?;

        if app.should_quit() {
            return Ok(());
        }

        if event::poll(FRAME_POLL).map_err(|e| format!("event error: {e}"))? {
            let event = event::read().map_err(|e| format!("event error: {e}"))?;
            if let Event::Key(key) = event {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }

        app.update();
    }
}
