use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
    Terminal,
};
use std::io;
use std::time::Duration;

use dinwatch_foundation::AppError;

/// Full-screen countdown display. Raw mode and the alternate screen are
/// claimed on construction and restored on drop, so a failing loop still
/// leaves the terminal usable.
pub struct TerminalDisplay {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalDisplay {
    pub fn new() -> Result<Self, AppError> {
        enable_raw_mode().map_err(render_err)?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(render_err)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend).map_err(render_err)?;
        Ok(Self { terminal })
    }

    /// Render the countdown string centered on screen.
    pub fn draw(&mut self, text: &str) -> Result<(), AppError> {
        self.terminal
            .draw(|frame| {
                let rows = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([
                        Constraint::Fill(1),
                        Constraint::Length(1),
                        Constraint::Fill(1),
                    ])
                    .split(frame.area());

                let line = Paragraph::new(text.to_string())
                    .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
                    .alignment(Alignment::Center);
                frame.render_widget(line, rows[1]);
            })
            .map_err(render_err)?;
        Ok(())
    }

    /// Drain all pending terminal events without blocking. Returns true
    /// when a quit key (q, Esc, Ctrl-C) was seen.
    pub fn drain_quit_events(&mut self) -> Result<bool, AppError> {
        let mut quit = false;
        while event::poll(Duration::ZERO).map_err(render_err)? {
            if let Event::Key(key) = event::read().map_err(render_err)? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => quit = true,
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        quit = true;
                    }
                    _ => {}
                }
            }
        }
        Ok(quit)
    }
}

impl Drop for TerminalDisplay {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

fn render_err(err: io::Error) -> AppError {
    AppError::Render(err.to_string())
}
