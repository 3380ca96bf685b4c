//! Tui command handler

use std::io;

use crossterm::{
    cursor::Show,
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use keypad_calc::tui::{render, CalculatorApp, InputHandler};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::Rect,
    Terminal,
};
use tracing::{debug, info};

use crate::error::{CliError, CliResult};

/// Runs a restore action when dropped, so every exit path undoes setup
pub struct TerminalGuard<F: FnMut()> {
    restore: F,
}

impl<F: FnMut()> TerminalGuard<F> {
    /// Arms the guard with the action to run on drop
    pub const fn new(restore: F) -> Self {
        Self { restore }
    }
}

impl<F: FnMut()> std::fmt::Debug for TerminalGuard<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TerminalGuard").finish_non_exhaustive()
    }
}

impl<F: FnMut()> Drop for TerminalGuard<F> {
    fn drop(&mut self) {
        (self.restore)();
    }
}

/// Leaves the alternate screen and raw mode; errors are ignored since this
/// runs while unwinding from other failures
fn restore_terminal() {
    let _ = execute!(
        io::stdout(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        Show
    );
    let _ = disable_raw_mode();
}

/// Execute the tui command
pub fn execute_tui() -> CliResult<()> {
    enable_raw_mode().map_err(|e| CliError::terminal(format!("cannot enable raw mode: {e}")))?;
    let _guard = TerminalGuard::new(restore_terminal);

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .map_err(|e| CliError::terminal(format!("cannot enter alternate screen: {e}")))?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    info!("keypad opened");
    let mut app = CalculatorApp::new();
    let result = run_app(&mut terminal, &mut app, event::read);

    info!(display = app.display(), "keypad closed");
    result
}

/// Draws and dispatches events until the app asks to quit
pub fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut CalculatorApp,
    mut next_event: impl FnMut() -> io::Result<Event>,
) -> CliResult<()> {
    let input_handler = InputHandler::new();

    while !app.should_quit() {
        let mut area = Rect::default();
        let view: &CalculatorApp = app;
        terminal.draw(|frame| {
            area = frame.area();
            render(view, frame);
        })?;

        let action = input_handler.handle_event(&next_event()?);
        if let Some(output) = app.handle_action(action, area) {
            debug!(display = %output.display, "display updated");
        }
    }

    Ok(())
}
