//! Terminal setup and teardown
//!
//! This module handles initializing and restoring the terminal state,
//! including setting up the panic hook to restore the terminal on crash.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;
use std::sync::Arc;
use tokio::runtime::Handle;

use crate::config::Settings;
use crate::form::FormController;
use crate::submission::Submitter;

use super::app::App;
use super::event::EventHandler;
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    // Set up panic hook to restore terminal on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Restore terminal before printing panic info
        let _ = restore_terminal_impl();
        original_hook(panic_info);
    }));

    // Enable raw mode and enter alternate screen
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    // Create terminal
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    restore_terminal_impl()?;
    Ok(())
}

/// Internal implementation of terminal restoration
fn restore_terminal_impl() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the registration form until the user quits
///
/// Submissions are spawned on `runtime`; the UI thread never blocks on the
/// network.
pub fn run_tui(settings: &Settings, submitter: Arc<dyn Submitter>, runtime: Handle) -> Result<()> {
    let form = FormController::new(settings)?;

    // Create event handler
    let events = EventHandler::default();
    let mut app = App::new(form, submitter, runtime, events.sender());

    // Initialize terminal
    let mut terminal = init_terminal()?;
    tracing::info!("registration form opened");

    let result = event_loop(&mut terminal, &mut app, &events);

    // Restore terminal
    restore_terminal()?;
    tracing::info!("registration form closed");

    result
}

fn event_loop(terminal: &mut Tui, app: &mut App, events: &EventHandler) -> Result<()> {
    loop {
        // Render
        terminal.draw(|frame| {
            super::views::render(frame, app);
        })?;

        // Handle events
        handle_event(app, events.next()?)?;

        // Check if we should quit
        if app.should_quit {
            return Ok(());
        }
    }
}
