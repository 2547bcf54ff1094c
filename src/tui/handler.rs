//! Event handler for the TUI
//!
//! Routes keyboard events to the focused input or to form navigation, and
//! applies background results and ticks to the application state.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::App;
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => {
            app.tick();
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
        Event::Submission { attempt, result } => {
            app.submission_finished(attempt, result);
            Ok(())
        }
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return handle_control_key(app, key);
    }

    match key.code {
        KeyCode::Tab => app.focus_next(),
        KeyCode::BackTab => app.focus_prev(),
        KeyCode::Enter => app.advance(),
        KeyCode::Esc => app.back(),

        // Choice lists cycle, text inputs move between fields
        KeyCode::Up if app.focused_is_choice() => app.cycle_choice(false),
        KeyCode::Down if app.focused_is_choice() => app.cycle_choice(true),
        KeyCode::Up => app.focus_prev(),
        KeyCode::Down => app.focus_next(),
        KeyCode::Left if app.focused_is_choice() => app.cycle_choice(false),
        KeyCode::Right if app.focused_is_choice() => app.cycle_choice(true),

        // Text editing
        KeyCode::Left => app.edit(|input| input.move_left()),
        KeyCode::Right => app.edit(|input| input.move_right()),
        KeyCode::Home => app.edit(|input| input.move_start()),
        KeyCode::End => app.edit(|input| input.move_end()),
        KeyCode::Backspace => app.edit(|input| input.backspace()),
        KeyCode::Delete => app.edit(|input| input.delete()),
        KeyCode::Char(c) => app.edit(|input| input.insert(c)),
        _ => {}
    }

    Ok(())
}

/// Handle Ctrl+<key> shortcuts
fn handle_control_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('c') => app.quit(),
        KeyCode::Char('p') => app.toggle_password(),
        KeyCode::Char('d') => app.notifications.dismiss_current(),
        _ => {}
    }
    Ok(())
}
