//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

use crate::error::PomoError;
use crate::tui::app::App;

/// Action to take after handling an event.
pub enum Action {
    /// Quit the application.
    Quit,
}

/// Handle terminal events.
///
/// Returns an action to take, or None if no action is needed. Commands
/// that only mutate app state are applied directly here.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn handle_events(app: &mut App) -> Result<Option<Action>, PomoError> {
    // Poll for events with a small timeout so the tick loop keeps moving
    if event::poll(Duration::from_millis(100))
        .map_err(|e| PomoError::Terminal(format!("Event poll failed: {e}")))?
    {
        if let Event::Key(key) =
            event::read().map_err(|e| PomoError::Terminal(format!("Event read failed: {e}")))?
        {
            if key.kind != KeyEventKind::Press {
                return Ok(None);
            }

            // Handle Ctrl+C
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                return Ok(Some(Action::Quit));
            }

            // Settings panel gets first crack at navigation keys
            if app.show_settings {
                match key.code {
                    KeyCode::Char('j') | KeyCode::Down => {
                        app.select_next_field();
                        return Ok(None);
                    }
                    KeyCode::Char('k') | KeyCode::Up => {
                        app.select_previous_field();
                        return Ok(None);
                    }
                    KeyCode::Char('h') | KeyCode::Left => {
                        app.decrease_selected();
                        return Ok(None);
                    }
                    KeyCode::Char('l') | KeyCode::Right => {
                        app.increase_selected();
                        return Ok(None);
                    }
                    KeyCode::Esc => {
                        app.toggle_settings();
                        return Ok(None);
                    }
                    _ => {}
                }
            }

            match key.code {
                // Quit
                KeyCode::Char('q') | KeyCode::Esc => return Ok(Some(Action::Quit)),

                // Timer commands
                KeyCode::Char(' ') => app.toggle_run(),
                KeyCode::Char('r') => app.reset(),

                // UI toggles
                KeyCode::Char('s') => app.toggle_settings(),
                KeyCode::Char('d') => app.toggle_theme(),
                KeyCode::Char('m') => app.toggle_sound(),

                _ => {}
            }
        }
    }

    Ok(None)
}
