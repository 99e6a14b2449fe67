use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use std::time::Duration;

use super::app::App;
use super::events::{MainHandler, ModalHandler};

pub async fn handle_events(app: &mut App) -> Result<()> {
    if event::poll(Duration::from_millis(100))? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                // Handle Ctrl+C to quit
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                    app.should_quit = true;
                    return Ok(());
                }
                handle_key_event(app, key.code)?;
            }
        }
    }
    Ok(())
}

pub fn handle_key_event(app: &mut App, key: KeyCode) -> Result<()> {
    // Confirmation modal has highest priority
    if app.modal_state.is_any_modal_showing() {
        return ModalHandler::handle_confirmation_key(app, key);
    }

    MainHandler::handle_key(app, key)
}
