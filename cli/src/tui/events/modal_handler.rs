use anyhow::Result;
use crossterm::event::KeyCode;

use crate::tui::app::App;

pub struct ModalHandler;

impl ModalHandler {
    pub fn handle_confirmation_key(app: &mut App, key: KeyCode) -> Result<()> {
        match key {
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                app.confirm_action();
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                app.close_confirmation();
            }
            _ => {}
        }
        Ok(())
    }
}
