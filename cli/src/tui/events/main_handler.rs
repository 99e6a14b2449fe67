use anyhow::Result;
use crossterm::event::KeyCode;

use crate::tui::app::{App, Focus, PendingAction, View};

pub struct MainHandler;

impl MainHandler {
    pub fn handle_key(app: &mut App, key: KeyCode) -> Result<()> {
        match key {
            KeyCode::Char('q') => {
                app.should_quit = true;
            }
            KeyCode::Char('1') => {
                app.change_view(View::Modules);
            }
            KeyCode::Char('2') => {
                app.change_view(View::Config);
            }
            KeyCode::Char('r') => {
                app.schedule_action(PendingAction::Refresh);
            }
            KeyCode::Char('x') => {
                app.dismiss_alert();
            }
            _ if app.current_view == View::Modules => {
                Self::handle_modules_key(app, key);
            }
            _ => {}
        }
        Ok(())
    }

    fn handle_modules_key(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Tab => {
                app.toggle_focus();
            }
            KeyCode::Char('o') => {
                app.toggle_show_only_deployed();
            }
            KeyCode::Char('d') => {
                app.request_deploy();
            }
            KeyCode::Char('u') => {
                app.request_undeploy();
            }
            _ => match app.focus {
                Focus::Modules => Self::handle_list_key(app, key),
                Focus::Tags => Self::handle_tags_key(app, key),
            },
        }
    }

    fn handle_list_key(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Up | KeyCode::Char('k') => {
                app.move_up();
            }
            KeyCode::Down | KeyCode::Char('j') => {
                app.move_down();
            }
            _ => {}
        }
    }

    fn handle_tags_key(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Left | KeyCode::Char('h') => {
                app.tag_left();
            }
            KeyCode::Right | KeyCode::Char('l') => {
                app.tag_right();
            }
            KeyCode::Char(' ') | KeyCode::Enter => {
                app.toggle_selected_tag();
            }
            KeyCode::Esc => {
                app.focus = Focus::Modules;
            }
            _ => {}
        }
    }
}
