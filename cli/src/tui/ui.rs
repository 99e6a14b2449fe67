use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use super::app::{App, View};
use super::renderers::{
    render_config, render_footer, render_header, render_loading, render_modules,
    render_navigation,
};
use super::widgets::ConfirmationModal;

pub fn render(frame: &mut Frame, app: &mut App) {
    // Filters may have changed since the last frame
    app.refresh_visible();
    let app: &App = app;
    let size = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![
            Constraint::Length(3), // Navigation menu
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Actions footer
        ])
        .split(size);

    render_navigation(frame, chunks[0], app);
    render_header(frame, chunks[1], app);

    if app.is_loading() {
        render_loading(frame, chunks[2], app);
    } else {
        match app.current_view {
            View::Modules => render_modules(frame, chunks[2], app),
            View::Config => render_config(frame, chunks[2], app),
        }
    }

    render_footer(frame, chunks[3], app);

    if app.modal_state.showing_confirmation {
        ConfirmationModal::new(&app.modal_state.confirmation_message).render(frame, size);
    }
}
