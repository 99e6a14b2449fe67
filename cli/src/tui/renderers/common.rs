use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::app::{App, Focus, View};
use crate::tui::widgets::footer::FooterBar;
use crate::tui::widgets::loading::LoadingWidget;
use crate::tui::widgets::navigation::NavigationBar;

/// Render loading screen
pub fn render_loading(frame: &mut Frame, area: Rect, _app: &App) {
    LoadingWidget::new("Loading modules")
        .with_detail("Waiting for the workshop backend...")
        .render(frame, area);
}

pub fn render_navigation(frame: &mut Frame, area: Rect, app: &App) {
    NavigationBar::new(&app.current_view, "Workshop Console").render(frame, area);
}

/// Render header with current view info
pub fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let state = &app.list_state;
    let title = match app.current_view {
        View::Modules => "Modules",
        View::Config => "Workshop configuration",
    };

    let mut content = vec![Span::styled(
        title,
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )];

    if app.current_view == View::Modules {
        content.push(Span::styled(
            format!(" • {} of {} shown", app.visible_modules().len(), state.modules().len()),
            Style::default().fg(Color::DarkGray),
        ));
        let allowed = state
            .global_config()
            .and_then(|c| c.allowed_modules_count())
            .map(|n| n.to_string())
            .unwrap_or_else(|| "∞".to_string());
        let deployed_style = if state.max_modules_reached() {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::Green)
        };
        content.push(Span::styled(
            format!(" • deployed {}/{}", state.deployed_count(), allowed),
            deployed_style,
        ));
    }

    if let Some(user) = state.global_config().and_then(|c| c.user()) {
        content.push(Span::styled(
            format!(" • {}", user),
            Style::default().fg(Color::Cyan),
        ));
    }

    let header = Paragraph::new(Line::from(content)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta)),
    );

    frame.render_widget(header, area);
}

/// Render footer with keyboard shortcuts
pub fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let actions = footer_actions(app);
    let status = if !app.is_networked() {
        "offline".to_string()
    } else if app.in_flight.is_empty() {
        format!("refresh {}s", app.refresh_interval().as_secs())
    } else {
        format!("{} pending", app.in_flight.len())
    };

    FooterBar::new(actions).with_status(status).render(frame, area);
}

fn footer_actions(app: &App) -> &'static [(&'static str, &'static str)] {
    if app.modal_state.is_any_modal_showing() {
        return &[("y", "Confirm"), ("n/ESC", "Cancel")];
    }

    match (&app.current_view, &app.focus) {
        (View::Modules, Focus::Modules) => &[
            ("↑↓", "Navigate"),
            ("d", "Deploy"),
            ("u", "Undeploy"),
            ("o", "Deployed only"),
            ("Tab", "Tags"),
            ("r", "Refresh"),
            ("2", "Config"),
            ("q", "Quit"),
        ],
        (View::Modules, Focus::Tags) => &[
            ("←→", "Select tag"),
            ("Space", "Toggle"),
            ("o", "Deployed only"),
            ("Tab/ESC", "Modules"),
            ("q", "Quit"),
        ],
        (View::Config, _) => &[("1", "Modules"), ("r", "Refresh"), ("q", "Quit")],
    }
}
