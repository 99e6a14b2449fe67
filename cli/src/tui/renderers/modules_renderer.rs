use console_defs::Module;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::{App, Focus};
use crate::tui::widgets::{AlertBanner, StyledRow, TableWidget, TagBar};

const HEADER: [&str; 5] = ["Module", "Tags", "Deployed", "Status", "Health"];
const WIDTHS: [u16; 5] = [28, 27, 15, 15, 15];

/// Render the modules list view
pub fn render_modules(frame: &mut Frame, area: Rect, app: &App) {
    let state = &app.list_state;
    let alert_height = if state.active_alert().is_some() { 3 } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(alert_height),
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(5),
        ])
        .split(area);

    if let Some(alert) = state.active_alert() {
        AlertBanner::new(alert).render(frame, chunks[0]);
    }

    let mut tags = TagBar::new(state.tag_filters().as_slice(), state.show_only_deployed());
    if app.focus == Focus::Tags {
        tags = tags.with_cursor(app.tag_cursor);
    }
    tags.render(frame, chunks[1]);

    let modules = app.visible_modules();
    if modules.is_empty() {
        render_empty_state(frame, chunks[2], app);
    } else {
        let rows = modules.iter().map(|m| module_row(m, app)).collect();
        TableWidget::new("Modules", &HEADER, &WIDTHS)
            .with_rows(rows)
            .with_selected(app.selected_index)
            .focused(app.focus == Focus::Modules)
            .render(frame, chunks[2]);
    }

    render_description(frame, chunks[3], app);
}

fn module_row(module: &Module, app: &App) -> StyledRow {
    let name = if app.in_flight.contains(&module.application) {
        format!("⏳ {}", module.name)
    } else {
        module.name.clone()
    };
    let deployed = if module.deleting {
        "deleting"
    } else if module.deployed {
        "yes"
    } else {
        "no"
    };

    let style = if module.deleting {
        Style::default().fg(Color::Red)
    } else if module.deployed {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };

    StyledRow::new(vec![
        name,
        module.primary_tags.join(", "),
        deployed.to_string(),
        dash_if_empty(&module.status),
        dash_if_empty(&module.health),
    ])
    .style(style)
}

fn dash_if_empty(value: &str) -> String {
    if value.is_empty() {
        "-".to_string()
    } else {
        value.to_string()
    }
}

fn render_description(frame: &mut Frame, area: Rect, app: &App) {
    let Some(module) = app.selected_module() else {
        frame.render_widget(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
            area,
        );
        return;
    };

    let mut lines = vec![Line::from(Span::styled(
        module.description.as_str(),
        Style::default().fg(Color::White),
    ))];
    if !module.secondary_tags.is_empty() {
        lines.push(Line::from(Span::styled(
            module.secondary_tags.join(" · "),
            Style::default().fg(Color::DarkGray),
        )));
    }
    if module.is_default {
        lines.push(Line::from(Span::styled(
            "Deployed by default, cannot be undeployed",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let description = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(Span::styled(
                    format!(" {} ", module.application),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(description, area);
}

fn render_empty_state(frame: &mut Frame, area: Rect, app: &App) {
    let message_text = if app.list_state.modules().is_empty() {
        "No modules available"
    } else if app.list_state.show_only_deployed() {
        "No modules deployed yet"
    } else {
        "No modules match the selected tags"
    };

    let message = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            message_text,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press 'r' to reload",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow)),
    );
    frame.render_widget(message, area);
}
