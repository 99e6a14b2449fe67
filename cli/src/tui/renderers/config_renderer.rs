use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::app::App;
use crate::tui::widgets::{StyledRow, TableWidget};

const HEADER: [&str; 2] = ["Key", "Value"];
const WIDTHS: [u16; 2] = [35, 65];

/// Global workshop configuration, with secrets masked.
pub fn render_config(frame: &mut Frame, area: Rect, app: &App) {
    let Some(config) = app.list_state.global_config() else {
        let message = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "Configuration not loaded",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        );
        frame.render_widget(message, area);
        return;
    };

    let rows = config
        .display_entries()
        .into_iter()
        .map(|(key, value)| StyledRow::new(vec![key, value]))
        .collect();

    TableWidget::new("Configuration", &HEADER, &WIDTHS)
        .with_rows(rows)
        .focused(false)
        .render(frame, area);
}
