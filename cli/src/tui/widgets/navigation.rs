use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::app::View;

const MENU: [(&str, &str, View); 2] = [
    ("1", "Modules", View::Modules),
    ("2", "Config", View::Config),
];

pub struct NavigationBar<'a> {
    pub current_view: &'a View,
    pub title: &'a str,
}

impl<'a> NavigationBar<'a> {
    pub fn new(current_view: &'a View, title: &'a str) -> Self {
        Self {
            current_view,
            title,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let mut spans = Vec::new();
        for (key, label, view) in MENU.iter() {
            let label_style = if self.current_view == view {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            spans.push(Span::raw("  "));
            spans.push(Span::styled(
                format!("[{}]", key),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(*label, label_style));
        }

        let navigation = Paragraph::new(Line::from(spans))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Blue))
                    .title(Span::styled(
                        format!(" {} ", self.title),
                        Style::default()
                            .fg(Color::Blue)
                            .add_modifier(Modifier::BOLD),
                    )),
            )
            .alignment(Alignment::Left);

        frame.render_widget(navigation, area);
    }
}
