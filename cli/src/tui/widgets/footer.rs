use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub struct FooterBar<'a> {
    pub actions: &'a [(&'a str, &'a str)],
    pub status: Option<String>,
}

impl<'a> FooterBar<'a> {
    pub fn new(actions: &'a [(&'a str, &'a str)]) -> Self {
        Self {
            actions,
            status: None,
        }
    }

    /// Short text shown at the right edge, e.g. the refresh state.
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let separator = Span::styled(" │ ", Style::default().fg(Color::DarkGray));
        let mut spans = Vec::with_capacity(self.actions.len() * 4);
        for (i, (key, action)) in self.actions.iter().enumerate() {
            if i > 0 {
                spans.push(separator.clone());
            }
            spans.push(Span::styled(
                *key,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(*action, Style::default().fg(Color::White)));
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green))
            .title(Span::styled(
                " Keys ",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let status_width = self
            .status
            .as_ref()
            .map(|s| s.chars().count() as u16 + 1)
            .unwrap_or(0);
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(status_width)])
            .split(inner);

        frame.render_widget(Paragraph::new(Line::from(spans)), columns[0]);
        if let Some(status) = &self.status {
            let status = Paragraph::new(Span::styled(
                status.as_str(),
                Style::default().fg(Color::DarkGray),
            ))
            .alignment(Alignment::Right);
            frame.render_widget(status, columns[1]);
        }
    }
}
