use console_defs::{Alert, Severity};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub struct AlertBanner<'a> {
    pub alert: &'a Alert,
}

impl<'a> AlertBanner<'a> {
    pub fn new(alert: &'a Alert) -> Self {
        Self { alert }
    }

    fn color(&self) -> Color {
        match self.alert.severity {
            Severity::Info => Color::Blue,
            Severity::Warning => Color::Yellow,
            Severity::Danger => Color::Red,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let color = self.color();
        let text = Line::from(vec![
            Span::styled(
                self.alert.message,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  (x to dismiss)", Style::default().fg(Color::DarkGray)),
        ]);

        let banner = Paragraph::new(text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color))
                    .title(format!(" {} ", self.alert.severity.as_str())),
            )
            .wrap(Wrap { trim: true });

        frame.render_widget(banner, area);
    }
}
