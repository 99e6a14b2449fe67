use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Yes/no dialog drawn over the whole screen.
pub struct ConfirmationModal<'a> {
    pub message: &'a str,
}

impl<'a> ConfirmationModal<'a> {
    pub fn new(message: &'a str) -> Self {
        Self { message }
    }

    fn centered(area: Rect) -> Rect {
        let width = std::cmp::max(area.width / 2, 50).min(area.width);
        let height = std::cmp::max(area.height * 4 / 10, 12).min(area.height);
        Rect {
            x: area.x + area.width.saturating_sub(width) / 2,
            y: area.y + area.height.saturating_sub(height) / 2,
            width,
            height,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let modal_area = Self::centered(area);

        frame.render_widget(Clear, modal_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(modal_area);

        let lines: Vec<Line> = self
            .message
            .lines()
            .map(|line| Line::from(Span::styled(line, Style::default().fg(Color::White))))
            .collect();

        let message = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Red))
                    .title(Span::styled(
                        " Confirm ",
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    )),
            )
            .wrap(Wrap { trim: true });
        frame.render_widget(message, chunks[0]);

        let buttons = Line::from(vec![
            Span::styled(
                "[Y]",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" OK  "),
            Span::styled(
                "[N/ESC]",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Cancel"),
        ]);

        let button_bar = Paragraph::new(buttons)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .alignment(Alignment::Center);
        frame.render_widget(button_bar, chunks[1]);
    }
}
