use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::tui::state::TagFilter;

/// The tag filter chips above the module table, plus the deployed-only switch.
pub struct TagBar<'a> {
    pub tags: &'a [TagFilter],
    pub cursor: Option<usize>,
    pub show_only_deployed: bool,
}

impl<'a> TagBar<'a> {
    pub fn new(tags: &'a [TagFilter], show_only_deployed: bool) -> Self {
        Self {
            tags,
            cursor: None,
            show_only_deployed,
        }
    }

    /// Highlights the chip under the cursor; set while the bar has focus.
    pub fn with_cursor(mut self, cursor: usize) -> Self {
        self.cursor = Some(cursor);
        self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let mut spans = Vec::new();
        let deployed_style = if self.show_only_deployed {
            Style::default().fg(Color::Black).bg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(" deployed only ", deployed_style));
        spans.push(Span::raw("  "));

        if self.tags.is_empty() {
            spans.push(Span::styled(
                "no tags",
                Style::default().fg(Color::DarkGray),
            ));
        }

        for (i, tag) in self.tags.iter().enumerate() {
            let mut style = if tag.status {
                Style::default().fg(Color::Black).bg(Color::Magenta)
            } else {
                Style::default().fg(Color::Magenta)
            };
            if self.cursor == Some(i) {
                style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
            }
            spans.push(Span::styled(format!(" {} ", tag.name), style));
            spans.push(Span::raw(" "));
        }

        let border = if self.cursor.is_some() {
            Color::Magenta
        } else {
            Color::DarkGray
        };
        let bar = Paragraph::new(Line::from(spans))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border))
                    .title(" Tags "),
            )
            .wrap(Wrap { trim: false });

        frame.render_widget(bar, area);
    }
}
