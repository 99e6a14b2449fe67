use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Row, Table, TableState},
    Frame,
};

/// A table row plus the colour it is drawn in when not selected.
pub struct StyledRow {
    pub cells: Vec<String>,
    pub style: Style,
}

impl StyledRow {
    pub fn new(cells: Vec<String>) -> Self {
        Self {
            cells,
            style: Style::default(),
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

pub struct TableWidget<'a> {
    pub title: String,
    pub header: &'a [&'a str],
    pub widths: &'a [u16],
    pub rows: Vec<StyledRow>,
    pub selected_index: Option<usize>,
    pub focused: bool,
}

impl<'a> TableWidget<'a> {
    pub fn new(title: impl Into<String>, header: &'a [&'a str], widths: &'a [u16]) -> Self {
        Self {
            title: title.into(),
            header,
            widths,
            rows: Vec::new(),
            selected_index: None,
            focused: true,
        }
    }

    pub fn with_rows(mut self, rows: Vec<StyledRow>) -> Self {
        self.rows = rows;
        self
    }

    pub fn with_selected(mut self, selected: usize) -> Self {
        if selected < self.rows.len() {
            self.selected_index = Some(selected);
        }
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let rows: Vec<Row> = self
            .rows
            .iter()
            .enumerate()
            .map(|(idx, row)| {
                let style = if self.focused && Some(idx) == self.selected_index {
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD)
                } else {
                    row.style
                };
                Row::new(row.cells.clone()).style(style)
            })
            .collect();

        let header = Row::new(self.header.iter().map(|h| h.to_string()))
            .style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            )
            .bottom_margin(1);

        let constraints = self.widths.iter().map(|&w| Constraint::Percentage(w));
        let border = if self.focused {
            Color::Cyan
        } else {
            Color::DarkGray
        };

        let table = Table::new(rows, constraints)
            .header(header)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border))
                    .title(Span::styled(
                        format!(" {} ", self.title),
                        Style::default().fg(border).add_modifier(Modifier::BOLD),
                    )),
            )
            .highlight_symbol("▶ ");

        let mut state = TableState::default();
        state.select(self.selected_index);

        frame.render_stateful_widget(table, area, &mut state);
    }
}
