//! Status bar: transient status on the left, key help on the right.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::StatusBarViewModel;

use super::status_level_to_color;

pub struct StatusBarView<'a> {
    model: &'a StatusBarViewModel,
}

impl<'a> StatusBarView<'a> {
    pub fn new(model: &'a StatusBarViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for StatusBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = status_level_to_color(self.model.status_level);

        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let [left, right] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(48)]).areas(inner);

        Paragraph::new(Span::styled(
            self.model.status_message.as_str(),
            Style::default().fg(color),
        ))
        .render(left, buf);

        let key = Style::default().fg(Color::Yellow);
        let help_line = Line::from(vec![
            Span::styled("[Enter]", key),
            Span::raw("gerar "),
            Span::styled("[Ctrl+Y]", key),
            Span::raw("copiar "),
            Span::styled("[Tab]", key),
            Span::raw("campo "),
            Span::styled("[Esc]", key),
            Span::raw("sair"),
        ]);
        Paragraph::new(help_line).render(right, buf);
    }
}
