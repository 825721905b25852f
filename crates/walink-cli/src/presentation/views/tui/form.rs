//! Phone and message inputs with inline errors.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::{FieldViewModel, FormViewModel};

const FIELD_HEIGHT: u16 = 3;
const HINT_HEIGHT: u16 = 1;

pub struct FormView<'a> {
    model: &'a FormViewModel,
}

impl<'a> FormView<'a> {
    pub const HEIGHT: u16 = 2 * (FIELD_HEIGHT + HINT_HEIGHT);

    pub fn new(model: &'a FormViewModel) -> Self {
        Self { model }
    }

    /// Terminal cursor position at the end of the focused input.
    pub fn cursor(&self, area: Rect) -> Option<(u16, u16)> {
        let index = self.model.fields.iter().position(|f| f.focused)?;
        let (slot, _) = *Self::rows(area).get(index)?;
        let inner = Block::default().borders(Borders::ALL).inner(slot);
        if inner.width == 0 || inner.height == 0 {
            return None;
        }

        let shown = visible_tail(&self.model.fields[index].value, inner.width as usize);
        let offset = (shown.chars().count() as u16).min(inner.width - 1);
        Some((inner.x + offset, inner.y))
    }

    /// `(input, hint)` rows, one pair per field.
    fn rows(area: Rect) -> [(Rect, Rect); 2] {
        let [phone, phone_hint, message, message_hint] = Layout::vertical([
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(HINT_HEIGHT),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(HINT_HEIGHT),
        ])
        .areas(area);
        [(phone, phone_hint), (message, message_hint)]
    }
}

impl<'a> Widget for FormView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (field, (slot, hint)) in self.model.fields.iter().zip(Self::rows(area)) {
            render_input(field, slot, buf);
            render_hint(field, hint, buf);
        }
    }
}

fn render_input(field: &FieldViewModel, area: Rect, buf: &mut Buffer) {
    let border = if field.error.is_some() {
        Color::Red
    } else if field.focused {
        Color::Yellow
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(format!(" {} ", field.label));
    let width = block.inner(area).width as usize;

    let text = if field.value.is_empty() {
        Span::styled(field.placeholder.as_str(), Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(visible_tail(&field.value, width))
    };

    Paragraph::new(text).block(block).render(area, buf);
}

fn render_hint(field: &FieldViewModel, area: Rect, buf: &mut Buffer) {
    if let Some(error) = &field.error {
        Paragraph::new(Span::styled(
            format!(" {}", error),
            Style::default().fg(Color::Red),
        ))
        .render(area, buf);
    }

    if let Some((count, limit)) = field.counter {
        let color = if count > limit {
            Color::Red
        } else {
            Color::DarkGray
        };
        Paragraph::new(Line::from(Span::styled(
            format!("{}/{} ", count, limit),
            Style::default().fg(color),
        )))
        .alignment(Alignment::Right)
        .render(area, buf);
    }
}

/// The end of `value` that fits in `width` columns, leaving one for the cursor.
fn visible_tail(value: &str, width: usize) -> &str {
    let room = width.saturating_sub(1);
    let count = value.chars().count();
    if count <= room {
        return value;
    }

    let skip = count - room;
    match value.char_indices().nth(skip) {
        Some((index, _)) => &value[index..],
        None => "",
    }
}
