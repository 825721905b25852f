//! Mock phone showing how the chat will look on the recipient's side.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::PreviewViewModel;

const BUBBLE_WIDTH: usize = 24;
const CHAT_BG: Color = Color::Rgb(11, 20, 26);
const BUBBLE_BG: Color = Color::Rgb(0, 92, 75);
const HEADER_BG: Color = Color::Rgb(31, 44, 52);

pub struct PreviewView<'a> {
    model: &'a PreviewViewModel,
}

impl<'a> PreviewView<'a> {
    pub const WIDTH: u16 = 36;
    pub const HEIGHT: u16 = 24;

    pub fn new(model: &'a PreviewViewModel) -> Self {
        Self { model }
    }

    fn status_line(&self, width: usize) -> Line<'a> {
        let right = "▂▄▆ 100%";
        Line::from(vec![
            Span::styled(
                self.model.clock.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(padding(width, self.model.clock.chars().count() + right.chars().count())),
            Span::raw(right),
        ])
    }

    fn header_line(&self, width: usize) -> Line<'a> {
        let avatar = "◉ ";
        let icons = "▶ ✆ ⋮";
        let room = width.saturating_sub(avatar.chars().count() + icons.chars().count() + 1);
        let contact: String = self.model.contact.chars().take(room).collect();
        let used = avatar.chars().count() + contact.chars().count() + icons.chars().count();

        Line::from(vec![
            Span::styled(avatar, Style::default().fg(Color::Gray)),
            Span::styled(contact, Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(padding(width, used)),
            Span::raw(icons),
        ])
        .style(Style::default().bg(HEADER_BG))
    }

    fn bubble_lines(&self) -> Vec<Line<'a>> {
        let Some(message) = &self.model.message else {
            return Vec::new();
        };

        let bubble = Style::default().bg(BUBBLE_BG).fg(Color::White);
        let rows = wrap(message, BUBBLE_WIDTH);
        let inner = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0).max(8);

        let mut lines: Vec<Line<'a>> = rows
            .into_iter()
            .map(|row| {
                let fill = padding(inner, row.chars().count());
                Line::from(Span::styled(format!(" {}{} ", row, fill), bubble)).right_aligned()
            })
            .collect();

        let stamp = format!("{} ", self.model.clock);
        let stamp_pad = padding(inner, stamp.chars().count() + 2);
        lines.push(
            Line::from(vec![
                Span::styled(format!(" {}{}", stamp_pad, stamp), bubble.fg(Color::Gray)),
                Span::styled("✓✓ ", bubble.fg(Color::Cyan)),
            ])
            .right_aligned(),
        );
        lines
    }

    fn composer_line(width: usize) -> Line<'static> {
        let left = "☺ Mensagem";
        let right = "⎘ ◙ ●";
        Line::from(vec![
            Span::styled(left, Style::default().fg(Color::Gray)),
            Span::raw(padding(width, left.chars().count() + right.chars().count())),
            Span::styled("⎘ ◙ ", Style::default().fg(Color::Gray)),
            Span::styled("●", Style::default().fg(Color::Green)),
        ])
    }
}

impl<'a> Widget for PreviewView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Thick)
            .style(Style::default().bg(CHAT_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        let width = inner.width as usize;
        let [chat, composer] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);

        let mut lines = vec![
            self.status_line(width),
            self.header_line(width),
            Line::raw(""),
            Line::from(Span::styled(
                " Hoje ",
                Style::default().bg(HEADER_BG).fg(Color::Gray),
            ))
            .alignment(Alignment::Center),
            Line::raw(""),
        ];
        lines.extend(self.bubble_lines());

        Paragraph::new(lines).render(chat, buf);
        Paragraph::new(Self::composer_line(width)).render(composer, buf);
    }
}

fn padding(width: usize, used: usize) -> String {
    " ".repeat(width.saturating_sub(used))
}

/// Greedy word wrap; words longer than `width` are split.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();

    for paragraph in text.lines() {
        let mut row = String::new();

        for word in paragraph.split(' ') {
            let mut word = word.to_string();

            loop {
                let row_len = row.chars().count();
                let word_len = word.chars().count();
                let sep = usize::from(row_len > 0);

                if row_len + sep + word_len <= width {
                    if sep == 1 {
                        row.push(' ');
                    }
                    row.push_str(&word);
                    break;
                }

                if row_len > 0 {
                    rows.push(std::mem::take(&mut row));
                    continue;
                }

                let split: String = word.chars().take(width).collect();
                word = word.chars().skip(width).collect();
                rows.push(split);
            }
        }

        rows.push(row);
    }

    rows
}
