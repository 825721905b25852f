use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::presentation::view_models::LinkPanelViewModel;

/// The last generated link and the copy affordance.
pub struct LinkPanelView<'a> {
    model: &'a LinkPanelViewModel,
}

impl<'a> LinkPanelView<'a> {
    pub fn new(model: &'a LinkPanelViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for LinkPanelView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(link) = &self.model.link else {
            return;
        };

        let action = if self.model.copied {
            Span::styled("✓ Copiado!", Style::default().fg(Color::Green))
        } else {
            Span::styled("[Ctrl+Y] copiar", Style::default().fg(Color::Yellow))
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green))
            .title(" Link gerado ")
            .title_bottom(Line::from(vec![Span::raw(" "), action, Span::raw(" ")]).right_aligned());

        Paragraph::new(Span::styled(
            link.as_str(),
            Style::default().add_modifier(Modifier::UNDERLINED),
        ))
        .wrap(Wrap { trim: false })
        .block(block)
        .render(area, buf);
    }
}
