//! Confirmation dialog widget for delete confirmation

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use stevedore_app::confirm_dialog::ConfirmDialogState;

use crate::theme::{palette, styles};

/// Confirmation dialog widget
pub struct ConfirmDialog<'a> {
    state: &'a ConfirmDialogState,
}

impl<'a> ConfirmDialog<'a> {
    pub fn new(state: &'a ConfirmDialogState) -> Self {
        Self { state }
    }

    fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
        let x = area.x + (area.width.saturating_sub(width)) / 2;
        let y = area.y + (area.height.saturating_sub(height)) / 2;
        Rect::new(x, y, width.min(area.width), height.min(area.height))
    }
}

impl Widget for ConfirmDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal_area = Self::centered_rect(50, 7, area);
        Clear.render(modal_area, buf);

        let block = Block::default()
            .title(format!(" {} ", self.state.title))
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_set(symbols::border::ROUNDED)
            .border_style(styles::status_red())
            .style(Style::default().bg(palette::POPUP_BG));
        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        let chunks = Layout::vertical([
            Constraint::Length(1), // spacer
            Constraint::Length(1), // message
            Constraint::Length(1), // spacer
            Constraint::Length(1), // options
            Constraint::Min(0),
        ])
        .split(inner);

        Paragraph::new(self.state.message.as_str())
            .alignment(Alignment::Center)
            .style(styles::status_yellow())
            .render(chunks[1], buf);

        let mut spans = Vec::new();
        for (i, (label, _)) in self.state.options.iter().enumerate() {
            let selected = i == self.state.selected;
            let style = if selected {
                Style::default()
                    .fg(palette::TEXT_PRIMARY)
                    .bg(palette::ROW_HIGHLIGHT_BG)
                    .add_modifier(Modifier::BOLD)
            } else {
                styles::text_muted()
            };
            spans.push(Span::styled(format!("  {label}  "), style));
            spans.push(Span::raw("  "));
        }
        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .render(chunks[3], buf);
    }
}
