//! Create/edit container form dialog
//!
//! Modal with three free-text fields (name, image, ports). Name and image
//! are marked required; ports is optional free text.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use stevedore_app::state::{FormField, FormState};

use crate::theme::{palette, styles};

/// The container form dialog widget.
pub struct ContainerForm<'a> {
    state: &'a FormState,
}

impl<'a> ContainerForm<'a> {
    pub fn new(state: &'a FormState) -> Self {
        Self { state }
    }

    fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
        let x = area.x + (area.width.saturating_sub(width)) / 2;
        let y = area.y + (area.height.saturating_sub(height)) / 2;
        Rect::new(x, y, width.min(area.width), height.min(area.height))
    }

    fn render_field(
        &self,
        label: &str,
        required: bool,
        field: FormField,
        hint: &str,
        area: Rect,
        buf: &mut Buffer,
    ) {
        let active = self.state.active == field;
        let value = self.state.field_value(field);

        let mut label_spans = vec![Span::styled(
            format!(" {label}"),
            if active {
                styles::accent_bold()
            } else {
                styles::text_secondary()
            },
        )];
        if required {
            label_spans.push(Span::styled(" *", styles::status_red()));
        }
        if !hint.is_empty() {
            label_spans.push(Span::styled(format!("  {hint}"), styles::text_muted()));
        }
        buf.set_line(area.x, area.y, &Line::from(label_spans), area.width);

        // Input line with a cursor marker on the focused field.
        let input_bg = if active {
            palette::INPUT_ACTIVE_BG
        } else {
            palette::INPUT_INACTIVE_BG
        };
        let input_area = Rect::new(area.x + 1, area.y + 1, area.width.saturating_sub(2), 1);
        let input_block = Block::default().style(Style::default().bg(input_bg));
        input_block.render(input_area, buf);

        let text_line = Line::from(Span::styled(
            value.to_string(),
            styles::text_primary().bg(input_bg),
        ));
        buf.set_line(input_area.x, input_area.y, &text_line, input_area.width);

        if active {
            // Wide (CJK) characters occupy two columns.
            let cursor_x = input_area.x + value.width() as u16;
            if cursor_x < input_area.x + input_area.width {
                buf.set_line(
                    cursor_x,
                    input_area.y,
                    &Line::from(Span::styled("▏", styles::accent().bg(input_bg))),
                    1,
                );
            }
        }
    }
}

impl Widget for ContainerForm<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal_area = Self::centered_rect(54, 14, area);
        Clear.render(modal_area, buf);

        let title = if self.state.is_edit() {
            " 编辑容器 "
        } else {
            " 创建容器 "
        };
        let block = Block::default()
            .title(title)
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_set(symbols::border::ROUNDED)
            .border_style(styles::border_active())
            .style(Style::default().bg(palette::POPUP_BG));
        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        if inner.height < 9 {
            return;
        }

        let chunks = Layout::vertical([
            Constraint::Length(2), // name
            Constraint::Length(1),
            Constraint::Length(2), // image
            Constraint::Length(1),
            Constraint::Length(2), // ports
            Constraint::Length(1), // hint
            Constraint::Min(1),    // buttons
        ])
        .split(inner);

        self.render_field("容器名称", true, FormField::Name, "", chunks[0], buf);
        self.render_field(
            "镜像",
            true,
            FormField::Image,
            "例如: nginx:latest",
            chunks[2],
            buf,
        );
        self.render_field(
            "端口映射",
            false,
            FormField::Ports,
            "例如: 80:80, 3306:3306",
            chunks[4],
            buf,
        );

        if let Some(hint) = &self.state.hint {
            let line = Line::from(Span::styled(
                format!(" ✗ {hint}"),
                styles::status_red().add_modifier(Modifier::BOLD),
            ));
            buf.set_line(chunks[5].x, chunks[5].y, &line, chunks[5].width);
        }

        let buttons = Line::from(vec![
            Span::styled("[Enter]", styles::keybinding()),
            Span::styled(" 确定  ", styles::text_muted()),
            Span::styled("[Esc]", styles::keybinding()),
            Span::styled(" 取消", styles::text_muted()),
        ]);
        Paragraph::new(buttons)
            .alignment(Alignment::Center)
            .render(chunks[6], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use stevedore_core::Container;

    #[test]
    fn test_create_form_renders_labels() {
        let mut term = TestTerminal::new();
        let state = FormState::create();
        term.render_widget(ContainerForm::new(&state), term.area());
        assert!(term.buffer_contains("创建容器"));
        assert!(term.buffer_contains("容器名称"));
        assert!(term.buffer_contains("镜像"));
        assert!(term.buffer_contains("端口映射"));
    }

    #[test]
    fn test_edit_form_shows_values_and_title() {
        let mut term = TestTerminal::new();
        let container = Container {
            id: "c1".to_string(),
            name: "web".to_string(),
            image: "nginx:latest".to_string(),
            status: "已停止".to_string(),
            ports: "80:80".to_string(),
            created_at: String::new(),
        };
        let state = FormState::edit(&container);
        term.render_widget(ContainerForm::new(&state), term.area());
        assert!(term.buffer_contains("编辑容器"));
        assert!(term.buffer_contains("web"));
        assert!(term.buffer_contains("nginx:latest"));
        assert!(term.buffer_contains("80:80"));
    }

    #[test]
    fn test_hint_is_rendered() {
        let mut term = TestTerminal::new();
        let mut state = FormState::create();
        state.hint = Some("容器名称和镜像不能为空".to_string());
        term.render_widget(ContainerForm::new(&state), term.area());
        assert!(term.buffer_contains("容器名称和镜像不能为空"));
    }
}
