//! Container detail view widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::Widget,
};

use stevedore_app::state::DetailViewState;

use crate::theme::styles;

/// One-record field panel with status chip and action state.
pub struct DetailPanel<'a> {
    view: &'a DetailViewState,
}

impl<'a> DetailPanel<'a> {
    pub fn new(view: &'a DetailViewState) -> Self {
        Self { view }
    }

    fn field_line(label: &str, value: &str) -> Line<'static> {
        Line::from(vec![
            Span::styled(format!(" {label:　<6}"), styles::text_muted()),
            Span::styled(value.to_string(), styles::text_primary()),
        ])
    }
}

impl Widget for DetailPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::panel_block(false).title(" 容器详情 ");
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut lines: Vec<Line> = Vec::new();

        if self.view.loading {
            lines.push(Line::from(Span::styled(
                " 加载中...",
                styles::status_yellow(),
            )));
        } else if let Some(error) = &self.view.error {
            lines.push(Line::from(Span::styled(
                format!(" ✗ {error}"),
                styles::status_red().add_modifier(Modifier::BOLD),
            )));
        } else if let Some(c) = &self.view.container {
            lines.push(Line::from(vec![
                Span::raw(" "),
                Span::styled(
                    c.name.clone(),
                    styles::text_primary().add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(c.status.clone(), styles::container_status(c.is_running())),
            ]));
            lines.push(Line::from(""));
            lines.push(Self::field_line("镜像", &c.image));
            lines.push(Self::field_line(
                "端口映射",
                if c.ports.is_empty() { "无" } else { &c.ports },
            ));
            lines.push(Self::field_line("创建时间", &c.created_at));
            lines.push(Self::field_line("ID", &c.id));
        }

        if let Some(action) = &self.view.pending_action {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!(" ⏳ {action}"),
                styles::status_yellow(),
            )));
        }

        for (i, line) in lines.iter().enumerate() {
            let y = inner.y + i as u16;
            if y >= inner.y + inner.height {
                break;
            }
            buf.set_line(inner.x, y, line, inner.width);
        }
    }
}
