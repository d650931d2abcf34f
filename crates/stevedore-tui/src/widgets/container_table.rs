//! Containers list view widget
//!
//! Search bar, paginated table, and a footer with pagination info and the
//! in-flight action indicator.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Cell, Row, Table, Widget},
};

use stevedore_app::state::ContainersViewState;

use crate::theme::{palette, styles};

/// The containers list: search bar, table, pagination footer.
pub struct ContainerTable<'a> {
    view: &'a ContainersViewState,
    /// The search prompt currently captures input.
    search_active: bool,
}

impl<'a> ContainerTable<'a> {
    pub fn new(view: &'a ContainersViewState) -> Self {
        Self {
            view,
            search_active: false,
        }
    }

    /// Mark the search prompt as focused.
    pub fn search_active(mut self, active: bool) -> Self {
        self.search_active = active;
        self
    }

    fn render_search_bar(&self, area: Rect, buf: &mut Buffer) {
        let (label_style, query_style) = if self.search_active {
            (styles::accent_bold(), styles::text_primary())
        } else {
            (styles::text_muted(), styles::text_secondary())
        };
        let cursor = if self.search_active { "▏" } else { "" };
        let line = Line::from(vec![
            Span::styled(" 搜索: ", label_style),
            Span::styled(format!("{}{}", self.view.search, cursor), query_style),
        ]);
        buf.set_line(area.x, area.y, &line, area.width);
    }

    fn render_error(&self, area: Rect, buf: &mut Buffer) {
        if let Some(error) = &self.view.store.error {
            let line = Line::from(vec![Span::styled(
                format!(" ✗ {error}"),
                styles::status_red().add_modifier(Modifier::BOLD),
            )]);
            buf.set_line(area.x, area.y, &line, area.width);
        }
    }

    fn render_footer(&self, area: Rect, buf: &mut Buffer) {
        let total = self.view.filtered().len();
        let mut spans = vec![Span::styled(
            format!(
                " 第 {}/{} 页 · 共 {} 条 · 每页 {} 行",
                self.view.page + 1,
                self.view.page_count(),
                total,
                self.view.page_size
            ),
            styles::text_muted(),
        )];
        if self.view.store.loading {
            spans.push(Span::styled("  加载中...", styles::status_yellow()));
        }
        if let Some(action) = &self.view.pending_action {
            spans.push(Span::styled(
                format!("  ⏳ {action}"),
                styles::status_yellow(),
            ));
        }
        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }

    fn render_table(&self, area: Rect, buf: &mut Buffer) {
        let rows_data = self.view.page_slice();

        if rows_data.is_empty() {
            let message = if self.view.search.is_empty() {
                "暂无容器"
            } else {
                "没有找到匹配的容器"
            };
            let line = Line::from(Span::styled(format!("  {message}"), styles::text_muted()));
            if area.height > 1 {
                buf.set_line(area.x, area.y + 1, &line, area.width);
            }
            return;
        }

        let header = Row::new(vec![
            Cell::from("名称"),
            Cell::from("状态"),
            Cell::from("镜像"),
            Cell::from("端口映射"),
            Cell::from("创建时间"),
        ])
        .style(styles::text_secondary().add_modifier(Modifier::BOLD));

        let rows: Vec<Row> = rows_data
            .iter()
            .enumerate()
            .map(|(i, c)| {
                let ports = if c.ports.is_empty() {
                    "无"
                } else {
                    c.ports.as_str()
                };
                let row = Row::new(vec![
                    Cell::from(c.name.clone()).style(styles::text_primary()),
                    Cell::from(c.status.clone()).style(styles::container_status(c.is_running())),
                    Cell::from(c.image.clone()).style(styles::text_secondary()),
                    Cell::from(ports.to_string()).style(styles::text_secondary()),
                    Cell::from(c.created_at.clone()).style(styles::text_muted()),
                ]);
                if i == self.view.selected {
                    row.style(Style::default().bg(palette::ROW_HIGHLIGHT_BG))
                } else {
                    row
                }
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Percentage(22),
                Constraint::Percentage(12),
                Constraint::Percentage(28),
                Constraint::Percentage(18),
                Constraint::Percentage(20),
            ],
        )
        .header(header)
        .column_spacing(1);

        Widget::render(table, area, buf);
    }
}

impl Widget for ContainerTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::panel_block(false).title(" 容器列表 ");
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height < 4 || inner.width == 0 {
            return;
        }

        let has_error = self.view.store.error.is_some();
        let chunks = Layout::vertical([
            Constraint::Length(if has_error { 1 } else { 0 }),
            Constraint::Length(1), // search bar
            Constraint::Min(2),    // table
            Constraint::Length(1), // footer
        ])
        .split(inner);

        if has_error {
            self.render_error(chunks[0], buf);
        }
        self.render_search_bar(chunks[1], buf);
        self.render_table(chunks[2], buf);
        self.render_footer(chunks[3], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use stevedore_core::{Container, STATUS_RUNNING};

    fn container(id: &str, name: &str, status: &str) -> Container {
        Container {
            id: id.to_string(),
            name: name.to_string(),
            image: "nginx:latest".to_string(),
            status: status.to_string(),
            ports: "80:80".to_string(),
            created_at: "2024-01-01 10:00:00".to_string(),
        }
    }

    fn view_with(records: Vec<Container>) -> ContainersViewState {
        let mut view = ContainersViewState::new(10);
        view.store.set_containers(records);
        view
    }

    #[test]
    fn test_renders_rows_and_headers() {
        let mut term = TestTerminal::new();
        let view = view_with(vec![
            container("a", "web", STATUS_RUNNING),
            container("b", "db", "已停止"),
        ]);
        term.render_widget(ContainerTable::new(&view), term.area());
        assert!(term.buffer_contains("名称"));
        assert!(term.buffer_contains("web"));
        assert!(term.buffer_contains("db"));
        assert!(term.buffer_contains(STATUS_RUNNING));
    }

    #[test]
    fn test_empty_list_shows_placeholder() {
        let mut term = TestTerminal::new();
        let view = view_with(vec![]);
        term.render_widget(ContainerTable::new(&view), term.area());
        assert!(term.buffer_contains("暂无容器"));
    }

    #[test]
    fn test_no_match_placeholder_when_searching() {
        let mut term = TestTerminal::new();
        let mut view = view_with(vec![container("a", "web", "已停止")]);
        view.set_search("redis".to_string());
        term.render_widget(ContainerTable::new(&view), term.area());
        assert!(term.buffer_contains("没有找到匹配的容器"));
    }

    #[test]
    fn test_error_banner_is_shown() {
        let mut term = TestTerminal::new();
        let mut view = view_with(vec![]);
        view.store.set_error(Some("获取容器列表失败".to_string()));
        term.render_widget(ContainerTable::new(&view), term.area());
        assert!(term.buffer_contains("获取容器列表失败"));
    }

    #[test]
    fn test_footer_shows_pagination_info() {
        let mut term = TestTerminal::new();
        let mut view = view_with(
            (0..25)
                .map(|i| container(&format!("id{i}"), &format!("name{i}"), "已停止"))
                .collect(),
        );
        view.set_page_size(10);
        term.render_widget(ContainerTable::new(&view), term.area());
        assert!(term.buffer_contains("第 1/3 页"));
        assert!(term.buffer_contains("共 25 条"));
    }

    #[test]
    fn test_pending_action_indicator() {
        let mut term = TestTerminal::new();
        let mut view = view_with(vec![container("a", "web", "已停止")]);
        view.pending_action = Some(stevedore_app::PendingAction::Start {
            id: "a".to_string(),
        });
        term.render_widget(ContainerTable::new(&view), term.area());
        assert!(term.buffer_contains("start-a"));
    }
}
