//! Header bar widget
//!
//! Shows the app title, the active view tab, and the key hints for the
//! current mode.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use stevedore_app::UiMode;

use crate::theme::{palette, styles};

/// Main header showing app title, view tabs, and keybindings
pub struct MainHeader<'a> {
    ui_mode: UiMode,
    api_host: &'a str,
}

impl<'a> MainHeader<'a> {
    pub fn new(ui_mode: UiMode, api_host: &'a str) -> Self {
        Self { ui_mode, api_host }
    }

    fn tabs(&self) -> Vec<Span<'static>> {
        let on_monitoring = self.ui_mode == UiMode::Monitoring;
        let tab = |label: &'static str, active: bool| {
            if active {
                Span::styled(
                    label,
                    Style::default()
                        .fg(palette::ACCENT)
                        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
                )
            } else {
                Span::styled(label, styles::text_muted())
            }
        };
        vec![
            tab("容器", !on_monitoring),
            Span::styled("  ", styles::text_muted()),
            tab("监控", on_monitoring),
        ]
    }

    fn shortcuts(&self) -> Vec<Span<'static>> {
        let hint = |key: &'static str, label: &'static str| {
            vec![
                Span::styled("[", styles::text_muted()),
                Span::styled(key, styles::keybinding()),
                Span::styled("] ", styles::text_muted()),
                Span::styled(label, styles::text_muted()),
                Span::styled("  ", styles::text_muted()),
            ]
        };
        let mut spans = Vec::new();
        match self.ui_mode {
            UiMode::Containers | UiMode::SearchInput => {
                for (k, l) in [
                    ("/", "搜索"),
                    ("c", "创建"),
                    ("s", "启动"),
                    ("x", "停止"),
                    ("d", "删除"),
                    ("r", "刷新"),
                    ("q", "退出"),
                ] {
                    spans.extend(hint(k, l));
                }
            }
            UiMode::Detail => {
                for (k, l) in [
                    ("s", "启动"),
                    ("x", "停止"),
                    ("e", "编辑"),
                    ("d", "删除"),
                    ("Esc", "返回"),
                ] {
                    spans.extend(hint(k, l));
                }
            }
            UiMode::Monitoring => {
                for (k, l) in [("r", "刷新"), ("Esc", "返回"), ("q", "退出")] {
                    spans.extend(hint(k, l));
                }
            }
            UiMode::Form => {
                for (k, l) in [("Tab", "下一项"), ("Enter", "确定"), ("Esc", "取消")] {
                    spans.extend(hint(k, l));
                }
            }
            UiMode::ConfirmDialog => {
                for (k, l) in [("y", "确定"), ("n", "取消")] {
                    spans.extend(hint(k, l));
                }
            }
        }
        spans
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::panel_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        // Left: title + tabs
        let mut left_spans = vec![
            Span::raw(" "),
            Span::styled(
                "Stevedore",
                Style::default()
                    .fg(palette::ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled("/", styles::text_muted()),
            Span::raw(" "),
        ];
        left_spans.extend(self.tabs());
        let left_line = Line::from(left_spans);
        let left_width = left_line.width() as u16;

        let shortcuts_line = Line::from(self.shortcuts());
        let shortcuts_width = shortcuts_line.width() as u16;

        // Right: backend host
        let host_line = Line::from(vec![
            Span::raw(" "),
            Span::styled(self.api_host.to_string(), styles::text_secondary()),
            Span::raw(" "),
        ]);
        let host_width = host_line.width() as u16;

        buf.set_line(inner.x, inner.y, &left_line, inner.width);

        // Center the shortcuts after the title when they fit
        let shortcuts_x = inner.x + left_width + 2;
        if shortcuts_x + shortcuts_width <= inner.x + inner.width {
            buf.set_line(shortcuts_x, inner.y, &shortcuts_line, shortcuts_width);
        }

        // Right-align the host when it still fits
        if inner.width > host_width {
            let host_x = inner.x + inner.width - host_width;
            if host_x >= shortcuts_x + shortcuts_width + 2 {
                buf.set_line(host_x, inner.y, &host_line, host_width);
            }
        }
    }
}
