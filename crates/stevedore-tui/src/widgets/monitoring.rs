//! Monitoring dashboard widget
//!
//! Four resource-usage line charts in a 2x2 grid plus the alarm list.
//! Metrics-fetch failures render as a banner without clearing previously
//! drawn series.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Chart, Dataset, GraphType, Widget},
};

use stevedore_app::state::MonitoringViewState;
use stevedore_core::ResourceMetric;

use crate::theme::{palette, styles};

/// The monitoring dashboard: charts, alarms, error banner.
pub struct MonitoringView<'a> {
    view: &'a MonitoringViewState,
}

impl<'a> MonitoringView<'a> {
    pub fn new(view: &'a MonitoringViewState) -> Self {
        Self { view }
    }

    fn render_chart(
        title: &str,
        series: &[ResourceMetric],
        color: Color,
        area: Rect,
        buf: &mut Buffer,
    ) {
        let block = styles::panel_block(false).title(format!(" {title} "));

        let points: Vec<(f64, f64)> = series
            .iter()
            .enumerate()
            .map(|(i, m)| (i as f64, m.value))
            .collect();

        if points.is_empty() {
            let inner = block.inner(area);
            block.render(area, buf);
            if inner.height > 0 {
                let line = Line::from(Span::styled(" 暂无数据", styles::text_muted()));
                buf.set_line(inner.x, inner.y + inner.height / 2, &line, inner.width);
            }
            return;
        }

        let x_max = (points.len().saturating_sub(1)).max(1) as f64;
        // Percent scale; headroom when a series overshoots 100.
        let y_max = series
            .iter()
            .map(|m| m.value)
            .fold(100.0_f64, f64::max)
            .ceil();

        let datasets = vec![Dataset::default()
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(color))
            .data(&points)];

        let x_labels = vec![
            Span::styled(short_timestamp(&series[0].timestamp), styles::text_muted()),
            Span::styled(
                short_timestamp(&series[series.len() - 1].timestamp),
                styles::text_muted(),
            ),
        ];
        let y_labels = vec![
            Span::styled("0", styles::text_muted()),
            Span::styled(format!("{y_max:.0}%"), styles::text_muted()),
        ];

        let chart = Chart::new(datasets)
            .block(block)
            .x_axis(
                Axis::default()
                    .bounds([0.0, x_max])
                    .labels(x_labels)
                    .style(styles::border_inactive()),
            )
            .y_axis(
                Axis::default()
                    .bounds([0.0, y_max])
                    .labels(y_labels)
                    .style(styles::border_inactive()),
            );
        chart.render(area, buf);
    }

    fn render_alarms(&self, area: Rect, buf: &mut Buffer) {
        let block = styles::panel_block(false).title(" 告警 ");
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        if self.view.alarms.is_empty() {
            let line = Line::from(Span::styled(" 暂无告警", styles::text_muted()));
            buf.set_line(inner.x, inner.y, &line, inner.width);
            return;
        }

        for (i, alarm) in self.view.alarms.iter().enumerate() {
            let y = inner.y + i as u16;
            if y >= inner.y + inner.height {
                break;
            }
            let (marker, style) = if alarm.status.is_active() {
                ("●", styles::status_red())
            } else {
                ("●", styles::status_green())
            };
            let line = Line::from(vec![
                Span::styled(format!(" {marker} "), style),
                Span::styled(alarm.summary(), styles::text_primary()),
                Span::styled(format!("  {}", alarm.created_at), styles::text_muted()),
            ]);
            buf.set_line(inner.x, y, &line, inner.width);
        }
    }
}

impl Widget for MonitoringView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let has_error = self.view.error.is_some();
        let chunks = Layout::vertical([
            Constraint::Length(if has_error { 1 } else { 0 }),
            Constraint::Min(8),    // chart grid
            Constraint::Length(6), // alarms
        ])
        .split(area);

        if let Some(error) = &self.view.error {
            let line = Line::from(Span::styled(
                format!(" ✗ {error}"),
                styles::status_red().add_modifier(Modifier::BOLD),
            ));
            buf.set_line(chunks[0].x, chunks[0].y, &line, chunks[0].width);
        }

        let rows = Layout::vertical([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[1]);
        let top = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[0]);
        let bottom = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[1]);

        let metrics = &self.view.metrics;
        Self::render_chart("CPU 使用率", &metrics.cpu, palette::CHART_CPU, top[0], buf);
        Self::render_chart(
            "内存使用率",
            &metrics.memory,
            palette::CHART_MEMORY,
            top[1],
            buf,
        );
        Self::render_chart(
            "磁盘使用率",
            &metrics.disk,
            palette::CHART_DISK,
            bottom[0],
            buf,
        );
        Self::render_chart(
            "网络使用率",
            &metrics.network,
            palette::CHART_NETWORK,
            bottom[1],
            buf,
        );

        self.render_alarms(chunks[2], buf);
    }
}

/// Shorten an RFC3339-like timestamp to HH:MM for axis labels; anything
/// unparsable is shown as-is.
fn short_timestamp(raw: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(raw)
        .map(|t| t.format("%H:%M").to_string())
        .unwrap_or_else(|_| raw.to_string())
}
