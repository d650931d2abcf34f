//! Main render/view function (View in TEA pattern)

use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use stevedore_app::state::{AppState, UiMode};

use crate::theme::palette;
use crate::{layout, widgets};

/// Render the complete UI (View function in TEA)
///
/// This is a pure rendering function - it does not modify state.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Fill entire terminal with deepest background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);

    let api_host = &state.settings.api.base_url;
    frame.render_widget(widgets::MainHeader::new(state.ui_mode, api_host), areas.header);

    // Base view underneath any modal
    match state.ui_mode {
        UiMode::Monitoring => {
            frame.render_widget(widgets::MonitoringView::new(&state.monitoring), areas.content);
        }
        UiMode::Detail => {
            if let Some(detail) = &state.detail {
                frame.render_widget(widgets::DetailPanel::new(detail), areas.content);
            }
        }
        UiMode::Containers | UiMode::SearchInput => {
            let table = widgets::ContainerTable::new(&state.containers)
                .search_active(state.ui_mode == UiMode::SearchInput);
            frame.render_widget(table, areas.content);
        }
        UiMode::Form | UiMode::ConfirmDialog => {
            // Render the origin view underneath the modal.
            let edit_over_detail = state.form.as_ref().is_some_and(|f| f.is_edit())
                || state
                    .confirm_dialog
                    .as_ref()
                    .is_some_and(|d| d.return_mode == UiMode::Detail);
            if edit_over_detail {
                if let Some(detail) = &state.detail {
                    frame.render_widget(widgets::DetailPanel::new(detail), areas.content);
                }
            } else {
                frame.render_widget(
                    widgets::ContainerTable::new(&state.containers),
                    areas.content,
                );
            }
        }
    }

    // Modal overlays
    match state.ui_mode {
        UiMode::Form => {
            if let Some(form) = &state.form {
                frame.render_widget(widgets::ContainerForm::new(form), area);
            }
        }
        UiMode::ConfirmDialog => {
            if let Some(dialog) = &state.confirm_dialog {
                frame.render_widget(widgets::ConfirmDialog::new(dialog), area);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use stevedore_app::message::Message;
    use stevedore_app::{update, AppState};
    use stevedore_core::{Container, STATUS_RUNNING};

    fn container(id: &str, name: &str) -> Container {
        Container {
            id: id.to_string(),
            name: name.to_string(),
            image: "nginx:latest".to_string(),
            status: STATUS_RUNNING.to_string(),
            ports: "80:80".to_string(),
            created_at: "2024-01-01 10:00:00".to_string(),
        }
    }

    fn mounted_state() -> AppState {
        let mut state = AppState::new();
        update(&mut state, Message::ShowContainers);
        let epoch = state.epoch;
        update(
            &mut state,
            Message::ContainersLoaded {
                epoch,
                result: Ok(vec![container("a", "web")]),
            },
        );
        state
    }

    #[test]
    fn test_view_renders_list_screen() {
        let mut term = TestTerminal::new();
        let state = mounted_state();
        term.draw_with(|frame| view(frame, &state));
        assert!(term.buffer_contains("Stevedore"));
        assert!(term.buffer_contains("容器列表"));
        assert!(term.buffer_contains("web"));
    }

    #[test]
    fn test_view_renders_form_over_list() {
        let mut term = TestTerminal::new();
        let mut state = mounted_state();
        update(&mut state, Message::OpenCreateForm);
        term.draw_with(|frame| view(frame, &state));
        assert!(term.buffer_contains("创建容器"));
    }

    #[test]
    fn test_view_renders_confirm_dialog() {
        let mut term = TestTerminal::new();
        let mut state = mounted_state();
        update(
            &mut state,
            Message::RequestDelete {
                id: "a".to_string(),
            },
        );
        term.draw_with(|frame| view(frame, &state));
        assert!(term.buffer_contains("删除容器"));
    }

    #[test]
    fn test_view_renders_monitoring_screen() {
        let mut term = TestTerminal::with_size(100, 40);
        let mut state = mounted_state();
        update(&mut state, Message::ShowMonitoring);
        term.draw_with(|frame| view(frame, &state));
        assert!(term.buffer_contains("CPU 使用率"));
        assert!(term.buffer_contains("告警"));
    }
}
