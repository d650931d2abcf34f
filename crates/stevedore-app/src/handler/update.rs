//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::AppState;
use stevedore_core::AppPhase;

use super::{containers, detail, form, keys, monitoring, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = keys::handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => monitoring::handle_tick(state),

        // ─────────────────────────────────────────────────────────
        // View Navigation
        // ─────────────────────────────────────────────────────────
        Message::ShowContainers => containers::handle_show(state),
        Message::ShowDetail { id } => detail::handle_show(state, id),
        Message::ShowMonitoring => monitoring::handle_show(state),

        // ─────────────────────────────────────────────────────────
        // Containers List View
        // ─────────────────────────────────────────────────────────
        Message::RefreshContainers => containers::handle_refresh(state),
        Message::SearchChanged { text } => containers::handle_search_changed(state, text),
        Message::ContainersLoaded { epoch, result } => {
            containers::handle_loaded(state, epoch, result)
        }

        // ─────────────────────────────────────────────────────────
        // Detail View
        // ─────────────────────────────────────────────────────────
        Message::ContainerLoaded { epoch, result } => detail::handle_loaded(state, epoch, result),

        // ─────────────────────────────────────────────────────────
        // Lifecycle Actions
        // ─────────────────────────────────────────────────────────
        Message::StartContainer { id } => containers::handle_start(state, id),
        Message::StopContainer { id } => containers::handle_stop(state, id),
        Message::RequestDelete { id } => containers::handle_request_delete(state, id),
        Message::ConfirmDelete { id } => containers::handle_confirm_delete(state, id),
        Message::CancelDialog => containers::handle_cancel_dialog(state),
        Message::DialogToggle => {
            if let Some(dialog) = state.confirm_dialog.as_mut() {
                dialog.toggle();
            }
            UpdateResult::none()
        }
        Message::ActionFinished {
            epoch,
            action,
            result,
        } => containers::handle_action_finished(state, epoch, action, result),

        // ─────────────────────────────────────────────────────────
        // Form
        // ─────────────────────────────────────────────────────────
        Message::OpenCreateForm => form::handle_open_create(state),
        Message::OpenEditForm => form::handle_open_edit(state),
        Message::FormInput(c) => form::handle_input(state, c),
        Message::FormBackspace => form::handle_backspace(state),
        Message::FormNextField => form::handle_next_field(state),
        Message::FormPrevField => form::handle_prev_field(state),
        Message::FormSubmit => form::handle_submit(state),
        Message::FormCancel => form::handle_cancel(state),

        // ─────────────────────────────────────────────────────────
        // Monitoring View
        // ─────────────────────────────────────────────────────────
        Message::RefreshMonitoring => monitoring::handle_refresh(state),
        Message::MetricsLoaded { epoch, result } => {
            monitoring::handle_metrics_loaded(state, epoch, result)
        }
        Message::AlarmsLoaded { epoch, result } => {
            monitoring::handle_alarms_loaded(state, epoch, result)
        }
    }
}
