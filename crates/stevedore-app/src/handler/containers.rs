//! Containers list view handlers
//!
//! Owns the fetch/refetch flow, the action-in-flight gating, the delete
//! confirmation, and the routing of action completions back into whichever
//! view dispatched them.

use stevedore_core::prelude::*;
use stevedore_core::Container;

use crate::confirm_dialog::ConfirmDialogState;
use crate::message::Message;
use crate::state::{AppState, PendingAction, UiMode};

use super::{detail, UpdateAction, UpdateResult};

/// Canned user-facing failure message for a mutation.
///
/// Every failure surfaced to the user collapses to one of these; the
/// underlying detail goes to the diagnostic log only.
pub(crate) fn fail_message(action: &PendingAction) -> &'static str {
    match action {
        PendingAction::Create => "创建容器失败",
        PendingAction::Update { .. } => "更新容器失败",
        PendingAction::Start { .. } => "启动容器失败",
        PendingAction::Stop { .. } => "停止容器失败",
        PendingAction::Delete { .. } => "删除容器失败",
    }
}

/// Enter the list view: reset view-local state and fetch the full list.
pub(crate) fn handle_show(state: &mut AppState) -> UpdateResult {
    state.ui_mode = UiMode::Containers;
    state.detail = None;
    state.form = None;
    state.confirm_dialog = None;
    state.containers.reset_for_mount();
    state.containers.store.set_loading(true);
    state.containers.store.set_error(None);
    let epoch = state.next_epoch();
    UpdateResult::action(UpdateAction::FetchContainers { epoch })
}

/// Re-fetch without touching search/pagination (manual refresh and the
/// post-mutation refetch).
pub(crate) fn handle_refresh(state: &mut AppState) -> UpdateResult {
    if state.containers.store.loading {
        return UpdateResult::none();
    }
    state.containers.store.set_loading(true);
    state.containers.store.set_error(None);
    UpdateResult::action(UpdateAction::FetchContainers { epoch: state.epoch })
}

/// List fetch completed.
pub(crate) fn handle_loaded(
    state: &mut AppState,
    epoch: u64,
    result: Result<Vec<Container>, String>,
) -> UpdateResult {
    if !state.epoch_current(epoch) {
        debug!("Discarding stale container list (epoch {epoch})");
        return UpdateResult::none();
    }

    state.containers.store.set_loading(false);
    match result {
        Ok(containers) => {
            state.containers.store.set_containers(containers);
            state.containers.store.set_error(None);
            // The refetched list may be shorter than the page we were on.
            let last_page = state.containers.page_count() - 1;
            if state.containers.page > last_page {
                state.containers.page = last_page;
                state.containers.selected = 0;
            }
        }
        Err(err) => {
            warn!("Container list fetch failed: {err}");
            state.containers.store.set_error(Some("获取容器列表失败".to_string()));
            state.containers.store.clear();
        }
    }
    UpdateResult::none()
}

/// Search text changed: the filter is a synchronous projection, no refetch.
pub(crate) fn handle_search_changed(state: &mut AppState, text: String) -> UpdateResult {
    state.containers.set_search(text);
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────────────────────────
// Lifecycle actions
// ─────────────────────────────────────────────────────────────────────────────

pub(crate) fn handle_start(state: &mut AppState, id: String) -> UpdateResult {
    if state.ui_mode == UiMode::Detail {
        return detail::handle_start(state, id);
    }
    let epoch = state.epoch;
    let view = &mut state.containers;
    if view.pending_action.is_some() {
        return UpdateResult::none();
    }
    // Start is disabled for a container the backend reports as running.
    let running = view.store.get(&id).map(|c| c.is_running());
    if running != Some(false) {
        return UpdateResult::none();
    }
    view.pending_action = Some(PendingAction::Start { id: id.clone() });
    UpdateResult::action(UpdateAction::StartContainer { id, epoch })
}

pub(crate) fn handle_stop(state: &mut AppState, id: String) -> UpdateResult {
    if state.ui_mode == UiMode::Detail {
        return detail::handle_stop(state, id);
    }
    let epoch = state.epoch;
    let view = &mut state.containers;
    if view.pending_action.is_some() {
        return UpdateResult::none();
    }
    // Stop only applies to a running container.
    let running = view.store.get(&id).map(|c| c.is_running());
    if running != Some(true) {
        return UpdateResult::none();
    }
    view.pending_action = Some(PendingAction::Stop { id: id.clone() });
    UpdateResult::action(UpdateAction::StopContainer { id, epoch })
}

/// Delete always goes through the confirmation dialog first.
pub(crate) fn handle_request_delete(state: &mut AppState, id: String) -> UpdateResult {
    if state.active_pending_action().is_some() {
        return UpdateResult::none();
    }
    let (name, return_mode) = match state.ui_mode {
        UiMode::Detail => match state.detail.as_ref().and_then(|d| d.container.as_ref()) {
            Some(c) => (c.name.clone(), UiMode::Detail),
            None => return UpdateResult::none(),
        },
        _ => match state.containers.store.get(&id) {
            Some(c) => (c.name.clone(), UiMode::Containers),
            None => return UpdateResult::none(),
        },
    };
    state.confirm_dialog = Some(ConfirmDialogState::delete_confirmation(
        &id,
        &name,
        return_mode,
    ));
    state.ui_mode = UiMode::ConfirmDialog;
    UpdateResult::none()
}

/// Confirmed delete: return to the origin view with the action in flight.
pub(crate) fn handle_confirm_delete(state: &mut AppState, id: String) -> UpdateResult {
    let return_mode = state
        .confirm_dialog
        .take()
        .map(|d| d.return_mode)
        .unwrap_or(UiMode::Containers);
    state.ui_mode = return_mode;

    let pending = PendingAction::Delete { id: id.clone() };
    match return_mode {
        UiMode::Detail => {
            if let Some(d) = state.detail.as_mut() {
                d.pending_action = Some(pending);
            }
        }
        _ => state.containers.pending_action = Some(pending),
    }
    UpdateResult::action(UpdateAction::DeleteContainer {
        id,
        epoch: state.epoch,
    })
}

/// Dismiss the dialog without acting.
pub(crate) fn handle_cancel_dialog(state: &mut AppState) -> UpdateResult {
    if let Some(dialog) = state.confirm_dialog.take() {
        state.ui_mode = dialog.return_mode;
    }
    UpdateResult::none()
}

/// A mutation completed; clear the in-flight token (success or failure)
/// and route the outcome into the view that dispatched it.
pub(crate) fn handle_action_finished(
    state: &mut AppState,
    epoch: u64,
    action: PendingAction,
    result: Result<Option<Container>, String>,
) -> UpdateResult {
    if !state.epoch_current(epoch) {
        debug!("Discarding stale completion for {action} (epoch {epoch})");
        return UpdateResult::none();
    }

    if let Err(ref err) = result {
        warn!("Action {action} failed: {err}");
    }

    match state.ui_mode {
        UiMode::Form => handle_form_submit_finished(state, action, result),

        UiMode::Detail => {
            if let Some(d) = state.detail.as_mut() {
                d.pending_action = None;
            }
            match (&action, result) {
                (PendingAction::Delete { .. }, Ok(_)) => {
                    // The record is gone; there is nothing left to show here.
                    UpdateResult::message(Message::ShowContainers)
                }
                (_, Ok(Some(record))) => {
                    detail::apply_record(state, record);
                    UpdateResult::none()
                }
                // Failures leave the view interactive; the detail went to
                // the diagnostic log above.
                _ => UpdateResult::none(),
            }
        }

        // Containers and SearchInput share the list view underneath.
        _ => {
            state.containers.pending_action = None;
            match result {
                // Backend-authoritative: always refetch rather than patch.
                Ok(_) => UpdateResult::message(Message::RefreshContainers),
                Err(_) => {
                    state
                        .containers
                        .store
                        .set_error(Some(fail_message(&action).to_string()));
                    UpdateResult::none()
                }
            }
        }
    }
}

/// Completion of a submit dispatched from the open form dialog.
fn handle_form_submit_finished(
    state: &mut AppState,
    action: PendingAction,
    result: Result<Option<Container>, String>,
) -> UpdateResult {
    let is_edit = state.form.as_ref().is_some_and(|f| f.is_edit());

    if is_edit {
        if let Some(d) = state.detail.as_mut() {
            d.pending_action = None;
        }
        match result {
            Ok(record) => {
                state.form = None;
                state.ui_mode = UiMode::Detail;
                if let Some(record) = record {
                    detail::apply_record(state, record);
                }
                UpdateResult::none()
            }
            Err(_) => {
                if let Some(form) = state.form.as_mut() {
                    form.hint = Some(fail_message(&action).to_string());
                }
                UpdateResult::none()
            }
        }
    } else {
        state.containers.pending_action = None;
        match result {
            Ok(_) => {
                // The form closes only once the backend confirms.
                state.form = None;
                state.ui_mode = UiMode::Containers;
                UpdateResult::message(Message::RefreshContainers)
            }
            Err(_) => {
                if let Some(form) = state.form.as_mut() {
                    form.hint = Some(fail_message(&action).to_string());
                }
                UpdateResult::none()
            }
        }
    }
}
