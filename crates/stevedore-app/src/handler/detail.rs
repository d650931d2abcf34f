//! Detail view handlers
//!
//! Same gating policy as the list view, scoped to one identifier.
//! Start/stop assign the backend's returned record; delete navigates back
//! to the list.

use stevedore_core::prelude::*;
use stevedore_core::Container;

use crate::state::{AppState, DetailViewState, PendingAction, UiMode};

use super::{UpdateAction, UpdateResult};

/// Enter the detail view and fetch the record.
pub(crate) fn handle_show(state: &mut AppState, id: String) -> UpdateResult {
    state.ui_mode = UiMode::Detail;
    state.form = None;
    state.confirm_dialog = None;
    state.detail = Some(DetailViewState::new(id.clone()));
    let epoch = state.next_epoch();
    UpdateResult::action(UpdateAction::FetchContainer { id, epoch })
}

/// Single-record fetch completed.
pub(crate) fn handle_loaded(
    state: &mut AppState,
    epoch: u64,
    result: Result<Container, String>,
) -> UpdateResult {
    if !state.epoch_current(epoch) {
        debug!("Discarding stale container detail (epoch {epoch})");
        return UpdateResult::none();
    }
    let Some(detail) = state.detail.as_mut() else {
        return UpdateResult::none();
    };

    detail.loading = false;
    match result {
        Ok(container) => {
            detail.container = Some(container);
            detail.error = None;
        }
        Err(err) => {
            // NotFound and transport failures alike collapse to the one
            // user-facing message; the distinction lives in the log.
            warn!("Container detail fetch failed: {err}");
            detail.error = Some("获取容器详情失败".to_string());
        }
    }
    UpdateResult::none()
}

pub(crate) fn handle_start(state: &mut AppState, id: String) -> UpdateResult {
    let epoch = state.epoch;
    let Some(detail) = state.detail.as_mut() else {
        return UpdateResult::none();
    };
    if !detail.actions_enabled() {
        return UpdateResult::none();
    }
    let running = detail.container.as_ref().map(|c| c.is_running());
    if running != Some(false) {
        return UpdateResult::none();
    }
    detail.pending_action = Some(PendingAction::Start { id: id.clone() });
    UpdateResult::action(UpdateAction::StartContainer { id, epoch })
}

pub(crate) fn handle_stop(state: &mut AppState, id: String) -> UpdateResult {
    let epoch = state.epoch;
    let Some(detail) = state.detail.as_mut() else {
        return UpdateResult::none();
    };
    if !detail.actions_enabled() {
        return UpdateResult::none();
    }
    let running = detail.container.as_ref().map(|c| c.is_running());
    if running != Some(true) {
        return UpdateResult::none();
    }
    detail.pending_action = Some(PendingAction::Stop { id: id.clone() });
    UpdateResult::action(UpdateAction::StopContainer { id, epoch })
}

/// Assign the backend's updated record to the mounted detail view.
pub(crate) fn apply_record(state: &mut AppState, record: Container) {
    if let Some(detail) = state.detail.as_mut() {
        detail.container = Some(record);
        detail.error = None;
    }
}
