//! Create/edit form handlers
//!
//! The form is a modal over the list (create) or detail (edit) view. It
//! packages field values verbatim; the only check is the required-field
//! rule. The dialog stays open until the submit succeeds.

use crate::state::{AppState, FormMode, FormState, PendingAction, UiMode};

use super::{UpdateAction, UpdateResult};

/// Open the blank create form over the list view.
pub(crate) fn handle_open_create(state: &mut AppState) -> UpdateResult {
    if !state.on_containers_view() || state.containers.pending_action.is_some() {
        return UpdateResult::none();
    }
    state.form = Some(FormState::create());
    state.ui_mode = UiMode::Form;
    UpdateResult::none()
}

/// Open the pre-populated edit form over the detail view.
pub(crate) fn handle_open_edit(state: &mut AppState) -> UpdateResult {
    if state.ui_mode != UiMode::Detail {
        return UpdateResult::none();
    }
    let Some(detail) = state.detail.as_ref() else {
        return UpdateResult::none();
    };
    if !detail.actions_enabled() {
        return UpdateResult::none();
    }
    let Some(container) = detail.container.as_ref() else {
        return UpdateResult::none();
    };
    state.form = Some(FormState::edit(container));
    state.ui_mode = UiMode::Form;
    UpdateResult::none()
}

pub(crate) fn handle_input(state: &mut AppState, c: char) -> UpdateResult {
    if let Some(form) = state.form.as_mut() {
        form.input(c);
    }
    UpdateResult::none()
}

pub(crate) fn handle_backspace(state: &mut AppState) -> UpdateResult {
    if let Some(form) = state.form.as_mut() {
        form.backspace();
    }
    UpdateResult::none()
}

pub(crate) fn handle_next_field(state: &mut AppState) -> UpdateResult {
    if let Some(form) = state.form.as_mut() {
        form.next_field();
    }
    UpdateResult::none()
}

pub(crate) fn handle_prev_field(state: &mut AppState) -> UpdateResult {
    if let Some(form) = state.form.as_mut() {
        form.prev_field();
    }
    UpdateResult::none()
}

/// Submit: required fields must be present, then dispatch create or update
/// with the in-flight token set on the origin view.
pub(crate) fn handle_submit(state: &mut AppState) -> UpdateResult {
    let epoch = state.epoch;
    let Some(form) = state.form.as_mut() else {
        return UpdateResult::none();
    };

    if form.missing_required() {
        form.hint = Some("容器名称和镜像不能为空".to_string());
        return UpdateResult::none();
    }

    let spec = form.to_payload();
    match form.mode.clone() {
        FormMode::Create => {
            if state.containers.pending_action.is_some() {
                return UpdateResult::none();
            }
            state.containers.pending_action = Some(PendingAction::Create);
            UpdateResult::action(UpdateAction::CreateContainer { spec, epoch })
        }
        FormMode::Edit { id } => {
            let Some(detail) = state.detail.as_mut() else {
                return UpdateResult::none();
            };
            if detail.pending_action.is_some() {
                return UpdateResult::none();
            }
            detail.pending_action = Some(PendingAction::Update { id: id.clone() });
            UpdateResult::action(UpdateAction::UpdateContainer { id, spec, epoch })
        }
    }
}

/// Close the form without submitting; any in-flight submit keeps running
/// and completes against the origin view.
pub(crate) fn handle_cancel(state: &mut AppState) -> UpdateResult {
    if let Some(form) = state.form.take() {
        state.ui_mode = if form.is_edit() {
            UiMode::Detail
        } else {
            UiMode::Containers
        };
    }
    UpdateResult::none()
}
