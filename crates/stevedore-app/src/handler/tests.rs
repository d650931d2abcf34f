//! Handler integration tests: message flows across the TEA update loop

use std::time::{Duration, Instant};

use crate::config::Settings;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, PendingAction, UiMode};
use stevedore_core::{Container, STATUS_RUNNING};

use super::{update, UpdateAction, UpdateResult};

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

/// A state that has already mounted the list view and received records.
fn state_with_containers(records: Vec<Container>) -> AppState {
    let mut state = AppState::with_settings(Settings::default());
    let result = update(&mut state, Message::ShowContainers);
    assert!(matches!(
        result.action,
        Some(UpdateAction::FetchContainers { .. })
    ));
    let epoch = state.epoch;
    update(
        &mut state,
        Message::ContainersLoaded {
            epoch,
            result: Ok(records),
        },
    );
    state
}

fn drain(state: &mut AppState, mut result: UpdateResult) -> Vec<UpdateAction> {
    let mut actions = Vec::new();
    loop {
        if let Some(action) = result.action.take() {
            actions.push(action);
        }
        match result.message.take() {
            Some(msg) => result = update(state, msg),
            None => break,
        }
    }
    actions
}

// ─────────────────────────────────────────────────────────────────────────────
// List fetch flow
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_mount_fetches_and_sets_loading() {
    let mut state = AppState::new();
    let result = update(&mut state, Message::ShowContainers);
    assert!(state.containers.store.loading);
    assert!(state.containers.store.error.is_none());
    match result.action {
        Some(UpdateAction::FetchContainers { epoch }) => assert_eq!(epoch, state.epoch),
        other => panic!("expected FetchContainers, got {other:?}"),
    }
}

#[test]
fn test_loaded_replaces_list_and_clears_error() {
    let mut state = AppState::new();
    update(&mut state, Message::ShowContainers);
    state.containers.store.set_error(Some("old".to_string()));
    let epoch = state.epoch;
    update(
        &mut state,
        Message::ContainersLoaded {
            epoch,
            result: Ok(vec![container("a", "web", STATUS_RUNNING)]),
        },
    );
    assert!(!state.containers.store.loading);
    assert!(state.containers.store.error.is_none());
    assert_eq!(state.containers.store.len(), 1);
}

#[test]
fn test_loaded_failure_sets_message_and_clears_list() {
    let mut state = state_with_containers(vec![container("a", "web", STATUS_RUNNING)]);
    update(&mut state, Message::RefreshContainers);
    let epoch = state.epoch;
    update(
        &mut state,
        Message::ContainersLoaded {
            epoch,
            result: Err("connection refused".to_string()),
        },
    );
    assert_eq!(
        state.containers.store.error.as_deref(),
        Some("获取容器列表失败")
    );
    assert!(state.containers.store.is_empty());
}

#[test]
fn test_stale_list_response_is_discarded() {
    let mut state = AppState::new();
    update(&mut state, Message::ShowContainers);
    let stale_epoch = state.epoch;

    // Navigating away invalidates the in-flight fetch.
    update(&mut state, Message::ShowMonitoring);
    update(
        &mut state,
        Message::ContainersLoaded {
            epoch: stale_epoch,
            result: Ok(vec![container("a", "web", STATUS_RUNNING)]),
        },
    );
    assert!(state.containers.store.is_empty());
}

// ─────────────────────────────────────────────────────────────────────────────
// Action gating
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_start_dispatches_and_sets_pending() {
    let mut state = state_with_containers(vec![container("a", "web", "已停止")]);
    let result = update(
        &mut state,
        Message::StartContainer {
            id: "a".to_string(),
        },
    );
    assert!(matches!(
        result.action,
        Some(UpdateAction::StartContainer { .. })
    ));
    assert_eq!(
        state.containers.pending_action,
        Some(PendingAction::Start {
            id: "a".to_string()
        })
    );
}

#[test]
fn test_second_action_refused_while_one_in_flight() {
    let mut state = state_with_containers(vec![
        container("a", "web", "已停止"),
        container("b", "db", STATUS_RUNNING),
    ]);
    update(
        &mut state,
        Message::StartContainer {
            id: "a".to_string(),
        },
    );
    // Any further mutation is gated, not just the same row.
    let result = update(
        &mut state,
        Message::StopContainer {
            id: "b".to_string(),
        },
    );
    assert!(result.action.is_none());
    let result = update(&mut state, Message::OpenCreateForm);
    assert!(result.action.is_none());
    assert_eq!(state.ui_mode, UiMode::Containers);
}

#[test]
fn test_start_refused_for_running_container() {
    let mut state = state_with_containers(vec![container("a", "web", STATUS_RUNNING)]);
    let result = update(
        &mut state,
        Message::StartContainer {
            id: "a".to_string(),
        },
    );
    assert!(result.action.is_none());
    assert!(state.containers.pending_action.is_none());
}

#[test]
fn test_stop_refused_for_stopped_container() {
    let mut state = state_with_containers(vec![container("a", "web", "已停止")]);
    let result = update(
        &mut state,
        Message::StopContainer {
            id: "a".to_string(),
        },
    );
    assert!(result.action.is_none());
}

#[test]
fn test_stop_running_container_then_refetch() {
    let mut state = state_with_containers(vec![
        container("a", "web", STATUS_RUNNING),
        container("b", "db", "已停止"),
    ]);
    let result = update(
        &mut state,
        Message::StopContainer {
            id: "a".to_string(),
        },
    );
    assert!(matches!(
        result.action,
        Some(UpdateAction::StopContainer { .. })
    ));

    // Completion clears the flag and triggers a full list refetch.
    let epoch = state.epoch;
    let result = update(
        &mut state,
        Message::ActionFinished {
            epoch,
            action: PendingAction::Stop {
                id: "a".to_string(),
            },
            result: Ok(Some(container("a", "web", "已停止"))),
        },
    );
    assert!(state.containers.pending_action.is_none());
    let actions = drain(&mut state, result);
    assert!(matches!(
        actions.as_slice(),
        [UpdateAction::FetchContainers { .. }]
    ));
    assert!(state.containers.store.loading);
}

#[test]
fn test_flag_clears_on_failure_too() {
    let mut state = state_with_containers(vec![container("a", "web", "已停止")]);
    update(
        &mut state,
        Message::StartContainer {
            id: "a".to_string(),
        },
    );
    let epoch = state.epoch;
    let result = update(
        &mut state,
        Message::ActionFinished {
            epoch,
            action: PendingAction::Start {
                id: "a".to_string(),
            },
            result: Err("500 internal".to_string()),
        },
    );
    assert!(state.containers.pending_action.is_none());
    assert!(result.message.is_none());
    assert_eq!(
        state.containers.store.error.as_deref(),
        Some("启动容器失败")
    );
}

// ─────────────────────────────────────────────────────────────────────────────
// Delete confirmation
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_delete_requires_confirmation() {
    let mut state = state_with_containers(vec![container("a", "web", "已停止")]);
    let result = update(
        &mut state,
        Message::RequestDelete {
            id: "a".to_string(),
        },
    );
    // No request yet, only the dialog.
    assert!(result.action.is_none());
    assert_eq!(state.ui_mode, UiMode::ConfirmDialog);
    assert!(state.confirm_dialog.is_some());

    let result = update(
        &mut state,
        Message::ConfirmDelete {
            id: "a".to_string(),
        },
    );
    assert!(matches!(
        result.action,
        Some(UpdateAction::DeleteContainer { .. })
    ));
    assert_eq!(state.ui_mode, UiMode::Containers);
    assert_eq!(
        state.containers.pending_action,
        Some(PendingAction::Delete {
            id: "a".to_string()
        })
    );
}

#[test]
fn test_cancel_dialog_restores_view_without_request() {
    let mut state = state_with_containers(vec![container("a", "web", "已停止")]);
    update(
        &mut state,
        Message::RequestDelete {
            id: "a".to_string(),
        },
    );
    let result = update(&mut state, Message::CancelDialog);
    assert!(result.action.is_none());
    assert_eq!(state.ui_mode, UiMode::Containers);
    assert!(state.confirm_dialog.is_none());
    assert!(state.containers.pending_action.is_none());
}

// ─────────────────────────────────────────────────────────────────────────────
// Detail view
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_detail_fetch_error_disables_actions() {
    let mut state = AppState::new();
    let result = update(
        &mut state,
        Message::ShowDetail {
            id: "missing".to_string(),
        },
    );
    assert!(matches!(
        result.action,
        Some(UpdateAction::FetchContainer { .. })
    ));

    let epoch = state.epoch;
    update(
        &mut state,
        Message::ContainerLoaded {
            epoch,
            result: Err("404 not found".to_string()),
        },
    );
    let detail = state.detail.as_ref().unwrap();
    assert_eq!(detail.error.as_deref(), Some("获取容器详情失败"));
    assert!(!detail.actions_enabled());

    // No lifecycle action can be issued from the error state.
    let result = update(
        &mut state,
        Message::StartContainer {
            id: "missing".to_string(),
        },
    );
    assert!(result.action.is_none());
}

#[test]
fn test_detail_stop_assigns_returned_record() {
    let mut state = AppState::new();
    update(
        &mut state,
        Message::ShowDetail {
            id: "a".to_string(),
        },
    );
    let epoch = state.epoch;
    update(
        &mut state,
        Message::ContainerLoaded {
            epoch,
            result: Ok(container("a", "web", STATUS_RUNNING)),
        },
    );

    let result = update(
        &mut state,
        Message::StopContainer {
            id: "a".to_string(),
        },
    );
    assert!(matches!(
        result.action,
        Some(UpdateAction::StopContainer { .. })
    ));

    update(
        &mut state,
        Message::ActionFinished {
            epoch,
            action: PendingAction::Stop {
                id: "a".to_string(),
            },
            result: Ok(Some(container("a", "web", "已停止"))),
        },
    );
    let detail = state.detail.as_ref().unwrap();
    assert!(detail.pending_action.is_none());
    assert_eq!(detail.container.as_ref().unwrap().status, "已停止");
}

#[test]
fn test_detail_delete_navigates_back_to_list() {
    let mut state = AppState::new();
    update(
        &mut state,
        Message::ShowDetail {
            id: "a".to_string(),
        },
    );
    let epoch = state.epoch;
    update(
        &mut state,
        Message::ContainerLoaded {
            epoch,
            result: Ok(container("a", "web", "已停止")),
        },
    );
    update(
        &mut state,
        Message::RequestDelete {
            id: "a".to_string(),
        },
    );
    update(
        &mut state,
        Message::ConfirmDelete {
            id: "a".to_string(),
        },
    );
    assert_eq!(state.ui_mode, UiMode::Detail);

    let result = update(
        &mut state,
        Message::ActionFinished {
            epoch,
            action: PendingAction::Delete {
                id: "a".to_string(),
            },
            result: Ok(None),
        },
    );
    let actions = drain(&mut state, result);
    // Back on the list view with a fresh fetch, not a refetch of the
    // now-gone detail.
    assert_eq!(state.ui_mode, UiMode::Containers);
    assert!(matches!(
        actions.as_slice(),
        [UpdateAction::FetchContainers { .. }]
    ));
}

// ─────────────────────────────────────────────────────────────────────────────
// Form
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_create_flow_closes_form_and_refetches_on_success() {
    let mut state = state_with_containers(vec![]);
    update(&mut state, Message::OpenCreateForm);
    assert_eq!(state.ui_mode, UiMode::Form);

    for c in "web".chars() {
        update(&mut state, Message::FormInput(c));
    }
    update(&mut state, Message::FormNextField);
    for c in "nginx".chars() {
        update(&mut state, Message::FormInput(c));
    }

    let result = update(&mut state, Message::FormSubmit);
    match &result.action {
        Some(UpdateAction::CreateContainer { spec, .. }) => {
            assert_eq!(spec.name, "web");
            assert_eq!(spec.image, "nginx");
            assert_eq!(spec.ports, "");
        }
        other => panic!("expected CreateContainer, got {other:?}"),
    }
    assert_eq!(state.containers.pending_action, Some(PendingAction::Create));
    // The dialog stays open until the backend confirms.
    assert_eq!(state.ui_mode, UiMode::Form);

    let epoch = state.epoch;
    let result = update(
        &mut state,
        Message::ActionFinished {
            epoch,
            action: PendingAction::Create,
            result: Ok(Some(container("new", "web", "已停止"))),
        },
    );
    let actions = drain(&mut state, result);
    assert_eq!(state.ui_mode, UiMode::Containers);
    assert!(state.form.is_none());
    assert!(matches!(
        actions.as_slice(),
        [UpdateAction::FetchContainers { .. }]
    ));
}

#[test]
fn test_submit_refused_while_required_fields_empty() {
    let mut state = state_with_containers(vec![]);
    update(&mut state, Message::OpenCreateForm);
    let result = update(&mut state, Message::FormSubmit);
    assert!(result.action.is_none());
    let form = state.form.as_ref().unwrap();
    assert!(form.hint.is_some());
    assert_eq!(state.ui_mode, UiMode::Form);
}

#[test]
fn test_create_failure_keeps_form_open_with_hint() {
    let mut state = state_with_containers(vec![]);
    update(&mut state, Message::OpenCreateForm);
    for c in "web".chars() {
        update(&mut state, Message::FormInput(c));
    }
    update(&mut state, Message::FormNextField);
    for c in "nginx".chars() {
        update(&mut state, Message::FormInput(c));
    }
    update(&mut state, Message::FormSubmit);

    let epoch = state.epoch;
    update(
        &mut state,
        Message::ActionFinished {
            epoch,
            action: PendingAction::Create,
            result: Err("image not found".to_string()),
        },
    );
    assert_eq!(state.ui_mode, UiMode::Form);
    let form = state.form.as_ref().unwrap();
    assert_eq!(form.hint.as_deref(), Some("创建容器失败"));
    // Gate released so the user can retry.
    assert!(state.containers.pending_action.is_none());
}

#[test]
fn test_edit_flow_updates_detail_record() {
    let mut state = AppState::new();
    update(
        &mut state,
        Message::ShowDetail {
            id: "a".to_string(),
        },
    );
    let epoch = state.epoch;
    update(
        &mut state,
        Message::ContainerLoaded {
            epoch,
            result: Ok(container("a", "web", "已停止")),
        },
    );

    update(&mut state, Message::OpenEditForm);
    assert_eq!(state.ui_mode, UiMode::Form);
    let form = state.form.as_ref().unwrap();
    assert!(form.is_edit());
    assert_eq!(form.name, "web");

    let result = update(&mut state, Message::FormSubmit);
    assert!(matches!(
        result.action,
        Some(UpdateAction::UpdateContainer { .. })
    ));

    let mut updated = container("a", "web-renamed", "已停止");
    updated.ports = "8080:80".to_string();
    update(
        &mut state,
        Message::ActionFinished {
            epoch,
            action: PendingAction::Update {
                id: "a".to_string(),
            },
            result: Ok(Some(updated)),
        },
    );
    assert_eq!(state.ui_mode, UiMode::Detail);
    assert!(state.form.is_none());
    let detail = state.detail.as_ref().unwrap();
    assert_eq!(detail.container.as_ref().unwrap().name, "web-renamed");
}

// ─────────────────────────────────────────────────────────────────────────────
// Monitoring poll
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_monitoring_mount_polls_both_resources() {
    let mut state = AppState::new();
    let result = update(&mut state, Message::ShowMonitoring);
    match result.action {
        Some(UpdateAction::PollMonitoring {
            fetch_metrics,
            fetch_alarms,
            epoch,
        }) => {
            assert!(fetch_metrics);
            assert!(fetch_alarms);
            assert_eq!(epoch, state.epoch);
        }
        other => panic!("expected PollMonitoring, got {other:?}"),
    }
    assert!(state.monitoring.metrics_in_flight);
    assert!(state.monitoring.alarms_in_flight);
}

#[test]
fn test_tick_before_interval_does_not_poll() {
    let mut state = AppState::new();
    update(&mut state, Message::ShowMonitoring);
    state.monitoring.metrics_in_flight = false;
    state.monitoring.alarms_in_flight = false;
    let result = update(&mut state, Message::Tick);
    assert!(result.action.is_none());
}

#[test]
fn test_tick_after_interval_polls_again() {
    let mut state = AppState::new();
    update(&mut state, Message::ShowMonitoring);
    state.monitoring.metrics_in_flight = false;
    state.monitoring.alarms_in_flight = false;
    state.monitoring.last_poll = Some(Instant::now() - state.monitoring.interval);

    let result = update(&mut state, Message::Tick);
    assert!(matches!(
        result.action,
        Some(UpdateAction::PollMonitoring {
            fetch_metrics: true,
            fetch_alarms: true,
            ..
        })
    ));
}

#[test]
fn test_poll_is_single_flight_per_resource() {
    let mut state = AppState::new();
    update(&mut state, Message::ShowMonitoring);
    // Metrics still pending from the previous round, alarms resolved.
    state.monitoring.alarms_in_flight = false;
    state.monitoring.last_poll = Some(Instant::now() - state.monitoring.interval);

    let result = update(&mut state, Message::Tick);
    assert!(matches!(
        result.action,
        Some(UpdateAction::PollMonitoring {
            fetch_metrics: false,
            fetch_alarms: true,
            ..
        })
    ));

    // Both pending: the round is skipped entirely.
    state.monitoring.metrics_in_flight = true;
    state.monitoring.alarms_in_flight = true;
    state.monitoring.last_poll = Some(Instant::now() - state.monitoring.interval);
    let result = update(&mut state, Message::Tick);
    assert!(result.action.is_none());
}

#[test]
fn test_metrics_failure_sets_banner_and_keeps_data() {
    let mut state = AppState::new();
    update(&mut state, Message::ShowMonitoring);
    let epoch = state.epoch;

    let mut metrics = stevedore_core::MetricData::default();
    metrics.cpu.push(stevedore_core::ResourceMetric {
        timestamp: "10:00".to_string(),
        value: 42.0,
    });
    update(
        &mut state,
        Message::MetricsLoaded {
            epoch,
            result: Ok(metrics),
        },
    );
    assert!(state.monitoring.error.is_none());

    update(
        &mut state,
        Message::MetricsLoaded {
            epoch,
            result: Err("timeout".to_string()),
        },
    );
    assert_eq!(
        state.monitoring.error.as_deref(),
        Some("获取指标数据失败")
    );
    // Previously rendered series survive the failed poll.
    assert_eq!(state.monitoring.metrics.cpu.len(), 1);
    assert!(!state.monitoring.metrics_in_flight);
}

#[test]
fn test_alarm_failure_is_silent_for_the_user() {
    let mut state = AppState::new();
    update(&mut state, Message::ShowMonitoring);
    let epoch = state.epoch;
    update(
        &mut state,
        Message::AlarmsLoaded {
            epoch,
            result: Err("boom".to_string()),
        },
    );
    assert!(state.monitoring.error.is_none());
    assert!(!state.monitoring.alarms_in_flight);
}

#[test]
fn test_leaving_monitoring_cancels_polling() {
    let mut state = AppState::new();
    update(&mut state, Message::ShowMonitoring);
    let stale_epoch = state.epoch;
    update(&mut state, Message::ShowContainers);

    // Ticks no longer poll once the view is unmounted.
    state.monitoring.metrics_in_flight = false;
    state.monitoring.alarms_in_flight = false;
    state.monitoring.last_poll = Some(Instant::now() - Duration::from_secs(600));
    let result = update(&mut state, Message::Tick);
    assert!(result.action.is_none());

    // A response that raced the unmount is discarded.
    update(
        &mut state,
        Message::MetricsLoaded {
            epoch: stale_epoch,
            result: Ok(stevedore_core::MetricData::default()),
        },
    );
    assert!(state.monitoring.metrics.is_empty());
}

// ─────────────────────────────────────────────────────────────────────────────
// Keys
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_q_quits_from_list_view() {
    let mut state = state_with_containers(vec![]);
    let result = update(&mut state, Message::Key(InputKey::Char('q')));
    drain(&mut state, result);
    assert!(state.should_quit());
}

#[test]
fn test_search_keys_drive_filter() {
    let mut state = state_with_containers(vec![
        container("a", "web", "已停止"),
        container("b", "db", "已停止"),
    ]);
    update(&mut state, Message::Key(InputKey::Char('/')));
    assert_eq!(state.ui_mode, UiMode::SearchInput);
    let result = update(&mut state, Message::Key(InputKey::Char('w')));
    drain(&mut state, result);
    assert_eq!(state.containers.search, "w");
    assert_eq!(state.containers.filtered().len(), 1);

    // Esc leaves the prompt but keeps the query applied.
    update(&mut state, Message::Key(InputKey::Esc));
    assert_eq!(state.ui_mode, UiMode::Containers);
    assert_eq!(state.containers.search, "w");
}

#[test]
fn test_enter_opens_detail_for_selected_row() {
    let mut state = state_with_containers(vec![container("a", "web", "已停止")]);
    let result = update(&mut state, Message::Key(InputKey::Enter));
    let actions = drain(&mut state, result);
    assert_eq!(state.ui_mode, UiMode::Detail);
    assert!(matches!(
        actions.as_slice(),
        [UpdateAction::FetchContainer { .. }]
    ));
    assert_eq!(state.detail.as_ref().unwrap().id, "a");
}
