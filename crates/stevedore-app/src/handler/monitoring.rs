//! Monitoring dashboard handlers
//!
//! Fetches metrics and alarms immediately on entry, then on the fixed
//! interval while the view stays active. Polling is single-flight per
//! resource: a due tick skips any resource whose previous request has not
//! resolved. Leaving the view stops the poll; stale completions are
//! discarded by the epoch check.

use stevedore_core::prelude::*;
use stevedore_core::{Alarm, MetricData};

use crate::state::{AppState, UiMode};

use super::{UpdateAction, UpdateResult};

/// Enter the dashboard and dispatch the immediate first poll.
pub(crate) fn handle_show(state: &mut AppState) -> UpdateResult {
    state.ui_mode = UiMode::Monitoring;
    state.form = None;
    state.confirm_dialog = None;
    state.detail = None;
    state.monitoring.reset_for_mount();
    let epoch = state.next_epoch();
    dispatch_poll(state, epoch, true)
}

/// Periodic tick from the event loop; polls when the interval elapsed.
pub(crate) fn handle_tick(state: &mut AppState) -> UpdateResult {
    if state.ui_mode != UiMode::Monitoring {
        return UpdateResult::none();
    }
    if !state.monitoring.poll_due() {
        return UpdateResult::none();
    }
    let epoch = state.epoch;
    dispatch_poll(state, epoch, false)
}

/// Manual refresh, ignoring the interval.
pub(crate) fn handle_refresh(state: &mut AppState) -> UpdateResult {
    if state.ui_mode != UiMode::Monitoring {
        return UpdateResult::none();
    }
    let epoch = state.epoch;
    dispatch_poll(state, epoch, false)
}

/// Dispatch one poll round for every resource not already in flight.
fn dispatch_poll(state: &mut AppState, epoch: u64, initial: bool) -> UpdateResult {
    let view = &mut state.monitoring;
    let fetch_metrics = !view.metrics_in_flight;
    let fetch_alarms = !view.alarms_in_flight;

    // Keep the cadence fixed even when a round is skipped entirely.
    view.mark_polled();

    if !fetch_metrics && !fetch_alarms {
        debug!("Skipping monitoring poll; previous requests still in flight");
        return UpdateResult::none();
    }

    if fetch_metrics {
        view.metrics_in_flight = true;
    }
    if fetch_alarms {
        view.alarms_in_flight = true;
    }
    if initial {
        trace!("Initial monitoring poll dispatched");
    }
    UpdateResult::action(UpdateAction::PollMonitoring {
        fetch_metrics,
        fetch_alarms,
        epoch,
    })
}

/// Metrics fetch completed.
pub(crate) fn handle_metrics_loaded(
    state: &mut AppState,
    epoch: u64,
    result: Result<MetricData, String>,
) -> UpdateResult {
    if !state.epoch_current(epoch) {
        debug!("Discarding stale metrics (epoch {epoch})");
        return UpdateResult::none();
    }
    let view = &mut state.monitoring;
    view.metrics_in_flight = false;
    match result {
        Ok(metrics) => {
            view.metrics = metrics;
            view.error = None;
        }
        Err(err) => {
            // Banner only; previously rendered series stay on screen.
            warn!("Metrics fetch failed: {err}");
            view.error = Some("获取指标数据失败".to_string());
        }
    }
    UpdateResult::none()
}

/// Alarms fetch completed. Failures are logged and never block the charts.
pub(crate) fn handle_alarms_loaded(
    state: &mut AppState,
    epoch: u64,
    result: Result<Vec<Alarm>, String>,
) -> UpdateResult {
    if !state.epoch_current(epoch) {
        debug!("Discarding stale alarms (epoch {epoch})");
        return UpdateResult::none();
    }
    let view = &mut state.monitoring;
    view.alarms_in_flight = false;
    match result {
        Ok(alarms) => view.alarms = alarms,
        Err(err) => warn!("Alarm fetch failed: {err}"),
    }
    UpdateResult::none()
}
