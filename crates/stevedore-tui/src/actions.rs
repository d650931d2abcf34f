//! Action dispatch: spawned API tasks
//!
//! Executes [`UpdateAction`]s from the TEA update loop as background tokio
//! tasks. Each task performs a single best-effort API call and reports the
//! outcome back through the message channel; the epoch travels with the
//! completion so stale responses can be discarded.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::debug;

use stevedore_api::ApiClient;
use stevedore_app::message::Message;
use stevedore_app::{PendingAction, UpdateAction};
use stevedore_core::Container;

/// Spawn the background task for an action.
pub fn handle_action(action: UpdateAction, api: Arc<ApiClient>, msg_tx: mpsc::Sender<Message>) {
    match action {
        UpdateAction::FetchContainers { epoch } => {
            tokio::spawn(async move {
                let result = api.list_containers().await.map_err(|e| e.to_string());
                let _ = msg_tx
                    .send(Message::ContainersLoaded { epoch, result })
                    .await;
            });
        }

        UpdateAction::FetchContainer { id, epoch } => {
            tokio::spawn(async move {
                let result = api.get_container(&id).await.map_err(|e| e.to_string());
                let _ = msg_tx
                    .send(Message::ContainerLoaded { epoch, result })
                    .await;
            });
        }

        UpdateAction::CreateContainer { spec, epoch } => {
            tokio::spawn(async move {
                let result = api
                    .create_container(&spec)
                    .await
                    .map(Some)
                    .map_err(|e| e.to_string());
                send_finished(&msg_tx, epoch, PendingAction::Create, result).await;
            });
        }

        UpdateAction::UpdateContainer { id, spec, epoch } => {
            tokio::spawn(async move {
                let result = api
                    .update_container(&id, &spec)
                    .await
                    .map(Some)
                    .map_err(|e| e.to_string());
                send_finished(&msg_tx, epoch, PendingAction::Update { id }, result).await;
            });
        }

        UpdateAction::StartContainer { id, epoch } => {
            tokio::spawn(async move {
                let result = api
                    .start_container(&id)
                    .await
                    .map(Some)
                    .map_err(|e| e.to_string());
                send_finished(&msg_tx, epoch, PendingAction::Start { id }, result).await;
            });
        }

        UpdateAction::StopContainer { id, epoch } => {
            tokio::spawn(async move {
                let result = api
                    .stop_container(&id)
                    .await
                    .map(Some)
                    .map_err(|e| e.to_string());
                send_finished(&msg_tx, epoch, PendingAction::Stop { id }, result).await;
            });
        }

        UpdateAction::DeleteContainer { id, epoch } => {
            tokio::spawn(async move {
                let result = api
                    .delete_container(&id)
                    .await
                    .map(|_| None)
                    .map_err(|e| e.to_string());
                send_finished(&msg_tx, epoch, PendingAction::Delete { id }, result).await;
            });
        }

        UpdateAction::PollMonitoring {
            fetch_metrics,
            fetch_alarms,
            epoch,
        } => {
            debug!(fetch_metrics, fetch_alarms, "dispatching monitoring poll");
            if fetch_metrics {
                let api = api.clone();
                let tx = msg_tx.clone();
                tokio::spawn(async move {
                    let result = api.get_metrics().await.map_err(|e| e.to_string());
                    let _ = tx.send(Message::MetricsLoaded { epoch, result }).await;
                });
            }
            if fetch_alarms {
                tokio::spawn(async move {
                    let result = api.get_alarms().await.map_err(|e| e.to_string());
                    let _ = msg_tx.send(Message::AlarmsLoaded { epoch, result }).await;
                });
            }
        }
    }
}

async fn send_finished(
    msg_tx: &mpsc::Sender<Message>,
    epoch: u64,
    action: PendingAction,
    result: Result<Option<Container>, String>,
) {
    let _ = msg_tx
        .send(Message::ActionFinished {
            epoch,
            action,
            result,
        })
        .await;
}
