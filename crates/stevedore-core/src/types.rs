//! Core domain type definitions

use serde::{Deserialize, Serialize};

/// Application state enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    /// Console is initializing
    #[default]
    Initializing,
    /// Console is running normally
    Running,
    /// Console is shutting down
    Quitting,
}

/// The status string the backend reports for a running container.
///
/// The backend's status field is free text; this is the only value the
/// console special-cases (row color and start/stop enablement). Anything
/// else is treated as a generic "not running" state.
pub const STATUS_RUNNING: &str = "运行中";

/// A single managed workload instance, as materialized by the backend.
///
/// `id` is the only field used for identity; all list-level operations key
/// on it. `ports` is a free-text mapping description ("80:80, 3306:3306")
/// and is never parsed client-side. `created_at` is an opaque display
/// string, not a structured timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Container {
    pub id: String,
    pub name: String,
    pub image: String,
    pub status: String,
    #[serde(default)]
    pub ports: String,
    #[serde(rename = "createdAt", default)]
    pub created_at: String,
}

impl Container {
    /// Whether the backend reports this container as running.
    pub fn is_running(&self) -> bool {
        self.status == STATUS_RUNNING
    }
}
