//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for UI modes
//! - `containers`: Containers list view handlers
//! - `detail`: Detail view handlers
//! - `monitoring`: Monitoring dashboard handlers
//! - `form`: Create/edit form handlers

pub(crate) mod containers;
pub(crate) mod detail;
pub(crate) mod form;
pub(crate) mod keys;
pub(crate) mod monitoring;
pub(crate) mod update;

#[cfg(test)]
mod tests;

use stevedore_api::NewContainer;

use crate::message::Message;

// Re-export main entry point
pub use update::update;

/// Actions that the event loop should perform after update
///
/// Every fetch carries the view epoch it was spawned under so that the
/// completion message can be discarded when the view has since changed.
#[derive(Debug, Clone)]
pub enum UpdateAction {
    /// Fetch the full container list
    FetchContainers { epoch: u64 },

    /// Fetch a single container by id
    FetchContainer { id: String, epoch: u64 },

    /// Create a container from the form payload
    CreateContainer { spec: NewContainer, epoch: u64 },

    /// Update a container from the form payload
    UpdateContainer {
        id: String,
        spec: NewContainer,
        epoch: u64,
    },

    /// Start a container
    StartContainer { id: String, epoch: u64 },

    /// Stop a container
    StopContainer { id: String, epoch: u64 },

    /// Delete a container (already confirmed)
    DeleteContainer { id: String, epoch: u64 },

    /// Fetch monitoring data; each resource is dispatched only when its
    /// previous request has resolved (single-flight poll)
    PollMonitoring {
        fetch_metrics: bool,
        fetch_alarms: bool,
        epoch: u64,
    },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
