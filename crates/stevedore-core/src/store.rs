//! In-memory container collection with setter-style mutations
//!
//! The store is an explicitly constructed value owned by the view that
//! displays it; there is no process-wide singleton. Mutations never
//! partially apply: update replaces the matching record or does nothing,
//! remove of an absent id is a no-op.

use crate::types::Container;

/// Process-local collection of container records plus transient fetch flags.
#[derive(Debug, Clone, Default)]
pub struct ContainerStore {
    containers: Vec<Container>,
    /// A list fetch is in flight.
    pub loading: bool,
    /// User-facing message from the last failed fetch, if any.
    pub error: Option<String>,
}

impl ContainerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read access to the authoritative list.
    pub fn containers(&self) -> &[Container] {
        &self.containers
    }

    pub fn len(&self) -> usize {
        self.containers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.containers.is_empty()
    }

    /// Look up a record by id.
    pub fn get(&self, id: &str) -> Option<&Container> {
        self.containers.iter().find(|c| c.id == id)
    }

    /// Replace the entire list (the post-fetch path; no incremental merge).
    pub fn set_containers(&mut self, containers: Vec<Container>) {
        self.containers = containers;
    }

    /// Append a single record.
    pub fn add_container(&mut self, container: Container) {
        self.containers.push(container);
    }

    /// Replace the record with the same id, preserving position.
    ///
    /// No-op when the id is not present.
    pub fn update_container(&mut self, container: Container) {
        if let Some(existing) = self.containers.iter_mut().find(|c| c.id == container.id) {
            *existing = container;
        }
    }

    /// Remove the record with the given id. Idempotent.
    pub fn remove_container(&mut self, id: &str) {
        self.containers.retain(|c| c.id != id);
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn set_error(&mut self, error: Option<String>) {
        self.error = error;
    }

    /// Drop all records (the list-fetch failure path).
    pub fn clear(&mut self) {
        self.containers.clear();
    }
}
