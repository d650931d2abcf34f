//! Request bodies for container creation and update

use serde::{Deserialize, Serialize};
use stevedore_core::Container;

/// Partial container record sent on create (POST) and update (PUT).
///
/// Field values are packaged verbatim from the form; the client performs
/// no validation or port parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewContainer {
    pub name: String,
    pub image: String,
    #[serde(default)]
    pub ports: String,
}

impl NewContainer {
    /// Pre-populate from an existing record (the edit path).
    pub fn from_container(container: &Container) -> Self {
        Self {
            name: container.name.clone(),
            image: container.image.clone(),
            ports: container.ports.clone(),
        }
    }
}
