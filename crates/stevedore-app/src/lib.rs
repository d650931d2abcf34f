//! stevedore-app - Application state and orchestration for Stevedore
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: the [`AppState`] model, the [`Message`] enum, and the
//! [`update`] function that maps messages to state transitions and
//! [`UpdateAction`]s for the event loop to execute. Configuration loading
//! lives here too.

pub mod config;
pub mod confirm_dialog;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod state;

// Re-export primary types
pub use config::Settings;
pub use handler::{update, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::{AppState, PendingAction, UiMode};
