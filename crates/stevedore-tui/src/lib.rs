//! stevedore-tui - Terminal UI for Stevedore
//!
//! This crate provides the ratatui-based terminal interface: terminal
//! setup, event polling, rendering, widget display, and the event loop
//! that executes the app layer's actions as background API tasks.

pub mod actions;
pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
