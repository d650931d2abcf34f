//! Main TUI runner - entry point and event loop
//!
//! Contains the core application lifecycle:
//! - `run`: Main entry point with loaded settings
//! - `run_loop`: Main event loop processing terminal and completion events

use std::sync::Arc;

use tokio::sync::mpsc;

use stevedore_api::ApiClient;
use stevedore_app::handler;
use stevedore_app::message::Message;
use stevedore_app::state::AppState;
use stevedore_app::Settings;
use stevedore_core::prelude::*;
use stevedore_core::AppPhase;

use super::{actions, event, render, terminal};

/// Run the TUI application with the given settings
pub async fn run(settings: Settings) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let api = Arc::new(ApiClient::new(&settings.api.base_url)?);
    info!("Using API at {}", api.base_url());

    // Initialize terminal
    let mut term = ratatui::init();

    let mut state = AppState::with_settings(settings);
    state.phase = AppPhase::Running;

    // Unified message channel for background task completions
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

    // Signal handler (sends Message::Quit on Ctrl+C delivered as SIGINT)
    spawn_signal_handler(msg_tx.clone());

    // Mount the landing view; this dispatches the initial list fetch.
    process_message(&mut state, Message::ShowContainers, &api, &msg_tx);

    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx, api);

    // Restore terminal
    ratatui::restore();

    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    api: Arc<ApiClient>,
) -> Result<()> {
    while !state.should_quit() {
        // Process completion messages from background tasks (non-blocking)
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, &api, &msg_tx);
        }

        // Render
        terminal.draw(|frame| render::view(frame, state))?;

        // Handle terminal events (50ms timeout produces Tick)
        if let Some(message) = event::poll()? {
            process_message(state, message, &api, &msg_tx);
        }
    }

    Ok(())
}

/// Process a message through the TEA update function, dispatching any
/// resulting action and follow-up messages.
fn process_message(
    state: &mut AppState,
    message: Message,
    api: &Arc<ApiClient>,
    msg_tx: &mpsc::Sender<Message>,
) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            actions::handle_action(action, api.clone(), msg_tx.clone());
        }

        // Continue with follow-up message
        msg = result.message;
    }
}

/// Forward SIGINT/SIGTERM as a quit message so the terminal is restored.
fn spawn_signal_handler(msg_tx: mpsc::Sender<Message>) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = msg_tx.send(Message::Quit).await;
        }
    });
}
