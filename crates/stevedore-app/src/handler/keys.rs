//! Key event handlers for UI modes
//!
//! Translates abstract key events into messages based on the current UI
//! mode. Local navigation (row selection, paging) mutates view state
//! directly; everything with side effects goes through a message.

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, UiMode};

/// Route a key event to a message for the current UI mode.
pub(crate) fn handle_key(state: &mut AppState, key: InputKey) -> Option<Message> {
    // Ctrl+C quits from any mode.
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    match state.ui_mode {
        UiMode::Containers => handle_containers_key(state, key),
        UiMode::SearchInput => handle_search_key(state, key),
        UiMode::Detail => handle_detail_key(state, key),
        UiMode::Monitoring => handle_monitoring_key(key),
        UiMode::Form => handle_form_key(key),
        UiMode::ConfirmDialog => handle_dialog_key(state, key),
    }
}

fn handle_containers_key(state: &mut AppState, key: InputKey) -> Option<Message> {
    let view = &mut state.containers;
    match key {
        InputKey::Char('q') => Some(Message::Quit),

        // Row navigation
        InputKey::Up | InputKey::Char('k') => {
            view.select_previous();
            None
        }
        InputKey::Down | InputKey::Char('j') => {
            view.select_next();
            None
        }

        // Pagination
        InputKey::Left | InputKey::PageUp => {
            view.prev_page();
            None
        }
        InputKey::Right | InputKey::PageDown => {
            view.next_page();
            None
        }
        InputKey::Char('z') => {
            view.cycle_page_size();
            None
        }

        // Search
        InputKey::Char('/') => {
            state.ui_mode = UiMode::SearchInput;
            None
        }

        // Fetch / navigation
        InputKey::Char('r') => Some(Message::RefreshContainers),
        InputKey::Enter => view
            .selected_container()
            .map(|c| Message::ShowDetail { id: c.id.clone() }),
        InputKey::Tab | InputKey::Char('m') => Some(Message::ShowMonitoring),

        // Lifecycle
        InputKey::Char('c') => Some(Message::OpenCreateForm),
        InputKey::Char('s') => view
            .selected_container()
            .map(|c| Message::StartContainer { id: c.id.clone() }),
        InputKey::Char('x') => view
            .selected_container()
            .map(|c| Message::StopContainer { id: c.id.clone() }),
        InputKey::Char('d') => view
            .selected_container()
            .map(|c| Message::RequestDelete { id: c.id.clone() }),

        _ => None,
    }
}

fn handle_search_key(state: &mut AppState, key: InputKey) -> Option<Message> {
    match key {
        // Leave the prompt; the query stays applied.
        InputKey::Esc | InputKey::Enter => {
            state.ui_mode = UiMode::Containers;
            None
        }
        InputKey::Char(c) => {
            let mut text = state.containers.search.clone();
            text.push(c);
            Some(Message::SearchChanged { text })
        }
        InputKey::Backspace => {
            let mut text = state.containers.search.clone();
            text.pop();
            Some(Message::SearchChanged { text })
        }
        InputKey::CharCtrl('u') => Some(Message::SearchChanged {
            text: String::new(),
        }),
        _ => None,
    }
}

fn handle_detail_key(state: &AppState, key: InputKey) -> Option<Message> {
    let detail = state.detail.as_ref()?;
    match key {
        InputKey::Char('q') => Some(Message::Quit),
        InputKey::Esc | InputKey::Backspace | InputKey::Char('b') => Some(Message::ShowContainers),
        InputKey::Char('r') => Some(Message::ShowDetail {
            id: detail.id.clone(),
        }),
        InputKey::Char('s') => Some(Message::StartContainer {
            id: detail.id.clone(),
        }),
        InputKey::Char('x') => Some(Message::StopContainer {
            id: detail.id.clone(),
        }),
        InputKey::Char('d') => Some(Message::RequestDelete {
            id: detail.id.clone(),
        }),
        InputKey::Char('e') => Some(Message::OpenEditForm),
        _ => None,
    }
}

fn handle_monitoring_key(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') => Some(Message::Quit),
        InputKey::Esc | InputKey::Tab | InputKey::Char('m') => Some(Message::ShowContainers),
        InputKey::Char('r') => Some(Message::RefreshMonitoring),
        _ => None,
    }
}

fn handle_form_key(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::FormCancel),
        InputKey::Enter => Some(Message::FormSubmit),
        InputKey::Tab | InputKey::Down => Some(Message::FormNextField),
        InputKey::BackTab | InputKey::Up => Some(Message::FormPrevField),
        InputKey::Backspace => Some(Message::FormBackspace),
        InputKey::Char(c) => Some(Message::FormInput(c)),
        _ => None,
    }
}

fn handle_dialog_key(state: &AppState, key: InputKey) -> Option<Message> {
    let dialog = state.confirm_dialog.as_ref()?;
    match key {
        InputKey::Esc | InputKey::Char('n') => Some(Message::CancelDialog),
        InputKey::Char('y') => dialog
            .options
            .first()
            .map(|(_, msg)| msg.clone()),
        InputKey::Enter => dialog.selected_message(),
        InputKey::Left | InputKey::Right | InputKey::Tab => Some(Message::DialogToggle),
        _ => None,
    }
}
