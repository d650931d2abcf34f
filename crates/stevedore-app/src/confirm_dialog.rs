//! Confirm dialog state.
//!
//! Data model for the delete confirmation dialog. The rendering widget
//! lives in stevedore-tui.

use crate::message::Message;
use crate::state::UiMode;

#[derive(Debug, Clone)]
pub struct ConfirmDialogState {
    pub title: String,
    pub message: String,
    /// (label, message emitted when activated)
    pub options: Vec<(String, Message)>,
    /// Currently highlighted option.
    pub selected: usize,
    /// The view underneath the dialog; restored on cancel.
    pub return_mode: UiMode,
}

impl ConfirmDialogState {
    /// Create a generic confirmation dialog
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        options: Vec<(&str, Message)>,
        return_mode: UiMode,
    ) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            options: options
                .into_iter()
                .map(|(label, msg)| (label.to_string(), msg))
                .collect(),
            selected: 0,
            return_mode,
        }
    }

    /// Delete confirmation for a container, defaulting to the cancel option.
    pub fn delete_confirmation(id: &str, name: &str, return_mode: UiMode) -> Self {
        let mut dialog = Self::new(
            "删除容器",
            format!("确定要删除此容器吗？({name})"),
            vec![
                (
                    "删除",
                    Message::ConfirmDelete { id: id.to_string() },
                ),
                ("取消", Message::CancelDialog),
            ],
            return_mode,
        );
        dialog.selected = 1;
        dialog
    }

    /// Toggle between the two options.
    pub fn toggle(&mut self) {
        if !self.options.is_empty() {
            self.selected = (self.selected + 1) % self.options.len();
        }
    }

    /// The message for the highlighted option.
    pub fn selected_message(&self) -> Option<Message> {
        self.options.get(self.selected).map(|(_, msg)| msg.clone())
    }
}
