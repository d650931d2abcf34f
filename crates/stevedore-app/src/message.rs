//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;
use crate::state::PendingAction;
use stevedore_core::{Alarm, Container, MetricData};

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (drives the monitoring poll)
    Tick,

    /// Quit the application (q, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // View Navigation
    // ─────────────────────────────────────────────────────────
    /// Enter the containers list view and fetch the full list
    ShowContainers,
    /// Enter the detail view for one container and fetch it
    ShowDetail { id: String },
    /// Enter the monitoring dashboard and start polling
    ShowMonitoring,

    // ─────────────────────────────────────────────────────────
    // Containers List View
    // ─────────────────────────────────────────────────────────
    /// Re-fetch the list without resetting search/pagination
    RefreshContainers,
    /// Search text changed (recomputes the filter, never refetches)
    SearchChanged { text: String },
    /// List fetch completed
    ContainersLoaded {
        epoch: u64,
        result: Result<Vec<Container>, String>,
    },

    // ─────────────────────────────────────────────────────────
    // Detail View
    // ─────────────────────────────────────────────────────────
    /// Single-record fetch completed
    ContainerLoaded {
        epoch: u64,
        result: Result<Container, String>,
    },

    // ─────────────────────────────────────────────────────────
    // Lifecycle Actions
    // ─────────────────────────────────────────────────────────
    /// Start the container (refused while another action is in flight)
    StartContainer { id: String },
    /// Stop the container (refused while another action is in flight)
    StopContainer { id: String },
    /// Ask for delete confirmation before issuing the request
    RequestDelete { id: String },
    /// Confirmed delete from the dialog
    ConfirmDelete { id: String },
    /// Dismiss the confirmation dialog without acting
    CancelDialog,
    /// Toggle the selected option in the confirmation dialog
    DialogToggle,
    /// A lifecycle/CRUD request completed.
    ///
    /// `record` is the backend's updated record for start/stop/create/update,
    /// `None` for delete. Failures carry the raw detail for the log; the
    /// handler maps them to the canned user-facing message.
    ActionFinished {
        epoch: u64,
        action: PendingAction,
        result: Result<Option<Container>, String>,
    },

    // ─────────────────────────────────────────────────────────
    // Form (create / edit dialog)
    // ─────────────────────────────────────────────────────────
    /// Open the blank create form over the list view
    OpenCreateForm,
    /// Open the pre-populated edit form over the detail view
    OpenEditForm,
    /// Character input into the active form field
    FormInput(char),
    /// Backspace in the active form field
    FormBackspace,
    /// Move focus to the next form field
    FormNextField,
    /// Move focus to the previous form field
    FormPrevField,
    /// Submit the form (packages field values verbatim)
    FormSubmit,
    /// Close the form without submitting
    FormCancel,

    // ─────────────────────────────────────────────────────────
    // Monitoring View
    // ─────────────────────────────────────────────────────────
    /// Manual refresh of metrics and alarms
    RefreshMonitoring,
    /// Metrics fetch completed
    MetricsLoaded {
        epoch: u64,
        result: Result<MetricData, String>,
    },
    /// Alarms fetch completed
    AlarmsLoaded {
        epoch: u64,
        result: Result<Vec<Alarm>, String>,
    },
}
