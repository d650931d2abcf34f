//! Application state (Model in TEA pattern)

use std::fmt;
use std::time::{Duration, Instant};

use crate::config::Settings;
use crate::confirm_dialog::ConfirmDialogState;
use stevedore_api::NewContainer;
use stevedore_core::{Alarm, AppPhase, Container, ContainerStore, MetricData};

/// Page sizes the list view cycles through (mirrors the backend console's
/// rows-per-page options).
pub const PAGE_SIZES: &[usize] = &[5, 10, 25];

/// Current UI mode/screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Containers list view (the landing screen)
    #[default]
    Containers,

    /// Containers list view with the search prompt focused
    SearchInput,

    /// Single-container detail view
    Detail,

    /// Monitoring dashboard (charts + alarms, polled)
    Monitoring,

    /// Create/edit form dialog (over the list or detail view)
    Form,

    /// Delete confirmation dialog
    ConfirmDialog,
}

/// The single mutual-exclusion token gating user-triggered mutations.
///
/// While one of these is set on a view, every other row action and the
/// create button are disabled; it is cleared when the completion message
/// arrives, whether the request succeeded or failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAction {
    Create,
    Update { id: String },
    Start { id: String },
    Stop { id: String },
    Delete { id: String },
}

impl PendingAction {
    /// The container the action targets, if any.
    pub fn container_id(&self) -> Option<&str> {
        match self {
            PendingAction::Create => None,
            PendingAction::Update { id }
            | PendingAction::Start { id }
            | PendingAction::Stop { id }
            | PendingAction::Delete { id } => Some(id),
        }
    }
}

impl fmt::Display for PendingAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PendingAction::Create => write!(f, "create"),
            PendingAction::Update { id } => write!(f, "update-{id}"),
            PendingAction::Start { id } => write!(f, "start-{id}"),
            PendingAction::Stop { id } => write!(f, "stop-{id}"),
            PendingAction::Delete { id } => write!(f, "delete-{id}"),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Containers List View
// ─────────────────────────────────────────────────────────────────────────────

/// State for the containers list view.
///
/// The [`ContainerStore`] owned here is the single authoritative copy of
/// the list; filtering and pagination are synchronous projections of it.
#[derive(Debug, Clone)]
pub struct ContainersViewState {
    /// Authoritative container collection plus loading/error flags.
    pub store: ContainerStore,

    /// Case-insensitive substring filter over name OR image.
    pub search: String,

    /// Zero-based page index into the filtered list.
    pub page: usize,

    /// Rows per page.
    pub page_size: usize,

    /// Selected row within the current page slice.
    pub selected: usize,

    /// Action-in-flight token; gates all mutations in this view.
    pub pending_action: Option<PendingAction>,
}

impl ContainersViewState {
    pub fn new(page_size: usize) -> Self {
        Self {
            store: ContainerStore::new(),
            search: String::new(),
            page: 0,
            page_size: page_size.max(1),
            selected: 0,
            pending_action: None,
        }
    }

    /// Reset view-local state for a fresh mount (search, pagination,
    /// selection, in-flight token). The store contents are replaced by the
    /// fetch that follows.
    pub fn reset_for_mount(&mut self) {
        self.search.clear();
        self.page = 0;
        self.selected = 0;
        self.pending_action = None;
    }

    /// Filtered view of the store: case-insensitive substring match
    /// against `name` OR `image`.
    pub fn filtered(&self) -> Vec<&Container> {
        let needle = self.search.to_lowercase();
        self.store
            .containers()
            .iter()
            .filter(|c| {
                needle.is_empty()
                    || c.name.to_lowercase().contains(&needle)
                    || c.image.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// The displayed slice: positions `[page·size, page·size+size)` of the
    /// filtered list.
    pub fn page_slice(&self) -> Vec<&Container> {
        let filtered = self.filtered();
        filtered
            .into_iter()
            .skip(self.page * self.page_size)
            .take(self.page_size)
            .collect()
    }

    /// Number of pages for the current filter (at least 1).
    pub fn page_count(&self) -> usize {
        let len = self.filtered().len();
        if len == 0 {
            1
        } else {
            len.div_ceil(self.page_size)
        }
    }

    /// Change the page size; always resets to page 0.
    pub fn set_page_size(&mut self, size: usize) {
        self.page_size = size.max(1);
        self.page = 0;
        self.selected = 0;
    }

    /// Cycle to the next preset page size.
    pub fn cycle_page_size(&mut self) {
        let idx = PAGE_SIZES
            .iter()
            .position(|&s| s == self.page_size)
            .map(|i| (i + 1) % PAGE_SIZES.len())
            .unwrap_or(0);
        self.set_page_size(PAGE_SIZES[idx]);
    }

    pub fn next_page(&mut self) {
        if self.page + 1 < self.page_count() {
            self.page += 1;
            self.selected = 0;
        }
    }

    pub fn prev_page(&mut self) {
        if self.page > 0 {
            self.page -= 1;
            self.selected = 0;
        }
    }

    pub fn select_next(&mut self) {
        let rows = self.page_slice().len();
        if rows > 0 && self.selected + 1 < rows {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// The currently highlighted record, if the page has any rows.
    pub fn selected_container(&self) -> Option<&Container> {
        self.page_slice().get(self.selected).copied()
    }

    /// Update the search text; the filter is recomputed on the next render.
    pub fn set_search(&mut self, text: String) {
        self.search = text;
        self.selected = 0;
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Detail View
// ─────────────────────────────────────────────────────────────────────────────

/// State for the single-container detail view.
#[derive(Debug, Clone)]
pub struct DetailViewState {
    /// Identifier the view was opened with.
    pub id: String,

    /// The fetched record; `None` while loading or after a failed fetch.
    pub container: Option<Container>,

    /// A fetch is in flight.
    pub loading: bool,

    /// User-facing message from a failed fetch or action.
    pub error: Option<String>,

    /// Action-in-flight token; gates all mutations in this view.
    pub pending_action: Option<PendingAction>,
}

impl DetailViewState {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            container: None,
            loading: true,
            error: None,
            pending_action: None,
        }
    }

    /// Lifecycle actions are only available once a record is loaded and
    /// nothing else is in flight.
    pub fn actions_enabled(&self) -> bool {
        self.container.is_some() && self.pending_action.is_none() && self.error.is_none()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Monitoring View
// ─────────────────────────────────────────────────────────────────────────────

/// State for the monitoring dashboard.
///
/// Polling is single-flight per resource: a due tick is skipped for a
/// resource whose previous request has not resolved yet, so overlapping
/// requests never stack.
#[derive(Debug, Clone)]
pub struct MonitoringViewState {
    /// Latest metrics payload (kept on fetch failure).
    pub metrics: MetricData,

    /// Latest alarm list.
    pub alarms: Vec<Alarm>,

    /// Banner message from the last failed metrics fetch.
    pub error: Option<String>,

    /// Metrics request in flight.
    pub metrics_in_flight: bool,

    /// Alarms request in flight.
    pub alarms_in_flight: bool,

    /// When the last poll round was dispatched.
    pub last_poll: Option<Instant>,

    /// Fixed poll interval.
    pub interval: Duration,
}

impl MonitoringViewState {
    pub fn new(interval: Duration) -> Self {
        Self {
            metrics: MetricData::default(),
            alarms: Vec::new(),
            error: None,
            metrics_in_flight: false,
            alarms_in_flight: false,
            last_poll: None,
            interval,
        }
    }

    /// Reset for a fresh mount; the immediate fetch follows.
    pub fn reset_for_mount(&mut self) {
        self.metrics = MetricData::default();
        self.alarms.clear();
        self.error = None;
        self.metrics_in_flight = false;
        self.alarms_in_flight = false;
        self.last_poll = None;
    }

    /// Whether the fixed interval has elapsed since the last poll round.
    /// Always true before the first round (the immediate fetch on mount).
    pub fn poll_due(&self) -> bool {
        match self.last_poll {
            None => true,
            Some(t) => t.elapsed() >= self.interval,
        }
    }

    /// Record that a poll round was dispatched (or deliberately skipped),
    /// keeping the cadence fixed.
    pub fn mark_polled(&mut self) {
        self.last_poll = Some(Instant::now());
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Form (create / edit dialog)
// ─────────────────────────────────────────────────────────────────────────────

/// Whether the form creates a new record or edits an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit { id: String },
}

/// The three free-text fields of the container form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    Image,
    Ports,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            FormField::Name => FormField::Image,
            FormField::Image => FormField::Ports,
            FormField::Ports => FormField::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FormField::Name => FormField::Ports,
            FormField::Image => FormField::Name,
            FormField::Ports => FormField::Image,
        }
    }
}

/// Controlled-input state for the create/edit dialog.
///
/// Field values are packaged verbatim on submit; the only check is the
/// required-field rule (name and image must be non-empty, ports optional).
#[derive(Debug, Clone)]
pub struct FormState {
    pub mode: FormMode,
    pub name: String,
    pub image: String,
    pub ports: String,
    pub active: FormField,
    /// Validation or submit-failure hint shown inside the dialog.
    pub hint: Option<String>,
}

impl FormState {
    /// Blank form for creation.
    pub fn create() -> Self {
        Self {
            mode: FormMode::Create,
            name: String::new(),
            image: String::new(),
            ports: String::new(),
            active: FormField::Name,
            hint: None,
        }
    }

    /// Pre-populated form for editing an existing record.
    pub fn edit(container: &Container) -> Self {
        Self {
            mode: FormMode::Edit {
                id: container.id.clone(),
            },
            name: container.name.clone(),
            image: container.image.clone(),
            ports: container.ports.clone(),
            active: FormField::Name,
            hint: None,
        }
    }

    pub fn is_edit(&self) -> bool {
        matches!(self.mode, FormMode::Edit { .. })
    }

    fn active_value_mut(&mut self) -> &mut String {
        match self.active {
            FormField::Name => &mut self.name,
            FormField::Image => &mut self.image,
            FormField::Ports => &mut self.ports,
        }
    }

    pub fn field_value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Image => &self.image,
            FormField::Ports => &self.ports,
        }
    }

    pub fn input(&mut self, c: char) {
        if !c.is_control() {
            self.active_value_mut().push(c);
            self.hint = None;
        }
    }

    pub fn backspace(&mut self) {
        self.active_value_mut().pop();
    }

    pub fn next_field(&mut self) {
        self.active = self.active.next();
    }

    pub fn prev_field(&mut self) {
        self.active = self.active.prev();
    }

    /// Required-field check: name and image must be non-empty.
    pub fn missing_required(&self) -> bool {
        self.name.is_empty() || self.image.is_empty()
    }

    /// Package the current field values verbatim into the request body.
    pub fn to_payload(&self) -> NewContainer {
        NewContainer {
            name: self.name.clone(),
            image: self.image.clone(),
            ports: self.ports.clone(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    /// Current UI mode/screen
    pub ui_mode: UiMode,

    /// Current application phase
    pub phase: AppPhase,

    /// Settings from config file / environment / CLI
    pub settings: Settings,

    /// Containers list view state
    pub containers: ContainersViewState,

    /// Detail view state; present while a detail view is (or was) mounted
    pub detail: Option<DetailViewState>,

    /// Monitoring dashboard state
    pub monitoring: MonitoringViewState,

    /// Create/edit form state; present while the dialog is open
    pub form: Option<FormState>,

    /// Delete confirmation dialog state
    pub confirm_dialog: Option<ConfirmDialogState>,

    /// View generation counter. Bumped on every view transition; async
    /// completions carry the epoch they were spawned under and are
    /// discarded when it no longer matches.
    pub epoch: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Create a new AppState with default settings
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    /// Create a new AppState with the given settings
    pub fn with_settings(settings: Settings) -> Self {
        let page_size = settings.ui.page_size;
        let interval = Duration::from_secs(settings.ui.poll_interval_secs);
        Self {
            ui_mode: UiMode::Containers,
            phase: AppPhase::Initializing,
            settings,
            containers: ContainersViewState::new(page_size),
            detail: None,
            monitoring: MonitoringViewState::new(interval),
            form: None,
            confirm_dialog: None,
            epoch: 0,
        }
    }

    /// Bump the view generation; everything in flight for the previous
    /// generation becomes stale.
    pub fn next_epoch(&mut self) -> u64 {
        self.epoch += 1;
        self.epoch
    }

    /// A completion message for this epoch is still current.
    pub fn epoch_current(&self, epoch: u64) -> bool {
        self.epoch == epoch
    }

    // ─────────────────────────────────────────────────────────
    // UI Mode Helpers
    // ─────────────────────────────────────────────────────────

    /// Whether the containers list is the underlying view (modals included).
    pub fn on_containers_view(&self) -> bool {
        matches!(self.ui_mode, UiMode::Containers | UiMode::SearchInput)
    }

    /// The pending action of whichever view is underneath the current mode.
    pub fn active_pending_action(&self) -> Option<&PendingAction> {
        if self.on_containers_view() || self.form_over_containers() {
            self.containers.pending_action.as_ref()
        } else {
            self.detail.as_ref().and_then(|d| d.pending_action.as_ref())
        }
    }

    fn form_over_containers(&self) -> bool {
        matches!(
            (self.ui_mode, self.form.as_ref()),
            (UiMode::Form, Some(form)) if !form.is_edit()
        )
    }

    /// Request application quit
    pub fn request_quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    /// Check if the app should quit
    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
