//! Dashboard state management
//!
//! Contains the main dashboard state struct and related enums

use crate::consts::cli_consts::MAX_ACTIVITY_LOGS;
use crate::events::Event;
use crate::router::{Router, ViewId};
use crate::ui::UIConfig;
use crate::views::{ContractsView, KpiView, LoadState, MembersView, Modal, ProvidersView};

use std::collections::VecDeque;

/// Free-text filter being typed into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterInput {
    pub view: ViewId,
    pub column: &'static str,
    pub label: &'static str,
    pub value: String,
}

/// Everything the dashboard draws.
pub struct DashboardState {
    /// Where the data comes from, shown in the header.
    pub source_label: String,
    /// Whether to enable background colors
    pub with_background_color: bool,

    /// Current route, breadcrumbs and view visibility.
    pub router: Router,
    pub contracts: LoadState<ContractsView>,
    pub providers: LoadState<ProvidersView>,
    pub members: LoadState<MembersView>,
    pub kpi: LoadState<KpiView>,
    /// Overlay drawn above the current view.
    pub modal: Option<Modal>,
    /// Set while a filter is being edited.
    pub input: Option<FilterInput>,

    /// Queue of events waiting to be processed
    pub pending_events: VecDeque<Event>,
    /// Activity logs for display
    pub activity_logs: VecDeque<Event>,
    /// Animation tick counter
    pub tick: usize,
}

impl DashboardState {
    pub fn new(source_label: String, router: Router, ui_config: UIConfig) -> Self {
        Self {
            source_label,
            with_background_color: ui_config.with_background_color,
            router,
            contracts: LoadState::Loading,
            providers: LoadState::Loading,
            members: LoadState::Loading,
            kpi: LoadState::Loading,
            modal: None,
            input: None,
            pending_events: VecDeque::new(),
            activity_logs: VecDeque::new(),
            tick: 0,
        }
    }

    pub fn current_view(&self) -> ViewId {
        self.router.current().view()
    }

    /// Error text of the visible view, if its load failed.
    pub fn current_error(&self) -> Option<&str> {
        match self.current_view() {
            ViewId::Contracts => failure(&self.contracts),
            ViewId::Providers => failure(&self.providers),
            ViewId::Members => failure(&self.members),
            ViewId::KpiSummary => failure(&self.kpi),
        }
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: Event) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Add an event to the processing queue
    pub fn add_event(&mut self, event: Event) {
        self.pending_events.push_back(event);
    }
}

fn failure<T>(state: &LoadState<T>) -> Option<&str> {
    match state {
        LoadState::Failed(message) => Some(message),
        _ => None,
    }
}
