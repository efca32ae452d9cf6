//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::consts::cli_consts::{LOAD_QUEUE_SIZE, UI_POLL_MS};
use crate::events::Event as ActivityEvent;
use crate::network::{DataSource, ErrorHandler};
use crate::router::{Crumb, Route, RouteListener, Router, ViewId, render_trail};
use crate::table::{TableView, Tabular, find_column};
use crate::ui::dashboard::state::FilterInput;
use crate::ui::dashboard::{DashboardState, render_dashboard};
use crate::views::loader::{LoadRequest, LoadResult, Loader, Slot};
use crate::views::{LoadState, contracts, providers};
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{Terminal, backend::Backend};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
}

impl UIConfig {
    pub fn new(with_background_color: bool) -> Self {
        Self {
            with_background_color,
        }
    }
}

/// Puts every navigation into the activity log.
struct ActivityListener {
    events: mpsc::Sender<ActivityEvent>,
}

impl RouteListener for ActivityListener {
    fn on_navigate(&mut self, route: &Route, trail: &[Crumb]) {
        let _ = self.events.try_send(ActivityEvent::navigation(format!(
            "{} ({})",
            route,
            render_trail(trail)
        )));
    }
}

/// Application state
pub struct App {
    state: DashboardState,
    loader: Loader,
    /// Receives finished loads.
    results: mpsc::Receiver<LoadResult>,
    /// Receives activity from the loader, the router and the logger.
    event_receiver: mpsc::Receiver<ActivityEvent>,
    error_handler: ErrorHandler,
}

impl App {
    pub fn new(
        source: Arc<dyn DataSource>,
        source_label: String,
        mut router: Router,
        events: mpsc::Sender<ActivityEvent>,
        event_receiver: mpsc::Receiver<ActivityEvent>,
        ui_config: UIConfig,
    ) -> Self {
        let (result_sender, results) = mpsc::channel(LOAD_QUEUE_SIZE);
        router.add_listener(Box::new(ActivityListener {
            events: events.clone(),
        }));
        Self {
            state: DashboardState::new(source_label, router, ui_config),
            loader: Loader::new(source, result_sender, events),
            results,
            event_receiver,
            error_handler: ErrorHandler::new(),
        }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    /// Resolves a URL fragment and shows its view.
    pub fn open_fragment(&mut self, fragment: &str) {
        let previous = self.state.current_view();
        self.state.router.navigate_fragment(fragment);
        self.after_navigation(previous);
    }

    fn navigate_with(&mut self, navigate: impl FnOnce(&mut Router)) {
        let previous = self.state.current_view();
        navigate(&mut self.state.router);
        self.after_navigation(previous);
    }

    /// Drops the hidden view's in-flight load and loads the one now shown.
    fn after_navigation(&mut self, previous: ViewId) {
        let current = self.state.current_view();
        if previous != current {
            self.loader.cancel(Slot::View(previous));
        }
        if current == ViewId::Contracts && self.state.contracts.ready().is_some() {
            return;
        }
        self.load(request_for(self.state.router.current()));
    }

    fn load(&mut self, request: LoadRequest) {
        self.state.begin_load(&request);
        self.loader.start(request);
    }

    /// Moves pending activity and finished loads into the dashboard state.
    pub fn drain(&mut self) {
        while let Ok(event) = self.event_receiver.try_recv() {
            self.state.add_event(event);
        }
        while let Ok(result) = self.results.try_recv() {
            if self.loader.accept(&result) {
                let event = self.state.apply_load(result, &self.error_handler);
                self.state.add_event(event);
            }
        }
    }

    fn shutdown(&mut self) {
        for view in ViewId::ALL {
            self.loader.cancel(Slot::View(view));
        }
        self.loader.cancel(Slot::Modal);
    }

    /// Applies a key press. Returns `true` when the application should exit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if self.state.input.is_some() {
            self.handle_input_key(key.code);
            return false;
        }
        if self.state.modal.is_some() {
            match key.code {
                KeyCode::Char('q') => return true,
                KeyCode::Esc | KeyCode::Enter => {
                    self.loader.cancel(Slot::Modal);
                    self.state.modal = None;
                }
                _ => {}
            }
            return false;
        }

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => return true,
            KeyCode::Char('m') => self.open_fragment("#/member-panel"),
            KeyCode::Char('k') => self.navigate_with(Router::open_kpi_summary),
            KeyCode::Char('h') => self.navigate_with(Router::back_to_contracts),
            KeyCode::Char('g') => self.load(LoadRequest::QualityGaps),
            KeyCode::Char('r') => self.load(request_for(self.state.router.current())),
            KeyCode::Char('b') => self.back(),
            code => match self.state.current_view() {
                ViewId::Contracts => self.contracts_key(code),
                ViewId::Providers => self.providers_key(code),
                ViewId::Members => self.members_key(code),
                ViewId::KpiSummary => {
                    if code == KeyCode::Char('p') {
                        if let Some(view) = self.state.kpi.ready_mut() {
                            view.cycle_pcp();
                        }
                    }
                }
            },
        }
        false
    }

    fn back(&mut self) {
        match self.state.current_view() {
            ViewId::Contracts => {}
            ViewId::Providers | ViewId::KpiSummary => {
                self.navigate_with(Router::back_to_contracts)
            }
            ViewId::Members => {
                let previous = self.state.current_view();
                if self.state.router.back_to_providers() {
                    self.after_navigation(previous);
                }
            }
        }
    }

    fn contracts_key(&mut self, code: KeyCode) {
        let Some(view) = self.state.contracts.ready_mut() else {
            return;
        };
        match code {
            KeyCode::Char('t') => view.cycle_type_filter(),
            KeyCode::Char('/') => {
                self.state.input =
                    filter_input(ViewId::Contracts, &view.table, contracts::TEXT_FILTERS);
            }
            KeyCode::Enter => {
                if let Some(contract) = view.selected() {
                    let (id, name) = (contract.id.clone(), contract.contract_name.clone());
                    self.navigate_with(|router| router.view_providers(&id, &name));
                }
            }
            code => table_key(&mut view.table, code),
        }
    }

    fn providers_key(&mut self, code: KeyCode) {
        let Some(view) = self.state.providers.ready_mut() else {
            return;
        };
        match code {
            KeyCode::Char('c') => view.cycle_contract(),
            KeyCode::Char('t') => view.cycle_contract_type(),
            KeyCode::Char('u') => view.cycle_unit_type(),
            KeyCode::Char('/') => {
                self.state.input =
                    filter_input(ViewId::Providers, &view.table, providers::TEXT_FILTERS);
            }
            KeyCode::Enter => {
                if let Some(provider) = view.selected() {
                    let (name, unit_type) = (provider.unit_name.clone(), provider.unit_type.clone());
                    self.navigate_with(|router| router.view_members(&name, &unit_type));
                }
            }
            code => table_key(&mut view.table, code),
        }
    }

    fn members_key(&mut self, code: KeyCode) {
        let Some(view) = self.state.members.ready_mut() else {
            return;
        };
        match code {
            KeyCode::Up => view.select_previous(),
            KeyCode::Down => view.select_next(),
            KeyCode::Char('p') => view.cycle_pcp(),
            KeyCode::Enter => {
                if let Some(member) = view.selected_member() {
                    let member_id = member.member_id.clone();
                    self.load(LoadRequest::MemberDetail { member_id });
                }
            }
            _ => {}
        }
    }

    /// Edits the active filter; the table follows every keystroke.
    fn handle_input_key(&mut self, code: KeyCode) {
        let Some(input) = self.state.input.as_mut() else {
            return;
        };
        match code {
            KeyCode::Char(c) => input.value.push(c),
            KeyCode::Backspace => {
                input.value.pop();
            }
            KeyCode::Enter | KeyCode::Esc => {
                self.state.input = None;
                return;
            }
            _ => return,
        }
        let input = input.clone();
        match input.view {
            ViewId::Contracts => {
                if let LoadState::Ready(view) = &mut self.state.contracts {
                    view.table.set_filter(input.column, &input.value);
                }
            }
            ViewId::Providers => {
                if let LoadState::Ready(view) = &mut self.state.providers {
                    view.table.set_filter(input.column, &input.value);
                }
            }
            ViewId::Members | ViewId::KpiSummary => {}
        }
    }
}

fn request_for(route: &Route) -> LoadRequest {
    match route.view() {
        ViewId::Contracts => LoadRequest::Contracts,
        ViewId::Providers => LoadRequest::Providers,
        ViewId::Members => LoadRequest::Members,
        ViewId::KpiSummary => LoadRequest::Kpi,
    }
}

/// Starts editing the filter of the focused column, or of the first filterable
/// column when the focused one has no text filter.
fn filter_input<R: Tabular>(
    view: ViewId,
    table: &TableView<R>,
    filterable: &[&str],
) -> Option<FilterInput> {
    let focused = table
        .columns
        .get(table.focused_column)
        .filter(|column| filterable.contains(&column.key));
    let column = match focused {
        Some(column) => column,
        None => find_column(table.columns, filterable.first()?)?,
    };
    Some(FilterInput {
        view,
        column: column.key,
        label: column.label,
        value: table.filters.get(column.key).unwrap_or_default().to_string(),
    })
}

fn table_key<R: Tabular>(table: &mut TableView<R>, code: KeyCode) {
    match code {
        KeyCode::Up => table.select_previous(),
        KeyCode::Down => table.select_next(),
        KeyCode::Left => table.focus_previous_column(),
        KeyCode::Right => table.focus_next_column(),
        KeyCode::Char('s') => table.activate_focused_sort(),
        _ => {}
    }
}

/// Runs the application UI in a loop, handling events and rendering the dashboard.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    loop {
        app.drain();
        app.state.update();
        terminal.draw(|f| render_dashboard(f, &app.state))?;

        // Poll for key events
        if event::poll(Duration::from_millis(UI_POLL_MS))? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }
                if app.handle_key(key) {
                    app.shutdown();
                    return Ok(());
                }
            }
        }
    }
}
