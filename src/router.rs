//! Route parsing, view visibility and the breadcrumb trail.
//!
//! The router owns the current route and trail. Anything that needs to react
//! to navigation registers a [`RouteListener`] instead of reaching for shared state.

use std::fmt::{Display, Formatter};

/// Unit shown by the `#/member-panel` route.
pub const DEMO_UNIT_NAME: &str = "Metro Physicians Group";

pub const HOME: &str = "Home";
pub const CRUMB_SEPARATOR: &str = " › ";

/// The view containers; exactly one is visible at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum ViewId {
    Contracts,
    Providers,
    Members,
    #[strum(serialize = "KPI Summary")]
    KpiSummary,
}

impl ViewId {
    pub const ALL: [ViewId; 4] = [
        ViewId::Contracts,
        ViewId::Providers,
        ViewId::Members,
        ViewId::KpiSummary,
    ];
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Contracts,
    Providers {
        contract_id: String,
        contract_name: String,
    },
    /// Members of a unit. `unit_type` is set when reached from the provider table.
    Members {
        unit_name: String,
        unit_type: Option<String>,
    },
    KpiSummary,
}

impl Route {
    /// Resolves a URL fragment. Unknown fragments fall back to contracts.
    pub fn from_fragment(fragment: &str) -> Route {
        if fragment == "#/kpi-summary" {
            Route::KpiSummary
        } else if fragment.starts_with("#/member-panel") {
            Route::Members {
                unit_name: DEMO_UNIT_NAME.to_string(),
                unit_type: None,
            }
        } else {
            Route::Contracts
        }
    }

    pub fn fragment(&self) -> &'static str {
        match self {
            Route::KpiSummary => "#/kpi-summary",
            Route::Members { unit_type: None, .. } => "#/member-panel",
            _ => "#/",
        }
    }

    pub fn view(&self) -> ViewId {
        match self {
            Route::Contracts => ViewId::Contracts,
            Route::Providers { .. } => ViewId::Providers,
            Route::Members { .. } => ViewId::Members,
            Route::KpiSummary => ViewId::KpiSummary,
        }
    }

    pub fn breadcrumbs(&self) -> Vec<Crumb> {
        let mut trail = vec![Crumb::link(HOME, "#")];
        match self {
            Route::Contracts => {}
            Route::Providers { contract_name, .. } => trail.push(Crumb::link(contract_name, "#")),
            Route::Members {
                unit_name,
                unit_type: Some(unit_type),
            } => {
                trail.push(Crumb::link(unit_type, "#"));
                trail.push(Crumb::link(unit_name, "#"));
            }
            Route::Members {
                unit_type: None, ..
            } => trail.push(Crumb::link("Member Panel", "#/member-panel")),
            Route::KpiSummary => trail.push(Crumb::link("KPI Summary", "#")),
        }
        trail
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Route::Contracts => write!(f, "Contracts"),
            Route::Providers { contract_name, .. } => write!(f, "Providers of {}", contract_name),
            Route::Members { unit_name, .. } => write!(f, "Members of {}", unit_name),
            Route::KpiSummary => write!(f, "KPI Summary"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crumb {
    pub label: String,
    pub href: Option<String>,
}

impl Crumb {
    pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: Some(href.into()),
        }
    }
}

/// Trail as text. An empty trail renders as the default `Home` trail.
pub fn render_trail(trail: &[Crumb]) -> String {
    if trail.is_empty() {
        return HOME.to_string();
    }
    trail
        .iter()
        .map(|crumb| crumb.label.as_str())
        .collect::<Vec<_>>()
        .join(CRUMB_SEPARATOR)
}

/// Notified after every navigation.
pub trait RouteListener: Send {
    fn on_navigate(&mut self, route: &Route, trail: &[Crumb]);
}

/// Logs every navigation at debug level.
#[derive(Debug, Default)]
pub struct LoggingListener;

impl RouteListener for LoggingListener {
    fn on_navigate(&mut self, route: &Route, trail: &[Crumb]) {
        log::debug!("Navigated to {} {} ({})", route.fragment(), route, render_trail(trail));
    }
}

pub struct Router {
    current: Route,
    trail: Vec<Crumb>,
    last_providers: Option<Route>,
    /// Unit shown by `#/member-panel`.
    panel_unit: String,
    listeners: Vec<Box<dyn RouteListener>>,
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Router {
    pub fn new() -> Self {
        Self {
            current: Route::Contracts,
            trail: Route::Contracts.breadcrumbs(),
            last_providers: None,
            panel_unit: DEMO_UNIT_NAME.to_string(),
            listeners: Vec::new(),
        }
    }

    pub fn set_member_panel_unit(&mut self, unit_name: &str) {
        self.panel_unit = unit_name.to_string();
    }

    pub fn add_listener(&mut self, listener: Box<dyn RouteListener>) {
        self.listeners.push(listener);
    }

    pub fn current(&self) -> &Route {
        &self.current
    }

    pub fn trail(&self) -> &[Crumb] {
        &self.trail
    }

    pub fn is_visible(&self, view: ViewId) -> bool {
        self.current.view() == view
    }

    /// Shows exactly the route's view and replaces the trail.
    pub fn navigate(&mut self, route: Route) {
        if let Route::Providers { .. } = route {
            self.last_providers = Some(route.clone());
        }
        self.trail = route.breadcrumbs();
        self.current = route;
        for listener in self.listeners.iter_mut() {
            listener.on_navigate(&self.current, &self.trail);
        }
    }

    pub fn navigate_fragment(&mut self, fragment: &str) {
        let route = match Route::from_fragment(fragment) {
            Route::Members {
                unit_type: None, ..
            } => Route::Members {
                unit_name: self.panel_unit.clone(),
                unit_type: None,
            },
            route => route,
        };
        self.navigate(route);
    }

    pub fn view_providers(&mut self, contract_id: &str, contract_name: &str) {
        self.navigate(Route::Providers {
            contract_id: contract_id.to_string(),
            contract_name: contract_name.to_string(),
        });
    }

    pub fn view_members(&mut self, unit_name: &str, unit_type: &str) {
        self.navigate(Route::Members {
            unit_name: unit_name.to_string(),
            unit_type: Some(unit_type.to_string()),
        });
    }

    pub fn back_to_contracts(&mut self) {
        self.navigate(Route::Contracts);
    }

    /// Returns to the last providers route. Does nothing if none was visited.
    pub fn back_to_providers(&mut self) -> bool {
        match self.last_providers.clone() {
            Some(route) => {
                self.navigate(route);
                true
            }
            None => false,
        }
    }

    pub fn open_kpi_summary(&mut self) {
        self.navigate(Route::KpiSummary);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Recorder(Arc<Mutex<Vec<String>>>);

    impl RouteListener for Recorder {
        fn on_navigate(&mut self, route: &Route, trail: &[Crumb]) {
            if let Ok(mut seen) = self.0.lock() {
                seen.push(format!("{} | {}", route, render_trail(trail)));
            }
        }
    }

    #[test]
    fn kpi_fragment_shows_only_the_kpi_view() {
        let mut router = Router::new();
        router.navigate_fragment("#/kpi-summary");
        let visible: Vec<ViewId> = ViewId::ALL
            .into_iter()
            .filter(|view| router.is_visible(*view))
            .collect();
        assert_eq!(visible, vec![ViewId::KpiSummary]);
        assert_eq!(render_trail(router.trail()), "Home › KPI Summary");
    }

    #[test]
    fn member_panel_fragment_is_a_prefix_match() {
        let route = Route::from_fragment("#/member-panel/anything");
        assert_eq!(
            route,
            Route::Members {
                unit_name: DEMO_UNIT_NAME.to_string(),
                unit_type: None
            }
        );
        assert_eq!(render_trail(&route.breadcrumbs()), "Home › Member Panel");
    }

    #[test]
    fn unknown_fragments_fall_back_to_contracts() {
        assert_eq!(Route::from_fragment(""), Route::Contracts);
        assert_eq!(Route::from_fragment("#/kpi-summary/extra"), Route::Contracts);
        assert_eq!(Route::from_fragment("garbage"), Route::Contracts);
    }

    #[test]
    fn drilling_down_builds_the_trail() {
        let mut router = Router::new();
        assert_eq!(render_trail(router.trail()), "Home");

        router.view_providers("C1", "Acme ACO");
        assert_eq!(render_trail(router.trail()), "Home › Acme ACO");

        router.view_members("North Clinic", "TIN");
        assert_eq!(render_trail(router.trail()), "Home › TIN › North Clinic");

        assert!(router.back_to_providers());
        assert_eq!(render_trail(router.trail()), "Home › Acme ACO");
        assert!(router.is_visible(ViewId::Providers));

        router.back_to_contracts();
        assert_eq!(render_trail(router.trail()), "Home");
    }

    #[test]
    fn back_to_providers_without_history_is_a_no_op() {
        let mut router = Router::new();
        router.navigate_fragment("#/member-panel");
        assert!(!router.back_to_providers());
        assert!(router.is_visible(ViewId::Members));
    }

    #[test]
    fn member_panel_unit_is_configurable() {
        let mut router = Router::new();
        router.set_member_panel_unit("Harbor Clinic");
        router.navigate_fragment("#/member-panel");
        assert_eq!(
            router.current(),
            &Route::Members {
                unit_name: "Harbor Clinic".to_string(),
                unit_type: None
            }
        );
        assert_eq!(render_trail(router.trail()), "Home › Member Panel");
    }

    #[test]
    fn empty_trail_renders_home() {
        assert_eq!(render_trail(&[]), "Home");
    }

    #[test]
    fn listeners_see_every_navigation() {
        let recorder = Recorder::default();
        let mut router = Router::new();
        router.add_listener(Box::new(recorder.clone()));

        router.open_kpi_summary();
        router.back_to_contracts();

        let seen = recorder.0.lock().unwrap().clone();
        assert_eq!(
            seen,
            vec![
                "KPI Summary | Home › KPI Summary".to_string(),
                "Contracts | Home".to_string()
            ]
        );
    }
}
