//! Headless mode execution
//!
//! Loads one view and prints it as plain text.

use super::SessionData;
use crate::format;
use crate::logging::{self, LogSink};
use crate::router::{Route, Router, render_trail};
use crate::table::{TableView, Tabular, text};
use crate::views::loader::{LoadRequest, Payload};
use crate::views::{ALL_OPTION, ContractsView, KpiView, MembersView, ProvidersView, QualityOverview, error_message};
use std::error::Error;
use std::fmt::Write;

/// The views `show` can print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ShowView {
    Contracts,
    Providers,
    Members,
    Kpi,
    Quality,
}

/// What to print and how to sort and filter it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShowOptions {
    /// Contract whose providers are listed; all contracts when absent.
    pub contract: Option<String>,
    /// Unit whose members are listed; the member panel unit when absent.
    pub unit: Option<String>,
    pub pcp: Option<String>,
    pub sort: Option<String>,
    pub descending: bool,
    /// `(column, value)` substring filters.
    pub filters: Vec<(String, String)>,
}

/// Parses a `COLUMN=VALUE` filter argument.
pub fn parse_filter(arg: &str) -> Result<(String, String), String> {
    match arg.split_once('=') {
        Some((column, value)) if !column.is_empty() => Ok((column.to_string(), value.to_string())),
        _ => Err(format!("expected COLUMN=VALUE, got '{}'", arg)),
    }
}

/// Runs the application in headless mode
///
/// Logs go to stderr so the printed view can be piped.
pub async fn run_headless_mode(
    session: SessionData,
    view: ShowView,
    options: ShowOptions,
) -> Result<(), Box<dyn Error>> {
    if let Err(e) = logging::init(LogSink::Stderr) {
        crate::print_cmd_warn!("Logging", "{}", e);
    }
    log::debug!("Loading data from {}", session.source.describe());
    let output = render_view(session, view, &options).await?;
    print!("{}", output);
    Ok(())
}

fn request_for(view: ShowView) -> LoadRequest {
    match view {
        ShowView::Contracts => LoadRequest::Contracts,
        ShowView::Providers => LoadRequest::Providers,
        ShowView::Members => LoadRequest::Members,
        ShowView::Kpi => LoadRequest::Kpi,
        ShowView::Quality => LoadRequest::QualityGaps,
    }
}

/// Loads the view and renders it, or returns the same message the dashboard shows.
pub async fn render_view(
    mut session: SessionData,
    view: ShowView,
    options: &ShowOptions,
) -> Result<String, Box<dyn Error>> {
    let request = request_for(view);
    let payload = request
        .run(session.source.as_ref())
        .await
        .map_err(|e| error_message(request.thing(), &e))?;

    let mut out = String::new();
    match payload {
        Payload::Contracts(contracts) => {
            let mut view = ContractsView::new(contracts);
            apply_table_options(&mut view.table, options);
            push_trail(&mut out, &mut session.router, Route::Contracts);
            push_table(&mut out, &view.table);
            writeln!(out, "{}", view.footer())?;
        }
        Payload::Providers {
            contracts,
            providers,
        } => {
            let contract_id = options.contract.clone().unwrap_or_default();
            let mut view = ProvidersView::new(&contract_id, contracts, providers);
            apply_table_options(&mut view.table, options);
            let route = match view.contract_name() {
                Some(name) => Route::Providers {
                    contract_id: contract_id.clone(),
                    contract_name: name.to_string(),
                },
                None => Route::Contracts,
            };
            push_trail(&mut out, &mut session.router, route);
            writeln!(
                out,
                "Contract Type: {}",
                view.contract_type().unwrap_or(ALL_OPTION)
            )?;
            push_table(&mut out, &view.table);
            writeln!(out, "{}", view.footer())?;
        }
        Payload::Members(members) => {
            session.router.navigate_fragment("#/member-panel");
            if let Some(unit) = &options.unit {
                session.router.navigate(Route::Members {
                    unit_name: unit.clone(),
                    unit_type: None,
                });
            }
            let unit_name = match session.router.current() {
                Route::Members { unit_name, .. } => unit_name.clone(),
                _ => String::new(),
            };
            let mut view = MembersView::new(&unit_name, members);
            view.pcp = options.pcp.clone();
            writeln!(out, "{}", render_trail(session.router.trail()))?;
            push_members(&mut out, &view)?;
        }
        Payload::Kpi {
            members,
            quality_gaps,
        } => {
            let mut view = KpiView::new(members, quality_gaps);
            view.pcp = options.pcp.clone();
            push_trail(&mut out, &mut session.router, Route::KpiSummary);
            push_kpi(&mut out, &view)?;
        }
        Payload::QualityGaps(gaps) => {
            push_quality(&mut out, &QualityOverview { gaps })?;
        }
        Payload::MemberDetail { .. } => {}
    }
    Ok(out)
}

fn apply_table_options<R: Tabular>(table: &mut TableView<R>, options: &ShowOptions) {
    if let Some(column) = &options.sort {
        if table.sort.column != *column {
            table.activate_sort(column);
        }
    }
    if options.descending {
        let column = table.sort.column.clone();
        table.activate_sort(&column);
    }
    for (column, value) in &options.filters {
        table.set_filter(column, value);
    }
}

fn push_trail(out: &mut String, router: &mut Router, route: Route) {
    router.navigate(route);
    out.push_str(&render_trail(router.trail()));
    out.push('\n');
}

fn push_table<R: Tabular>(out: &mut String, table: &TableView<R>) {
    out.push_str(&text::render(
        table.columns,
        Some(&table.sort),
        &table.projection(),
    ));
}

fn push_members(out: &mut String, view: &MembersView) -> std::fmt::Result {
    writeln!(out, "PCP: {}", view.pcp.as_deref().unwrap_or(ALL_OPTION))?;
    for section in view.sections() {
        writeln!(out, "\n== {} ==", section.main.title())?;
        for category in section.categories {
            writeln!(
                out,
                "\n-- {} ({}) [{}] {}",
                category.category,
                category.members.len(),
                category.config.action,
                category.icon
            )?;
            out.push_str(&text::render(category.config.columns, None, &category.members));
        }
    }
    writeln!(out, "\n{}", view.footer())
}

fn push_kpi(out: &mut String, view: &KpiView) -> std::fmt::Result {
    for group in view.groups() {
        writeln!(out, "\n== {} ==", group.title)?;
        for metric in group.metrics {
            writeln!(
                out,
                "{:<28} {:>10}  MoM {:>6}  YoY {:>6}  {}",
                metric.label,
                metric.value,
                metric.mom,
                metric.yoy,
                metric.trend.icon()
            )?;
        }
    }
    writeln!(out, "\n== Quality Measures ==")?;
    for kpi in view.quality_kpis() {
        writeln!(
            out,
            "{:<44} {:>5}  MoM {:>6}  YoY {:>6}  {}",
            kpi.measure,
            kpi.gaps_closed,
            kpi.mom,
            kpi.yoy,
            kpi.trend.icon()
        )?;
    }
    writeln!(
        out,
        "\n== Members by Category (PCP: {}) ==",
        view.pcp.as_deref().unwrap_or(ALL_OPTION)
    )?;
    for (category, count) in view.category_counts() {
        writeln!(out, "{:<28} {:>5}", category, count)?;
    }
    for entry in view.measure_appointments() {
        writeln!(
            out,
            "{:<28} {:>5} with appointments",
            entry.measure,
            format::count(entry.members_with_appointments)
        )?;
    }
    Ok(())
}

fn push_quality(out: &mut String, overview: &QualityOverview) -> std::fmt::Result {
    writeln!(out, "Quality Measures")?;
    if overview.gaps.is_empty() {
        return writeln!(out, "No quality measures available.");
    }
    for gap in &overview.gaps {
        writeln!(
            out,
            "{}: {} ({}), {}",
            gap.measure_name,
            gap.closure_label(),
            gap.fraction_label(),
            QualityOverview::appointments_label(gap)
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::network::{MockDataSource, Resource};
    use std::sync::Arc;

    fn session(source: MockDataSource) -> SessionData {
        SessionData {
            source: Arc::new(source),
            router: Router::new(),
            config: Config::default(),
        }
    }

    fn serving(contracts: &'static [u8]) -> MockDataSource {
        let mut source = MockDataSource::new();
        source.expect_describe().returning(|| "mock".to_string());
        source.expect_fetch().returning(move |resource| match resource {
            Resource::Contracts => Ok(contracts.to_vec()),
            _ => Err(crate::network::DataError::Http { status: 404 }),
        });
        source
    }

    const CONTRACTS: &[u8] = br#"{"contracts": [
        {"id": "C1", "contract_name": "Acme", "contract_type": "Commercial", "surplus_ytd": 1500},
        {"id": "C2", "contract_name": "Beta", "contract_type": "Medicaid", "surplus_ytd": -20}
    ]}"#;

    #[test]
    fn filters_parse_as_column_value_pairs() {
        assert_eq!(
            parse_filter("contract_type=Medi"),
            Ok(("contract_type".to_string(), "Medi".to_string()))
        );
        assert!(parse_filter("nothing").is_err());
        assert!(parse_filter("=x").is_err());
    }

    #[tokio::test]
    async fn contracts_print_sorted_descending() {
        let options = ShowOptions {
            sort: Some("surplus_ytd".to_string()),
            descending: true,
            ..ShowOptions::default()
        };
        let out = render_view(session(serving(CONTRACTS)), ShowView::Contracts, &options)
            .await
            .unwrap();
        assert!(out.starts_with("Home\n"));
        assert!(out.contains("Surplus ▼"));
        let acme = out.find("Acme").unwrap();
        let beta = out.find("Beta").unwrap();
        assert!(acme < beta);
        assert!(out.contains("$1,500"));
        assert!(out.trim_end().ends_with("Showing 2 contracts"));
    }

    #[tokio::test]
    async fn failures_read_like_the_dashboard() {
        let err = render_view(
            session(serving(CONTRACTS)),
            ShowView::Members,
            &ShowOptions::default(),
        )
        .await
        .unwrap_err();
        assert_eq!(err.to_string(), "Error loading members: HTTP error! status: 404");
    }
}
