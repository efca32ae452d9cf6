//! Dashboard main renderer

use super::components::{
    breadcrumb, contracts, footer, header, kpi, logs, members, modal, providers, status,
};
use super::state::DashboardState;
use crate::router::ViewId;
use crate::views::LoadState;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Block;

pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    if state.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 20, 24))),
            f.area(),
        );
    }

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(8),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, main_chunks[0], state);
    breadcrumb::render_breadcrumb(f, main_chunks[1], state);
    render_view(f, main_chunks[2], state);
    logs::render_logs_panel(f, main_chunks[3], state);
    footer::render_footer(f, main_chunks[4], state);

    if let Some(overlay) = &state.modal {
        modal::render_modal(f, f.area(), overlay);
    }
}

/// Draws the routed view, or its loading or error placeholder.
fn render_view(f: &mut Frame, area: Rect, state: &DashboardState) {
    match state.current_view() {
        ViewId::Contracts => match &state.contracts {
            LoadState::Ready(view) => contracts::render_contracts(f, area, state, view),
            other => placeholder(f, area, state, other, "contracts"),
        },
        ViewId::Providers => match &state.providers {
            LoadState::Ready(view) => providers::render_providers(f, area, state, view),
            other => placeholder(f, area, state, other, "providers"),
        },
        ViewId::Members => match &state.members {
            LoadState::Ready(view) => members::render_members(f, area, view),
            other => placeholder(f, area, state, other, "members"),
        },
        ViewId::KpiSummary => match &state.kpi {
            LoadState::Ready(view) => kpi::render_kpi(f, area, view),
            other => placeholder(f, area, state, other, "KPI summary"),
        },
    }
}

fn placeholder<T>(
    f: &mut Frame,
    area: Rect,
    state: &DashboardState,
    load: &LoadState<T>,
    thing: &str,
) {
    match load {
        LoadState::Failed(message) => status::render_error(f, area, message),
        _ => status::render_loading(f, area, thing, state.tick),
    }
}
