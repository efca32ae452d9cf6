//! Provider units of a contract

use super::super::state::DashboardState;
use super::super::utils::surplus_color;
use super::filters::render_filters;
use super::table::render_table;
use crate::router::ViewId;
use crate::views::ProvidersView;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Paragraph;

pub fn render_providers(f: &mut Frame, area: Rect, state: &DashboardState, view: &ProvidersView) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .split(area);

    render_filters(
        f,
        chunks[0],
        state,
        ViewId::Providers,
        &[
            ("C", "Contract", view.contract_name()),
            ("T", "Contract Type", view.contract_type()),
            ("U", "Unit Type", view.unit_type()),
        ],
    );
    let title = match view.contract_name() {
        Some(name) => format!("PROVIDERS - {}", name),
        None => "PROVIDERS".to_string(),
    };
    render_table(f, chunks[1], &title, &view.table, |provider, column| {
        if column.key == "surplus" && provider.surplus.is_some() {
            Style::default().fg(surplus_color(provider.in_surplus()))
        } else {
            Style::default()
        }
    });
    f.render_widget(
        Paragraph::new(view.footer()).style(Style::default().fg(Color::DarkGray)),
        chunks[2],
    );
}
