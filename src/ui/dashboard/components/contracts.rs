//! Contracts table

use super::super::state::DashboardState;
use super::super::utils::surplus_color;
use super::filters::render_filters;
use super::table::render_table;
use crate::router::ViewId;
use crate::views::ContractsView;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Paragraph;

pub fn render_contracts(f: &mut Frame, area: Rect, state: &DashboardState, view: &ContractsView) {
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
        ViewId::Contracts,
        &[("T", "Contract Type", view.type_filter())],
    );
    render_table(f, chunks[1], "CONTRACTS", &view.table, |contract, column| {
        if column.key == "surplus_ytd" && contract.surplus_ytd.is_some() {
            Style::default().fg(surplus_color(contract.in_surplus()))
        } else {
            Style::default()
        }
    });
    f.render_widget(
        Paragraph::new(view.footer()).style(Style::default().fg(Color::DarkGray)),
        chunks[2],
    );
}
