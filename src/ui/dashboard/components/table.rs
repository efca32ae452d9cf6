//! Sortable table widget shared by the contracts and providers views

use crate::table::{Column, TableView, Tabular};

use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Cell, Row, Table, TableState};

/// Renders the table projection. `cell_style` colours individual cells.
pub fn render_table<R: Tabular>(
    f: &mut Frame,
    area: Rect,
    title: &str,
    table: &TableView<R>,
    cell_style: impl Fn(&R, &Column) -> Style,
) {
    let header = Row::new(table.columns.iter().enumerate().map(|(i, column)| {
        let style = if i == table.focused_column {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        };
        Cell::from(format!(
            "{} {}",
            column.label,
            table.sort.indicator_for(column.key)
        ))
        .style(style)
    }));

    let projection = table.projection();
    let rows = projection.iter().map(|row| {
        Row::new(table.columns.iter().map(|column| {
            Cell::from(column.display(&row.cell(column.key))).style(cell_style(row, column))
        }))
    });

    let widths = vec![Constraint::Fill(1); table.columns.len()];
    let widget = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .title(title.to_string())
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut table_state =
        TableState::default().with_selected((!projection.is_empty()).then_some(table.selected));
    f.render_stateful_widget(widget, area, &mut table_state);
}
