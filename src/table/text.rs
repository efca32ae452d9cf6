//! Plain-text rendering of a table projection, used by headless mode.

use super::{Column, SortState, Tabular};

const COLUMN_GAP: &str = "  ";

/// Renders the header (with sort indicators) and the given rows as aligned text.
pub fn render<R: Tabular>(columns: &[Column], sort: Option<&SortState>, rows: &[&R]) -> String {
    let header: Vec<String> = columns
        .iter()
        .map(|column| match sort {
            Some(state) => format!("{} {}", column.label, state.indicator_for(column.key)),
            None => column.label.to_string(),
        })
        .collect();
    let body: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            columns
                .iter()
                .map(|column| column.display(&row.cell(column.key)))
                .collect()
        })
        .collect();

    let widths: Vec<usize> = (0..columns.len())
        .map(|i| {
            body.iter()
                .map(|cells| cells[i].chars().count())
                .chain(std::iter::once(header[i].chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    push_line(&mut out, &header, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_line(&mut out, &rule, &widths);
    for cells in &body {
        push_line(&mut out, cells, &widths);
    }
    out
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{}{}", cell, " ".repeat(pad))
        })
        .collect::<Vec<_>>()
        .join(COLUMN_GAP);
    out.push_str(line.trim_end());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::testing::Row;
    use crate::table::{CellValue, ColumnKind};

    #[test]
    fn renders_header_rule_and_rows() {
        let columns = [
            Column::new("name", "Name", ColumnKind::Text),
            Column::new("amount", "Surplus", ColumnKind::Currency),
        ];
        let rows = [
            Row::new("Acme", CellValue::Number(100.0)),
            Row::new("Beta", CellValue::Number(-50.0)),
        ];
        let refs: Vec<&Row> = rows.iter().collect();
        let sort = SortState::new("amount");

        let text = render(&columns, Some(&sort), &refs);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Name ↕  Surplus ▲");
        assert_eq!(lines[1], "------  ---------");
        assert_eq!(lines[2], "Acme    $100");
        assert_eq!(lines[3], "Beta    -$50");
    }
}
