//! Single-key sorting over declared column kinds.

use super::{CellValue, Column, ColumnKind, Tabular};
use std::cmp::Ordering;

pub const INDICATOR_ASC: &str = "▲";
pub const INDICATOR_DESC: &str = "▼";
pub const INDICATOR_NONE: &str = "↕";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn indicator(self) -> &'static str {
        match self {
            SortDirection::Ascending => INDICATOR_ASC,
            SortDirection::Descending => INDICATOR_DESC,
        }
    }
}

/// Active sort column and direction of a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortState {
    pub column: String,
    pub direction: SortDirection,
}

impl SortState {
    pub fn new(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            direction: SortDirection::Ascending,
        }
    }

    /// Activates a column: the same column flips direction, a new one starts ascending.
    pub fn activate(&mut self, column: &str) {
        if self.column == column {
            self.direction = self.direction.toggled();
        } else {
            self.column = column.to_string();
            self.direction = SortDirection::Ascending;
        }
    }

    pub fn indicator_for(&self, column: &str) -> &'static str {
        if self.column == column {
            self.direction.indicator()
        } else {
            INDICATOR_NONE
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum SortKey {
    Number(f64),
    Text(String),
    Unreadable,
}

fn parse_number(raw: &str) -> SortKey {
    match raw.trim().parse::<f64>() {
        Ok(n) if !n.is_nan() => SortKey::Number(n),
        _ => SortKey::Unreadable,
    }
}

fn sort_key(kind: ColumnKind, value: &CellValue) -> SortKey {
    match (kind, value) {
        (_, CellValue::Missing) => SortKey::Unreadable,
        (ColumnKind::Text, other) => SortKey::Text(other.to_string().to_lowercase()),
        (_, CellValue::Number(n)) if n.is_nan() => SortKey::Unreadable,
        (_, CellValue::Number(n)) => SortKey::Number(*n),
        (ColumnKind::Numeric, CellValue::Text(s)) => parse_number(s),
        (ColumnKind::Currency, CellValue::Text(s)) => parse_number(&s.replace(['$', ','], "")),
        (ColumnKind::Percentage, CellValue::Text(s)) => {
            parse_number(s.trim().trim_end_matches('%').trim_start_matches('+'))
        }
    }
}

fn compare_keys(a: &SortKey, b: &SortKey) -> Ordering {
    match (a, b) {
        (SortKey::Number(x), SortKey::Number(y)) => x.total_cmp(y),
        (SortKey::Text(x), SortKey::Text(y)) => x.cmp(y),
        (SortKey::Unreadable, SortKey::Unreadable) => Ordering::Equal,
        (SortKey::Unreadable, _) => Ordering::Greater,
        (_, SortKey::Unreadable) => Ordering::Less,
        // A column has one kind, so numbers and text never meet.
        (SortKey::Number(_), SortKey::Text(_)) => Ordering::Less,
        (SortKey::Text(_), SortKey::Number(_)) => Ordering::Greater,
    }
}

/// Returns the rows ordered by `column` without touching the input.
///
/// The sort is stable and uses no secondary key; descending is the exact
/// reverse comparator of ascending.
pub fn sort_rows<'a, R, I>(rows: I, column: &Column, direction: SortDirection) -> Vec<&'a R>
where
    R: Tabular + 'a,
    I: IntoIterator<Item = &'a R>,
{
    let mut keyed: Vec<(SortKey, &'a R)> = rows
        .into_iter()
        .map(|row| (sort_key(column.kind, &row.cell(column.key)), row))
        .collect();
    keyed.sort_by(|(a, _), (b, _)| {
        let ordering = compare_keys(a, b);
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
    keyed.into_iter().map(|(_, row)| row).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::testing::{Row, names};

    fn column(kind: ColumnKind) -> Column {
        Column::new("amount", "Amount", kind)
    }

    #[test]
    fn numeric_columns_sort_by_value() {
        let rows = vec![
            Row::new("Acme", CellValue::Number(100.0)),
            Row::new("Beta", CellValue::Number(-50.0)),
            Row::new("Core", CellValue::Number(9.5)),
        ];
        let sorted = sort_rows(&rows, &column(ColumnKind::Numeric), SortDirection::Ascending);
        assert_eq!(names(&sorted), vec!["Beta", "Core", "Acme"]);
    }

    #[test]
    fn currency_text_sorts_by_magnitude() {
        let rows = vec![
            Row::new("a", CellValue::text("$14,500")),
            Row::new("b", CellValue::text("$298")),
            Row::new("c", CellValue::text("$1,098")),
        ];
        let sorted = sort_rows(&rows, &column(ColumnKind::Currency), SortDirection::Ascending);
        assert_eq!(names(&sorted), vec!["b", "c", "a"]);
    }

    #[test]
    fn percentage_text_sorts_by_magnitude() {
        let rows = vec![
            Row::new("a", CellValue::text("87%")),
            Row::new("b", CellValue::text("9%")),
            Row::new("c", CellValue::text("13.2%")),
        ];
        let sorted = sort_rows(&rows, &column(ColumnKind::Percentage), SortDirection::Descending);
        assert_eq!(names(&sorted), vec!["a", "c", "b"]);
    }

    #[test]
    fn text_with_currency_symbol_is_not_sniffed() {
        let rows = vec![
            Row::new("a", CellValue::text("$ plan b")),
            Row::new("b", CellValue::text("$ Plan A")),
        ];
        let sorted = sort_rows(&rows, &column(ColumnKind::Text), SortDirection::Ascending);
        assert_eq!(names(&sorted), vec!["b", "a"]);
    }

    #[test]
    fn unreadable_values_sort_last_ascending() {
        let rows = vec![
            Row::new("missing", CellValue::Missing),
            Row::new("junk", CellValue::text("n/a")),
            Row::new("one", CellValue::Number(1.0)),
        ];
        let sorted = sort_rows(&rows, &column(ColumnKind::Currency), SortDirection::Ascending);
        assert_eq!(names(&sorted), vec!["one", "missing", "junk"]);
    }

    #[test]
    fn toggling_twice_restores_the_order() {
        let rows = vec![
            Row::new("x", CellValue::Number(3.0)),
            Row::new("y", CellValue::Number(1.0)),
            Row::new("z", CellValue::Number(2.0)),
        ];
        let col = column(ColumnKind::Numeric);
        let mut state = SortState::new("amount");
        let first = names(&sort_rows(&rows, &col, state.direction));
        state.activate("amount");
        let flipped = names(&sort_rows(&rows, &col, state.direction));
        state.activate("amount");
        let again = names(&sort_rows(&rows, &col, state.direction));

        assert_eq!(flipped, vec!["x", "z", "y"]);
        assert_eq!(first, again);
    }

    #[test]
    fn new_column_resets_to_ascending() {
        let mut state = SortState::new("name");
        state.activate("name");
        assert_eq!(state.direction, SortDirection::Descending);
        state.activate("amount");
        assert_eq!(state.column, "amount");
        assert_eq!(state.direction, SortDirection::Ascending);
        assert_eq!(state.indicator_for("amount"), INDICATOR_ASC);
        assert_eq!(state.indicator_for("name"), INDICATOR_NONE);
    }

    #[test]
    fn ties_keep_input_order() {
        let rows = vec![
            Row::new("first", CellValue::Number(1.0)),
            Row::new("second", CellValue::Number(1.0)),
        ];
        let sorted = sort_rows(&rows, &column(ColumnKind::Numeric), SortDirection::Ascending);
        assert_eq!(names(&sorted), vec!["first", "second"]);
    }
}
