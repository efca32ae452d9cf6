//! Generic table utilities shared by every tabular view.
//!
//! Rows expose their cells through [`Tabular`]; columns declare their
//! [`ColumnKind`] once, and sorting and display both dispatch on that kind.

pub mod filter;
pub mod sort;
pub mod text;
pub mod view;

pub use filter::{FilterSet, filter_rows};
pub use sort::{SortState, sort_rows};
pub use view::TableView;

use crate::format;
use std::fmt::{Display, Formatter};

/// The semantic type of a column, used for comparison and display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Numeric,
    Currency,
    Percentage,
    Text,
}

/// A column definition: the record key, its header label and its kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: ColumnKind,
}

impl Column {
    pub const fn new(key: &'static str, label: &'static str, kind: ColumnKind) -> Self {
        Self { key, label, kind }
    }

    /// Display string for a cell of this column.
    pub fn display(&self, value: &CellValue) -> String {
        match (self.kind, value) {
            (ColumnKind::Currency, CellValue::Number(n)) => format::currency(Some(*n)),
            (ColumnKind::Percentage, CellValue::Number(n)) => format::percentage(Some(*n)),
            (ColumnKind::Numeric, CellValue::Number(n)) => format::count(Some(*n)),
            (_, other) => other.to_string(),
        }
    }
}

/// Looks up a column definition by key.
pub fn find_column<'a>(columns: &'a [Column], key: &str) -> Option<&'a Column> {
    columns.iter().find(|column| column.key == key)
}

/// A single cell as read from a record.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum CellValue {
    Number(f64),
    Text(String),
    #[default]
    Missing,
}

impl CellValue {
    pub fn number(value: Option<f64>) -> Self {
        value.map_or(CellValue::Missing, CellValue::Number)
    }

    pub fn text(value: impl Into<String>) -> Self {
        CellValue::Text(value.into())
    }

    pub fn optional_text(value: Option<&str>) -> Self {
        value.map_or(CellValue::Missing, |s| CellValue::Text(s.to_string()))
    }

    pub fn list(values: &[String]) -> Self {
        CellValue::Text(format::measures(values))
    }
}

/// Stringified form used by substring filters and text comparison.
impl Display for CellValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CellValue::Number(n) => write!(f, "{}", format::plain_number(*n)),
            CellValue::Text(s) => write!(f, "{}", s),
            CellValue::Missing => Ok(()),
        }
    }
}

/// A record that can be shown in a table.
pub trait Tabular {
    fn cell(&self, column: &str) -> CellValue;
}

#[cfg(test)]
pub(crate) mod testing {
    use super::{CellValue, Tabular};

    /// Minimal row used by the table tests.
    #[derive(Debug, Clone, PartialEq)]
    pub struct Row {
        pub name: &'static str,
        pub amount: CellValue,
    }

    impl Row {
        pub fn new(name: &'static str, amount: CellValue) -> Self {
            Self { name, amount }
        }
    }

    impl Tabular for Row {
        fn cell(&self, column: &str) -> CellValue {
            match column {
                "name" => CellValue::text(self.name),
                "amount" => self.amount.clone(),
                _ => CellValue::Missing,
            }
        }
    }

    pub fn names(rows: &[&Row]) -> Vec<&'static str> {
        rows.iter().map(|row| row.name).collect()
    }
}
