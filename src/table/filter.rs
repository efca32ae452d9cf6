//! Column filters.

use super::Tabular;
use std::collections::BTreeMap;

/// Filter text keyed by column. Empty values impose no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    entries: BTreeMap<String, String>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the filter for a column; an empty value removes it.
    pub fn set(&mut self, column: impl Into<String>, value: impl Into<String>) {
        let column = column.into();
        let value = value.into();
        if value.is_empty() {
            self.entries.remove(&column);
        } else {
            self.entries.insert(column, value);
        }
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.entries.get(column).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Case-insensitive substring match of every entry.
    pub fn matches<R: Tabular + ?Sized>(&self, row: &R) -> bool {
        self.entries.iter().all(|(column, needle)| {
            row.cell(column)
                .to_string()
                .to_lowercase()
                .contains(&needle.to_lowercase())
        })
    }

    /// Exact match of every entry, used by select-style filters.
    pub fn matches_exact<R: Tabular + ?Sized>(&self, row: &R) -> bool {
        self.entries
            .iter()
            .all(|(column, wanted)| row.cell(column).to_string() == *wanted)
    }
}

/// Keeps the rows satisfying every substring filter, in input order.
pub fn filter_rows<'a, R, I>(rows: I, filters: &FilterSet) -> Vec<&'a R>
where
    R: Tabular + 'a,
    I: IntoIterator<Item = &'a R>,
{
    if filters.is_empty() {
        return rows.into_iter().collect();
    }
    rows.into_iter().filter(|row| filters.matches(*row)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::CellValue;
    use crate::table::testing::{Row, names};

    fn rows() -> Vec<Row> {
        vec![
            Row::new("Acme Health", CellValue::Number(1200.0)),
            Row::new("Beta Care", CellValue::text("$1,050")),
            Row::new("acme east", CellValue::Missing),
        ]
    }

    #[test]
    fn empty_filters_are_identity() {
        let rows = rows();
        let kept = filter_rows(&rows, &FilterSet::new());
        assert_eq!(names(&kept), vec!["Acme Health", "Beta Care", "acme east"]);

        let mut filters = FilterSet::new();
        filters.set("name", "");
        assert!(filters.is_empty());
        assert_eq!(filter_rows(&rows, &filters).len(), 3);
    }

    #[test]
    fn substring_filters_ignore_case() {
        let rows = rows();
        let mut filters = FilterSet::new();
        filters.set("name", "ACME");
        assert_eq!(names(&filter_rows(&rows, &filters)), vec!["Acme Health", "acme east"]);
    }

    #[test]
    fn filters_match_stringified_values() {
        let rows = rows();
        let mut filters = FilterSet::new();
        filters.set("amount", "120");
        assert_eq!(names(&filter_rows(&rows, &filters)), vec!["Acme Health"]);

        filters.set("amount", "1,0");
        assert_eq!(names(&filter_rows(&rows, &filters)), vec!["Beta Care"]);
    }

    #[test]
    fn every_filter_must_match() {
        let rows = rows();
        let mut filters = FilterSet::new();
        filters.set("name", "acme");
        filters.set("amount", "1200");
        assert_eq!(names(&filter_rows(&rows, &filters)), vec!["Acme Health"]);

        filters.set("amount", "");
        assert_eq!(filter_rows(&rows, &filters).len(), 2);
    }

    #[test]
    fn exact_filters_do_not_match_substrings() {
        let row = Row::new("Acme", CellValue::text("TIN"));
        let mut filters = FilterSet::new();
        filters.set("amount", "TI");
        assert!(!filters.matches_exact(&row));
        filters.set("amount", "TIN");
        assert!(filters.matches_exact(&row));
    }
}
