//! Rows plus their sort, filters and cursor.

use super::{Column, FilterSet, SortState, Tabular, filter_rows, find_column, sort_rows};

#[derive(Debug, Clone)]
pub struct TableView<R> {
    rows: Vec<R>,
    pub columns: &'static [Column],
    pub sort: SortState,
    /// Substring filters from free-text inputs.
    pub filters: FilterSet,
    /// Exact filters from select inputs.
    pub exact_filters: FilterSet,
    pub selected: usize,
    pub focused_column: usize,
}

impl<R: Tabular> TableView<R> {
    pub fn new(rows: Vec<R>, columns: &'static [Column], default_sort: &str) -> Self {
        Self {
            rows,
            columns,
            sort: SortState::new(default_sort),
            filters: FilterSet::new(),
            exact_filters: FilterSet::new(),
            selected: 0,
            focused_column: 0,
        }
    }

    /// Filtered then sorted rows. The loaded rows are never reordered.
    pub fn projection(&self) -> Vec<&R> {
        let filtered: Vec<&R> = filter_rows(&self.rows, &self.filters)
            .into_iter()
            .filter(|row| self.exact_filters.matches_exact(*row))
            .collect();
        match find_column(self.columns, &self.sort.column) {
            Some(column) => sort_rows(filtered, column, self.sort.direction),
            None => filtered,
        }
    }

    pub fn activate_sort(&mut self, column: &str) {
        self.sort.activate(column);
        self.selected = 0;
    }

    /// Sorts on the column under the focus cursor.
    pub fn activate_focused_sort(&mut self) {
        if let Some(column) = self.columns.get(self.focused_column) {
            self.activate_sort(column.key);
        }
    }

    pub fn set_filter(&mut self, column: &str, value: &str) {
        self.filters.set(column, value);
        self.selected = 0;
    }

    pub fn set_exact_filter(&mut self, column: &str, value: &str) {
        self.exact_filters.set(column, value);
        self.selected = 0;
    }

    pub fn select_next(&mut self) {
        let len = self.projection().len();
        if len > 0 && self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn focus_next_column(&mut self) {
        if !self.columns.is_empty() {
            self.focused_column = (self.focused_column + 1) % self.columns.len();
        }
    }

    pub fn focus_previous_column(&mut self) {
        if !self.columns.is_empty() {
            self.focused_column =
                (self.focused_column + self.columns.len() - 1) % self.columns.len();
        }
    }

    pub fn selected_row(&self) -> Option<&R> {
        self.projection().get(self.selected).copied()
    }
}
