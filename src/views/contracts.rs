//! Contract table.

use super::cycle_option;
use crate::model::Contract;
use crate::model::contract::{COLUMNS, CONTRACT_TYPES, DEFAULT_SORT};
use crate::table::TableView;

pub const NAME_FILTER: &str = "contract_name";
pub const TYPE_FILTER: &str = "contract_type";
pub const MEMBER_MONTHS_FILTER: &str = "member_months_ytd";

/// Columns with a free-text filter.
pub const TEXT_FILTERS: &[&str] = &[NAME_FILTER, MEMBER_MONTHS_FILTER];

#[derive(Debug, Clone)]
pub struct ContractsView {
    pub table: TableView<Contract>,
}

impl ContractsView {
    pub fn new(contracts: Vec<Contract>) -> Self {
        Self {
            table: TableView::new(contracts, COLUMNS, DEFAULT_SORT),
        }
    }

    /// The type select matches as a substring, like the free-text inputs.
    pub fn cycle_type_filter(&mut self) {
        let options: Vec<String> = CONTRACT_TYPES.iter().map(|t| t.to_string()).collect();
        let next = cycle_option(&options, self.table.filters.get(TYPE_FILTER));
        self.table.set_filter(TYPE_FILTER, next.as_deref().unwrap_or_default());
    }

    pub fn type_filter(&self) -> Option<&str> {
        self.table.filters.get(TYPE_FILTER)
    }

    pub fn selected(&self) -> Option<&Contract> {
        self.table.selected_row()
    }

    pub fn footer(&self) -> String {
        format!("Showing {} contracts", self.table.projection().len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ContractsEnvelope;

    fn view() -> ContractsView {
        let envelope: ContractsEnvelope = serde_json::from_str(
            r#"{"contracts": [
                {"id": "C1", "contract_name": "Acme", "contract_type": "Commercial", "member_months_ytd": 1200},
                {"id": "C2", "contract_name": "Beta", "contract_type": "Medicaid", "member_months_ytd": 800},
                {"id": "C3", "contract_name": "Cobalt", "contract_type": "Medicare Advantage", "member_months_ytd": 120}
            ]}"#,
        )
        .unwrap();
        ContractsView::new(envelope.contracts)
    }

    #[test]
    fn defaults_to_name_ascending() {
        let view = view();
        assert_eq!(view.selected().map(|c| c.id.as_str()), Some("C1"));
        assert_eq!(view.footer(), "Showing 3 contracts");
    }

    #[test]
    fn type_select_cycles_and_filters() {
        let mut view = view();
        view.cycle_type_filter();
        assert_eq!(view.type_filter(), Some("Commercial"));
        assert_eq!(view.footer(), "Showing 1 contracts");

        view.cycle_type_filter();
        view.cycle_type_filter();
        assert_eq!(view.type_filter(), Some("Medicaid"));

        view.cycle_type_filter();
        assert_eq!(view.type_filter(), None);
        assert_eq!(view.footer(), "Showing 3 contracts");
    }

    #[test]
    fn member_months_filter_is_a_substring_match() {
        let mut view = view();
        view.table.set_filter(MEMBER_MONTHS_FILTER, "12");
        assert_eq!(view.footer(), "Showing 2 contracts");
    }
}
