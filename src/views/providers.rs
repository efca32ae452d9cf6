//! Provider table for a contract.

use super::cycle_option;
use crate::model::provider::{COLUMNS, DEFAULT_SORT, UNIT_TYPES};
use crate::model::{Contract, Provider};
use crate::table::TableView;

pub const CONTRACT_FILTER: &str = "contract_id";
pub const CONTRACT_TYPE_FILTER: &str = "contract_type";
pub const UNIT_TYPE_FILTER: &str = "unit_type";
pub const NAME_FILTER: &str = "unit_name";
pub const ID_FILTER: &str = "id_number";

/// Columns with a free-text filter.
pub const TEXT_FILTERS: &[&str] = &[NAME_FILTER, ID_FILTER];

#[derive(Debug, Clone)]
pub struct ProvidersView {
    contracts: Vec<Contract>,
    pub table: TableView<Provider>,
}

impl ProvidersView {
    /// Preselects the contract and its contract type.
    pub fn new(contract_id: &str, contracts: Vec<Contract>, providers: Vec<Provider>) -> Self {
        let mut view = Self {
            contracts,
            table: TableView::new(providers, COLUMNS, DEFAULT_SORT),
        };
        view.set_contract(contract_id);
        view
    }

    /// Selecting a contract resets the contract type to that contract's type.
    pub fn set_contract(&mut self, contract_id: &str) {
        let contract_type = self
            .contracts
            .iter()
            .find(|contract| contract.id == contract_id)
            .map(|contract| contract.contract_type.clone())
            .unwrap_or_default();
        self.table.set_exact_filter(CONTRACT_FILTER, contract_id);
        self.table.set_exact_filter(CONTRACT_TYPE_FILTER, &contract_type);
    }

    pub fn contract_id(&self) -> Option<&str> {
        self.table.exact_filters.get(CONTRACT_FILTER)
    }

    pub fn contract_name(&self) -> Option<&str> {
        let id = self.contract_id()?;
        self.contracts
            .iter()
            .find(|contract| contract.id == id)
            .map(|contract| contract.contract_name.as_str())
    }

    pub fn contract_type(&self) -> Option<&str> {
        self.table.exact_filters.get(CONTRACT_TYPE_FILTER)
    }

    pub fn unit_type(&self) -> Option<&str> {
        self.table.exact_filters.get(UNIT_TYPE_FILTER)
    }

    pub fn cycle_contract(&mut self) {
        let options: Vec<String> = self.contracts.iter().map(|c| c.id.clone()).collect();
        let next = cycle_option(&options, self.contract_id());
        self.set_contract(next.as_deref().unwrap_or_default());
    }

    /// Distinct contract types, in contract order.
    pub fn contract_type_options(&self) -> Vec<String> {
        let mut types: Vec<String> = Vec::new();
        for contract in &self.contracts {
            if !types.contains(&contract.contract_type) {
                types.push(contract.contract_type.clone());
            }
        }
        types
    }

    pub fn cycle_contract_type(&mut self) {
        let next = cycle_option(&self.contract_type_options(), self.contract_type());
        self.table
            .set_exact_filter(CONTRACT_TYPE_FILTER, next.as_deref().unwrap_or_default());
    }

    pub fn cycle_unit_type(&mut self) {
        let options: Vec<String> = UNIT_TYPES.iter().map(|t| t.to_string()).collect();
        let next = cycle_option(&options, self.unit_type());
        self.table
            .set_exact_filter(UNIT_TYPE_FILTER, next.as_deref().unwrap_or_default());
    }

    pub fn selected(&self) -> Option<&Provider> {
        self.table.selected_row()
    }

    pub fn footer(&self) -> String {
        format!("Showing {} providers", self.table.projection().len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ContractsEnvelope, ProvidersEnvelope, provider};

    fn view(contract_id: &str) -> ProvidersView {
        let contracts: ContractsEnvelope = serde_json::from_str(
            r#"{"contracts": [
                {"id": "C1", "contract_name": "Acme", "contract_type": "Commercial"},
                {"id": "C2", "contract_name": "Beta", "contract_type": "Medicaid"}
            ]}"#,
        )
        .unwrap();
        let providers: ProvidersEnvelope = serde_json::from_str(
            r#"{"providers": [
                {"id": "P1", "unit_name": "North Clinic", "unit_type": "TIN", "contract_id": "C1", "tin": "11-111"},
                {"id": "P2", "unit_name": "Dr. Adams", "unit_type": "NPI", "contract_id": "C1", "npi": "1234567890"},
                {"id": "P3", "unit_name": "South Clinic", "unit_type": "TIN", "contract_id": "C2", "tin": "22-222"}
            ]}"#,
        )
        .unwrap();
        let providers = provider::enrich(providers.providers, &contracts.contracts);
        ProvidersView::new(contract_id, contracts.contracts, providers)
    }

    fn names(view: &ProvidersView) -> Vec<String> {
        view.table
            .projection()
            .iter()
            .map(|p| p.unit_name.clone())
            .collect()
    }

    #[test]
    fn contract_and_type_are_preselected() {
        let view = view("C1");
        assert_eq!(view.contract_type(), Some("Commercial"));
        assert_eq!(view.contract_name(), Some("Acme"));
        assert_eq!(names(&view), vec!["Dr. Adams", "North Clinic"]);
        assert_eq!(view.footer(), "Showing 2 providers");
    }

    #[test]
    fn changing_contract_resets_contract_type() {
        let mut view = view("C1");
        view.cycle_contract();
        assert_eq!(view.contract_id(), Some("C2"));
        assert_eq!(view.contract_type(), Some("Medicaid"));
        assert_eq!(names(&view), vec!["South Clinic"]);

        view.cycle_contract();
        assert_eq!(view.contract_id(), None);
        assert_eq!(view.contract_type(), None);
        assert_eq!(view.footer(), "Showing 3 providers");
    }

    #[test]
    fn unit_type_filter_is_exact() {
        let mut view = view("C1");
        view.cycle_unit_type();
        assert_eq!(view.unit_type(), Some("TIN"));
        assert_eq!(names(&view), vec!["North Clinic"]);
    }

    #[test]
    fn id_filter_matches_substrings() {
        let mut view = view("");
        view.table.set_filter(ID_FILTER, "222");
        assert_eq!(names(&view), vec!["South Clinic"]);
    }
}
