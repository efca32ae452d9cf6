use super::de;
use crate::table::{CellValue, Column, ColumnKind, Tabular};
use serde::Deserialize;

/// The contract types offered by the type filter.
pub const CONTRACT_TYPES: [&str; 3] = ["Commercial", "Medicare Advantage", "Medicaid"];

pub const COLUMNS: &[Column] = &[
    Column::new("contract_name", "Contract Name", ColumnKind::Text),
    Column::new("contract_type", "Type", ColumnKind::Text),
    Column::new("member_months_ytd", "Member Months", ColumnKind::Numeric),
    Column::new("target_ytd", "Target", ColumnKind::Currency),
    Column::new("expense_ytd", "Expense", ColumnKind::Currency),
    Column::new("surplus_ytd", "Surplus", ColumnKind::Currency),
    Column::new("quality_bonus_ytd", "Quality (bonus)", ColumnKind::Currency),
    Column::new("gainshare_ytd", "Gainshare", ColumnKind::Currency),
];

pub const DEFAULT_SORT: &str = "contract_name";

#[derive(Debug, Deserialize)]
pub struct ContractsEnvelope {
    pub contracts: Vec<Contract>,
}

/// A value-based care agreement with year-to-date financials.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Contract {
    #[serde(deserialize_with = "de::text")]
    pub id: String,
    #[serde(default, deserialize_with = "de::text")]
    pub contract_name: String,
    #[serde(default, deserialize_with = "de::text")]
    pub contract_type: String,
    #[serde(default, deserialize_with = "de::number")]
    pub member_months_ytd: Option<f64>,
    #[serde(default, deserialize_with = "de::number")]
    pub target_ytd: Option<f64>,
    #[serde(default, deserialize_with = "de::number")]
    pub expense_ytd: Option<f64>,
    #[serde(default, deserialize_with = "de::number")]
    pub surplus_ytd: Option<f64>,
    #[serde(default, deserialize_with = "de::number")]
    pub quality_bonus_ytd: Option<f64>,
    #[serde(default, deserialize_with = "de::number")]
    pub gainshare_ytd: Option<f64>,
}

impl Contract {
    /// Surplus is shown in green when zero or positive.
    pub fn in_surplus(&self) -> bool {
        self.surplus_ytd.is_some_and(|surplus| surplus >= 0.0)
    }
}

impl Tabular for Contract {
    fn cell(&self, column: &str) -> CellValue {
        match column {
            "id" => CellValue::text(&self.id),
            "contract_name" => CellValue::text(&self.contract_name),
            "contract_type" => CellValue::text(&self.contract_type),
            "member_months_ytd" => CellValue::number(self.member_months_ytd),
            "target_ytd" => CellValue::number(self.target_ytd),
            "expense_ytd" => CellValue::number(self.expense_ytd),
            "surplus_ytd" => CellValue::number(self.surplus_ytd),
            "quality_bonus_ytd" => CellValue::number(self.quality_bonus_ytd),
            "gainshare_ytd" => CellValue::number(self.gainshare_ytd),
            _ => CellValue::Missing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::sort::SortDirection;
    use crate::table::{find_column, sort_rows};

    fn contracts() -> Vec<Contract> {
        let envelope: ContractsEnvelope = serde_json::from_str(
            r#"{"contracts": [
                {"id": "C1", "contract_name": "Acme", "contract_type": "Commercial", "surplus_ytd": 100},
                {"id": "C2", "contract_name": "Beta", "contract_type": "Medicaid", "surplus_ytd": "-50"}
            ]}"#,
        )
        .unwrap();
        envelope.contracts
    }

    #[test]
    fn surplus_sorts_numerically() {
        let contracts = contracts();
        let column = find_column(COLUMNS, "surplus_ytd").unwrap();
        let sorted = sort_rows(&contracts, column, SortDirection::Ascending);
        let names: Vec<&str> = sorted.iter().map(|c| c.contract_name.as_str()).collect();
        assert_eq!(names, vec!["Beta", "Acme"]);
    }

    #[test]
    fn currency_strings_sort_by_magnitude() {
        let envelope: ContractsEnvelope = serde_json::from_str(
            r#"{"contracts": [
                {"id": "C1", "contract_name": "Acme", "surplus_ytd": "$1,250"},
                {"id": "C2", "contract_name": "Beta", "surplus_ytd": "$98"},
                {"id": "C3", "contract_name": "Core", "surplus_ytd": 500}
            ]}"#,
        )
        .unwrap();
        let column = find_column(COLUMNS, "surplus_ytd").unwrap();
        let sorted = sort_rows(&envelope.contracts, column, SortDirection::Ascending);
        let shown: Vec<(&str, String)> = sorted
            .iter()
            .map(|c| (c.contract_name.as_str(), column.display(&c.cell(column.key))))
            .collect();
        assert_eq!(
            shown,
            vec![
                ("Beta", "$98".to_string()),
                ("Core", "$500".to_string()),
                ("Acme", "$1,250".to_string()),
            ]
        );
    }

    #[test]
    fn surplus_colour_follows_sign() {
        let contracts = contracts();
        assert!(contracts[0].in_surplus());
        assert!(!contracts[1].in_surplus());
    }

    #[test]
    fn missing_envelope_key_is_a_decode_error() {
        assert!(serde_json::from_str::<ContractsEnvelope>(r#"{"rows": []}"#).is_err());
    }
}
