use super::{Contract, de};
use crate::table::{CellValue, Column, ColumnKind, Tabular};
use serde::Deserialize;

pub const UNIT_TYPES: [&str; 3] = ["TIN", "NPI", "Practice"];

pub const COLUMNS: &[Column] = &[
    Column::new("unit_name", "Provider Name", ColumnKind::Text),
    Column::new("unit_type", "Type", ColumnKind::Text),
    Column::new("id_number", "ID", ColumnKind::Text),
    Column::new("contract_type", "Contract Type", ColumnKind::Text),
    Column::new("member_months", "Member Months", ColumnKind::Numeric),
    Column::new("target", "Target", ColumnKind::Currency),
    Column::new("expense", "Expense", ColumnKind::Currency),
    Column::new("surplus", "Surplus", ColumnKind::Currency),
    Column::new("quality_gaps_ratio", "Quality Gaps Completed", ColumnKind::Percentage),
    Column::new("awv_completed_percentage", "% AWV completed", ColumnKind::Percentage),
];

pub const DEFAULT_SORT: &str = "unit_name";

#[derive(Debug, Deserialize)]
pub struct ProvidersEnvelope {
    pub providers: Vec<Provider>,
}

/// A provider unit (TIN, NPI or practice) participating in a contract.
///
/// `id_number` and `contract_type` are derived once at load time by [`enrich`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Provider {
    #[serde(deserialize_with = "de::text")]
    pub id: String,
    #[serde(default, deserialize_with = "de::text")]
    pub unit_name: String,
    #[serde(default, deserialize_with = "de::text")]
    pub unit_type: String,
    #[serde(default, deserialize_with = "de::text")]
    pub contract_id: String,
    #[serde(default, deserialize_with = "de::optional_text")]
    pub tin: Option<String>,
    #[serde(default, deserialize_with = "de::optional_text")]
    pub npi: Option<String>,
    #[serde(default, deserialize_with = "de::number")]
    pub member_months: Option<f64>,
    #[serde(default, deserialize_with = "de::number")]
    pub target: Option<f64>,
    #[serde(default, deserialize_with = "de::number")]
    pub expense: Option<f64>,
    #[serde(default, deserialize_with = "de::number")]
    pub surplus: Option<f64>,
    #[serde(default, deserialize_with = "de::number")]
    pub quality_gaps_completed: Option<f64>,
    #[serde(default, deserialize_with = "de::number")]
    pub quality_gaps_total: Option<f64>,
    #[serde(default, deserialize_with = "de::number")]
    pub awv_completed_percentage: Option<f64>,
    #[serde(skip)]
    pub id_number: String,
    #[serde(skip)]
    pub contract_type: String,
}

impl Provider {
    pub fn in_surplus(&self) -> bool {
        self.surplus.is_some_and(|surplus| surplus >= 0.0)
    }

    /// Completed over total quality gaps. Zero totals give a non-finite ratio.
    pub fn quality_ratio(&self) -> Option<f64> {
        match (self.quality_gaps_completed, self.quality_gaps_total) {
            (Some(completed), Some(total)) => Some(completed / total),
            _ => None,
        }
    }
}

/// Fills the derived `id_number` and `contract_type` of every provider.
pub fn enrich(providers: Vec<Provider>, contracts: &[Contract]) -> Vec<Provider> {
    providers
        .into_iter()
        .map(|mut provider| {
            let id = if provider.unit_type == "TIN" {
                provider.tin.clone()
            } else {
                provider.npi.clone()
            };
            provider.id_number = id.unwrap_or_else(|| "N/A".to_string());
            provider.contract_type = contracts
                .iter()
                .find(|contract| contract.id == provider.contract_id)
                .map(|contract| contract.contract_type.clone())
                .unwrap_or_default();
            provider
        })
        .collect()
}

impl Tabular for Provider {
    fn cell(&self, column: &str) -> CellValue {
        match column {
            "id" => CellValue::text(&self.id),
            "unit_name" => CellValue::text(&self.unit_name),
            "unit_type" => CellValue::text(&self.unit_type),
            "contract_id" => CellValue::text(&self.contract_id),
            "id_number" => CellValue::text(&self.id_number),
            "contract_type" => CellValue::text(&self.contract_type),
            "tin" => CellValue::optional_text(self.tin.as_deref()),
            "npi" => CellValue::optional_text(self.npi.as_deref()),
            "member_months" => CellValue::number(self.member_months),
            "target" => CellValue::number(self.target),
            "expense" => CellValue::number(self.expense),
            "surplus" => CellValue::number(self.surplus),
            "quality_gaps_completed" => CellValue::number(self.quality_gaps_completed),
            "quality_gaps_ratio" => CellValue::number(self.quality_ratio()),
            "quality_gaps_total" => CellValue::number(self.quality_gaps_total),
            "awv_completed_percentage" => CellValue::number(self.awv_completed_percentage),
            _ => CellValue::Missing,
        }
    }
}
