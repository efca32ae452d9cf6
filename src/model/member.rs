use super::de;
use crate::format;
use crate::table::{CellValue, Tabular};
use serde::Deserialize;

/// Risk category assigned to members without one.
pub const OTHER_CATEGORY: &str = "Other";

#[derive(Debug, Deserialize)]
pub struct MembersEnvelope {
    pub members: Vec<Member>,
}

/// An attributed patient with a risk flag and utilization figures.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Member {
    #[serde(deserialize_with = "de::text")]
    pub member_id: String,
    #[serde(default, deserialize_with = "de::text")]
    pub name: String,
    #[serde(default, deserialize_with = "de::text")]
    pub unit_name: String,
    #[serde(default, deserialize_with = "de::text")]
    pub pcp_name: String,
    #[serde(default, deserialize_with = "de::optional_text")]
    pub pcp_npi: Option<String>,
    #[serde(default, deserialize_with = "de::optional_text")]
    pub risk_category: Option<String>,
    #[serde(default, deserialize_with = "de::cell")]
    pub metric_value: CellValue,
    #[serde(default, deserialize_with = "de::number")]
    pub risk_score: Option<f64>,
    #[serde(default, deserialize_with = "de::list")]
    pub suspect_conditions: Vec<String>,
    #[serde(default, deserialize_with = "de::number")]
    pub medications_count: Option<f64>,
    #[serde(default, deserialize_with = "de::list")]
    pub high_risk_drugs: Vec<String>,
    #[serde(default, deserialize_with = "de::number")]
    pub ed_visits_ytd: Option<f64>,
    #[serde(default, deserialize_with = "de::number")]
    pub ip_admits_ytd: Option<f64>,
    #[serde(default, deserialize_with = "de::number")]
    pub total_visits: Option<f64>,
    #[serde(default, deserialize_with = "de::number")]
    pub visit_cost: Option<f64>,
    #[serde(default, deserialize_with = "de::number")]
    pub pharmacy_spend: Option<f64>,
    #[serde(default, deserialize_with = "de::number")]
    pub specialty_spend: Option<f64>,
    #[serde(default, deserialize_with = "de::cell")]
    pub specialty_services_used: CellValue,
    #[serde(default, deserialize_with = "de::number")]
    pub num_open_gaps: Option<f64>,
    #[serde(default, deserialize_with = "de::list")]
    pub measures_due: Vec<String>,
    #[serde(default, deserialize_with = "de::optional_text")]
    pub next_appointment: Option<String>,
}

impl Member {
    /// The member's risk category, `Other` when absent.
    pub fn category(&self) -> &str {
        self.risk_category.as_deref().unwrap_or(OTHER_CATEGORY)
    }

    /// The category metric formatted for display.
    pub fn metric_display(&self) -> String {
        format::member_metric(self.category(), &self.metric_value)
    }
}

impl Tabular for Member {
    fn cell(&self, column: &str) -> CellValue {
        match column {
            "member_id" => CellValue::text(&self.member_id),
            "name" => CellValue::text(&self.name),
            "unit_name" => CellValue::text(&self.unit_name),
            "pcp_name" => CellValue::text(&self.pcp_name),
            "pcp_npi" => CellValue::optional_text(self.pcp_npi.as_deref()),
            "risk_category" => CellValue::text(self.category()),
            "metric_value" => CellValue::text(self.metric_display()),
            "risk_score" => CellValue::number(self.risk_score),
            "suspect_conditions" => CellValue::list(&self.suspect_conditions),
            "medications_count" => CellValue::number(self.medications_count),
            "high_risk_drugs" => CellValue::list(&self.high_risk_drugs),
            "ed_visits_ytd" => CellValue::number(self.ed_visits_ytd),
            "ip_admits_ytd" => CellValue::number(self.ip_admits_ytd),
            "total_visits" => CellValue::number(self.total_visits),
            "visit_cost" => CellValue::number(self.visit_cost),
            "pharmacy_spend" => CellValue::number(self.pharmacy_spend),
            "specialty_spend" => CellValue::number(self.specialty_spend),
            "specialty_services_used" => self.specialty_services_used.clone(),
            "num_open_gaps" => CellValue::number(self.num_open_gaps),
            "measures_due" => CellValue::list(&self.measures_due),
            "next_appointment" => {
                CellValue::text(self.next_appointment.as_deref().unwrap_or("-"))
            }
            _ => CellValue::Missing,
        }
    }
}
