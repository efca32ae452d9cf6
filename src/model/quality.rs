use super::de;
use crate::table::CellValue;
use serde::Deserialize;

/// Closure rate at or above which a measure is shown as on target.
pub const TARGET_RATE: f64 = 0.7;

#[derive(Debug, Deserialize)]
pub struct QualityGapsEnvelope {
    #[serde(default)]
    pub quality_gaps: Vec<QualityGap>,
}

/// A quality measure with its closure counts and the members it covers.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct QualityGap {
    #[serde(default, deserialize_with = "de::text")]
    pub measure_name: String,
    #[serde(default, deserialize_with = "de::number")]
    pub numerator: Option<f64>,
    #[serde(default, deserialize_with = "de::number")]
    pub denominator: Option<f64>,
    #[serde(default, deserialize_with = "de::number")]
    pub members_with_appointments: Option<f64>,
    #[serde(default)]
    pub members: Vec<GapMember>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GapMember {
    #[serde(default, deserialize_with = "de::text")]
    pub name: String,
    #[serde(default, deserialize_with = "de::text")]
    pub status: String,
    #[serde(default, deserialize_with = "de::cell")]
    pub value: CellValue,
    #[serde(default, deserialize_with = "de::optional_text")]
    pub next_appointment: Option<String>,
    #[serde(default, deserialize_with = "de::optional_text")]
    pub pcp_name: Option<String>,
}

/// Colour class of a gap status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum StatusTone {
    #[strum(serialize = "completed")]
    Completed,
    #[strum(serialize = "pending")]
    Pending,
    #[strum(serialize = "overdue")]
    Overdue,
    #[strum(serialize = "neutral")]
    Neutral,
}

impl StatusTone {
    pub fn of(status: &str) -> Self {
        match status.to_lowercase().as_str() {
            "completed" => StatusTone::Completed,
            "pending" => StatusTone::Pending,
            "overdue" => StatusTone::Overdue,
            _ => StatusTone::Neutral,
        }
    }
}

impl GapMember {
    pub fn tone(&self) -> StatusTone {
        StatusTone::of(&self.status)
    }
}

impl QualityGap {
    /// Numerator over denominator; `None` when either is missing or the
    /// denominator is zero.
    pub fn closure_rate(&self) -> Option<f64> {
        match (self.numerator, self.denominator) {
            (Some(n), Some(d)) if d != 0.0 => Some(n / d),
            _ => None,
        }
    }

    /// `round(numerator / denominator * 100)%`, or `N/A`.
    pub fn closure_label(&self) -> String {
        match self.closure_rate() {
            Some(rate) => format!("{}%", (rate * 100.0).round()),
            None => "N/A".to_string(),
        }
    }

    pub fn on_target(&self) -> bool {
        self.closure_rate().is_some_and(|rate| rate >= TARGET_RATE)
    }

    /// `numerator/denominator` as written in the fixture.
    pub fn fraction_label(&self) -> String {
        format!(
            "{}/{}",
            CellValue::number(self.numerator),
            CellValue::number(self.denominator)
        )
    }

    /// The entry for a member, matched by name.
    pub fn member_named(&self, name: &str) -> Option<&GapMember> {
        self.members.iter().find(|member| member.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gap(json: &str) -> QualityGap {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn closure_rate_rounds_to_whole_percent() {
        let g = gap(r#"{"measure_name": "BCS", "numerator": 7, "denominator": 10}"#);
        assert_eq!(g.closure_label(), "70%");
        assert!(g.on_target());
        assert_eq!(g.fraction_label(), "7/10");

        let g = gap(r#"{"measure_name": "COL", "numerator": "2", "denominator": 3}"#);
        assert_eq!(g.closure_label(), "67%");
        assert!(!g.on_target());
    }

    #[test]
    fn zero_denominator_has_no_rate() {
        let g = gap(r#"{"measure_name": "EYE", "numerator": 0, "denominator": 0}"#);
        assert_eq!(g.closure_rate(), None);
        assert_eq!(g.closure_label(), "N/A");
        assert!(!g.on_target());
    }

    #[test]
    fn status_tone_ignores_case() {
        assert_eq!(StatusTone::of("Completed"), StatusTone::Completed);
        assert_eq!(StatusTone::of("PENDING"), StatusTone::Pending);
        assert_eq!(StatusTone::of("overdue"), StatusTone::Overdue);
        assert_eq!(StatusTone::of("scheduled"), StatusTone::Neutral);
    }

    #[test]
    fn members_are_found_by_name() {
        let g = gap(
            r#"{"measure_name": "BCS", "members": [
                {"name": "Ann", "status": "Pending", "value": "Due", "next_appointment": "2025-01-05"}
            ]}"#,
        );
        assert_eq!(g.member_named("Ann").map(|m| m.tone()), Some(StatusTone::Pending));
        assert!(g.member_named("Bob").is_none());
    }
}
