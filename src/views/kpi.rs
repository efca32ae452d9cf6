//! KPI summary: the static catalog plus per-PCP member counts.

use super::cycle_option;
use crate::model::kpi::{AGGREGATED_CATEGORIES, KPI_GROUPS, KpiGroup, QUALITY_KPIS, QualityKpi};
use crate::model::{Member, QualityGap, unique_pcps};

/// Appointment count for one measure under the current PCP selection.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasureAppointments<'a> {
    pub measure: &'a str,
    pub members_with_appointments: Option<f64>,
}

#[derive(Debug, Clone, Default)]
pub struct KpiView {
    members: Vec<Member>,
    quality_gaps: Vec<QualityGap>,
    pub pcp: Option<String>,
}

impl KpiView {
    pub fn new(members: Vec<Member>, quality_gaps: Vec<QualityGap>) -> Self {
        Self {
            members,
            quality_gaps,
            pcp: None,
        }
    }

    pub fn groups(&self) -> &'static [KpiGroup] {
        KPI_GROUPS
    }

    pub fn quality_kpis(&self) -> &'static [QualityKpi] {
        QUALITY_KPIS
    }

    pub fn pcp_options(&self) -> Vec<String> {
        unique_pcps(&self.members)
    }

    pub fn cycle_pcp(&mut self) {
        self.pcp = cycle_option(&self.pcp_options(), self.pcp.as_deref());
    }

    fn selected_members(&self) -> impl Iterator<Item = &Member> {
        self.members.iter().filter(|member| match &self.pcp {
            Some(pcp) => member.pcp_name == *pcp,
            None => true,
        })
    }

    /// Member count per aggregated risk category, in display order.
    pub fn category_counts(&self) -> Vec<(&'static str, usize)> {
        AGGREGATED_CATEGORIES
            .iter()
            .map(|category| {
                let count = self
                    .selected_members()
                    .filter(|member| member.risk_category.as_deref() == Some(*category))
                    .count();
                (*category, count)
            })
            .collect()
    }

    /// With a PCP selected, each measure counts only that PCP's members.
    pub fn measure_appointments(&self) -> Vec<MeasureAppointments<'_>> {
        self.quality_gaps
            .iter()
            .map(|gap| {
                let members_with_appointments = match &self.pcp {
                    Some(pcp) => Some(
                        gap.members
                            .iter()
                            .filter(|member| member.pcp_name.as_deref() == Some(pcp.as_str()))
                            .count() as f64,
                    ),
                    None => gap.members_with_appointments,
                };
                MeasureAppointments {
                    measure: &gap.measure_name,
                    members_with_appointments,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MembersEnvelope, QualityGapsEnvelope};

    fn view() -> KpiView {
        let members: MembersEnvelope = serde_json::from_str(
            r#"{"members": [
                {"member_id": "M1", "pcp_name": "Dr. Lee", "risk_category": "Polypharmacy"},
                {"member_id": "M2", "pcp_name": "Dr. Kim", "risk_category": "Polypharmacy"},
                {"member_id": "M3", "pcp_name": "Dr. Lee", "risk_category": "Quality Gaps"},
                {"member_id": "M4", "pcp_name": "", "risk_category": "Unlisted"}
            ]}"#,
        )
        .unwrap();
        let gaps: QualityGapsEnvelope = serde_json::from_str(
            r#"{"quality_gaps": [
                {"measure_name": "BCS", "numerator": 7, "denominator": 10, "members_with_appointments": 5,
                 "members": [{"name": "Ann", "pcp_name": "Dr. Lee"}, {"name": "Bob", "pcp_name": "Dr. Kim"}]}
            ]}"#,
        )
        .unwrap();
        KpiView::new(members.members, gaps.quality_gaps)
    }

    #[test]
    fn pcp_options_skip_blank_names() {
        assert_eq!(view().pcp_options(), vec!["Dr. Kim", "Dr. Lee"]);
    }

    #[test]
    fn counts_follow_the_selected_pcp() {
        let mut view = view();
        let counts = view.category_counts();
        assert_eq!(counts.len(), 7);
        assert_eq!(counts[1], ("Polypharmacy", 2));
        assert_eq!(counts[6], ("Quality Gaps", 1));

        view.cycle_pcp();
        view.cycle_pcp();
        assert_eq!(view.pcp.as_deref(), Some("Dr. Lee"));
        assert_eq!(view.category_counts()[1], ("Polypharmacy", 1));
    }

    #[test]
    fn appointments_are_recounted_per_pcp() {
        let mut view = view();
        assert_eq!(view.measure_appointments()[0].members_with_appointments, Some(5.0));

        view.cycle_pcp();
        assert_eq!(view.measure_appointments()[0].members_with_appointments, Some(1.0));
    }

    #[test]
    fn empty_data_still_renders_the_catalog() {
        let view = KpiView::default();
        assert_eq!(view.groups().len(), 5);
        assert_eq!(view.quality_kpis().len(), 11);
        assert!(view.category_counts().iter().all(|(_, count)| *count == 0));
    }
}
