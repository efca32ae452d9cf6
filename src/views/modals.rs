//! Member detail and quality overlays.

use crate::format;
use crate::model::{Member, QualityGap, StatusTone};
use crate::table::CellValue;

pub const MEMBER_ALERT: &str = "Error loading member details. Please try again.";
pub const QUALITY_ALERT: &str = "Error loading quality measures. Please try again.";

/// One quality measure as it applies to a single member.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberGap {
    pub measure: String,
    pub status: String,
    pub tone: StatusTone,
    pub value: CellValue,
    pub next_appointment: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MemberDetail {
    pub member: Member,
    /// `None` when the quality gaps could not be loaded; the section is omitted.
    pub gaps: Option<Vec<MemberGap>>,
}

impl MemberDetail {
    /// Collects the measures listing this member, matched by name.
    pub fn new(member: Member, quality_gaps: Option<Vec<QualityGap>>) -> Self {
        let gaps = quality_gaps.map(|gaps| {
            gaps.iter()
                .filter_map(|gap| {
                    gap.member_named(&member.name).map(|entry| MemberGap {
                        measure: gap.measure_name.clone(),
                        status: entry.status.clone(),
                        tone: entry.tone(),
                        value: entry.value.clone(),
                        next_appointment: entry.next_appointment.clone(),
                    })
                })
                .collect()
        });
        Self { member, gaps }
    }

    pub fn title(&self) -> String {
        format!("{} (Member ID: {})", self.member.name, self.member.member_id)
    }

    pub fn pcp_line(&self) -> String {
        format!(
            "{} (NPI: {})",
            self.member.pcp_name,
            self.member.pcp_npi.as_deref().unwrap_or("-")
        )
    }

    pub fn suspect_conditions(&self) -> Option<String> {
        (!self.member.suspect_conditions.is_empty())
            .then(|| format::measures(&self.member.suspect_conditions))
    }

    pub fn risk_line(&self) -> String {
        format!("{}: {}", self.member.category(), self.member.metric_display())
    }

    /// Gap entries to show; empty lists hide the section just like a failed load.
    pub fn visible_gaps(&self) -> &[MemberGap] {
        self.gaps.as_deref().unwrap_or_default()
    }
}

impl MemberGap {
    pub fn next_appointment_label(&self) -> Option<String> {
        self.next_appointment
            .as_deref()
            .map(|date| format!("Next: {}", format::long_date(date)))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct QualityOverview {
    pub gaps: Vec<QualityGap>,
}

impl QualityOverview {
    pub fn appointments_label(gap: &QualityGap) -> String {
        format!(
            "{} members with appointments",
            CellValue::number(gap.members_with_appointments)
        )
    }
}

/// The overlay drawn above the current view, if any.
#[derive(Debug, Clone, PartialEq)]
pub enum Modal {
    Loading(&'static str),
    MemberDetail(Box<MemberDetail>),
    Quality(QualityOverview),
    Alert(&'static str),
}
