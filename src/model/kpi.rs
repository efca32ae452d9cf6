//! Static KPI catalog shown on the KPI summary.

use strum::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Trend {
    #[strum(serialize = "up")]
    Up,
    #[strum(serialize = "down")]
    Down,
}

impl Trend {
    pub fn icon(self) -> &'static str {
        match self {
            Trend::Up => "▲",
            Trend::Down => "▼",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KpiMetric {
    pub label: &'static str,
    pub value: &'static str,
    pub mom: &'static str,
    pub yoy: &'static str,
    pub trend: Trend,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KpiGroup {
    pub key: &'static str,
    pub title: &'static str,
    pub metrics: &'static [KpiMetric],
}

/// A row of the quality measure table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QualityKpi {
    pub measure: &'static str,
    pub gaps_closed: &'static str,
    pub mom: &'static str,
    pub yoy: &'static str,
    pub trend: Trend,
}

const fn metric(
    label: &'static str,
    value: &'static str,
    mom: &'static str,
    yoy: &'static str,
    trend: Trend,
) -> KpiMetric {
    KpiMetric { label, value, mom, yoy, trend }
}

const fn measure(
    measure: &'static str,
    gaps_closed: &'static str,
    mom: &'static str,
    yoy: &'static str,
    trend: Trend,
) -> QualityKpi {
    QualityKpi { measure, gaps_closed, mom, yoy, trend }
}

pub const KPI_GROUPS: &[KpiGroup] = &[
    KpiGroup {
        key: "membersSeen",
        title: "Members Seen",
        metrics: &[metric("AWV Completed (%)", "65%", "+3.0%", "+7.5%", Trend::Up)],
    },
    KpiGroup {
        key: "coding",
        title: "Coding",
        metrics: &[
            metric("RAF Score", "1.00", "+1.2%", "+4.0%", Trend::Up),
            metric("Recapture Rate", "78%", "+1.5%", "+3.6%", Trend::Up),
        ],
    },
    KpiGroup {
        key: "partA",
        title: "Part A",
        metrics: &[
            metric("ED Visits per 1,000", "413", "+1.5%", "+0.7%", Trend::Up),
            metric("Cost per ED Visit", "$1,098", "-2.1%", "-3.0%", Trend::Down),
            metric("Admits per 1,000", "270", "-1.8%", "-4.2%", Trend::Down),
            metric("Cost per Admission", "$14,500", "+0.5%", "+1.0%", Trend::Up),
            metric("Average Length of Stay", "4.1 days", "+0.3%", "+1.2%", Trend::Up),
            metric("Part A PMPM", "$436", "+2.3%", "+5.7%", Trend::Up),
            metric("Readmission Rate", "13.2%", "-0.5%", "-1.8%", Trend::Down),
        ],
    },
    KpiGroup {
        key: "partB",
        title: "Part B",
        metrics: &[
            metric("Specialty Visits per 1,000", "340", "+0.8%", "+2.3%", Trend::Up),
            metric("Specialty Cost per Visit", "$298", "-1.1%", "-0.5%", Trend::Down),
            metric("Specialty Cost PMPM", "$115", "+2.0%", "+4.2%", Trend::Up),
        ],
    },
    KpiGroup {
        key: "partD",
        title: "Part D",
        metrics: &[
            metric("Rx Cost per Script", "$72", "-0.9%", "-2.5%", Trend::Down),
            metric("% Generic Scripts", "87%", "+1.2%", "+3.4%", Trend::Up),
            metric("Rx PMPM", "$94", "+2.9%", "+6.1%", Trend::Up),
        ],
    },
];

pub const QUALITY_KPIS: &[QualityKpi] = &[
    measure("Breast Cancer Screening", "70%", "+2.1%", "+4.5%", Trend::Up),
    measure("Colon Cancer Screening", "65%", "-1.2%", "+2.3%", Trend::Down),
    measure("HbA1c Control", "72%", "+1.5%", "+3.8%", Trend::Up),
    measure("Nephropathy Screening", "69%", "+0.8%", "+2.9%", Trend::Up),
    measure("Eye Exam (Diabetic Retinopathy)", "74%", "+1.0%", "+4.1%", Trend::Up),
    measure("Statin Therapy for Patients with Diabetes", "68%", "+2.6%", "+3.3%", Trend::Up),
    measure("Osteoporosis Management", "60%", "+1.7%", "+2.0%", Trend::Up),
    measure("Depression Screening", "82%", "+0.5%", "+5.4%", Trend::Up),
    measure("Annual Wellness Visit", "75%", "+1.9%", "+4.8%", Trend::Up),
    measure("Cervical Cancer Screening", "66%", "-0.9%", "+1.7%", Trend::Down),
    measure("Medication Reconciliation Post Discharge", "78%", "+2.2%", "+3.1%", Trend::Up),
];

/// Risk categories counted per PCP on the KPI summary, in display order.
pub const AGGREGATED_CATEGORIES: [&str; 7] = [
    "Suspect Conditions",
    "Polypharmacy",
    "Frequent Flyers",
    "High Utilizers",
    "Top 10 – Pharmacy Spend",
    "Top 10 – Specialty Spend",
    "Quality Gaps",
];
