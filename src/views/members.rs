//! Member panel: a unit's members grouped by risk category.

use super::cycle_option;
use crate::model::Member;
use crate::model::member::OTHER_CATEGORY;
use crate::model::unique_pcps;
use crate::table::{Column, ColumnKind};
use strum::Display;

/// Top-level grouping of risk categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum MainCategory {
    #[strum(serialize = "Part A")]
    PartA,
    #[strum(serialize = "Part B")]
    PartB,
    #[strum(serialize = "Part D")]
    PartD,
    Quality,
    Coding,
    Other,
}

impl MainCategory {
    /// Display order of the sections.
    pub const ORDER: [MainCategory; 6] = [
        MainCategory::PartA,
        MainCategory::PartB,
        MainCategory::PartD,
        MainCategory::Quality,
        MainCategory::Coding,
        MainCategory::Other,
    ];

    pub fn title(self) -> &'static str {
        match self {
            MainCategory::PartA => "Part A (Inpatient/ED)",
            MainCategory::PartB => "Part B (Specialty)",
            MainCategory::PartD => "Part D (Pharmacy)",
            MainCategory::Quality => "Quality",
            MainCategory::Coding => "Coding",
            MainCategory::Other => "Other",
        }
    }
}

/// Columns and action for one risk category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryConfig {
    pub category: &'static str,
    pub main: MainCategory,
    pub columns: &'static [Column],
    pub action: &'static str,
}

const NAME: Column = Column::new("name", "Member Name", ColumnKind::Text);
const PCP: Column = Column::new("pcp_name", "PCP", ColumnKind::Text);

pub const CATEGORY_CONFIGS: &[CategoryConfig] = &[
    CategoryConfig {
        category: "Suspect Conditions",
        main: MainCategory::Coding,
        columns: &[
            NAME,
            Column::new("suspect_conditions", "Suspect Conditions", ColumnKind::Text),
            PCP,
            Column::new("risk_score", "Risk Score", ColumnKind::Numeric),
        ],
        action: "View Profile",
    },
    CategoryConfig {
        category: "Polypharmacy",
        main: MainCategory::PartD,
        columns: &[
            NAME,
            Column::new("medications_count", "Medications Count", ColumnKind::Numeric),
            Column::new("high_risk_drugs", "High-Risk Drugs", ColumnKind::Text),
            PCP,
        ],
        action: "Review List",
    },
    CategoryConfig {
        category: "Frequent Flyers",
        main: MainCategory::PartA,
        columns: &[
            NAME,
            Column::new("ed_visits_ytd", "ED Visits YTD", ColumnKind::Numeric),
            Column::new("ip_admits_ytd", "IP Admits YTD", ColumnKind::Numeric),
            PCP,
        ],
        action: "Outreach Form",
    },
    CategoryConfig {
        category: "High Utilizers",
        main: MainCategory::PartA,
        columns: &[
            NAME,
            Column::new("total_visits", "Total Visits", ColumnKind::Numeric),
            Column::new("visit_cost", "Visit Cost ($)", ColumnKind::Currency),
            PCP,
        ],
        action: "Cost Profile",
    },
    CategoryConfig {
        category: "Top 10 – Pharmacy Spend",
        main: MainCategory::PartD,
        columns: &[
            NAME,
            Column::new("pharmacy_spend", "Pharmacy Spend ($)", ColumnKind::Currency),
            Column::new("medications_count", "Medications Count", ColumnKind::Numeric),
            PCP,
        ],
        action: "Cost Detail",
    },
    CategoryConfig {
        category: "Top 10 – Specialty Spend",
        main: MainCategory::PartB,
        columns: &[
            NAME,
            Column::new("specialty_spend", "Specialty Spend ($)", ColumnKind::Currency),
            Column::new("specialty_services_used", "Specialty Services Used", ColumnKind::Text),
            PCP,
        ],
        action: "Detail View",
    },
    CategoryConfig {
        category: "Quality Gaps",
        main: MainCategory::Quality,
        columns: &[
            NAME,
            Column::new("num_open_gaps", "# Open Gaps", ColumnKind::Numeric),
            Column::new("measures_due", "Measures Due", ColumnKind::Text),
            PCP,
            Column::new("next_appointment", "Next Appointment", ColumnKind::Text),
        ],
        action: "Review Gaps",
    },
];

/// Used for categories without their own configuration.
pub const FALLBACK_CONFIG: CategoryConfig = CategoryConfig {
    category: OTHER_CATEGORY,
    main: MainCategory::Other,
    columns: &[
        NAME,
        Column::new("risk_category", "Risk Category", ColumnKind::Text),
        Column::new("metric_value", "Metric", ColumnKind::Text),
        PCP,
    ],
    action: "View Profile",
};

pub fn config_for(category: &str) -> &'static CategoryConfig {
    CATEGORY_CONFIGS
        .iter()
        .find(|config| config.category == category)
        .unwrap_or(&FALLBACK_CONFIG)
}

/// Icon file stem for a category: lowercased, anything outside `[a-z0-9_]` and
/// Latin-1/Latin Extended-A letters becomes `_`, and the `Top 10 – ` prefix is dropped.
pub fn icon_slug(category: &str) -> String {
    let slug: String = category
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'a'..='z' | '0'..='9' | '_' | '\u{C0}'..='\u{17F}' => c,
            _ => '_',
        })
        .collect();
    slug.replace("top_10___", "")
}

pub fn icon_path(category: &str) -> String {
    format!("/assets/icons/{}.svg", icon_slug(category))
}

#[derive(Debug)]
pub struct CategorySection<'a> {
    pub category: &'a str,
    pub config: &'static CategoryConfig,
    pub icon: String,
    pub members: Vec<&'a Member>,
}

#[derive(Debug)]
pub struct MainSection<'a> {
    pub main: MainCategory,
    pub categories: Vec<CategorySection<'a>>,
}

#[derive(Debug, Clone)]
pub struct MembersView {
    pub unit_name: String,
    members: Vec<Member>,
    pub pcp: Option<String>,
    pub selected: usize,
}

impl MembersView {
    /// Keeps the members of `unit_name` only.
    pub fn new(unit_name: &str, members: Vec<Member>) -> Self {
        let members = members
            .into_iter()
            .filter(|member| member.unit_name == unit_name)
            .collect();
        Self {
            unit_name: unit_name.to_string(),
            members,
            pcp: None,
            selected: 0,
        }
    }

    pub fn pcp_options(&self) -> Vec<String> {
        unique_pcps(&self.members)
    }

    pub fn cycle_pcp(&mut self) {
        self.pcp = cycle_option(&self.pcp_options(), self.pcp.as_deref());
        self.selected = 0;
    }

    /// Members passing the PCP select, in load order.
    pub fn visible(&self) -> Vec<&Member> {
        self.members
            .iter()
            .filter(|member| match &self.pcp {
                Some(pcp) => member.pcp_name == *pcp,
                None => true,
            })
            .collect()
    }

    /// Risk categories in order of first appearance, each with its members.
    fn by_category(&self) -> Vec<(&str, Vec<&Member>)> {
        let mut groups: Vec<(&str, Vec<&Member>)> = Vec::new();
        for member in self.visible() {
            let category = member.category();
            match groups.iter_mut().find(|(name, _)| *name == category) {
                Some((_, members)) => members.push(member),
                None => groups.push((category, vec![member])),
            }
        }
        groups
    }

    /// Sections in display order; main categories without members are left out.
    pub fn sections(&self) -> Vec<MainSection<'_>> {
        let groups = self.by_category();
        MainCategory::ORDER
            .into_iter()
            .filter_map(|main| {
                let categories: Vec<CategorySection> = groups
                    .iter()
                    .filter(|(category, _)| config_for(category).main == main)
                    .map(|(category, members)| CategorySection {
                        category: *category,
                        config: config_for(category),
                        icon: icon_path(category),
                        members: members.clone(),
                    })
                    .collect();
                (!categories.is_empty()).then_some(MainSection { main, categories })
            })
            .collect()
    }

    /// Members in the order they are drawn, for the selection cursor.
    pub fn rows(&self) -> Vec<&Member> {
        self.sections()
            .into_iter()
            .flat_map(|section| section.categories)
            .flat_map(|category| category.members)
            .collect()
    }

    pub fn selected_member(&self) -> Option<&Member> {
        self.rows().get(self.selected).copied()
    }

    pub fn select_next(&mut self) {
        let len = self.rows().len();
        if len > 0 && self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn footer(&self) -> String {
        format!(
            "Showing {} members across {} categories",
            self.visible().len(),
            self.by_category().len()
        )
    }
}
