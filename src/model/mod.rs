//! Records loaded from the JSON fixtures.

pub mod contract;
pub mod de;
pub mod kpi;
pub mod member;
pub mod provider;
pub mod quality;

pub use contract::{Contract, ContractsEnvelope};
pub use member::{Member, MembersEnvelope};
pub use provider::{Provider, ProvidersEnvelope};
pub use quality::{QualityGap, QualityGapsEnvelope, StatusTone};

/// Sorted distinct PCP names, blanks dropped.
pub fn unique_pcps<'a>(members: impl IntoIterator<Item = &'a Member>) -> Vec<String> {
    let mut names: Vec<String> = members
        .into_iter()
        .map(|member| member.pcp_name.clone())
        .filter(|name| !name.is_empty())
        .collect();
    names.sort();
    names.dedup();
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pcps_are_distinct_and_sorted() {
        let members: MembersEnvelope = serde_json::from_str(
            r#"{"members": [
                {"member_id": "M1", "name": "A", "pcp_name": "Dr. Young"},
                {"member_id": "M2", "name": "B", "pcp_name": "Dr. Adams"},
                {"member_id": "M3", "name": "C", "pcp_name": "Dr. Young"},
                {"member_id": "M4", "name": "D"}
            ]}"#,
        )
        .unwrap();
        assert_eq!(unique_pcps(&members.members), vec!["Dr. Adams", "Dr. Young"]);
    }
}
