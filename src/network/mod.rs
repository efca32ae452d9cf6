//! Data access for the dashboard fixtures.
//!
//! Every view reads whole JSON documents through [`DataSource`]; the typed
//! loaders below decode the envelopes and hand back owned records.

pub mod client;
pub mod error;
pub mod error_handler;
pub mod fs;

pub use client::HttpDataSource;
pub use error::DataError;
pub use error_handler::ErrorHandler;
pub use fs::FileDataSource;

use crate::model::{
    Contract, ContractsEnvelope, Member, MembersEnvelope, Provider, ProvidersEnvelope, QualityGap,
    QualityGapsEnvelope, provider,
};
use serde::de::DeserializeOwned;

#[cfg(test)]
use mockall::automock;

/// The JSON documents served under `/data`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum Resource {
    #[strum(serialize = "contracts")]
    Contracts,
    #[strum(serialize = "providers")]
    Providers,
    #[strum(serialize = "members")]
    Members,
    #[strum(serialize = "quality gaps")]
    QualityGaps,
}

impl Resource {
    pub fn file_name(&self) -> &'static str {
        match self {
            Resource::Contracts => "contracts.json",
            Resource::Providers => "providers.json",
            Resource::Members => "members.json",
            Resource::QualityGaps => "quality_gaps.json",
        }
    }

    /// URL path relative to the server root.
    pub fn path(&self) -> String {
        format!("/data/{}", self.file_name())
    }
}

#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait DataSource: Send + Sync {
    /// Where the data comes from, for the header and logs.
    fn describe(&self) -> String;

    /// Fetches the raw bytes of a resource.
    async fn fetch(&self, resource: Resource) -> Result<Vec<u8>, DataError>;
}

async fn load<T: DeserializeOwned>(
    source: &dyn DataSource,
    resource: Resource,
) -> Result<T, DataError> {
    let bytes = source.fetch(resource).await?;
    let document = serde_json::from_slice(&bytes)?;
    log::debug!("Loaded {} from {}", resource, source.describe());
    Ok(document)
}

pub async fn load_contracts(source: &dyn DataSource) -> Result<Vec<Contract>, DataError> {
    let envelope: ContractsEnvelope = load(source, Resource::Contracts).await?;
    Ok(envelope.contracts)
}

/// Loads contracts, then providers, and enriches the providers from the contracts.
pub async fn load_providers(
    source: &dyn DataSource,
) -> Result<(Vec<Contract>, Vec<Provider>), DataError> {
    let contracts = load_contracts(source).await?;
    let envelope: ProvidersEnvelope = load(source, Resource::Providers).await?;
    let providers = provider::enrich(envelope.providers, &contracts);
    Ok((contracts, providers))
}

pub async fn load_members(source: &dyn DataSource) -> Result<Vec<Member>, DataError> {
    let envelope: MembersEnvelope = load(source, Resource::Members).await?;
    Ok(envelope.members)
}

pub async fn load_quality_gaps(source: &dyn DataSource) -> Result<Vec<QualityGap>, DataError> {
    let envelope: QualityGapsEnvelope = load(source, Resource::QualityGaps).await?;
    Ok(envelope.quality_gaps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;

    #[test]
    fn resources_map_to_data_paths() {
        assert_eq!(Resource::Contracts.path(), "/data/contracts.json");
        assert_eq!(Resource::QualityGaps.path(), "/data/quality_gaps.json");
        assert_eq!(Resource::QualityGaps.to_string(), "quality gaps");
    }

    #[tokio::test]
    async fn providers_are_enriched_from_contracts() {
        let mut source = MockDataSource::new();
        source.expect_describe().returning(|| "mock".to_string());
        source
            .expect_fetch()
            .with(eq(Resource::Contracts))
            .times(1)
            .returning(|_| {
                Ok(br#"{"contracts": [{"id": "C1", "contract_name": "Acme", "contract_type": "Commercial"}]}"#.to_vec())
            });
        source
            .expect_fetch()
            .with(eq(Resource::Providers))
            .times(1)
            .returning(|_| {
                Ok(br#"{"providers": [{"id": "P1", "unit_name": "North", "unit_type": "NPI", "contract_id": "C1", "npi": "42"}]}"#.to_vec())
            });

        let (contracts, providers) = load_providers(&source).await.unwrap();
        assert_eq!(contracts.len(), 1);
        assert_eq!(providers[0].contract_type, "Commercial");
        assert_eq!(providers[0].id_number, "42");
    }

    #[tokio::test]
    async fn malformed_json_is_a_decode_error() {
        let mut source = MockDataSource::new();
        source.expect_describe().returning(|| "mock".to_string());
        source
            .expect_fetch()
            .returning(|_| Ok(b"{not json".to_vec()));

        let err = load_members(&source).await.unwrap_err();
        assert!(matches!(err, DataError::Decode(_)));
    }

    #[tokio::test]
    async fn fetch_errors_propagate() {
        let mut source = MockDataSource::new();
        source
            .expect_fetch()
            .returning(|_| Err(DataError::Http { status: 500 }));

        let err = load_contracts(&source).await.unwrap_err();
        assert_eq!(err.to_string(), "HTTP error! status: 500");
    }
}
