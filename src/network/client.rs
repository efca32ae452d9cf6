//! HTTP data source
//!
//! Fetches the fixture documents from a running fixture server.

use super::{DataError, DataSource, Resource};
use crate::consts::cli_consts::http;
use reqwest::{Client, ClientBuilder, Response};

// User-Agent string with CLI version
const USER_AGENT: &str = concat!("contract-iq/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct HttpDataSource {
    client: Client,
    base_url: String,
}

impl HttpDataSource {
    pub fn new(base_url: impl Into<String>) -> Result<Self, DataError> {
        let client = ClientBuilder::new()
            .connect_timeout(http::timeout())
            .timeout(http::timeout())
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    fn handle_response_status(response: Response) -> Result<Response, DataError> {
        if !response.status().is_success() {
            return Err(DataError::from_status(response.status()));
        }
        Ok(response)
    }
}

#[async_trait::async_trait]
impl DataSource for HttpDataSource {
    fn describe(&self) -> String {
        self.base_url.clone()
    }

    async fn fetch(&self, resource: Resource) -> Result<Vec<u8>, DataError> {
        let url = self.build_url(&resource.path());
        log::debug!("GET {}", url);
        let response = self.client.get(&url).send().await?;
        let response = Self::handle_response_status(response)?;
        Ok(response.bytes().await?.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Router;
    use axum::http::StatusCode;
    use axum::routing::get;

    async fn spawn_server(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[test]
    fn urls_join_without_double_slashes() {
        let source = HttpDataSource::new("http://localhost:3000/").unwrap();
        assert_eq!(
            source.build_url("/data/contracts.json"),
            "http://localhost:3000/data/contracts.json"
        );
    }

    #[tokio::test]
    async fn fetches_documents_from_the_data_path() {
        let app = Router::new().route(
            "/data/contracts.json",
            get(|| async { r#"{"contracts": []}"# }),
        );
        let source = HttpDataSource::new(spawn_server(app).await).unwrap();

        let contracts = crate::network::load_contracts(&source).await.unwrap();
        assert!(contracts.is_empty());
    }

    #[tokio::test]
    async fn server_errors_surface_the_status() {
        let app = Router::new().route(
            "/data/contracts.json",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );
        let source = HttpDataSource::new(spawn_server(app).await).unwrap();

        let err = source.fetch(Resource::Contracts).await.unwrap_err();
        assert_eq!(err.to_string(), "HTTP error! status: 500");
    }
}
