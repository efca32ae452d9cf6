//! Static fixture server.
//!
//! Serves `<root>/data` under `/data`, `<root>/styles` under `/styles` and
//! everything else (icons under `/assets`) from the root itself.

use axum::Router;
use std::error::Error;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use tower_http::services::ServeDir;

pub fn build_router(root: &Path) -> Router {
    Router::new()
        .nest_service("/data", ServeDir::new(root.join("data")))
        .nest_service("/styles", ServeDir::new(root.join("styles")))
        .fallback_service(ServeDir::new(root))
}

/// Serves `root` on `0.0.0.0:<port>` until the process is stopped.
pub async fn serve(root: PathBuf, port: u16) -> Result<(), Box<dyn Error>> {
    if !root.is_dir() {
        return Err(format!("Web root {} is not a directory", root.display()).into());
    }
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!("Serving {}", root.display());
    crate::print_cmd_info!("Server", "listening at http://localhost:{}", port);
    axum::serve(listener, build_router(&root)).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::{DataError, HttpDataSource, load_contracts};
    use tempfile::tempdir;

    async fn spawn(root: &Path) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = build_router(root);
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn serves_fixtures_under_data() {
        let dir = tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("data")).unwrap();
        std::fs::write(
            dir.path().join("data/contracts.json"),
            r#"{"contracts": [{"id": "C1", "contract_name": "Acme"}]}"#,
        )
        .unwrap();

        let source = HttpDataSource::new(spawn(dir.path()).await).unwrap();
        let contracts = load_contracts(&source).await.unwrap();
        assert_eq!(contracts.len(), 1);
        assert_eq!(contracts[0].contract_name, "Acme");
    }

    #[tokio::test]
    async fn missing_fixture_is_a_404() {
        let dir = tempdir().unwrap();
        let source = HttpDataSource::new(spawn(dir.path()).await).unwrap();
        let err = load_contracts(&source).await.unwrap_err();
        assert!(matches!(err, DataError::Http { status: 404 }));
        assert_eq!(err.to_string(), "HTTP error! status: 404");
    }
}
