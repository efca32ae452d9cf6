//! Session setup and initialization

use crate::config::Config;
use crate::environment::Environment;
use crate::network::{DataError, DataSource, FileDataSource, HttpDataSource};
use crate::router::{LoggingListener, Router};
use std::error::Error;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Environment variable naming the data server: `local` or a base URL.
pub const ENVIRONMENT_VAR: &str = "CONTRACT_IQ_ENVIRONMENT";

/// Data source flags shared by the commands that read data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataOptions {
    pub data_url: Option<String>,
    pub data_dir: Option<PathBuf>,
}

impl DataOptions {
    fn is_empty(&self) -> bool {
        self.data_url.is_none() && self.data_dir.is_none()
    }
}

/// Session data for both TUI and headless modes
pub struct SessionData {
    /// Where every view loads from
    pub source: Arc<dyn DataSource>,
    /// Router with the configured member panel unit
    pub router: Router,
    pub config: Config,
}

/// Picks the data source. Flags win over the config file, which wins over
/// `CONTRACT_IQ_ENVIRONMENT`; a directory wins over a URL at the same level.
pub fn resolve_source(
    options: &DataOptions,
    config: &Config,
    environment: Option<&str>,
) -> Result<Arc<dyn DataSource>, DataError> {
    let chosen = if options.is_empty() {
        DataOptions {
            data_url: config.data_url.clone(),
            data_dir: config.data_dir.clone(),
        }
    } else {
        options.clone()
    };

    if let Some(dir) = chosen.data_dir {
        return Ok(Arc::new(FileDataSource::new(dir)));
    }
    let base_url = match chosen.data_url {
        Some(url) => url,
        None => {
            let environment = environment
                .and_then(|value| value.parse::<Environment>().ok())
                .unwrap_or_default();
            log::debug!("Using {:?}", environment);
            environment.data_url()
        }
    };
    Ok(Arc::new(HttpDataSource::new(base_url)?))
}

/// Sets up a dashboard session
///
/// This function handles the setup shared by TUI and headless modes:
/// 1. Loads the config file, if there is one
/// 2. Resolves the data source
/// 3. Builds the router
pub fn setup_session(config_path: &Path, options: &DataOptions) -> Result<SessionData, Box<dyn Error>> {
    let config = Config::load_or_default(config_path)
        .map_err(|e| format!("Failed to load config {}: {}", config_path.display(), e))?;
    let environment = std::env::var(ENVIRONMENT_VAR).ok();
    let source = resolve_source(options, &config, environment.as_deref())?;

    let mut router = Router::new();
    router.add_listener(Box::new(LoggingListener));
    if let Some(unit) = &config.default_unit_name {
        router.set_member_panel_unit(unit);
    }

    Ok(SessionData {
        source,
        router,
        config,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_win_over_the_config_file() {
        let config = Config {
            data_url: Some("http://config.example".to_string()),
            ..Config::default()
        };
        let options = DataOptions {
            data_dir: Some(PathBuf::from("fixtures/data")),
            data_url: None,
        };
        let source = resolve_source(&options, &config, None).unwrap();
        assert_eq!(source.describe(), "fixtures/data");

        let source = resolve_source(&DataOptions::default(), &config, None).unwrap();
        assert_eq!(source.describe(), "http://config.example");
    }

    #[test]
    fn environment_variable_is_the_fallback() {
        let config = Config::default();
        let source =
            resolve_source(&DataOptions::default(), &config, Some("https://data.example/")).unwrap();
        assert_eq!(source.describe(), "https://data.example");

        let source = resolve_source(&DataOptions::default(), &config, Some("nonsense")).unwrap();
        assert_eq!(source.describe(), "http://localhost:3000");
    }

    #[test]
    fn config_sets_the_member_panel_unit() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        Config {
            default_unit_name: Some("Lakeside".to_string()),
            data_dir: Some(dir.path().to_path_buf()),
            ..Config::default()
        }
        .save(&path)
        .unwrap();

        let mut session = setup_session(&path, &DataOptions::default()).unwrap();
        session.router.navigate_fragment("#/member-panel");
        assert_eq!(
            session.router.current(),
            &crate::router::Route::Members {
                unit_name: "Lakeside".to_string(),
                unit_type: None,
            }
        );
    }
}
