//! Local fixture directory data source.

use super::{DataError, DataSource, Resource};
use std::io::ErrorKind;
use std::path::PathBuf;

/// Reads `<root>/<resource>.json` straight from disk.
#[derive(Debug, Clone)]
pub struct FileDataSource {
    root: PathBuf,
}

impl FileDataSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait::async_trait]
impl DataSource for FileDataSource {
    fn describe(&self) -> String {
        self.root.display().to_string()
    }

    async fn fetch(&self, resource: Resource) -> Result<Vec<u8>, DataError> {
        let path = self.root.join(resource.file_name());
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(bytes),
            // A missing fixture reads the same as the server's 404.
            Err(e) if e.kind() == ErrorKind::NotFound => Err(DataError::Http { status: 404 }),
            Err(source) => Err(DataError::Io {
                path: path.display().to_string(),
                source,
            }),
        }
    }
}
