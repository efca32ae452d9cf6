//! Error handling for fixture loading

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    /// The server answered with a non-success status.
    #[error("HTTP error! status: {status}")]
    Http { status: u16 },

    /// Reqwest error, typically related to network issues or request failures.
    #[error("Network error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// The payload was not the JSON document we expected.
    #[error("Malformed JSON: {0}")]
    Decode(#[from] serde_json::Error),

    /// Reading a fixture from disk failed.
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A record looked up by id does not exist.
    #[error("{what} not found: {id}")]
    NotFound { what: &'static str, id: String },
}

impl DataError {
    pub fn from_status(status: reqwest::StatusCode) -> DataError {
        DataError::Http {
            status: status.as_u16(),
        }
    }
}
