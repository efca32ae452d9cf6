//! Centralized error classification

use super::DataError;
use crate::logging::LogLevel;

/// Maps load failures to the level they are logged at.
#[derive(Debug, Clone, Default)]
pub struct ErrorHandler;

impl ErrorHandler {
    pub fn new() -> Self {
        Self
    }

    /// Classify error and determine appropriate log level
    pub fn classify_error(&self, error: &DataError) -> LogLevel {
        match error {
            // A record the user asked for is gone; the view says so.
            DataError::NotFound { .. } => LogLevel::Info,

            // Missing fixture or server trouble
            DataError::Http { status } if *status == 404 => LogLevel::Warn,
            DataError::Http { status } if (500..=599).contains(status) => LogLevel::Warn,
            DataError::Http { .. } => LogLevel::Warn,

            // Bad fixture content
            DataError::Decode(_) => LogLevel::Warn,

            // Network issues - usually temporary
            DataError::Reqwest(_) => LogLevel::Warn,

            // Local disk problems are not going away on retry
            DataError::Io { .. } => LogLevel::Error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_levels() {
        let handler = ErrorHandler::new();
        assert_eq!(
            handler.classify_error(&DataError::Http { status: 500 }),
            LogLevel::Warn
        );
        assert_eq!(
            handler.classify_error(&DataError::NotFound {
                what: "Member",
                id: "M1".to_string()
            }),
            LogLevel::Info
        );
        let decode = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(
            handler.classify_error(&DataError::Decode(decode)),
            LogLevel::Warn
        );
        let io = DataError::Io {
            path: "x".to_string(),
            source: std::io::Error::other("denied"),
        };
        assert_eq!(handler.classify_error(&io), LogLevel::Error);
    }
}
