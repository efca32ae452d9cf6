//! Event System
//!
//! Activity entries shown in the dashboard log panel.

use crate::logging::{LogLevel, should_log_with_env};
use chrono::Local;
use std::fmt::Display;

/// What produced an event.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Source {
    /// A view load task.
    Loader,
    /// Route changes.
    Router,
    /// A `log` record forwarded by the logger.
    Log,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Error,
    Loading,
    Navigation,
    Log,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub source: Source,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
}

impl Event {
    fn new(source: Source, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            source,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
        }
    }

    pub fn loading(msg: String) -> Self {
        Self::new(Source::Loader, msg, EventType::Loading, LogLevel::Debug)
    }

    pub fn loaded(msg: String) -> Self {
        Self::new(Source::Loader, msg, EventType::Success, LogLevel::Info)
    }

    pub fn load_failed(msg: String, log_level: LogLevel) -> Self {
        Self::new(Source::Loader, msg, EventType::Error, log_level)
    }

    pub fn navigation(msg: String) -> Self {
        Self::new(Source::Router, msg, EventType::Navigation, LogLevel::Info)
    }

    pub fn log(msg: String, log_level: LogLevel) -> Self {
        Self::new(Source::Log, msg, EventType::Log, log_level)
    }

    pub fn should_display(&self) -> bool {
        // Always show success events and info level events
        if self.event_type == EventType::Success || self.log_level >= LogLevel::Info {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.event_type, self.timestamp, self.msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failures_keep_their_classified_level() {
        let event = Event::load_failed("Error loading contracts".to_string(), LogLevel::Warn);
        assert_eq!(event.event_type, EventType::Error);
        assert_eq!(event.log_level, LogLevel::Warn);
        assert!(event.should_display());
    }

    #[test]
    fn display_includes_type_and_message() {
        let event = Event::navigation("KPI Summary".to_string());
        let text = event.to_string();
        assert!(text.starts_with("Navigation ["));
        assert!(text.ends_with("] KPI Summary"));
    }
}
