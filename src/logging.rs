//! Log levels, `RUST_LOG` parsing and the process-wide logger.

use crate::events::Event;
use chrono::Local;
use log::{LevelFilter, Log, Metadata, Record};
use std::env;
use tokio::sync::mpsc;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => LevelFilter::Trace,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Error => LevelFilter::Error,
        }
    }
}

impl From<log::Level> for LogLevel {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Trace => LogLevel::Trace,
            log::Level::Debug => LogLevel::Debug,
            log::Level::Info => LogLevel::Info,
            log::Level::Warn => LogLevel::Warn,
            log::Level::Error => LogLevel::Error,
        }
    }
}

pub fn get_rust_log_level() -> LogLevel {
    let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    parse_rust_log_level(&rust_log)
}

pub fn parse_rust_log_level(rust_log: &str) -> LogLevel {
    // Handle common RUST_LOG formats
    let level_str = rust_log
        .split(',')
        .next()
        .unwrap_or(rust_log)
        .split('=')
        .next_back()
        .unwrap_or(rust_log)
        .to_lowercase();

    match level_str.as_str() {
        "trace" => LogLevel::Trace,
        "debug" => LogLevel::Debug,
        "info" => LogLevel::Info,
        "warn" | "warning" => LogLevel::Warn,
        "error" => LogLevel::Error,
        _ => LogLevel::Info, // Default to info if parsing fails
    }
}

pub fn should_log(event_level: LogLevel, threshold: LogLevel) -> bool {
    event_level >= threshold
}

pub fn should_log_with_env(event_level: LogLevel) -> bool {
    let threshold = get_rust_log_level();
    should_log(event_level, threshold)
}

/// Where log records end up.
#[derive(Debug, Clone)]
pub enum LogSink {
    /// Plain lines on stderr, for headless commands and the fixture server.
    Stderr,
    /// The dashboard's activity log; the TUI owns the terminal.
    Activity(mpsc::Sender<Event>),
}

/// `log` backend for the binary.
///
/// Records from other crates are kept only at warn and above so that
/// `RUST_LOG=debug` shows our own load lifecycle rather than connection pool chatter.
#[derive(Debug)]
pub struct DashboardLogger {
    threshold: LogLevel,
    sink: LogSink,
}

impl DashboardLogger {
    pub fn new(threshold: LogLevel, sink: LogSink) -> Self {
        Self { threshold, sink }
    }

    fn is_own_target(target: &str) -> bool {
        target.starts_with(env!("CARGO_CRATE_NAME"))
    }
}

impl Log for DashboardLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        let level = LogLevel::from(metadata.level());
        if Self::is_own_target(metadata.target()) {
            should_log(level, self.threshold)
        } else {
            should_log(level, self.threshold.max(LogLevel::Warn))
        }
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let level = LogLevel::from(record.level());
        match &self.sink {
            LogSink::Stderr => eprintln!(
                "{} {:<5} {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            ),
            LogSink::Activity(sender) => {
                // A full queue drops the line rather than blocking the caller.
                let _ = sender.try_send(Event::log(record.args().to_string(), level));
            }
        }
    }

    fn flush(&self) {}
}

/// Installs the logger once for the process, using `RUST_LOG` as the threshold.
pub fn init(sink: LogSink) -> Result<(), log::SetLoggerError> {
    let threshold = get_rust_log_level();
    log::set_boxed_logger(Box::new(DashboardLogger::new(threshold, sink)))?;
    log::set_max_level(threshold.into());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rust_log_level() {
        assert_eq!(parse_rust_log_level("debug"), LogLevel::Debug);
        assert_eq!(parse_rust_log_level("info"), LogLevel::Info);
        assert_eq!(parse_rust_log_level("warn"), LogLevel::Warn);
        assert_eq!(parse_rust_log_level("error"), LogLevel::Error);
        assert_eq!(parse_rust_log_level("trace"), LogLevel::Trace);

        // Test with module-specific formats
        assert_eq!(parse_rust_log_level("contract_iq=debug"), LogLevel::Debug);
        assert_eq!(
            parse_rust_log_level("contract_iq=debug,hyper=info"),
            LogLevel::Debug
        );

        // Test default
        assert_eq!(parse_rust_log_level("invalid"), LogLevel::Info);
    }

    #[test]
    fn test_should_log() {
        assert!(should_log(LogLevel::Error, LogLevel::Debug));
        assert!(should_log(LogLevel::Warn, LogLevel::Warn));
        assert!(!should_log(LogLevel::Debug, LogLevel::Error));
        assert!(!should_log(LogLevel::Info, LogLevel::Error));
    }

    #[test]
    fn dependency_records_need_warn() {
        let logger = DashboardLogger::new(LogLevel::Debug, LogSink::Stderr);
        let own = Metadata::builder()
            .level(log::Level::Debug)
            .target("contract_iq::views::loader")
            .build();
        let foreign = Metadata::builder()
            .level(log::Level::Debug)
            .target("hyper_util::client")
            .build();
        assert!(logger.enabled(&own));
        assert!(!logger.enabled(&foreign));
    }

    #[test]
    fn activity_sink_forwards_records_as_events() {
        let (sender, mut receiver) = mpsc::channel(4);
        let logger = DashboardLogger::new(LogLevel::Info, LogSink::Activity(sender));
        logger.log(
            &Record::builder()
                .args(format_args!("Loaded contracts"))
                .level(log::Level::Info)
                .target("contract_iq::network")
                .build(),
        );
        let event = receiver.try_recv().unwrap();
        assert_eq!(event.msg, "Loaded contracts");
        assert_eq!(event.log_level, LogLevel::Info);
    }
}
