//! Diagnostic sink for recoverable conditions.
//!
//! The engine never fails hard on malformed input; it reports what it skipped
//! through an optional [`Logger`] and moves on. Absence of a logger is legal,
//! diagnostics are then dropped silently.

use std::fmt;

/// Severity of a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Recoverable oddity in the input (malformed href, unparseable URL).
    Warn,
    /// Transport-level fault (network error, unexpected response).
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Error => write!(f, "error"),
        }
    }
}

/// Fire-and-forget diagnostic sink.
///
/// Implementations must not panic; the engine treats logging as best-effort
/// and never inspects the outcome.
pub trait Logger: Send + Sync {
    fn log(&self, level: LogLevel, message: &str);
}

/// [`Logger`] that forwards to the `tracing` ecosystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn log(&self, level: LogLevel, message: &str) {
        match level {
            LogLevel::Warn => tracing::warn!(target: "pagenav", "{message}"),
            LogLevel::Error => tracing::error!(target: "pagenav", "{message}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Collects messages for assertions.
    pub struct CollectingLogger(pub Mutex<Vec<(LogLevel, String)>>);

    impl Logger for CollectingLogger {
        fn log(&self, level: LogLevel, message: &str) {
            if let Ok(mut entries) = self.0.lock() {
                entries.push((level, message.to_string()));
            }
        }
    }

    #[test]
    fn levels_render_lowercase() {
        assert_eq!(LogLevel::Warn.to_string(), "warn");
        assert_eq!(LogLevel::Error.to_string(), "error");
    }

    #[test]
    fn collecting_logger_records_messages() {
        let logger = CollectingLogger(Mutex::new(Vec::new()));
        logger.log(LogLevel::Warn, "bad href");
        let Ok(entries) = logger.0.lock() else {
            panic!("poisoned lock");
        };
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].0, LogLevel::Warn);
    }
}
