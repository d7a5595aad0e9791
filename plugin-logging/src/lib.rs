//! # Logger Contract
//!
//! Leveled, fire-and-forget logging sink provided by the host application.
//!
//! Plugins call [`Logger::log`] and move on: there is no return value and no
//! error channel. Everything else is host policy:
//! - prefixing messages with the plugin's identity
//! - filtering by environment (debug is suppressed in production builds)
//! - routing to console, file, or remote destinations
//! - adding timestamps, thread info and other context
//!
//! A sink that cannot deliver a message must drop it or fall back internally.

use serde::{Deserialize, Serialize};
use std::fmt;

/// `tracing` target used by hosts when they re-emit plugin log lines.
///
/// Layers that mirror `tracing` events into a [`Logger`] skip this target so a
/// host logger built on `tracing` does not feed back into itself.
pub const HOST_LOG_TARGET: &str = "plugin_host";

/// Severity of a log message
///
/// Ordered by severity: `Error > Warning > Info > Debug`. No numeric values
/// are part of the contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Detailed diagnostics; hosts suppress these in production
    Debug,
    /// General application flow and state changes
    Info,
    /// Unexpected situations that have not caused a failure yet
    Warning,
    /// Failures or unexpected behavior; always shown
    Error,
}

impl LogLevel {
    pub const ALL: [LogLevel; 4] = [
        LogLevel::Error,
        LogLevel::Warning,
        LogLevel::Info,
        LogLevel::Debug,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warning => "warning",
            LogLevel::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Logging interface for console and remote logs
///
/// Calls must return promptly and never block on the sink. The contract makes
/// no ordering or delivery guarantee to any particular destination.
///
/// # Example
///
/// ```ignore
/// use plugin_logging::{Logger, LogLevel};
///
/// fn report(logger: &dyn Logger, record_id: &str) {
///     logger.log(&format!("Opened record {}", record_id), LogLevel::Info);
/// }
/// ```
#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
pub trait Logger: Send + Sync {
    /// Send a message to the host logging system
    fn log(&self, message: &str, level: LogLevel);

    fn error(&self, message: &str) {
        self.log(message, LogLevel::Error);
    }

    fn warning(&self, message: &str) {
        self.log(message, LogLevel::Warning);
    }

    fn info(&self, message: &str) {
        self.log(message, LogLevel::Info);
    }

    fn debug(&self, message: &str) {
        self.log(message, LogLevel::Debug);
    }
}
