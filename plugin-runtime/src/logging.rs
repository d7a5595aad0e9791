//! # Logging & Tracing Infrastructure
//!
//! Provides structured logging with `tracing` crate, supporting:
//! - JSON, pretty and compact output formats
//! - Module-level filtering
//! - Forwarding into the host's `Logger` contract
//!
//! ## Overview
//!
//! This module configures the `tracing-subscriber` infrastructure for host
//! processes that embed plugins. When a host logger is configured, every event
//! that survives filtering is mirrored to it as a single formatted line while
//! still flowing through the standard `tracing` layers.
//!
//! ## Usage
//!
//! ```ignore
//! use plugin_runtime::logging::{init_logging, LogFormat, LoggingConfig};
//! use plugin_logging::LogLevel;
//! use std::sync::Arc;
//!
//! let config = LoggingConfig::default()
//!     .with_format(LogFormat::Pretty)
//!     .with_level(LogLevel::Debug)
//!     .with_host_logger(Arc::new(MyHostLogger));
//!
//! init_logging(config)?;
//! tracing::info!("Host started");
//! ```
//!
//! ## Feedback loops
//!
//! A `Logger` that itself emits `tracing` events (such as
//! `host_desktop::TracingLogger`) must use the
//! [`HOST_LOG_TARGET`](plugin_logging::HOST_LOG_TARGET) target. The forwarding
//! layer drops those events instead of handing them back to the logger.

use crate::error::{Error, Result};
use plugin_logging::{LogLevel, Logger, HOST_LOG_TARGET};
use std::fmt;
use std::io;
use std::sync::Arc;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::{
    filter::EnvFilter,
    fmt::format::FmtSpan,
    layer::{Context, SubscriberExt},
    registry::LookupSpan,
    util::SubscriberInitExt,
    Layer,
};

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable pretty format with colors
    Pretty,
    /// Structured JSON format for machine parsing
    Json,
    /// Compact format for production
    Compact,
}

impl Default for LogFormat {
    fn default() -> Self {
        #[cfg(debug_assertions)]
        return Self::Pretty;

        #[cfg(not(debug_assertions))]
        return Self::Json;
    }
}

/// Logging configuration
#[derive(Clone)]
pub struct LoggingConfig {
    /// Output format
    pub format: LogFormat,
    /// Minimum log level
    pub level: LogLevel,
    /// Custom filter string (e.g., "host_desktop=debug,plugin_runtime=warn")
    pub filter: Option<String>,
    /// Host logger that receives a copy of every event
    pub host_logger: Option<Arc<dyn Logger>>,
    /// Enable span contexts
    pub enable_spans: bool,
    /// Display target module in logs
    pub display_target: bool,
    /// Display thread info
    pub display_thread_info: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::default(),
            level: LogLevel::Info,
            filter: None,
            host_logger: None,
            enable_spans: true,
            display_target: true,
            display_thread_info: false,
        }
    }
}

impl fmt::Debug for LoggingConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggingConfig")
            .field("format", &self.format)
            .field("level", &self.level)
            .field("filter", &self.filter)
            .field(
                "host_logger",
                &self.host_logger.as_ref().map(|_| "Logger { ... }"),
            )
            .field("enable_spans", &self.enable_spans)
            .field("display_target", &self.display_target)
            .field("display_thread_info", &self.display_thread_info)
            .finish()
    }
}

impl LoggingConfig {
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Replaces the default per-crate filter entirely
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    pub fn with_host_logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.host_logger = Some(logger);
        self
    }

    pub fn with_spans(mut self, enable: bool) -> Self {
        self.enable_spans = enable;
        self
    }

    pub fn with_target(mut self, display: bool) -> Self {
        self.display_target = display;
        self
    }

    pub fn with_thread_info(mut self, display: bool) -> Self {
        self.display_thread_info = display;
        self
    }
}

/// Initialize the global subscriber.
///
/// Call once during host startup.
///
/// # Errors
///
/// Returns [`Error::Config`] if the filter does not parse or a global
/// subscriber is already installed.
pub fn init_logging(config: LoggingConfig) -> Result<()> {
    let filter = build_filter(&config)?;
    let registry = tracing_subscriber::registry().with(filter);
    let output = format_layer(&config);

    registry
        .with(output)
        .with(HostLoggerLayer::new(config.host_logger))
        .try_init()
        .map_err(|e| Error::Config(format!("Failed to initialize logging: {}", e)))
}

fn level_directive(level: LogLevel) -> &'static str {
    match level {
        LogLevel::Debug => "debug",
        LogLevel::Info => "info",
        LogLevel::Warning => "warn",
        LogLevel::Error => "error",
    }
}

fn build_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    let directives = match &config.filter {
        Some(custom) => custom.clone(),
        None => {
            // Workspace crates and plugin output at the configured level,
            // HTTP stack at warn
            let level = level_directive(config.level);
            let mut directives: Vec<String> = [
                "mobile_interfaces",
                "plugin_runtime",
                "host_desktop",
                HOST_LOG_TARGET,
            ]
            .iter()
            .map(|target| format!("{}={}", target, level))
            .collect();
            directives.extend(["h2", "hyper", "reqwest"].iter().map(|t| format!("{}=warn", t)));
            directives.join(",")
        }
    };

    EnvFilter::try_new(&directives)
        .map_err(|e| Error::Config(format!("Invalid log filter '{}': {}", directives, e)))
}

fn format_layer<S>(config: &LoggingConfig) -> Box<dyn Layer<S> + Send + Sync>
where
    S: Subscriber + for<'a> LookupSpan<'a> + 'static,
{
    let base = tracing_subscriber::fmt::layer()
        .with_target(config.display_target)
        .with_thread_ids(config.display_thread_info)
        .with_thread_names(config.display_thread_info)
        .with_writer(io::stdout);

    match config.format {
        LogFormat::Pretty => {
            let spans = if config.enable_spans {
                FmtSpan::ACTIVE
            } else {
                FmtSpan::NONE
            };
            base.pretty().with_span_events(spans).boxed()
        }
        LogFormat::Json => base
            .json()
            .flatten_event(true)
            .with_current_span(config.enable_spans)
            .with_span_list(config.enable_spans)
            .boxed(),
        LogFormat::Compact => base.compact().boxed(),
    }
}

/// Layer that mirrors `tracing` events into a host [`Logger`].
///
/// The message is followed by the event's fields as `key=value`, with
/// sensitive values passed through [`redact_if_sensitive`].
pub struct HostLoggerLayer {
    logger: Option<Arc<dyn Logger>>,
}

impl HostLoggerLayer {
    pub fn new(logger: Option<Arc<dyn Logger>>) -> Self {
        Self { logger }
    }
}

impl<S> Layer<S> for HostLoggerLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, ctx: Context<'_, S>) {
        let Some(logger) = self.logger.as_ref() else {
            return;
        };

        let metadata = event.metadata();
        if metadata.target() == HOST_LOG_TARGET {
            return;
        }

        let mut visitor = ForwardVisitor::default();
        event.record(&mut visitor);

        let mut line = visitor
            .message
            .unwrap_or_else(|| metadata.name().to_string());

        if let Some(span) = ctx.lookup_current() {
            line = format!("{}: {}", span.name(), line);
        }

        for (key, value) in &visitor.fields {
            line.push_str(&format!(" {}={}", key, redact_if_sensitive(key, value)));
        }

        logger.log(&line, tracing_level_to_log_level(*metadata.level()));
    }
}

#[derive(Default)]
struct ForwardVisitor {
    message: Option<String>,
    fields: Vec<(String, String)>,
}

impl Visit for ForwardVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "message" => self.message = Some(value.to_string()),
            name => self.fields.push((name.to_string(), value.to_string())),
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        let rendered = format!("{:?}", value);
        match field.name() {
            "message" => self.message = Some(rendered),
            name => self.fields.push((name.to_string(), rendered)),
        }
    }
}

fn tracing_level_to_log_level(level: tracing::Level) -> LogLevel {
    match level {
        tracing::Level::TRACE | tracing::Level::DEBUG => LogLevel::Debug,
        tracing::Level::INFO => LogLevel::Info,
        tracing::Level::WARN => LogLevel::Warning,
        tracing::Level::ERROR => LogLevel::Error,
    }
}

/// Helper function to redact sensitive field values
///
/// Use when logging request headers or credentials by hand:
///
/// ```
/// use plugin_runtime::redact_if_sensitive;
///
/// assert_eq!(redact_if_sensitive("Authorization", "Bearer abc"), "[REDACTED]");
/// assert_eq!(redact_if_sensitive("content-type", "text/plain"), "text/plain");
/// ```
pub fn redact_if_sensitive(field_name: &str, value: &str) -> String {
    const SENSITIVE_FIELDS: &[&str] = &[
        "token",
        "password",
        "secret",
        "api_key",
        "authorization",
        "bearer",
        "cookie",
        "session",
    ];

    let field_lower = field_name.to_lowercase();
    if SENSITIVE_FIELDS.iter().any(|&f| field_lower.contains(f)) {
        "[REDACTED]".to_string()
    } else if looks_like_email(value) {
        // Keep the first character only
        let first = value.chars().next().filter(|&c| c != '@');
        format!("{}***@[REDACTED]", first.map(String::from).unwrap_or_default())
    } else {
        value.to_string()
    }
}

fn looks_like_email(value: &str) -> bool {
    if value.contains('/') {
        return false;
    }
    match (value.find('@'), value.rfind('.')) {
        (Some(at), Some(dot)) => at < dot,
        _ => false,
    }
}
