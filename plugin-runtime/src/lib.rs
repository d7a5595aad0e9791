//! # Plugin Runtime
//!
//! Wiring between a host application and the plugins it loads:
//! - `PluginContext` bundles the host services a plugin receives
//! - Logging bootstrap on `tracing-subscriber`, optionally mirrored into the
//!   host's `Logger`
//!
//! ## Overview
//!
//! Hosts construct one [`PluginContext`] per plugin through
//! [`PluginContextBuilder`], which refuses to build when a required service is
//! missing. With the `desktop-shims` feature, the in-memory and `tracing`
//! implementations from `host-desktop` fill in everything except `Network`.

pub mod config;
pub mod error;
pub mod logging;

pub use config::{Environment, PluginContext, PluginContextBuilder};
pub use error::{Error, Result};
pub use logging::{init_logging, redact_if_sensitive, HostLoggerLayer, LogFormat, LoggingConfig};
