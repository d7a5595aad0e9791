//! # Plugin Context
//!
//! Bundles the host services handed to a plugin.
//!
//! ## Overview
//!
//! The builder collects host implementations of each contract and validates
//! them before a plugin ever runs. Missing services are reported with an
//! actionable [`Error::CapabilityMissing`].
//!
//! ## Required Services
//!
//! - `Network` - always required; there is no sensible default
//! - `Cache`, `Logger`, `Navigation` - required unless the `desktop-shims`
//!   feature is enabled, in which case `MemoryCache`, `TracingLogger` and
//!   `StackNavigator` from `host-desktop` are injected
//!
//! ## Usage
//!
//! ```ignore
//! use plugin_runtime::PluginContext;
//! use std::sync::Arc;
//!
//! let context = PluginContext::builder("com.example.notes")
//!     .cache(Arc::new(MyCache))
//!     .logger(Arc::new(MyLogger))
//!     .network(Arc::new(MyNetwork))
//!     .navigation(Arc::new(MyNavigator))
//!     .user(current_user)
//!     .build()?;
//!
//! context.logger.info("Plugin loaded");
//! ```
//!
//! ## Error Handling
//!
//! ```ignore
//! use plugin_runtime::{Error, PluginContext};
//!
//! let err = PluginContext::builder("com.example.notes").build().unwrap_err();
//! assert!(matches!(err, Error::CapabilityMissing { .. }));
//! ```

use crate::error::{Error, Result};
use plugin_cache::Cache;
use plugin_logging::{LogLevel, Logger};
use plugin_navigation::Navigation;
use plugin_network::Network;
use plugin_user::User;
use std::sync::Arc;

/// Deployment environment of the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Environment {
    Development,
    Production,
}

impl Default for Environment {
    fn default() -> Self {
        #[cfg(debug_assertions)]
        return Self::Development;

        #[cfg(not(debug_assertions))]
        return Self::Production;
    }
}

impl Environment {
    /// Whether a plugin message at `level` should reach the host logger.
    ///
    /// Production drops `Debug`.
    pub fn allows(&self, level: LogLevel) -> bool {
        match self {
            Environment::Development => true,
            Environment::Production => level > LogLevel::Debug,
        }
    }
}

/// Host services available to one plugin instance.
///
/// Cloning is cheap; every service is shared behind an `Arc`.
#[derive(Clone)]
pub struct PluginContext {
    /// Identifier of the plugin this context was built for
    pub plugin_name: String,

    pub environment: Environment,

    /// Key-value storage
    pub cache: Arc<dyn Cache>,

    /// Host log sink
    pub logger: Arc<dyn Logger>,

    /// Authenticated HTTP transport
    pub network: Arc<dyn Network>,

    /// Screen presentation
    pub navigation: Arc<dyn Navigation>,

    /// Signed-in user, if any
    pub user: Option<User>,
}

impl std::fmt::Debug for PluginContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginContext")
            .field("plugin_name", &self.plugin_name)
            .field("environment", &self.environment)
            .field("cache", &"Cache { ... }")
            .field("logger", &"Logger { ... }")
            .field("network", &"Network { ... }")
            .field("navigation", &"Navigation { ... }")
            .field("user", &self.user.as_ref().map(User::user_id))
            .finish()
    }
}

impl PluginContext {
    pub fn builder(plugin_name: impl Into<String>) -> PluginContextBuilder {
        PluginContextBuilder::new(plugin_name)
    }

    /// Log through the host logger, honouring the environment's level policy
    pub fn log(&self, message: &str, level: LogLevel) {
        if self.environment.allows(level) {
            self.logger.log(message, level);
        }
    }
}

fn capability_missing(capability: &'static str, purpose: &str) -> Error {
    Error::CapabilityMissing {
        capability,
        message: format!(
            "{} implementation is required for {}. \
             Desktop: enable the 'desktop-shims' feature to use the default. \
             Mobile: inject the platform-native implementation.",
            capability, purpose
        ),
    }
}

#[cfg(feature = "desktop-shims")]
fn provide_default_cache() -> Result<Arc<dyn Cache>> {
    use host_desktop::MemoryCache;

    let cache: Arc<dyn Cache> = Arc::new(MemoryCache::new());
    Ok(cache)
}

#[cfg(not(feature = "desktop-shims"))]
fn provide_default_cache() -> Result<Arc<dyn Cache>> {
    Err(capability_missing("Cache", "plugin data storage"))
}

#[cfg(feature = "desktop-shims")]
fn provide_default_logger(plugin_name: &str) -> Result<Arc<dyn Logger>> {
    use host_desktop::TracingLogger;

    let logger: Arc<dyn Logger> = Arc::new(TracingLogger::new(plugin_name));
    Ok(logger)
}

#[cfg(not(feature = "desktop-shims"))]
fn provide_default_logger(_plugin_name: &str) -> Result<Arc<dyn Logger>> {
    Err(capability_missing("Logger", "plugin log output"))
}

#[cfg(feature = "desktop-shims")]
fn provide_default_navigation() -> Result<Arc<dyn Navigation>> {
    use host_desktop::StackNavigator;

    let navigation: Arc<dyn Navigation> = Arc::new(StackNavigator::new());
    Ok(navigation)
}

#[cfg(not(feature = "desktop-shims"))]
fn provide_default_navigation() -> Result<Arc<dyn Navigation>> {
    Err(capability_missing("Navigation", "screen presentation"))
}

/// Builder for [`PluginContext`]
pub struct PluginContextBuilder {
    plugin_name: String,
    environment: Option<Environment>,
    cache: Option<Arc<dyn Cache>>,
    logger: Option<Arc<dyn Logger>>,
    network: Option<Arc<dyn Network>>,
    navigation: Option<Arc<dyn Navigation>>,
    user: Option<User>,
}

impl PluginContextBuilder {
    pub fn new(plugin_name: impl Into<String>) -> Self {
        Self {
            plugin_name: plugin_name.into(),
            environment: None,
            cache: None,
            logger: None,
            network: None,
            navigation: None,
            user: None,
        }
    }

    /// Defaults to `Development` in debug builds and `Production` otherwise
    pub fn environment(mut self, environment: Environment) -> Self {
        self.environment = Some(environment);
        self
    }

    pub fn cache(mut self, cache: Arc<dyn Cache>) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn network(mut self, network: Arc<dyn Network>) -> Self {
        self.network = Some(network);
        self
    }

    pub fn navigation(mut self, navigation: Arc<dyn Navigation>) -> Self {
        self.navigation = Some(navigation);
        self
    }

    pub fn user(mut self, user: User) -> Self {
        self.user = Some(user);
        self
    }

    /// Builds the context.
    ///
    /// # Errors
    ///
    /// - [`Error::Config`] if the plugin name is blank
    /// - [`Error::CapabilityMissing`] if `Network` is absent, or if `Cache`,
    ///   `Logger` or `Navigation` is absent without `desktop-shims`
    pub fn build(self) -> Result<PluginContext> {
        let plugin_name = self.plugin_name.trim().to_string();
        if plugin_name.is_empty() {
            return Err(Error::Config(
                "Plugin name is required. Pass it to PluginContext::builder().".to_string(),
            ));
        }

        let network = self
            .network
            .ok_or_else(|| capability_missing("Network", "HTTP access to the host backend"))?;

        let cache = match self.cache {
            Some(cache) => cache,
            None => provide_default_cache()?,
        };

        let logger = match self.logger {
            Some(logger) => logger,
            None => provide_default_logger(&plugin_name)?,
        };

        let navigation = match self.navigation {
            Some(navigation) => navigation,
            None => provide_default_navigation()?,
        };

        let environment = self.environment.unwrap_or_default();

        tracing::debug!(
            plugin = %plugin_name,
            ?environment,
            has_user = self.user.is_some(),
            "Built plugin context"
        );

        Ok(PluginContext {
            plugin_name,
            environment,
            cache,
            logger,
            network,
            navigation,
            user: self.user,
        })
    }
}
