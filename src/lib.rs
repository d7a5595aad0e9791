//! Workspace umbrella crate.
//!
//! This crate exists to expose feature flags that map to the individual
//! contract crates (e.g., `plugin-cache`, `plugin-network`, `plugin-navigation`).
//! Plugins can depend on `mobile-interfaces` and enable only the contracts they
//! consume, while hosts enable `runtime` (and optionally `desktop-shims`) to get
//! the `PluginContext` wiring.

#[cfg(feature = "cache")]
pub use plugin_cache as cache;

#[cfg(feature = "logging")]
pub use plugin_logging as logging;

#[cfg(feature = "network")]
pub use plugin_network as network;

#[cfg(feature = "navigation")]
pub use plugin_navigation as navigation;

#[cfg(feature = "user")]
pub use plugin_user as user;

#[cfg(feature = "runtime")]
pub use plugin_runtime as runtime;
