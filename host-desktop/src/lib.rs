//! # Desktop Host Implementations
//!
//! Reference implementations of the plugin contracts for desktop hosts and
//! development builds (macOS, Windows, Linux).
//!
//! ## Overview
//!
//! - [`MemoryCache`] implements `Cache` with an in-process map
//! - [`TracingLogger`] implements `Logger` on top of `tracing`
//! - [`ReqwestNetwork`] implements `Network` using `reqwest`, with credentials
//!   supplied by a [`CredentialProvider`]
//! - [`StackNavigator`] implements `Navigation` as a plain destination stack
//!
//! None of these persist anything across restarts.
//!
//! ## Usage
//!
//! ```ignore
//! use host_desktop::{MemoryCache, ReqwestNetwork, ReqwestNetworkConfig, StaticCredentials};
//! use std::sync::Arc;
//!
//! let cache = Arc::new(MemoryCache::new());
//! let network = ReqwestNetwork::new(
//!     ReqwestNetworkConfig::default().with_instance_url(instance_url),
//!     Arc::new(StaticCredentials::new("access-token")),
//! )?;
//! ```

mod cache;
mod credentials;
mod logger;
mod navigation;
mod network;

pub use cache::MemoryCache;
pub use credentials::{CredentialProvider, StaticCredentials};
pub use logger::TracingLogger;
pub use navigation::StackNavigator;
pub use network::{ReqwestNetwork, ReqwestNetworkConfig};
