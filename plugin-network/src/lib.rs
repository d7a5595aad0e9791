//! # Network Contract
//!
//! Async request execution provided by the host application.
//!
//! ## Overview
//!
//! A plugin builds a caller-owned [`HttpRequest`] (URL, method, headers, body,
//! timeout), wraps it in a [`NetworkRequest`] with three host flags, and hands
//! it to [`Network::data`]:
//!
//! | Flag | Default | Meaning |
//! |------|---------|---------|
//! | `requires_authentication` | `HostDefault` | attach host OAuth headers |
//! | `requires_sfap_authentication` | `HostDefault` | attach SFAP JWT auth |
//! | `should_refresh_on_403` | `true` | refresh credentials and retry once on 403 |
//!
//! The result is the raw body plus [`ResponseMetadata`]. Non-2xx statuses are
//! normal results; only transport and auth failures raise [`NetworkError`].
//!
//! ## Thread Safety
//!
//! `Network` requires `Send + Sync`; share one `Arc<dyn Network>` freely.

pub mod error;
pub mod http;
pub mod network;
pub mod request;

pub use error::{NetworkError, Result};
pub use http::{HttpMethod, HttpRequest, ResponseMetadata};
pub use network::Network;
pub use request::{AuthRequirement, NetworkRequest};

#[cfg(any(test, feature = "mocks"))]
pub use network::MockNetwork;
