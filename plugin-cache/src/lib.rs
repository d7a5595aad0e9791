//! # Cache Contract
//!
//! Async key-value storage that a host application implements and plugins
//! consume to cache data for the current user.
//!
//! ## Overview
//!
//! The contract is a single [`Cache`] trait plus the [`CacheError`] taxonomy:
//!
//! | Operation | Success | Failure |
//! |-----------|---------|---------|
//! | `save` | value stored (overwrites) | `InvalidKey`, `InvalidData`, `Backend` |
//! | `load` | `Some(bytes)` or `None` when absent | `InvalidKey`, `Backend` |
//! | `remove` | entry gone (absent is fine) | `InvalidKey`, `Backend` |
//! | `remove_all` | every entry gone, atomically | `InvalidOperation`, `Backend` |
//!
//! Storage medium, eviction and durability all belong to the host. Callers own
//! retries; the contract defines none.
//!
//! ## Thread Safety
//!
//! `Cache` requires `Send + Sync` so a single `Arc<dyn Cache>` can be shared
//! across tasks without caller-side locking.
//!
//! ## Testing
//!
//! Enable the `mocks` feature to get a `mockall`-generated `MockCache`.

pub mod cache;
pub mod error;

pub use cache::{validate_key, Cache};
pub use error::{CacheError, Result};

#[cfg(any(test, feature = "mocks"))]
pub use cache::MockCache;
