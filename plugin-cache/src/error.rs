use thiserror::Error;

/// Errors surfaced by [`Cache`](crate::Cache) operations.
///
/// `InvalidData`, `InvalidKey` and `InvalidOperation` form the contract's
/// fixed taxonomy. Anything else an implementation needs to report (disk full,
/// keychain locked, ...) travels through [`CacheError::Backend`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    #[error("Cache rejected the payload")]
    InvalidData,

    #[error("Invalid cache key")]
    InvalidKey,

    #[error("Cache operation not supported in the current state")]
    InvalidOperation,

    #[error("Cache backend error: {0}")]
    Backend(String),
}

pub type Result<T> = std::result::Result<T, CacheError>;
