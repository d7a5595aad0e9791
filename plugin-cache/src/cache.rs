//! Cache Abstraction
//!
//! Async key-value storage provided by the host and scoped to the current user.

use async_trait::async_trait;
use bytes::Bytes;

use crate::error::{CacheError, Result};

/// Check a key against the validation every implementation must perform.
///
/// Keys are opaque strings; the empty string is the only key every host is
/// required to reject. Implementations may layer stricter rules on top.
pub fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(CacheError::InvalidKey);
    }
    Ok(())
}

/// Key-value cache trait
///
/// Lets plugins use the host application's caching layer for the current
/// user's data. Implementations own storage, thread safety and any eviction
/// policy; the contract only fixes the signal shape.
///
/// Every operation may be invoked concurrently by multiple callers against the
/// same key. No ordering is guaranteed between concurrent `save` calls to one
/// key (last writer wins is up to the host), and whether `save` is durable
/// before returning is host-defined.
///
/// # Example
///
/// ```ignore
/// use plugin_cache::{Cache, Result};
/// use bytes::Bytes;
///
/// async fn remember(cache: &dyn Cache, payload: Vec<u8>) -> Result<()> {
///     cache.save(Bytes::from(payload), "recent-records").await?;
///     Ok(())
/// }
/// ```
#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
#[async_trait]
pub trait Cache: Send + Sync {
    /// Persist `data` under `key`, overwriting any existing value.
    ///
    /// # Errors
    ///
    /// - [`CacheError::InvalidKey`] if the key fails validation (at minimum: empty)
    /// - [`CacheError::InvalidData`] if the implementation rejects the payload
    /// - [`CacheError::Backend`] for any other implementation-specific failure
    async fn save(&self, data: Bytes, key: &str) -> Result<()>;

    /// Load the payload stored under `key`.
    ///
    /// Returns `Ok(None)` when nothing is stored; absence is never an error.
    async fn load(&self, key: &str) -> Result<Option<Bytes>>;

    /// Remove the entry for `key` if present.
    ///
    /// Removing an absent key succeeds.
    async fn remove(&self, key: &str) -> Result<()>;

    /// Remove every entry.
    ///
    /// A concurrent `load` must observe either the pre- or post-clear value for
    /// any given key, never a torn intermediate.
    async fn remove_all(&self) -> Result<()>;

    /// Check whether a value is stored under `key`
    async fn contains(&self, key: &str) -> Result<bool> {
        Ok(self.load(key).await?.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;

    #[test]
    fn test_validate_key() {
        assert_eq!(validate_key(""), Err(CacheError::InvalidKey));
        assert!(validate_key("testKey").is_ok());
        assert!(validate_key(" ").is_ok());
    }

    #[tokio::test]
    async fn test_mock_cache_load_absent() {
        let mut cache = MockCache::new();
        cache
            .expect_load()
            .with(eq("nonExistentKey"))
            .times(1)
            .returning(|_| Ok(None));

        let result = cache.load("nonExistentKey").await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_mock_cache_surfaces_error() {
        let mut cache = MockCache::new();
        cache
            .expect_remove_all()
            .times(1)
            .returning(|| Err(CacheError::InvalidOperation));

        let err = cache.remove_all().await.unwrap_err();
        assert_eq!(err, CacheError::InvalidOperation);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(CacheError::InvalidKey.to_string(), "Invalid cache key");
        assert_eq!(
            CacheError::Backend("disk full".to_string()).to_string(),
            "Cache backend error: disk full"
        );
    }
}
