//! In-memory cache implementation

use async_trait::async_trait;
use bytes::Bytes;
use plugin_cache::{validate_key, Cache, CacheError, Result};
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

/// Process-local cache backed by a `HashMap`
///
/// Every mutation takes the write lock, so `remove_all` is atomic with respect
/// to concurrent loads. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: RwLock<HashMap<String, Bytes>>,
    max_entry_bytes: Option<usize>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject payloads larger than `limit` bytes with `InvalidData`
    pub fn with_max_entry_bytes(limit: usize) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            max_entry_bytes: Some(limit),
        }
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl Cache for MemoryCache {
    async fn save(&self, data: Bytes, key: &str) -> Result<()> {
        validate_key(key)?;

        if let Some(limit) = self.max_entry_bytes {
            if data.len() > limit {
                debug!(key, size = data.len(), limit, "Rejected oversize cache entry");
                return Err(CacheError::InvalidData);
            }
        }

        let size = data.len();
        self.entries.write().await.insert(key.to_string(), data);
        debug!(key, size, "Stored cache entry");
        Ok(())
    }

    async fn load(&self, key: &str) -> Result<Option<Bytes>> {
        validate_key(key)?;
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        validate_key(key)?;
        if self.entries.write().await.remove(key).is_some() {
            debug!(key, "Removed cache entry");
        }
        Ok(())
    }

    async fn remove_all(&self) -> Result<()> {
        let mut entries = self.entries.write().await;
        let count = entries.len();
        entries.clear();
        debug!(count, "Cleared cache");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_round_trip() {
        let cache = MemoryCache::new();
        cache.save(Bytes::from_static(b"Test data"), "testKey").await.unwrap();

        assert_eq!(
            cache.load("testKey").await.unwrap(),
            Some(Bytes::from_static(b"Test data"))
        );
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn test_empty_key() {
        let cache = MemoryCache::new();
        assert_eq!(
            cache.save(Bytes::new(), "").await,
            Err(CacheError::InvalidKey)
        );
        assert_eq!(cache.load("").await, Err(CacheError::InvalidKey));
        assert_eq!(cache.remove("").await, Err(CacheError::InvalidKey));
        assert!(cache.is_empty().await);
    }

    #[tokio::test]
    async fn test_size_limit_rejects_payload() {
        let cache = MemoryCache::with_max_entry_bytes(4);

        cache.save(Bytes::from_static(b"1234"), "fits").await.unwrap();
        assert_eq!(
            cache.save(Bytes::from_static(b"12345"), "too-big").await,
            Err(CacheError::InvalidData)
        );
        assert_eq!(cache.load("too-big").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_remove_and_remove_all() {
        let cache = MemoryCache::new();
        for key in ["key1", "key2", "key3"] {
            cache.save(Bytes::from(key), key).await.unwrap();
        }

        cache.remove("key2").await.unwrap();
        cache.remove("never-saved").await.unwrap();
        assert_eq!(cache.load("key2").await.unwrap(), None);
        assert_eq!(cache.len().await, 2);

        cache.remove_all().await.unwrap();
        for key in ["key1", "key2", "key3"] {
            assert_eq!(cache.load(key).await.unwrap(), None);
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_remove_all_never_tears_a_key() {
        let cache = Arc::new(MemoryCache::new());
        let keys: Vec<String> = (0..64).map(|i| format!("key-{}", i)).collect();
        for key in &keys {
            cache.save(Bytes::from(key.clone()), key).await.unwrap();
        }

        let mut readers = Vec::new();
        for key in keys.clone() {
            let cache = Arc::clone(&cache);
            readers.push(tokio::spawn(async move {
                for _ in 0..50 {
                    match cache.load(&key).await.unwrap() {
                        Some(value) => assert_eq!(value, Bytes::from(key.clone())),
                        None => {}
                    }
                }
            }));
        }

        cache.remove_all().await.unwrap();

        for reader in readers {
            reader.await.unwrap();
        }
        for key in &keys {
            assert_eq!(cache.load(key).await.unwrap(), None);
        }
    }
}
