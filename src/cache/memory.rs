//! In-memory cache implementation for unit testing and local development.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use parking_lot::Mutex;

use super::error::CacheResult;
use super::store::CacheStore;

struct Entry {
    value: String,
    expires_at: Instant,
}

/// `HashMap`-backed store with per-entry deadlines.
///
/// Expired entries are dropped lazily when read; there is no background
/// eviction, which is fine for a keyspace of five slugs.
#[derive(Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<String, Entry>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live (non-expired) entries. Test helper.
    pub fn len(&self) -> usize {
        let now = Instant::now();
        self.entries
            .lock()
            .values()
            .filter(|e| e.expires_at > now)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl CacheStore for MemoryCache {
    async fn get(&self, key: &str) -> CacheResult<Option<String>> {
        let mut entries = self.entries.lock();
        match entries.get(key) {
            Some(entry) if entry.expires_at > Instant::now() => Ok(Some(entry.value.clone())),
            Some(_) => {
                entries.remove(key);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> CacheResult<()> {
        self.entries.lock().insert(
            key.to_string(),
            Entry {
                value: value.to_string(),
                expires_at: Instant::now() + ttl,
            },
        );
        Ok(())
    }

    async fn clear(&self) -> CacheResult<()> {
        self.entries.lock().clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TTL: Duration = Duration::from_secs(60);

    #[tokio::test]
    async fn test_round_trip() {
        let cache = MemoryCache::new();
        cache.set("hugvisindasvid", "{\"html\":\"x\"}", TTL).await.unwrap();
        let value = cache.get("hugvisindasvid").await.unwrap();
        assert_eq!(value.as_deref(), Some("{\"html\":\"x\"}"));
    }

    #[tokio::test]
    async fn test_missing_key_is_absent() {
        let cache = MemoryCache::new();
        assert_eq!(cache.get("felagsvisindasvid").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_overwrites_unconditionally() {
        let cache = MemoryCache::new();
        cache.set("k", "old", TTL).await.unwrap();
        cache.set("k", "new", TTL).await.unwrap();
        assert_eq!(cache.get("k").await.unwrap().as_deref(), Some("new"));
        assert_eq!(cache.len(), 1);
    }

    #[tokio::test]
    async fn test_entry_expires_after_ttl() {
        let cache = MemoryCache::new();
        cache
            .set("k", "v", Duration::from_millis(20))
            .await
            .unwrap();
        tokio::time::sleep(Duration::from_millis(40)).await;
        assert_eq!(cache.get("k").await.unwrap(), None);
        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn test_clear_flushes_everything() {
        let cache = MemoryCache::new();
        cache.set("a", "1", TTL).await.unwrap();
        cache.set("b", "2", TTL).await.unwrap();
        cache.clear().await.unwrap();
        assert_eq!(cache.get("a").await.unwrap(), None);
        assert_eq!(cache.get("b").await.unwrap(), None);
        assert!(cache.is_empty());
    }
}
