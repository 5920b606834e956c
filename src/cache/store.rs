//! Cache store trait definition.

use std::time::Duration;

use async_trait::async_trait;

use super::error::CacheResult;

/// Key-value store for raw schedule payloads.
///
/// No locking is done at this layer: the fetcher only ever performs a
/// read-then-maybe-write per slug, and all operations are idempotent, so two
/// racing misses at worst both fetch and both write the same value.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Look up a stored payload.
    ///
    /// # Returns
    /// * `Ok(Some(value))` - The entry exists and has not expired
    /// * `Ok(None)` - No entry, or the entry's TTL has elapsed
    /// * `Err(CacheError)` - The backend failed
    async fn get(&self, key: &str) -> CacheResult<Option<String>>;

    /// Store a payload under `key`, unconditionally overwriting any previous
    /// entry, with the given time-to-live.
    async fn set(&self, key: &str, value: &str, ttl: Duration) -> CacheResult<()>;

    /// Flush every entry. Administrative operation.
    async fn clear(&self) -> CacheResult<()>;
}
