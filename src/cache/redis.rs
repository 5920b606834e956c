//! Redis-backed cache implementation for production use.

use std::time::Duration;

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::AsyncCommands;
use tracing::debug;

use super::error::{CacheError, CacheResult};
use super::store::CacheStore;
use crate::error::Result;

/// Cache store over a shared Redis connection.
///
/// Uses the tokio `ConnectionManager`, which multiplexes one connection and
/// reconnects on failure; clones are cheap handles onto the same connection.
pub struct RedisCache {
    manager: ConnectionManager,
}

impl RedisCache {
    /// Connect to the Redis instance at `url` (e.g. `redis://127.0.0.1/`).
    pub async fn connect(url: &str) -> Result<Self> {
        let client = redis::Client::open(url).map_err(CacheError::from)?;
        let manager = client
            .get_connection_manager()
            .await
            .map_err(CacheError::from)?;
        debug!(url, "connected to redis");
        Ok(Self { manager })
    }
}

#[async_trait]
impl CacheStore for RedisCache {
    async fn get(&self, key: &str) -> CacheResult<Option<String>> {
        let mut conn = self.manager.clone();
        Ok(conn.get(key).await?)
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> CacheResult<()> {
        let mut conn = self.manager.clone();
        // SET with EX: TTL is enforced server-side, in whole seconds.
        conn.set_ex::<_, _, ()>(key, value, ttl.as_secs().max(1))
            .await?;
        Ok(())
    }

    async fn clear(&self) -> CacheResult<()> {
        let mut conn = self.manager.clone();
        redis::cmd("FLUSHDB").query_async::<()>(&mut conn).await?;
        Ok(())
    }
}
