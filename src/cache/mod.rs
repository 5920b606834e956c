//! Cache layer for raw schedule payloads.
//!
//! The cache is a key-value store keyed by department slug, holding the most
//! recent raw JSON response with a time-based expiry. Access goes through the
//! [`CacheStore`] trait so backends can be swapped:
//!
//! - `memory`: in-process `HashMap` store for unit testing and local use
//! - `redis`: Redis-backed store for production (feature `redis-cache`)
//!
//! The store handle is created by [`create`] and passed explicitly to the
//! fetcher; connection lifecycle is owned by the caller, not by module-level
//! state.

// Feature flag priority: redis > memory.
// When both features are enabled (e.g., --all-features), redis takes precedence.
#[cfg(not(any(feature = "redis-cache", feature = "memory-cache")))]
compile_error!("Enable at least one cache backend feature.");

pub mod config;
pub mod error;
pub mod memory;
#[cfg(feature = "redis-cache")]
pub mod redis;
pub mod store;

pub use config::CacheConfig;
pub use error::{CacheError, CacheResult};
pub use memory::MemoryCache;
#[cfg(feature = "redis-cache")]
pub use redis::RedisCache;
pub use store::CacheStore;

use std::sync::Arc;

use crate::error::Result;

/// Create the cache backend selected at compile time.
#[cfg(feature = "redis-cache")]
pub async fn create(config: &CacheConfig) -> Result<Arc<dyn CacheStore>> {
    let cache = RedisCache::connect(&config.url).await?;
    Ok(Arc::new(cache))
}

/// Create the cache backend selected at compile time.
#[cfg(all(feature = "memory-cache", not(feature = "redis-cache")))]
pub async fn create(_config: &CacheConfig) -> Result<Arc<dyn CacheStore>> {
    Ok(Arc::new(MemoryCache::new()))
}
