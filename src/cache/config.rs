//! Cache configuration from environment variables or a TOML file.

use std::env;
use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Environment variable holding the cache connection URL.
pub const ENV_URL: &str = "REDIS_URL";
/// Environment variable holding the entry TTL in seconds.
pub const ENV_TTL: &str = "CACHE_TTL";

/// Cache connection and expiry settings.
///
/// Both settings are required; a missing URL or TTL is a configuration
/// error, never a silent default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Connection URL for the cache backend.
    pub url: String,
    /// Entry time-to-live in seconds.
    pub ttl_seconds: u64,
}

impl CacheConfig {
    /// Read the configuration from `REDIS_URL` and `CACHE_TTL`.
    pub fn from_env() -> Result<Self> {
        let url = env::var(ENV_URL)
            .map_err(|_| Error::configuration(format!("{ENV_URL} is not set")))?;
        let ttl = env::var(ENV_TTL)
            .map_err(|_| Error::configuration(format!("{ENV_TTL} is not set")))?;
        let ttl_seconds = ttl.parse().map_err(|_| {
            Error::configuration(format!("{ENV_TTL} is not a number of seconds: {ttl:?}"))
        })?;
        Ok(Self { url, ttl_seconds })
    }

    /// Load the configuration from a TOML file with `url` and `ttl_seconds`
    /// keys under a `[cache]` table.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .map_err(|e| Error::configuration(format!("failed to read config file: {e}")))?;
        let file: ConfigFile = toml::from_str(&content)
            .map_err(|e| Error::configuration(format!("failed to parse config file: {e}")))?;
        Ok(file.cache)
    }

    /// The TTL as a [`Duration`].
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_seconds)
    }
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    cache: CacheConfig,
}
