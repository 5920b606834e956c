//! Error types for cache operations.

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Error type for cache operations.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    /// Could not reach or authenticate with the cache backend.
    #[error("cache connection error: {message}")]
    Connection { message: String },

    /// The backend rejected or failed an individual command.
    #[error("cache backend error: {message}")]
    Backend { message: String },
}

impl CacheError {
    /// Create a connection error.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a backend error.
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
        }
    }
}

#[cfg(feature = "redis-cache")]
impl From<::redis::RedisError> for CacheError {
    fn from(err: ::redis::RedisError) -> Self {
        if err.is_connection_refusal() || err.is_connection_dropped() || err.is_timeout() {
            CacheError::connection(err.to_string())
        } else {
            CacheError::backend(err.to_string())
        }
    }
}
