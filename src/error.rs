//! Error types for the scrape pipeline.
//!
//! Every failure surfaces to the immediate caller; nothing in the crate
//! retries or backs off. The one exception is the cache flush in
//! [`crate::services::clear_cache`], which logs instead of propagating.

use crate::cache::CacheError;

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for pipeline operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The slug is not one of the five registered departments.
    ///
    /// Unknown slugs are rejected before any network call is made, so a
    /// typo can never produce a request with a `-1` department id.
    #[error("unknown department slug: {slug:?}")]
    UnknownDepartment { slug: String },

    /// Transport-level failure or a non-success HTTP status.
    #[error("network error: {message}")]
    Network { message: String },

    /// The response body could not be decoded, or the embedded HTML
    /// table does not have the expected shape.
    #[error("malformed payload: {message}")]
    MalformedPayload { message: String },

    /// Aggregation found no exam rows in any department.
    #[error("no exam rows found in any department")]
    EmptyDataSet,

    /// Cache backend failure.
    #[error("cache error: {0}")]
    Cache(#[from] CacheError),

    /// Missing or invalid configuration.
    #[error("configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create a malformed-payload error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedPayload {
            message: message.into(),
        }
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Network {
            message: err.to_string(),
        }
    }
}
