//! Fetcher: cache-first retrieval of raw schedule payloads.
//!
//! The network transport sits behind the [`ScheduleSource`] trait so the
//! pipeline can run against a stub in tests; [`HttpSource`] is the production
//! implementation over reqwest. The fetcher itself owns the cache-first
//! algorithm: read the slug's entry, on a miss resolve the department and
//! issue a single GET, then write the raw body back with the configured TTL.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::cache::CacheStore;
use crate::departments;
use crate::error::{Error, Result};
use crate::models::SchedulePayload;

/// Base URL of the exam-schedule ajax endpoint.
pub const BASE_URL: &str = "https://ugla.hi.is/Proftafla/View/ajax.php";

// Fixed query parameters: schedule/session constants the endpoint expects.
const PARAM_SID: &str = "2027";
const PARAM_ACTION: &str = "getProfSvids";
const PARAM_PROFTAFLA_ID: &str = "37";
const PARAM_NOTA_VINNU_TOFLU: &str = "0";

/// Source of raw schedule payloads for a department id.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait ScheduleSource: Send + Sync {
    /// Fetch the raw response body for one department.
    ///
    /// One call means one request: no retries, no deduplication of
    /// concurrent calls for the same department.
    async fn fetch_raw(&self, department_id: i32) -> Result<String>;
}

/// HTTP implementation of [`ScheduleSource`] over reqwest.
pub struct HttpSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpSource {
    /// Create a source against the production endpoint.
    pub fn new() -> Self {
        Self::with_base_url(BASE_URL)
    }

    /// Create a source against a custom endpoint (local test servers).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

impl Default for HttpSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ScheduleSource for HttpSource {
    async fn fetch_raw(&self, department_id: i32) -> Result<String> {
        let svid = department_id.to_string();
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("sid", PARAM_SID),
                ("a", PARAM_ACTION),
                ("proftaflaID", PARAM_PROFTAFLA_ID),
                ("svidID", svid.as_str()),
                ("notaVinnuToflu", PARAM_NOTA_VINNU_TOFLU),
            ])
            .send()
            .await?
            .error_for_status()?;

        Ok(response.text().await?)
    }
}

/// Cache-first fetcher for department schedules.
pub struct Fetcher {
    source: Arc<dyn ScheduleSource>,
    cache: Arc<dyn CacheStore>,
    ttl: Duration,
}

impl Fetcher {
    /// Create a fetcher over the given transport and cache handle.
    ///
    /// Cache lifecycle stays with the caller; the fetcher only reads and
    /// writes entries.
    pub fn new(source: Arc<dyn ScheduleSource>, cache: Arc<dyn CacheStore>, ttl: Duration) -> Self {
        Self { source, cache, ttl }
    }

    /// The cache handle this fetcher writes through.
    pub fn cache(&self) -> &Arc<dyn CacheStore> {
        &self.cache
    }

    /// Fetch the schedule payload for one department slug.
    ///
    /// Cache hit: the stored body is decoded and returned without touching
    /// the network (freshness is already enforced by the store's TTL).
    /// Cache miss: the slug must be a registered department, one GET is
    /// issued, and the raw body is cached before returning.
    pub async fn fetch_department(&self, slug: &str) -> Result<SchedulePayload> {
        if let Some(raw) = self.cache.get(slug).await? {
            match serde_json::from_str::<SchedulePayload>(&raw) {
                Ok(payload) => {
                    debug!(slug, "cache hit");
                    return Ok(payload);
                }
                // Undecodable entries fall through to a refetch, which
                // overwrites them.
                Err(err) => warn!(slug, %err, "discarding undecodable cache entry"),
            }
        }

        let department = departments::find(slug).ok_or_else(|| Error::UnknownDepartment {
            slug: slug.to_string(),
        })?;

        info!(slug, id = department.id, "cache miss, fetching schedule");
        let raw = self.source.fetch_raw(department.id).await?;

        let payload: SchedulePayload = serde_json::from_str(&raw)
            .map_err(|err| Error::malformed(format!("response is not schedule JSON: {err}")))?;

        self.cache.set(slug, &raw, self.ttl).await?;
        Ok(payload)
    }
}
