//! Public operation surface of the crate.
//!
//! These are the four operations external callers (an HTTP API layer, a CLI)
//! invoke: the department registry, per-department test listings, the global
//! stats aggregation, and the administrative cache flush. Each function takes
//! the fetcher or cache handle explicitly; nothing here owns connection
//! state.

pub mod stats;

pub use stats::get_stats;

use tracing::{error, info};

use crate::cache::CacheStore;
use crate::departments::{Department, DEPARTMENTS};
use crate::error::Result;
use crate::fetch::Fetcher;
use crate::models::HeadingGroup;
use crate::parse;

/// The static department registry, in fixed order.
pub fn departments() -> &'static [Department] {
    &DEPARTMENTS
}

/// Fetch and parse the exam schedule for one department slug.
///
/// Data comes from the cache when fresh, otherwise from the remote endpoint.
/// Heading and row order match the source markup exactly.
pub async fn get_tests(fetcher: &Fetcher, slug: &str) -> Result<Vec<HeadingGroup>> {
    let payload = fetcher.fetch_department(slug).await?;
    parse::parse_schedule(&payload.html)
}

/// Flush every cache entry.
///
/// The one operation that swallows its error: a failed flush is logged and
/// reported as `false` rather than propagated.
pub async fn clear_cache(cache: &dyn CacheStore) -> bool {
    match cache.clear().await {
        Ok(()) => {
            info!("cache flushed");
            true
        }
        Err(err) => {
            error!(%err, "cache flush failed");
            false
        }
    }
}
