//! proftafla CLI
//!
//! Small front end over the library: prints per-department exam listings or
//! the global statistics as JSON, and can flush the cache.
//!
//! # Usage
//!
//! ```bash
//! # List the registered departments
//! proftafla
//!
//! # Exam schedule for one department
//! REDIS_URL=redis://127.0.0.1/ CACHE_TTL=600 proftafla hugvisindasvid
//!
//! # Global statistics across all five departments
//! REDIS_URL=redis://127.0.0.1/ CACHE_TTL=600 proftafla stats
//!
//! # Flush the cache
//! REDIS_URL=redis://127.0.0.1/ CACHE_TTL=600 proftafla clear
//! ```
//!
//! # Environment Variables
//!
//! - `REDIS_URL`: cache connection URL (required)
//! - `CACHE_TTL`: cache entry TTL in seconds (required)
//! - `RUST_LOG`: log filter (default: info)

use std::env;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use proftafla::{cache, services, CacheConfig, Fetcher, HttpSource};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_target(true)
        .init();

    let command = env::args().nth(1);
    let Some(command) = command else {
        println!("Registered departments:");
        for department in services::departments() {
            println!("  {:<34} {}", department.slug, department.name);
        }
        println!("\nUsage: proftafla <slug> | stats | clear");
        return Ok(());
    };

    let config = CacheConfig::from_env()?;
    let store = cache::create(&config).await?;
    let fetcher = Fetcher::new(Arc::new(HttpSource::new()), Arc::clone(&store), config.ttl());

    match command.as_str() {
        "stats" => {
            let stats = services::get_stats(&fetcher).await?;
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
        "clear" => {
            if services::clear_cache(store.as_ref()).await {
                info!("cache cleared");
            } else {
                anyhow::bail!("cache flush failed");
            }
        }
        slug => {
            let tests = services::get_tests(&fetcher, slug).await?;
            println!("{}", serde_json::to_string_pretty(&tests)?);
        }
    }

    Ok(())
}
