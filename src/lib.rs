//! # proftafla
//!
//! Exam-schedule pipeline for the University of Iceland timetable service.
//!
//! Given a department slug, the crate retrieves the schedule fragment from
//! the ugla.hi.is ajax endpoint (or from cache), parses the embedded HTML
//! tables into typed records, and can aggregate student-count statistics
//! across all five departments.
//!
//! ## Architecture
//!
//! - [`departments`]: static registry mapping slugs to department ids
//! - [`cache`]: TTL key-value store behind the [`cache::CacheStore`] trait,
//!   with in-memory and Redis backends selected by cargo feature
//! - [`fetch`]: cache-first fetcher over a [`fetch::ScheduleSource`] transport
//! - [`parse`]: HTML table parser producing ordered heading groups
//! - [`services`]: the operations external callers invoke
//!
//! ## Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use proftafla::{cache, services, CacheConfig, Fetcher, HttpSource};
//!
//! async fn example() -> proftafla::Result<()> {
//!     let config = CacheConfig::from_env()?;
//!     let store = cache::create(&config).await?;
//!     let fetcher = Fetcher::new(Arc::new(HttpSource::new()), store, config.ttl());
//!
//!     let tests = services::get_tests(&fetcher, "hugvisindasvid").await?;
//!     let stats = services::get_stats(&fetcher).await?;
//!     Ok(())
//! }
//! ```

pub mod cache;
pub mod departments;
pub mod error;
pub mod fetch;
pub mod models;
pub mod parse;
pub mod services;

pub use cache::{CacheConfig, CacheError, CacheStore};
pub use departments::{resolve_id, Department, DEPARTMENTS};
pub use error::{Error, Result};
pub use fetch::{Fetcher, HttpSource, ScheduleSource};
pub use models::{DepartmentStats, ExamRow, HeadingGroup, SchedulePayload, StatsSummary};
pub use services::{clear_cache, get_stats, get_tests};
