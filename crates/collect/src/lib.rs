// ABOUTME: Main library entry point for the clipper collection layer.
// ABOUTME: Re-exports the rate limiter, retry strategy, metrics, source registry, and collection wrapper.

//! clipper-collect - politeness, retry, and metrics around article collection.
//!
//! This crate wraps a site-specific URL collector (the external seam) with
//! the discipline every source run needs: per-source rate limiting, bounded
//! retry with exponential backoff, a minimum-success-rate check, and a
//! metrics record for every attempt - whether or not it succeeded. It also
//! carries the scrape pass that turns fetched pages into `Article` records
//! via `clipper-extract`.

pub mod collector;
pub mod error;
pub mod metrics;
pub mod rate_limit;
pub mod retry;
pub mod source;

pub use crate::collector::{scrape_pages, CollectOptions, FetchedPage, SourceCollector};
pub use crate::error::CollectError;
pub use crate::metrics::{CollectorStatistics, MetricsCollector, ScraperMetrics};
pub use crate::rate_limit::RateLimiter;
pub use crate::retry::{RetryConfig, RetryStrategy};
pub use crate::source::{
    load_builtin_sources, CollectRequest, SourceRegistry, SourceSpec, UrlCollector,
};
