// ABOUTME: SourceCollector wrapping a UrlCollector with rate limiting, bounded retry, and metrics.
// ABOUTME: Also the scrape pass turning fetched pages into Article records via the extraction pipeline.

//! The collection wrapper.
//!
//! One collection attempt walks a fixed path: rate-limit wait, then up to
//! `max_attempts` calls to the underlying collector. A non-empty result ends
//! the loop; an empty result retries immediately (soft failure); an error is
//! recorded and backed off from. A metrics record is produced on every path,
//! then the success rate is checked against the source minimum - strict
//! callers get a typed error, default callers get a warning and the partial
//! result.

use std::thread;
use std::time::Instant;

use chrono::Utc;
use tracing::{info, warn};

use clipper_extract::{build_article, Article, ExtractionPipeline};

use crate::error::CollectError;
use crate::metrics::{MetricsCollector, ScraperMetrics};
use crate::rate_limit::RateLimiter;
use crate::retry::{RetryConfig, RetryStrategy};
use crate::source::{CollectRequest, SourceSpec, UrlCollector};

/// Per-call options for one collection run.
#[derive(Debug, Clone, Default)]
pub struct CollectOptions {
    pub category: Option<String>,
    pub limit: usize,
    pub start_date: Option<chrono::DateTime<Utc>>,
    pub end_date: Option<chrono::DateTime<Utc>>,
    /// Overrides the source's minimum success rate for this call.
    pub min_success_rate: Option<f64>,
    /// When true, a below-minimum run raises instead of warning.
    pub strict: bool,
}

/// One fetched page handed to the scrape pass by the external fetcher.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub url: String,
    pub html: String,
    pub status: Option<u16>,
}

/// Wraps one source's URL collector with the full collection discipline.
pub struct SourceCollector {
    spec: SourceSpec,
    inner: Box<dyn UrlCollector>,
    rate_limiter: RateLimiter,
    retry: RetryStrategy,
    history: Vec<ScraperMetrics>,
}

impl SourceCollector {
    /// Creates a collector with the default retry policy and the source's
    /// configured request rate.
    pub fn new(spec: SourceSpec, inner: Box<dyn UrlCollector>) -> Self {
        let rate_limiter = RateLimiter::new(spec.requests_per_second);
        Self {
            spec,
            inner,
            rate_limiter,
            retry: RetryStrategy::default(),
            history: Vec::new(),
        }
    }

    /// Replaces the retry policy.
    pub fn with_retry(mut self, config: RetryConfig) -> Self {
        self.retry = RetryStrategy::new(config);
        self
    }

    pub fn spec(&self) -> &SourceSpec {
        &self.spec
    }

    /// Append-only metrics history for this source.
    pub fn metrics_history(&self) -> &[ScraperMetrics] {
        &self.history
    }

    /// Metrics of the most recent run.
    pub fn latest_metrics(&self) -> Option<&ScraperMetrics> {
        self.history.last()
    }

    /// Mean success rate over the recorded history.
    pub fn average_success_rate(&self) -> f64 {
        if self.history.is_empty() {
            return 0.0;
        }
        self.history.iter().map(|m| m.success_rate).sum::<f64>() / self.history.len() as f64
    }

    /// Collects article URLs with rate limiting, retry, validation, and
    /// metrics. Metrics are recorded on every path, including total failure.
    ///
    /// Returns the collected URLs; with `opts.strict` a run below the
    /// minimum success rate raises [`CollectError::Paywall`] for paywalled
    /// sources and [`CollectError::Insufficient`] otherwise.
    pub fn latest_articles(
        &mut self,
        opts: &CollectOptions,
        central: Option<&mut MetricsCollector>,
    ) -> Result<Vec<String>, CollectError> {
        let min_rate = opts.min_success_rate.unwrap_or(self.spec.min_success_rate);
        let start = Instant::now();
        let mut errors: Vec<String> = Vec::new();
        let mut retry_count = 0u32;
        let mut urls: Vec<String> = Vec::new();

        let request = CollectRequest {
            category: opts.category.clone(),
            limit: opts.limit,
            start_date: opts.start_date,
            end_date: opts.end_date,
        };

        if opts.start_date.is_some() || opts.end_date.is_some() {
            // Date windows are honored only by collectors that implement
            // them; the wrapper itself cannot filter bare URLs.
            warn!(source = %self.spec.id, "date filter requested; collector support required");
        }

        self.rate_limiter.wait_if_needed(&self.spec.id);

        let max_attempts = self.retry.config().max_attempts.max(1);
        for attempt in 1..=max_attempts {
            match self.inner.collect_urls(&request) {
                Ok(found) if !found.is_empty() => {
                    urls = found;
                    break;
                }
                Ok(_) => {
                    // Soft failure: nothing found, try again without backoff.
                    warn!(source = %self.spec.id, attempt, "collector returned no urls");
                }
                Err(err) => {
                    retry_count = attempt;
                    let message = format!("attempt {} failed: {}", attempt, err);
                    warn!(source = %self.spec.id, %message);
                    errors.push(message);
                    if attempt < max_attempts {
                        let delay = self.retry.delay_for(attempt);
                        info!(
                            source = %self.spec.id,
                            delay_ms = delay.as_millis() as u64,
                            "retrying after backoff"
                        );
                        thread::sleep(delay);
                    }
                }
            }
        }

        let elapsed = start.elapsed().as_secs_f64();
        let success_rate = if opts.limit > 0 {
            urls.len() as f64 / opts.limit as f64
        } else {
            0.0
        };

        let metrics = ScraperMetrics {
            source_id: self.spec.id.clone(),
            category: opts.category.clone(),
            requested: opts.limit,
            collected: urls.len(),
            success_rate,
            elapsed_seconds: (elapsed * 100.0).round() / 100.0,
            timestamp: Utc::now(),
            errors,
            paywall_detected: self.spec.paywall,
            retry_count,
        };
        if let Some(central) = central {
            central.add(metrics.clone());
        }
        self.history.push(metrics);

        if success_rate < min_rate {
            warn!(
                source = %self.spec.id,
                collected = urls.len(),
                requested = opts.limit,
                success_rate,
                min_rate,
                paywall = self.spec.paywall,
                "success rate below minimum"
            );
            if opts.strict {
                let (collected, requested) = (urls.len(), opts.limit);
                return Err(if self.spec.paywall {
                    CollectError::Paywall {
                        source_id: self.spec.id.clone(),
                        requested,
                        collected,
                        success_rate: success_rate * 100.0,
                        min_rate: min_rate * 100.0,
                    }
                } else {
                    CollectError::Insufficient {
                        source_id: self.spec.id.clone(),
                        requested,
                        collected,
                        success_rate: success_rate * 100.0,
                        min_rate: min_rate * 100.0,
                    }
                });
            }
        } else {
            info!(
                source = %self.spec.id,
                collected = urls.len(),
                requested = opts.limit,
                success_rate,
                elapsed,
                "collection finished"
            );
        }

        Ok(urls)
    }
}

/// Turns fetched pages into [`Article`] records via the extraction pipeline.
///
/// Each page is stamped with its own `scraped_at` at processing time and
/// carries its HTTP status in `extra`; extraction rejections yield fallback
/// records, never errors, so partial progress is preserved.
pub fn scrape_pages<I>(pages: I, pipeline: &ExtractionPipeline) -> Vec<Article>
where
    I: IntoIterator<Item = FetchedPage>,
{
    pages
        .into_iter()
        .map(|page| {
            let scraped_at = Utc::now();
            let mut article = build_article(&page.html, &page.url, scraped_at, pipeline);
            if let Some(status) = page.status {
                article
                    .extra
                    .insert("http_status".to_string(), serde_json::json!(status));
            }
            article
        })
        .collect()
}
