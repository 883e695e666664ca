// ABOUTME: ExtractionPipeline orchestrating the strategies in priority order.
// ABOUTME: Scores candidates, early-exits on high quality, rejects below the minimum threshold.

//! The extraction pipeline.
//!
//! Key behaviors:
//! - Strategies run in priority order; unavailable ones are dropped once,
//!   at construction.
//! - Each valid candidate is scored; the score is stored as its confidence.
//! - A score at or above the early-exit threshold stops the run immediately.
//! - The best candidate is returned only if it reaches the minimum quality;
//!   otherwise the pipeline rejects the page (a normal outcome, not an
//!   error).

use tracing::{debug, info, warn};

use crate::content::ExtractedContent;
use crate::strategy::Strategy;

/// Default minimum quality for an extraction to be accepted.
pub const DEFAULT_MIN_QUALITY: f64 = 0.3;

/// Default score at which the pipeline stops trying further strategies.
pub const DEFAULT_EARLY_EXIT_SCORE: f64 = 0.8;

/// Orchestrates the extraction strategies against one page at a time.
#[derive(Debug, Clone)]
pub struct ExtractionPipeline {
    strategies: Vec<Strategy>,
    min_quality: f64,
    early_exit_score: f64,
}

impl Default for ExtractionPipeline {
    fn default() -> Self {
        Self::new(Strategy::default_set())
    }
}

impl ExtractionPipeline {
    /// Builds a pipeline from an ordered strategy list, keeping only the
    /// strategies that report themselves available. Unavailable strategies
    /// are excluded here and never retried.
    pub fn new(strategies: Vec<Strategy>) -> Self {
        let strategies: Vec<Strategy> =
            strategies.into_iter().filter(|s| s.is_available()).collect();
        if strategies.is_empty() {
            warn!("no extraction strategies available");
        }
        Self {
            strategies,
            min_quality: DEFAULT_MIN_QUALITY,
            early_exit_score: DEFAULT_EARLY_EXIT_SCORE,
        }
    }

    /// Sets the minimum acceptable quality score.
    pub fn with_min_quality(mut self, min_quality: f64) -> Self {
        self.min_quality = min_quality;
        self
    }

    /// Sets the score at which the pipeline stops early.
    pub fn with_early_exit_score(mut self, early_exit_score: f64) -> Self {
        self.early_exit_score = early_exit_score;
        self
    }

    /// The strategies that survived the availability filter, in order.
    pub fn strategy_names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// Extracts content using the configured minimum quality.
    pub fn extract(&self, html: &str, url: &str) -> Option<ExtractedContent> {
        self.extract_with_min_quality(html, url, self.min_quality)
    }

    /// Extracts content, accepting the best candidate scoring at least
    /// `min_quality`. Returns `None` when no strategy produced an acceptable
    /// result - the reject path, not an error.
    pub fn extract_with_min_quality(
        &self,
        html: &str,
        url: &str,
        min_quality: f64,
    ) -> Option<ExtractedContent> {
        let mut best: Option<ExtractedContent> = None;
        let mut best_score = 0.0_f64;

        for strategy in &self.strategies {
            debug!(extractor = strategy.name(), "trying extractor");
            let result = match strategy.extract(html, url) {
                Ok(result) => result,
                Err(err) => {
                    debug!(extractor = strategy.name(), %err, "extractor declined");
                    continue;
                }
            };

            if !result.is_valid() {
                debug!(extractor = strategy.name(), "result failed validity check");
                continue;
            }

            let score = result.quality_score();
            debug!(extractor = strategy.name(), score, "scored candidate");

            if score > best_score {
                let mut result = result;
                result.confidence = score;
                best_score = score;
                best = Some(result);
            }

            if score >= self.early_exit_score {
                info!(extractor = strategy.name(), score, "high quality extraction");
                break;
            }
        }

        if best_score >= min_quality {
            if let Some(ref content) = best {
                info!(
                    extractor = %content.extractor,
                    score = best_score,
                    "best extraction selected"
                );
            }
            best
        } else {
            warn!(min_quality, best_score, "no extraction met quality threshold");
            None
        }
    }

    /// Runs every strategy unconditionally and returns all valid candidates
    /// sorted by confidence, best first. For comparison and debugging only.
    pub fn extract_all(&self, html: &str, url: &str) -> Vec<ExtractedContent> {
        let mut results: Vec<ExtractedContent> = Vec::new();

        for strategy in &self.strategies {
            match strategy.extract(html, url) {
                Ok(mut result) if result.is_valid() => {
                    result.confidence = result.quality_score();
                    results.push(result);
                }
                Ok(_) => {}
                Err(err) => {
                    debug!(extractor = strategy.name(), %err, "extractor declined");
                }
            }
        }

        results.sort_by(|a, b| {
            b.confidence
                .partial_cmp(&a.confidence)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        results
    }
}
