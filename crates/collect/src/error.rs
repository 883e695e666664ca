// ABOUTME: Error types for the collection layer.
// ABOUTME: Hard failures (insufficient data, paywall) raised only for strict-mode callers.

use thiserror::Error;

/// Errors surfaced by a collection run.
///
/// `Insufficient` and `Paywall` are raised only when the caller opted into
/// strict validation; the default path logs a warning and returns the
/// partial result instead.
#[derive(Debug, Error)]
pub enum CollectError {
    /// The source fell short of its minimum success rate.
    #[error(
        "insufficient data from {source_id}: collected {collected}/{requested} \
         (success rate {success_rate:.0}%, minimum {min_rate:.0}%)"
    )]
    Insufficient {
        source_id: String,
        requested: usize,
        collected: usize,
        /// Percentages, 0-100.
        success_rate: f64,
        min_rate: f64,
    },

    /// The shortfall is attributed to a paywalled source.
    #[error(
        "paywall limited collection from {source_id}: collected {collected}/{requested} \
         (success rate {success_rate:.0}%, minimum {min_rate:.0}%)"
    )]
    Paywall {
        source_id: String,
        requested: usize,
        collected: usize,
        success_rate: f64,
        min_rate: f64,
    },

    /// The underlying URL collector failed on its final attempt.
    #[error("source error: {0}")]
    Source(#[from] anyhow::Error),
}

impl CollectError {
    /// Returns true for the paywall-attributed shortfall.
    pub fn is_paywall(&self) -> bool {
        matches!(self, CollectError::Paywall { .. })
    }

    /// Returns true for either kind of below-minimum shortfall.
    pub fn is_insufficient(&self) -> bool {
        matches!(
            self,
            CollectError::Insufficient { .. } | CollectError::Paywall { .. }
        )
    }
}
