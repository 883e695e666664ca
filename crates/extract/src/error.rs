// ABOUTME: Error types for extraction strategies.
// ABOUTME: Provides ExtractError enum so strategy failures are explicit values, not panics.

use thiserror::Error;

/// Reasons a single extraction strategy can decline to produce content.
///
/// These are expected, recoverable outcomes: the pipeline logs them at debug
/// level and moves on to the next strategy. None of them aborts a run.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The custom-selector strategy has no profile matching the URL's domain.
    #[error("no selector profile for domain: {0}")]
    DomainNotConfigured(String),

    /// The page URL could not be parsed, so domain matching is impossible.
    #[error("invalid page url: {0}")]
    InvalidUrl(String),

    /// The strategy ran but found nothing usable.
    #[error("no content found: {0}")]
    NoContent(&'static str),

    /// A configured CSS selector failed to parse.
    #[error("bad selector {selector:?} for field {field}")]
    BadSelector { field: &'static str, selector: String },
}

impl ExtractError {
    /// Returns true if this is a cheap short-circuit (domain not configured),
    /// as opposed to a strategy that actually inspected the document.
    pub fn is_short_circuit(&self) -> bool {
        matches!(
            self,
            ExtractError::DomainNotConfigured(_) | ExtractError::InvalidUrl(_)
        )
    }
}
