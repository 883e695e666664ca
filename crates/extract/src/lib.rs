// ABOUTME: Main library entry point for the clipper content-extraction engine.
// ABOUTME: Re-exports ExtractedContent, Article, Strategy, ExtractionPipeline, and the post-processing tools.

//! clipper-extract - multi-strategy article extraction for financial news pages.
//!
//! This crate turns already-fetched HTML into structured article records.
//! Several extraction strategies are tried in priority order; each candidate
//! is scored for completeness and the best one above a quality threshold
//! wins. Post-processing tools (text cleaning, date normalization, content
//! validation, paywall detection, language identification) are exposed as
//! pure functions so the collection layer can reuse them.
//!
//! # Example
//!
//! ```
//! use clipper_extract::ExtractionPipeline;
//!
//! let html = r#"<html><head><title>Fed holds rates</title></head>
//! <body><article><p>The Federal Reserve left its benchmark rate unchanged
//! on Wednesday, citing steady inflation data and a resilient labor market
//! that continues to outperform most forecasts from earlier in the year.</p>
//! <p>Officials signalled that two cuts remain on the table for this year,
//! though several members preferred to wait for clearer evidence that price
//! growth is slowing toward the committee target before moving.</p>
//! </article></body></html>"#;
//!
//! let pipeline = ExtractionPipeline::default();
//! let content = pipeline.extract(html, "https://example.com/fed");
//! assert!(content.is_some());
//! ```

pub mod article;
pub mod compose;
pub mod content;
pub mod dates;
pub mod dom;
pub mod error;
pub mod language;
pub mod meta;
pub mod paywall;
pub mod pipeline;
pub mod selectors;
pub mod strategy;
pub mod text;
pub mod validate;

pub use crate::article::Article;
pub use crate::compose::build_article;
pub use crate::content::{ExtractedContent, DEFAULT_MIN_TEXT_LENGTH};
pub use crate::error::ExtractError;
pub use crate::paywall::{PaywallDetector, PaywallSignal};
pub use crate::pipeline::ExtractionPipeline;
pub use crate::selectors::{load_builtin_selectors, SelectorRegistry, SiteSelectors};
pub use crate::strategy::Strategy;
