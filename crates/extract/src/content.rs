// ABOUTME: ExtractedContent struct holding the raw output of one extraction strategy.
// ABOUTME: Includes validity checking and the completeness-based quality score used by the pipeline.

use serde::{Deserialize, Serialize};

/// Minimum body length (in characters) for an extraction to count as valid.
pub const DEFAULT_MIN_TEXT_LENGTH: usize = 100;

/// The raw result of one extraction strategy run against one page.
///
/// Every field except `extractor` is best-effort. `confidence` starts at 0.0
/// and is set exactly once by the pipeline, to the quality score computed
/// when the candidate was accepted; strategies never fill it themselves.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ExtractedContent {
    pub title: Option<String>,
    /// Main body text, paragraph-joined.
    pub text: Option<String>,
    pub authors: Vec<String>,
    /// Publish date as found on the page, not yet normalized.
    pub date: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    /// ISO 639-1 language code when the strategy could determine it.
    pub language: Option<String>,
    pub tags: Vec<String>,
    /// Site name or domain the content was attributed to.
    pub source: Option<String>,
    /// Name of the strategy that produced this result.
    pub extractor: String,
    /// Quality score assigned by the pipeline, 0.0 to 1.0.
    pub confidence: f64,
    pub html_length: usize,
    pub text_length: usize,
}

impl ExtractedContent {
    /// Returns true if the extraction has a non-empty title and a body of at
    /// least [`DEFAULT_MIN_TEXT_LENGTH`] characters.
    pub fn is_valid(&self) -> bool {
        self.is_valid_with(DEFAULT_MIN_TEXT_LENGTH)
    }

    /// Validity check with a caller-provided minimum body length.
    pub fn is_valid_with(&self, min_text_length: usize) -> bool {
        let has_title = self
            .title
            .as_deref()
            .is_some_and(|t| !t.trim().is_empty());
        let text_len = self
            .text
            .as_deref()
            .map_or(0, |t| t.trim().chars().count());
        has_title && text_len >= min_text_length
    }

    /// Deterministic completeness score in 0.0..=1.0.
    ///
    /// Weights: substantial title 0.3; body 0.4 (>= 500 chars) or 0.2
    /// (>= 100 chars); date 0.1; authors 0.1; description 0.05; image 0.05.
    /// Adding a field never lowers the score.
    pub fn quality_score(&self) -> f64 {
        let mut score: f64 = 0.0;

        if let Some(title) = self.title.as_deref() {
            if title.trim().chars().count() > 10 {
                score += 0.3;
            }
        }

        if let Some(text) = self.text.as_deref() {
            let len = text.trim().chars().count();
            if len >= 500 {
                score += 0.4;
            } else if len >= 100 {
                score += 0.2;
            }
        }

        if self.date.as_deref().is_some_and(|d| !d.trim().is_empty()) {
            score += 0.1;
        }

        if !self.authors.is_empty() {
            score += 0.1;
        }

        if self
            .description
            .as_deref()
            .is_some_and(|d| !d.trim().is_empty())
        {
            score += 0.05;
        }

        if self.image.as_deref().is_some_and(|i| !i.trim().is_empty()) {
            score += 0.05;
        }

        score.min(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_content() -> ExtractedContent {
        ExtractedContent {
            title: Some("Central bank raises benchmark rate".to_string()),
            text: Some("x".repeat(600)),
            authors: vec!["Ana Souza".to_string()],
            date: Some("2026-01-15".to_string()),
            description: Some("Rate decision coverage".to_string()),
            image: Some("https://example.com/hero.jpg".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn full_content_scores_one() {
        assert!((full_content().quality_score() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn empty_content_scores_zero() {
        assert_eq!(ExtractedContent::default().quality_score(), 0.0);
    }

    #[test]
    fn medium_text_scores_partial() {
        let content = ExtractedContent {
            title: Some("A reasonably long headline".to_string()),
            text: Some("y".repeat(150)),
            ..Default::default()
        };
        // 0.3 title + 0.2 medium body
        assert!((content.quality_score() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn score_is_monotonic_in_field_completeness() {
        let mut content = ExtractedContent {
            title: Some("A reasonably long headline".to_string()),
            text: Some("y".repeat(600)),
            ..Default::default()
        };
        let mut last = content.quality_score();

        content.date = Some("2026-02-01".to_string());
        assert!(content.quality_score() >= last);
        last = content.quality_score();

        content.authors.push("Reporter".to_string());
        assert!(content.quality_score() >= last);
        last = content.quality_score();

        content.description = Some("dek".to_string());
        assert!(content.quality_score() >= last);
        last = content.quality_score();

        content.image = Some("img.jpg".to_string());
        assert!(content.quality_score() >= last);
    }

    #[test]
    fn is_valid_requires_title() {
        let content = ExtractedContent {
            title: None,
            text: Some("z".repeat(200)),
            ..Default::default()
        };
        assert!(!content.is_valid());
    }

    #[test]
    fn is_valid_requires_minimum_text() {
        let content = ExtractedContent {
            title: Some("Title".to_string()),
            text: Some("short".to_string()),
            ..Default::default()
        };
        assert!(!content.is_valid());
        assert!(content.is_valid_with(5));
    }

    #[test]
    fn whitespace_title_is_invalid() {
        let content = ExtractedContent {
            title: Some("   ".to_string()),
            text: Some("z".repeat(200)),
            ..Default::default()
        };
        assert!(!content.is_valid());
    }
}
