// ABOUTME: Language identification for extracted article text.
// ABOUTME: Wraps a lingua detector restricted to Portuguese, English, and Spanish; never fails.

use lingua::{Language, LanguageDetector, LanguageDetectorBuilder};
use once_cell::sync::Lazy;
use tracing::debug;

/// Only the first chunk of the body is examined; detection accuracy
/// plateaus well before this and long bodies are common.
const DETECT_PREFIX_CHARS: usize = 1000;

/// Texts shorter than this give unreliable detections.
const MIN_DETECT_CHARS: usize = 20;

/// Detector restricted to the languages the covered sources publish in.
static DETECTOR: Lazy<LanguageDetector> = Lazy::new(|| {
    LanguageDetectorBuilder::from_languages(&[
        Language::Portuguese,
        Language::English,
        Language::Spanish,
    ])
    .build()
});

/// Detects the language of `text`, returning an ISO 639-1 code.
///
/// Returns `None` for empty, too-short, or undecidable input; never errors.
pub fn detect(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.chars().count() < MIN_DETECT_CHARS {
        return None;
    }

    let prefix: String = trimmed.chars().take(DETECT_PREFIX_CHARS).collect();
    match DETECTOR.detect_language_of(&prefix) {
        Some(Language::Portuguese) => Some("pt".to_string()),
        Some(Language::English) => Some("en".to_string()),
        Some(Language::Spanish) => Some("es".to_string()),
        None => {
            debug!("language detection inconclusive");
            None
        }
    }
}

/// Convenience check for the Brazilian sources.
pub fn is_portuguese(text: &str) -> bool {
    detect(text).as_deref() == Some("pt")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_portuguese() {
        let text = "O banco central manteve a taxa básica de juros inalterada nesta \
                    quarta-feira, citando a desaceleração da inflação nos últimos meses.";
        assert_eq!(detect(text), Some("pt".to_string()));
        assert!(is_portuguese(text));
    }

    #[test]
    fn detects_english() {
        let text = "The central bank kept its benchmark interest rate unchanged on \
                    Wednesday, citing slowing inflation over recent months.";
        assert_eq!(detect(text), Some("en".to_string()));
        assert!(!is_portuguese(text));
    }

    #[test]
    fn short_text_is_none() {
        assert_eq!(detect("oi"), None);
        assert_eq!(detect(""), None);
        assert_eq!(detect("   "), None);
    }
}
