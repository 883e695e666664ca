// ABOUTME: Paywall detection over raw HTML and extracted text.
// ABOUTME: Bilingual indicator vocabulary plus gating CSS selectors; count-based confidence heuristic.

//! Paywall detection.
//!
//! Key behaviors:
//! - Indicators are case-insensitive substring matches against the raw HTML.
//! - Gating selectors catch structural paywalls the vocabulary misses.
//! - Extracted text under 200 characters adds a `short_text` indicator.
//! - Confidence is `min(indicators * 0.3, 1.0)` - a monotone count heuristic,
//!   not a calibrated probability.

use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};

/// Substrings that signal a subscription gate, Portuguese and English.
const PAYWALL_INDICATORS: &[&str] = &[
    // Portuguese
    "assine",
    "assinante",
    "conteúdo exclusivo",
    "área exclusiva",
    "acesso restrito",
    "continue lendo",
    "libere este conteúdo",
    "faça login",
    "cadastre-se grátis",
    // English
    "subscribe",
    "subscriber",
    "exclusive content",
    "restricted access",
    "sign in",
    "register",
    "premium",
    "membership required",
    "paywall",
    "paid content",
];

/// CSS selectors commonly used by subscription gates.
const PAYWALL_SELECTORS: &[&str] = &[
    ".paywall",
    "#paywall",
    ".subscription-required",
    ".login-required",
    ".premium-content",
    ".subscriber-only",
    "[data-paywall]",
    ".article-lock",
    ".content-gate",
];

/// Extracted text below this length while indicators fire suggests a gate
/// swallowed the body.
const SHORT_TEXT_CHARS: usize = 200;

/// Confidence contributed by each indicator.
const CONFIDENCE_STEP: f64 = 0.3;

/// Outcome of a paywall scan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaywallSignal {
    pub has_paywall: bool,
    /// Monotone in the indicator count, capped at 1.0.
    pub confidence: f64,
    /// Each entry is `text:<indicator>`, `selector:<selector>`, or `short_text`.
    pub indicators: Vec<String>,
}

/// Scans pages for subscription gates.
#[derive(Debug, Clone, Copy, Default)]
pub struct PaywallDetector;

impl PaywallDetector {
    pub fn new() -> Self {
        Self
    }

    /// Scans raw HTML (and optionally the extracted text) for paywall signs.
    pub fn detect(&self, html: &str, text: Option<&str>) -> PaywallSignal {
        let mut indicators = Vec::new();

        let html_lower = html.to_lowercase();
        for indicator in PAYWALL_INDICATORS {
            if html_lower.contains(indicator) {
                indicators.push(format!("text:{}", indicator));
            }
        }

        let doc = Html::parse_document(html);
        for sel_str in PAYWALL_SELECTORS {
            if let Ok(sel) = Selector::parse(sel_str) {
                if doc.select(&sel).next().is_some() {
                    indicators.push(format!("selector:{}", sel_str));
                }
            }
        }

        if let Some(text) = text {
            if text.trim().chars().count() < SHORT_TEXT_CHARS {
                indicators.push("short_text".to_string());
            }
        }

        let confidence = (indicators.len() as f64 * CONFIDENCE_STEP).min(1.0);
        PaywallSignal {
            has_paywall: !indicators.is_empty(),
            confidence,
            indicators,
        }
    }
}
