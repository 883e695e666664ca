// ABOUTME: Article struct, the canonical per-URL record persisted downstream.
// ABOUTME: Immutable after construction; scraped_at is stamped exactly once when the page is processed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The canonical output record for one scraped URL.
///
/// `url` and `scraped_at` are always present; everything else is best-effort
/// and may be absent. Records are never updated in place - a correction means
/// a new scrape producing a new record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub url: String,
    pub title: Option<String>,
    pub author: Option<String>,
    pub date_published: Option<DateTime<Utc>>,
    /// When the HTML was fetched or extraction was attempted. Set once.
    pub scraped_at: DateTime<Utc>,
    pub text: Option<String>,
    pub language: Option<String>,
    pub source: Option<String>,
    /// Open diagnostics map: extractor name, confidence, HTTP status, errors.
    #[serde(default)]
    pub extra: Map<String, Value>,
}

impl Article {
    /// Creates a bare record for a URL, stamping the collection time.
    pub fn new(url: impl Into<String>, scraped_at: DateTime<Utc>) -> Self {
        Self {
            url: url.into(),
            title: None,
            author: None,
            date_published: None,
            scraped_at,
            text: None,
            language: None,
            source: None,
            extra: Map::new(),
        }
    }

    /// Returns true if neither title nor body text was recovered.
    pub fn is_empty(&self) -> bool {
        !self.has_title() && !self.has_text()
    }

    /// Returns true if the record has a non-empty title.
    pub fn has_title(&self) -> bool {
        self.title.as_deref().is_some_and(|t| !t.is_empty())
    }

    /// Returns true if the record has non-empty body text.
    pub fn has_text(&self) -> bool {
        self.text.as_deref().is_some_and(|t| !t.is_empty())
    }

    /// Returns true if a publish date was recovered.
    pub fn has_date(&self) -> bool {
        self.date_published.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn new_article_is_empty() {
        let at = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
        let article = Article::new("https://example.com/a", at);
        assert!(article.is_empty());
        assert!(!article.has_date());
        assert_eq!(article.scraped_at, at);
    }

    #[test]
    fn predicates_reflect_fields() {
        let at = Utc::now();
        let mut article = Article::new("https://example.com/a", at);
        article.title = Some("Headline".to_string());
        assert!(article.has_title());
        assert!(!article.has_text());
        article.text = Some("Body".to_string());
        assert!(!article.is_empty());
    }

    #[test]
    fn serializes_extra_map() {
        let at = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
        let mut article = Article::new("https://example.com/a", at);
        article
            .extra
            .insert("http_status".to_string(), serde_json::json!(200));

        let json = serde_json::to_string(&article).expect("serialize");
        assert!(json.contains("\"http_status\":200"));

        let back: Article = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back.url, "https://example.com/a");
        assert_eq!(back.extra.get("http_status"), Some(&serde_json::json!(200)));
    }
}
