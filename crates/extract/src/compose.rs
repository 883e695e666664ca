// ABOUTME: Composes a final Article record from one page via the extraction pipeline.
// ABOUTME: Cleans text, normalizes dates, fills language/source gaps, records diagnostics in extra.

use chrono::{DateTime, Utc};
use serde_json::json;
use url::Url;

use crate::article::Article;
use crate::dates;
use crate::language;
use crate::paywall::PaywallDetector;
use crate::pipeline::ExtractionPipeline;
use crate::text;

/// Turns one fetched page into an [`Article`].
///
/// The pipeline's winning candidate is post-processed: boilerplate stripped
/// and text cleaned, publish date parsed to a real datetime, language
/// detected when the extractor left it empty, source defaulting to the URL
/// host. Extractor diagnostics and any paywall signal land in `extra`.
///
/// When the pipeline rejects the page, the record still carries the URL and
/// `scraped_at` with `extra["method"] = "fallback"` - rejection is a normal
/// outcome and never an error.
pub fn build_article(
    html: &str,
    url: &str,
    scraped_at: DateTime<Utc>,
    pipeline: &ExtractionPipeline,
) -> Article {
    let mut article = Article::new(url, scraped_at);

    let Some(content) = pipeline.extract(html, url) else {
        article
            .extra
            .insert("method".to_string(), json!("fallback"));
        let signal = PaywallDetector::new().detect(html, None);
        if signal.has_paywall {
            article
                .extra
                .insert("paywall".to_string(), json!(signal));
        }
        return article;
    };

    let cleaned_text = content
        .text
        .as_deref()
        .map(text::remove_boilerplate)
        .filter(|t| !t.is_empty());

    article.title = content.title.clone();
    article.author = content.authors.first().cloned();
    article.date_published = content.date.as_deref().and_then(dates::parse_datetime);
    article.language = content
        .language
        .clone()
        .or_else(|| cleaned_text.as_deref().and_then(language::detect));
    article.source = content
        .source
        .clone()
        .or_else(|| host_of(url));

    let signal = PaywallDetector::new().detect(html, cleaned_text.as_deref());
    if signal.has_paywall {
        article.extra.insert("paywall".to_string(), json!(signal));
    }

    article.text = cleaned_text;

    article
        .extra
        .insert("extractor".to_string(), json!(content.extractor));
    article
        .extra
        .insert("confidence".to_string(), json!(content.confidence));
    article
        .extra
        .insert("html_length".to_string(), json!(content.html_length));
    article
        .extra
        .insert("text_length".to_string(), json!(content.text_length));
    if let Some(date) = content.date.as_deref() {
        article.extra.insert("date_raw".to_string(), json!(date));
        if let Some(normalized) = dates::normalize(date) {
            article
                .extra
                .insert("date_normalized".to_string(), json!(normalized));
        }
    }

    article
}

fn host_of(url: &str) -> Option<String> {
    Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::Strategy;

    const PAGE: &str = r#"<html lang="en"><head>
        <title>Treasury yields retreat after auction</title>
        <meta property="article:published_time" content="2026-02-10T15:00:00Z">
        <meta name="author" content="Pat Vieira">
    </head><body>
        <article>
            <p>Yields on the ten-year note fell after a well-received auction,
            with demand metrics at their strongest levels since early last year,
            easing concerns about the supply of new government debt.</p>
            <p>Traders said the result removes one obstacle for a bond rally,
            though the inflation report later this week remains the bigger test
            for the market's conviction about the path of policy.</p>
        </article>
    </body></html>"#;

    fn pipeline() -> ExtractionPipeline {
        ExtractionPipeline::new(vec![Strategy::Density, Strategy::Structural])
    }

    #[test]
    fn builds_full_record() {
        let at = Utc::now();
        let article = build_article(PAGE, "https://example.com/yields", at, &pipeline());

        assert_eq!(
            article.title.as_deref(),
            Some("Treasury yields retreat after auction")
        );
        assert_eq!(article.author.as_deref(), Some("Pat Vieira"));
        assert!(article.has_text());
        assert_eq!(article.scraped_at, at);
        assert_eq!(article.language.as_deref(), Some("en"));
        assert_eq!(article.source.as_deref(), Some("example.com"));

        let date = article.date_published.expect("date");
        assert_eq!(date.format("%Y-%m-%d").to_string(), "2026-02-10");

        assert!(article.extra.contains_key("extractor"));
        assert!(article.extra.contains_key("confidence"));
    }

    #[test]
    fn rejection_yields_fallback_record() {
        let at = Utc::now();
        let html = "<html><head><title>T</title></head><body><p>Short.</p></body></html>";
        let article = build_article(html, "https://example.com/thin", at, &pipeline());

        assert_eq!(article.url, "https://example.com/thin");
        assert!(article.is_empty());
        assert_eq!(article.extra.get("method"), Some(&json!("fallback")));
    }

    #[test]
    fn paywalled_page_records_signal() {
        let at = Utc::now();
        let html = r#"<html><body><div class="paywall">Assine agora.</div></body></html>"#;
        let article = build_article(html, "https://example.com/gated", at, &pipeline());
        assert!(article.extra.contains_key("paywall"));
    }
}
