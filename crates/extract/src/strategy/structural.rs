// ABOUTME: Generic structural fallback strategy with no domain knowledge.
// ABOUTME: Known containers first, then an unfiltered all-paragraph fallback; metadata from common meta tags.

use scraper::{Html, Selector};

use crate::content::ExtractedContent;
use crate::error::ExtractError;
use crate::meta;

/// Containers tried in order for the article body.
const CONTENT_CONTAINERS: &[&str] = &[
    "article",
    "main",
    ".article-content",
    ".post-content",
    ".entry-content",
];

/// Chrome subtrees stripped before collecting paragraph text.
const STRIP_TAGS: &[&str] = &["script", "style", "nav", "footer", "header", "aside"];

pub(crate) fn extract(html: &str) -> Result<ExtractedContent, ExtractError> {
    let doc = Html::parse_document(html);

    let title = meta::page_title(&doc);

    let mut text = None;
    for &container in CONTENT_CONTAINERS {
        let sel = match Selector::parse(container) {
            Ok(s) => s,
            Err(_) => continue,
        };
        if let Some(root) = doc.select(&sel).next() {
            if let Some(found) = meta::paragraph_text(root, STRIP_TAGS, 20) {
                text = Some(found);
                break;
            }
        }
    }

    // Last resort: every paragraph on the page, unfiltered. Short pages still
    // yield a candidate; the validity check downstream decides its fate.
    if text.is_none() {
        text = all_paragraphs(&doc);
    }

    let (Some(title), Some(text)) = (title, text) else {
        return Err(ExtractError::NoContent("no title or paragraph text"));
    };

    Ok(ExtractedContent {
        title: Some(title),
        text: Some(text),
        authors: meta::page_authors(&doc),
        date: meta::page_date(&doc),
        description: meta::page_description(&doc),
        image: meta::page_image(&doc),
        ..Default::default()
    })
}

fn all_paragraphs(doc: &Html) -> Option<String> {
    let sel = Selector::parse("p").ok()?;
    let parts: Vec<String> = doc
        .select(&sel)
        .map(|p| meta::normalize_whitespace(&p.text().collect::<Vec<_>>().join(" ")))
        .filter(|t| !t.is_empty())
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_article_container() {
        let html = r#"<html><head>
            <title>Oil slides as supply fears ease</title>
            <meta property="og:description" content="Crude fell two percent.">
            <meta property="og:image" content="https://example.com/oil.jpg">
        </head><body>
            <p>Stray paragraph outside the article that is definitely long enough.</p>
            <article>
                <header><p>Published in the commodities section of the site.</p></header>
                <p>Crude futures fell two percent after shipping lanes reopened,
                easing fears of a prolonged disruption to seaborne supply routes.</p>
                <p>Analysts said the move unwinds most of the risk premium built
                up over the past month, barring a fresh escalation in the region.</p>
            </article>
        </body></html>"#;

        let content = extract(html).expect("content");
        assert_eq!(
            content.title.as_deref(),
            Some("Oil slides as supply fears ease")
        );
        let text = content.text.unwrap();
        assert!(text.contains("Crude futures"));
        assert!(!text.contains("Stray paragraph"));
        assert!(!text.contains("commodities section"));
        assert_eq!(content.description.as_deref(), Some("Crude fell two percent."));
        assert_eq!(content.image.as_deref(), Some("https://example.com/oil.jpg"));
    }

    #[test]
    fn short_page_still_yields_candidate() {
        let html = "<html><head><title>T</title></head><body><p>Short.</p></body></html>";
        let content = extract(html).expect("content");
        assert_eq!(content.title.as_deref(), Some("T"));
        assert_eq!(content.text.as_deref(), Some("Short."));
        assert!(!content.is_valid());
    }

    #[test]
    fn titleless_page_is_no_content() {
        let html = "<html><body><div>no paragraphs or headings</div></body></html>";
        assert!(matches!(
            extract(html).unwrap_err(),
            ExtractError::NoContent(_)
        ));
    }
}
