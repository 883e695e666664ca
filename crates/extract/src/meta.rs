// ABOUTME: Shared meta-tag and element helpers used by the extraction strategies.
// ABOUTME: Prioritized selector fallbacks for title, description, image, date, authors, and language.

//! Meta-tag field extraction helpers.
//!
//! Key behaviors:
//! - Selectors are tried in order; first non-empty match wins.
//! - Meta selectors read the `content` attribute; other elements yield
//!   normalized inner text.
//! - Empty strings are treated as no match.

use scraper::{ElementRef, Html, Selector};

/// Collapses runs of whitespace into single spaces and trims.
pub fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalizes a language/locale value to its primary ISO 639-1 tag:
/// "pt_BR" -> "pt", "EN-GB" -> "en".
pub fn normalize_lang(value: &str) -> String {
    value
        .trim()
        .to_lowercase()
        .split(['-', '_'])
        .next()
        .unwrap_or("")
        .to_string()
}

/// Extracts the `content` attribute from the first matching meta tag.
pub fn meta_content(doc: &Html, selector: &str) -> Option<String> {
    let sel = Selector::parse(selector).ok()?;
    for el in doc.select(&sel) {
        if let Some(content) = el.value().attr("content") {
            let trimmed = content.trim();
            if !trimmed.is_empty() {
                return Some(trimmed.to_string());
            }
        }
    }
    None
}

/// Extracts an attribute value from the first matching element that has a
/// non-empty value for it.
pub fn first_attr(doc: &Html, selector: &str, attr: &str) -> Option<String> {
    let sel = Selector::parse(selector).ok()?;
    for el in doc.select(&sel) {
        if let Some(value) = el.value().attr(attr) {
            let trimmed = value.trim();
            if !trimmed.is_empty() {
                return Some(trimmed.to_string());
            }
        }
    }
    None
}

/// Extracts text from the first selector yielding a non-empty match.
///
/// Selectors targeting meta tags (starting with `meta[`) read the `content`
/// attribute instead of inner text.
pub fn first_text(doc: &Html, selectors: &[&str]) -> Option<String> {
    for &sel_str in selectors {
        if sel_str.starts_with("meta[") {
            if let Some(value) = meta_content(doc, sel_str) {
                return Some(value);
            }
            continue;
        }

        let sel = match Selector::parse(sel_str) {
            Ok(s) => s,
            Err(_) => continue,
        };

        for el in doc.select(&sel) {
            let text = normalize_whitespace(&el.text().collect::<Vec<_>>().join(" "));
            if !text.is_empty() {
                return Some(text);
            }
        }
    }
    None
}

/// Page title via `og:title`, then `<title>`, then the first `<h1>`.
pub fn page_title(doc: &Html) -> Option<String> {
    first_text(doc, &["meta[property='og:title']", "title", "h1"])
}

/// Page description via Open Graph then the plain description meta.
pub fn page_description(doc: &Html) -> Option<String> {
    meta_content(doc, "meta[property='og:description']")
        .or_else(|| meta_content(doc, "meta[name='description']"))
}

/// Lead image via Open Graph then Twitter card meta.
pub fn page_image(doc: &Html) -> Option<String> {
    meta_content(doc, "meta[property='og:image']")
        .or_else(|| meta_content(doc, "meta[name='twitter:image']"))
}

/// Raw publish-date string via article meta then `<time datetime>`.
pub fn page_date(doc: &Html) -> Option<String> {
    meta_content(doc, "meta[property='article:published_time']")
        .or_else(|| first_attr(doc, "time[datetime]", "datetime"))
}

/// Author names from common meta tags and byline elements, deduplicated,
/// in document order.
pub fn page_authors(doc: &Html) -> Vec<String> {
    let mut authors: Vec<String> = Vec::new();
    let selectors = [
        "meta[property='article:author']",
        "meta[name='author']",
        ".author",
    ];

    for sel_str in selectors {
        let sel = match Selector::parse(sel_str) {
            Ok(s) => s,
            Err(_) => continue,
        };
        for el in doc.select(&sel) {
            let value = if sel_str.starts_with("meta[") {
                el.value().attr("content").unwrap_or("").trim().to_string()
            } else {
                normalize_whitespace(&el.text().collect::<Vec<_>>().join(" "))
            };
            if !value.is_empty() && !authors.contains(&value) {
                authors.push(value);
            }
        }
    }

    authors
}

/// Document language from `<html lang>` or the `og:locale` meta, normalized
/// to a primary tag.
pub fn page_language(doc: &Html) -> Option<String> {
    first_attr(doc, "html", "lang")
        .or_else(|| meta_content(doc, "meta[property='og:locale']"))
        .map(|v| normalize_lang(&v))
        .filter(|v| !v.is_empty())
}

/// Site name from common publisher meta tags.
pub fn page_site_name(doc: &Html) -> Option<String> {
    meta_content(doc, "meta[property='og:site_name']")
        .or_else(|| meta_content(doc, "meta[name='application-name']"))
        .or_else(|| meta_content(doc, "meta[name='publisher']"))
}

/// Joins the text of an element's descendant `<p>` tags longer than
/// `min_len` characters with blank lines, skipping paragraphs inside any
/// subtree rooted at an element matching one of `strip` selectors.
pub fn paragraph_text(root: ElementRef, strip: &[&str], min_len: usize) -> Option<String> {
    let mut skip_ids = std::collections::HashSet::new();
    for &sel_str in strip {
        if let Ok(sel) = Selector::parse(sel_str) {
            for el in root.select(&sel) {
                skip_ids.insert(el.id());
            }
        }
    }

    let p_sel = Selector::parse("p").ok()?;
    let mut parts = Vec::new();
    'outer: for p in root.select(&p_sel) {
        // Skip paragraphs under a stripped subtree.
        if skip_ids.contains(&p.id()) {
            continue;
        }
        for ancestor in p.ancestors() {
            if skip_ids.contains(&ancestor.id()) {
                continue 'outer;
            }
        }

        let text = normalize_whitespace(&p.text().collect::<Vec<_>>().join(" "));
        if text.chars().count() > min_len {
            parts.push(text);
        }
    }

    if parts.is_empty() {
        None
    } else {
        Some(parts.join("\n\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
        <!DOCTYPE html>
        <html lang="pt-BR">
        <head>
            <title>Fallback Title</title>
            <meta property="og:title" content="OG Title">
            <meta property="og:description" content="A description">
            <meta property="og:image" content="https://example.com/og.jpg">
            <meta property="article:published_time" content="2026-01-15T10:00:00Z">
            <meta name="author" content="Jane Doe">
        </head>
        <body>
            <h1>Heading</h1>
            <span class="author">Jane Doe</span>
            <span class="author">John Smith</span>
        </body>
        </html>
    "#;

    #[test]
    fn title_prefers_og() {
        let doc = Html::parse_document(SAMPLE);
        assert_eq!(page_title(&doc), Some("OG Title".to_string()));
    }

    #[test]
    fn title_falls_back_to_title_tag() {
        let doc = Html::parse_document("<html><head><title>T</title></head><body></body></html>");
        assert_eq!(page_title(&doc), Some("T".to_string()));
    }

    #[test]
    fn title_falls_back_to_h1() {
        let doc = Html::parse_document("<html><body><h1>H1 Title</h1></body></html>");
        assert_eq!(page_title(&doc), Some("H1 Title".to_string()));
    }

    #[test]
    fn date_from_article_meta() {
        let doc = Html::parse_document(SAMPLE);
        assert_eq!(page_date(&doc), Some("2026-01-15T10:00:00Z".to_string()));
    }

    #[test]
    fn date_from_time_tag() {
        let doc = Html::parse_document(
            r#"<html><body><time datetime="2026-02-01">Feb 1</time></body></html>"#,
        );
        assert_eq!(page_date(&doc), Some("2026-02-01".to_string()));
    }

    #[test]
    fn authors_deduplicated() {
        let doc = Html::parse_document(SAMPLE);
        let authors = page_authors(&doc);
        assert_eq!(authors, vec!["Jane Doe".to_string(), "John Smith".to_string()]);
    }

    #[test]
    fn language_from_html_lang() {
        let doc = Html::parse_document(SAMPLE);
        assert_eq!(page_language(&doc), Some("pt".to_string()));
    }

    #[test]
    fn normalize_lang_variants() {
        assert_eq!(normalize_lang("en_US"), "en");
        assert_eq!(normalize_lang("PT-br"), "pt");
        assert_eq!(normalize_lang(""), "");
    }

    #[test]
    fn paragraph_text_filters_short_and_stripped() {
        let html = r#"<html><body><article>
            <p>This paragraph is comfortably longer than twenty characters.</p>
            <p>tiny</p>
            <nav><p>Navigation paragraph that is long enough to pass the filter.</p></nav>
        </article></body></html>"#;
        let doc = Html::parse_document(html);
        let sel = Selector::parse("article").unwrap();
        let article = doc.select(&sel).next().unwrap();

        let text = paragraph_text(article, &["nav"], 20).unwrap();
        assert!(text.contains("comfortably longer"));
        assert!(!text.contains("tiny"));
        assert!(!text.contains("Navigation"));
    }

    #[test]
    fn paragraph_text_none_when_empty() {
        let doc = Html::parse_document("<html><body><div><p>hi</p></div></body></html>");
        let sel = Selector::parse("div").unwrap();
        let div = doc.select(&sel).next().unwrap();
        assert!(paragraph_text(div, &[], 20).is_none());
    }
}
