// ABOUTME: Custom-selector strategy applying per-domain CSS selector profiles.
// ABOUTME: Short-circuits for unknown domains; concatenates body matches over 20 chars.

use scraper::{Html, Selector};
use url::Url;

use crate::content::ExtractedContent;
use crate::error::ExtractError;
use crate::meta::normalize_whitespace;
use crate::selectors::SelectorRegistry;

/// Body fragments at or below this length are selector noise, not prose.
const MIN_FRAGMENT_CHARS: usize = 20;

pub(crate) fn extract(
    registry: &SelectorRegistry,
    html: &str,
    url: &str,
) -> Result<ExtractedContent, ExtractError> {
    let parsed = Url::parse(url).map_err(|_| ExtractError::InvalidUrl(url.to_string()))?;
    let host = parsed
        .host_str()
        .ok_or_else(|| ExtractError::InvalidUrl(url.to_string()))?;

    let profile = registry
        .find(host)
        .ok_or_else(|| ExtractError::DomainNotConfigured(host.to_string()))?;

    let doc = Html::parse_document(html);

    let title = match profile.title.as_deref() {
        Some(css) => first_match_text(&doc, css, "title")?,
        None => None,
    };

    let text = match profile.text.as_deref() {
        Some(css) => {
            let sel = parse_selector(css, "text")?;
            let parts: Vec<String> = doc
                .select(&sel)
                .map(|el| normalize_whitespace(&el.text().collect::<Vec<_>>().join(" ")))
                .filter(|t| t.chars().count() > MIN_FRAGMENT_CHARS)
                .collect();
            if parts.is_empty() {
                None
            } else {
                Some(parts.join("\n\n"))
            }
        }
        None => None,
    };

    let date = match profile.date.as_deref() {
        Some(css) => first_match_value(&doc, css, "date")?,
        None => None,
    };

    let authors = match profile.author.as_deref() {
        Some(css) => {
            let sel = parse_selector(css, "author")?;
            doc.select(&sel)
                .map(|el| normalize_whitespace(&el.text().collect::<Vec<_>>().join(" ")))
                .filter(|a| !a.is_empty())
                .collect()
        }
        None => Vec::new(),
    };

    if title.is_none() || text.is_none() {
        return Err(ExtractError::NoContent("selectors matched no title or body"));
    }

    Ok(ExtractedContent {
        title,
        text,
        authors,
        date,
        source: Some(host.to_string()),
        ..Default::default()
    })
}

fn parse_selector(css: &str, field: &'static str) -> Result<Selector, ExtractError> {
    Selector::parse(css).map_err(|_| ExtractError::BadSelector {
        field,
        selector: css.to_string(),
    })
}

/// First non-empty inner text for a selector list.
fn first_match_text(
    doc: &Html,
    css: &str,
    field: &'static str,
) -> Result<Option<String>, ExtractError> {
    let sel = parse_selector(css, field)?;
    for el in doc.select(&sel) {
        let text = normalize_whitespace(&el.text().collect::<Vec<_>>().join(" "));
        if !text.is_empty() {
            return Ok(Some(text));
        }
    }
    Ok(None)
}

/// First non-empty value for a selector list, preferring machine-readable
/// attributes (`datetime`, meta `content`) over inner text.
fn first_match_value(
    doc: &Html,
    css: &str,
    field: &'static str,
) -> Result<Option<String>, ExtractError> {
    let sel = parse_selector(css, field)?;
    for el in doc.select(&sel) {
        for attr in ["datetime", "content"] {
            if let Some(value) = el.value().attr(attr) {
                let trimmed = value.trim();
                if !trimmed.is_empty() {
                    return Ok(Some(trimmed.to_string()));
                }
            }
        }
        let text = normalize_whitespace(&el.text().collect::<Vec<_>>().join(" "));
        if !text.is_empty() {
            return Ok(Some(text));
        }
    }
    Ok(None)
}
