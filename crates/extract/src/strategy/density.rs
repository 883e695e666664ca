// ABOUTME: Primary robust strategy: readability-style paragraph-density scoring.
// ABOUTME: Picks the top-scoring candidate element and fills full metadata from meta tags.

use scraper::Html;

use crate::content::ExtractedContent;
use crate::dom::scoring::{score_content, top_candidate};
use crate::error::ExtractError;
use crate::meta;

/// Chrome subtrees excluded from the candidate's paragraph text.
const STRIP_TAGS: &[&str] = &[
    "script", "style", "nav", "footer", "header", "aside", "form", "figure",
];

pub(crate) fn extract(html: &str) -> Result<ExtractedContent, ExtractError> {
    let doc = Html::parse_document(html);

    let scores = score_content(&doc);
    let candidate =
        top_candidate(&doc, &scores).ok_or(ExtractError::NoContent("no scoring candidate"))?;

    let text = meta::paragraph_text(candidate, STRIP_TAGS, 20)
        .ok_or(ExtractError::NoContent("candidate has no paragraph text"))?;

    let tags = meta::meta_content(&doc, "meta[name='keywords']")
        .map(|keywords| {
            keywords
                .split(',')
                .map(|k| k.trim().to_string())
                .filter(|k| !k.is_empty())
                .collect()
        })
        .unwrap_or_default();

    Ok(ExtractedContent {
        title: meta::page_title(&doc),
        text: Some(text),
        authors: meta::page_authors(&doc),
        date: meta::page_date(&doc),
        description: meta::page_description(&doc),
        image: meta::page_image(&doc),
        language: meta::page_language(&doc),
        tags,
        source: meta::page_site_name(&doc),
        ..Default::default()
    })
}
