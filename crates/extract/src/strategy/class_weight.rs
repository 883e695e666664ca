// ABOUTME: Secondary heuristic strategy ranking containers purely by class/id signal words.
// ABOUTME: No paragraph-score propagation; the heaviest content-ish container with real text wins.

use scraper::{Html, Selector};

use crate::content::ExtractedContent;
use crate::dom::scoring::class_weight;
use crate::error::ExtractError;
use crate::meta;

/// Containers considered as article-body candidates.
const CONTAINER_SELECTOR: &str = "article, main, div, section";

/// Chrome subtrees excluded from the winning container's text.
const STRIP_TAGS: &[&str] = &["script", "style", "nav", "footer", "header", "aside"];

pub(crate) fn extract(html: &str) -> Result<ExtractedContent, ExtractError> {
    let doc = Html::parse_document(html);

    let sel = Selector::parse(CONTAINER_SELECTOR)
        .map_err(|_| ExtractError::NoContent("container selector failed to parse"))?;

    // Rank containers by hint weight plus a mild text-mass bonus; semantic
    // article/main tags get a head start even without hint classes.
    let mut best: Option<(f64, scraper::ElementRef)> = None;
    for el in doc.select(&sel) {
        let tag = el.value().name();
        let tag_bonus = if tag == "article" || tag == "main" { 25.0 } else { 0.0 };
        let weight = class_weight(&el) + tag_bonus;
        if weight <= 0.0 {
            continue;
        }
        let text_mass: usize = el.text().map(|t| t.chars().count()).sum();
        let score = weight + (text_mass / 100) as f64;
        if best.as_ref().map_or(true, |(s, _)| score > *s) {
            best = Some((score, el));
        }
    }

    let (_, container) = best.ok_or(ExtractError::NoContent("no weighted container"))?;

    let text = meta::paragraph_text(container, STRIP_TAGS, 20)
        .ok_or(ExtractError::NoContent("container has no paragraph text"))?;

    Ok(ExtractedContent {
        title: meta::first_text(&doc, &["h1", "meta[property='og:title']", "title"]),
        text: Some(text),
        authors: meta::page_authors(&doc),
        date: meta::page_date(&doc),
        ..Default::default()
    })
}
