// ABOUTME: Reader-mode strategy: cleaned summary of the top candidate, title and text only.
// ABOUTME: Drops unlikely-candidate subtrees and chrome tags before collecting paragraph text.

use std::collections::HashSet;

use scraper::{Html, Selector};

use crate::content::ExtractedContent;
use crate::dom::scoring::{is_unlikely_candidate, score_content, top_candidate};
use crate::error::ExtractError;
use crate::meta::{first_text, normalize_whitespace};

const STRIP_TAGS: &[&str] = &["script", "style", "nav", "footer", "header", "aside"];

/// Minimum paragraph length kept in the summary.
const MIN_FRAGMENT_CHARS: usize = 20;

pub(crate) fn extract(html: &str) -> Result<ExtractedContent, ExtractError> {
    let doc = Html::parse_document(html);

    let scores = score_content(&doc);
    let candidate =
        top_candidate(&doc, &scores).ok_or(ExtractError::NoContent("no scoring candidate"))?;

    // Build the cleaned summary: mark chrome tags and unlikely-candidate
    // subtrees inside the candidate for removal.
    let mut skip_ids: HashSet<ego_tree::NodeId> = HashSet::new();
    for &tag in STRIP_TAGS {
        if let Ok(sel) = Selector::parse(tag) {
            for el in candidate.select(&sel) {
                skip_ids.insert(el.id());
            }
        }
    }
    if let Ok(all) = Selector::parse("*") {
        for el in candidate.select(&all) {
            if is_unlikely_candidate(&el) {
                skip_ids.insert(el.id());
            }
        }
    }

    let p_sel =
        Selector::parse("p").map_err(|_| ExtractError::NoContent("paragraph selector"))?;
    let mut parts = Vec::new();
    'outer: for p in candidate.select(&p_sel) {
        if skip_ids.contains(&p.id()) {
            continue;
        }
        for ancestor in p.ancestors() {
            if skip_ids.contains(&ancestor.id()) {
                continue 'outer;
            }
        }
        let text = normalize_whitespace(&p.text().collect::<Vec<_>>().join(" "));
        if text.chars().count() > MIN_FRAGMENT_CHARS {
            parts.push(text);
        }
    }

    if parts.is_empty() {
        return Err(ExtractError::NoContent("summary has no paragraph text"));
    }

    let title = first_text(&doc, &["title", "h1"])
        .ok_or(ExtractError::NoContent("page has no title"))?;

    Ok(ExtractedContent {
        title: Some(title),
        text: Some(parts.join("\n\n")),
        ..Default::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn produces_title_and_cleaned_text() {
        let html = r#"<html><head><title>Quarterly results beat estimates</title></head><body>
            <div class="post">
                <p>The company reported revenue well above consensus, driven by
                strong demand in its cloud division, and raised full-year guidance
                for the second consecutive quarter, sending shares higher.</p>
                <div class="share-tools"><p>Share this story on your favorite social network today.</p></div>
                <p>Margins expanded despite higher costs, which management tied to
                one-off logistics charges, and the buyback program was extended.</p>
            </div>
        </body></html>"#;

        let content = extract(html).expect("content");
        assert_eq!(
            content.title.as_deref(),
            Some("Quarterly results beat estimates")
        );
        let text = content.text.unwrap();
        assert!(text.contains("revenue well above consensus"));
        assert!(text.contains("Margins expanded"));
        assert!(!text.contains("social network"));
        // Reader mode carries no metadata.
        assert!(content.date.is_none());
        assert!(content.authors.is_empty());
    }

    #[test]
    fn page_without_paragraphs_is_no_content() {
        let html = "<html><head><title>T</title></head><body><div>bare</div></body></html>";
        assert!(matches!(
            extract(html).unwrap_err(),
            ExtractError::NoContent(_)
        ));
    }
}
