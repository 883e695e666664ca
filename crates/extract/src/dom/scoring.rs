// ABOUTME: Readability-style scoring for locating the main content element of a page.
// ABOUTME: Scores paragraphs, propagates to ancestors, weights class/id hints, penalizes link-heavy nodes.

use ego_tree::NodeId;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::collections::HashMap;

static PARAGRAPH_TAGS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^(p|li|pre|blockquote)$").unwrap());

static NON_CANDIDATE_TAGS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(br|b|i|label|hr|area|base|basefont|input|img|link|meta|head|html|body|script|style|noscript|title)$")
        .unwrap()
});

static POSITIVE_HINTS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)article|body|content|entry|hentry|main|page|post|story|text|materia|noticia")
        .unwrap()
});

static NEGATIVE_HINTS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)advert|banner|breadcrumb|byline|combx|comment|footer|footnote|masthead|media|meta|nav|outbrain|promo|related|scroll|share|shopping|sidebar|sponsor|tags|tool|widget")
        .unwrap()
});

static UNLIKELY_CANDIDATES: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)ad-break|adbox|advert|agegate|comment|disqus|extra|foot|header|menu|nav|pager|pagination|popup|related|remark|rss|share|shoutbox|sidebar|sociable|sponsor|tools")
        .unwrap()
});

static LIKELY_CANDIDATES: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)article|body|column|content|entry|hentry|main|page|post|shadow").unwrap()
});

/// Per-node score storage keyed by ego-tree node id.
pub type NodeScores = HashMap<NodeId, f64>;

/// Multi-factor paragraph score: commas and 50-char length chunks count for,
/// very short runs count against.
pub fn score_paragraph(text: &str) -> f64 {
    let text = text.trim();
    if text.is_empty() {
        return 0.0;
    }

    let mut score = text.matches(',').count() as f64;
    score += (text.chars().count() / 50).min(3) as f64;
    if text.chars().count() < 25 {
        score -= 5.0;
    }
    score
}

/// Weight from class and id hint words: +25 for content-ish names, -25 for
/// chrome-ish names, applied to each attribute independently.
pub fn class_weight(element: &ElementRef) -> f64 {
    let mut weight = 0.0;
    for attr in ["class", "id"] {
        if let Some(value) = element.value().attr(attr) {
            if value.is_empty() {
                continue;
            }
            if POSITIVE_HINTS.is_match(value) {
                weight += 25.0;
            }
            if NEGATIVE_HINTS.is_match(value) {
                weight -= 25.0;
            }
        }
    }
    weight
}

/// Fraction of an element's text that sits inside anchor tags, 0.0..=1.0.
pub fn link_density(element: &ElementRef) -> f64 {
    let total: usize = element.text().map(|t| t.chars().count()).sum();
    if total == 0 {
        return 0.0;
    }
    let link_sel = match Selector::parse("a") {
        Ok(s) => s,
        Err(_) => return 0.0,
    };
    let linked: usize = element
        .select(&link_sel)
        .flat_map(|a| a.text())
        .map(|t| t.chars().count())
        .sum();
    linked as f64 / total as f64
}

/// Returns true for elements whose class/id marks them as page chrome
/// (navigation, comments, sharing) without any content-ish counter-signal.
pub fn is_unlikely_candidate(element: &ElementRef) -> bool {
    let class = element.value().attr("class").unwrap_or("");
    let id = element.value().attr("id").unwrap_or("");
    let combined = format!("{} {}", class, id);
    UNLIKELY_CANDIDATES.is_match(&combined) && !LIKELY_CANDIDATES.is_match(&combined)
}

/// Scores every paragraph-like element and propagates the score to its
/// parent (full) and grandparent (half), seeding ancestors with their
/// class/id weight on first touch.
pub fn score_content(doc: &Html) -> NodeScores {
    let mut scores = NodeScores::new();
    let all = match Selector::parse("*") {
        Ok(s) => s,
        Err(_) => return scores,
    };

    for el in doc.select(&all) {
        if !PARAGRAPH_TAGS.is_match(el.value().name()) {
            continue;
        }
        let text: String = el.text().collect();
        let base = score_paragraph(&text);
        if base <= 0.0 {
            continue;
        }

        let mut ancestors = el.ancestors().filter_map(ElementRef::wrap);
        if let Some(parent) = ancestors.next() {
            add_score(&mut scores, &parent, base);
            if let Some(grandparent) = ancestors.next() {
                add_score(&mut scores, &grandparent, base / 2.0);
            }
        }
    }

    scores
}

fn add_score(scores: &mut NodeScores, element: &ElementRef, delta: f64) {
    let entry = scores
        .entry(element.id())
        .or_insert_with(|| class_weight(element));
    *entry += delta;
}

/// Picks the best-scoring candidate element, discounting link-heavy nodes
/// and skipping unlikely candidates and structural tags. Returns None when
/// nothing scored above zero.
pub fn top_candidate<'a>(doc: &'a Html, scores: &NodeScores) -> Option<ElementRef<'a>> {
    let all = Selector::parse("*").ok()?;
    let mut best: Option<ElementRef<'a>> = None;
    let mut best_score = 0.0_f64;

    for el in doc.select(&all) {
        if NON_CANDIDATE_TAGS.is_match(el.value().name()) {
            continue;
        }
        if is_unlikely_candidate(&el) {
            continue;
        }
        let Some(&score) = scores.get(&el.id()) else {
            continue;
        };
        let effective = score * (1.0 - link_density(&el));
        if effective > best_score {
            best_score = effective;
            best = Some(el);
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paragraph_score_rewards_length_and_commas() {
        let short = score_paragraph("tiny");
        let long = score_paragraph(
            "A much longer paragraph, with several clauses, commas, and enough \
             text to earn multiple length chunks in the scoring pass.",
        );
        assert!(long > short);
        assert!(short < 0.0);
    }

    #[test]
    fn class_weight_signals() {
        let html = r#"<html><body>
            <div class="article-content" id="a">x</div>
            <div class="sidebar" id="b">x</div>
            <div class="plain" id="c">x</div>
        </body></html>"#;
        let doc = Html::parse_document(html);
        let sel = Selector::parse("div").unwrap();
        let divs: Vec<_> = doc.select(&sel).collect();
        assert!(class_weight(&divs[0]) > 0.0);
        assert!(class_weight(&divs[1]) < 0.0);
        assert_eq!(class_weight(&divs[2]), 0.0);
    }

    #[test]
    fn link_density_of_nav() {
        let html = r#"<html><body>
            <nav id="n"><a href="/a">One</a> <a href="/b">Two</a></nav>
            <div id="d">Plain text with a single <a href="/c">link</a> inside longer prose.</div>
        </body></html>"#;
        let doc = Html::parse_document(html);
        let nav = doc.select(&Selector::parse("nav").unwrap()).next().unwrap();
        let div = doc.select(&Selector::parse("div").unwrap()).next().unwrap();
        assert!(link_density(&nav) > 0.8);
        assert!(link_density(&div) < 0.3);
    }

    #[test]
    fn top_candidate_finds_article_body() {
        let html = r#"<html><body>
            <div class="sidebar"><p>Subscribe to our newsletter for more updates, offers, and deals.</p></div>
            <article class="story">
                <p>The central bank kept rates steady on Wednesday, a decision that
                surprised nobody, pleased markets, and confirmed the guidance given
                at the previous meeting of the committee.</p>
                <p>Economists said the statement, which repeated earlier language,
                points to cuts later in the year, provided inflation keeps slowing
                at the current pace.</p>
            </article>
        </body></html>"#;
        let doc = Html::parse_document(html);
        let scores = score_content(&doc);
        let candidate = top_candidate(&doc, &scores).expect("candidate");
        assert_eq!(candidate.value().name(), "article");
    }

    #[test]
    fn unlikely_candidate_detection() {
        let html = r#"<html><body>
            <div class="share-tools" id="s">x</div>
            <div class="article share" id="m">x</div>
        </body></html>"#;
        let doc = Html::parse_document(html);
        let sel = Selector::parse("div").unwrap();
        let divs: Vec<_> = doc.select(&sel).collect();
        assert!(is_unlikely_candidate(&divs[0]));
        // Content-ish counter-signal wins.
        assert!(!is_unlikely_candidate(&divs[1]));
    }

    #[test]
    fn empty_document_has_no_candidate() {
        let doc = Html::parse_document("<html><body></body></html>");
        let scores = score_content(&doc);
        assert!(top_candidate(&doc, &scores).is_none());
    }
}
