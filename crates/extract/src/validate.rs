// ABOUTME: Content validation predicates for extracted titles and bodies.
// ABOUTME: Rejects truncated titles, thin bodies, and link-list pages masquerading as articles.

use crate::content::DEFAULT_MIN_TEXT_LENGTH;

/// Titles shorter than this are navigation labels, not headlines.
const MIN_TITLE_CHARS: usize = 10;

/// Titles longer than this are almost certainly extraction errors.
const MAX_TITLE_CHARS: usize = 500;

/// Validates an extracted title: within length bounds and containing at
/// least one alphabetic character.
pub fn validate_title(title: &str) -> bool {
    let len = title.trim().chars().count();
    if len < MIN_TITLE_CHARS || len > MAX_TITLE_CHARS {
        return false;
    }
    title.chars().any(|c| c.is_alphabetic())
}

/// Validates body text with the default minimum length.
pub fn validate_text(text: &str) -> bool {
    validate_text_with(text, DEFAULT_MIN_TEXT_LENGTH)
}

/// Validates body text: at least `min_length` characters, at least two
/// paragraphs longer than 50 characters, and at least 50 words.
pub fn validate_text_with(text: &str, min_length: usize) -> bool {
    if text.trim().chars().count() < min_length {
        return false;
    }

    let substantial_paragraphs = text
        .split("\n\n")
        .filter(|p| p.trim().chars().count() > 50)
        .count();
    if substantial_paragraphs < 2 {
        return false;
    }

    text.split_whitespace().count() >= 50
}

/// Checks whether text reads like article prose rather than an error page or
/// navigation: long enough, sentence punctuation, and not mostly bare links.
pub fn is_article_content(text: &str) -> bool {
    if text.trim().chars().count() < 200 {
        return false;
    }

    if text.matches('.').count() < 3 {
        return false;
    }

    let lines: Vec<&str> = text.split('\n').collect();
    if !lines.is_empty() {
        let link_lines = lines
            .iter()
            .filter(|line| line.contains("http") || line.contains("www."))
            .count();
        if link_lines as f64 / lines.len() as f64 > 0.5 {
            return false;
        }
    }

    true
}
