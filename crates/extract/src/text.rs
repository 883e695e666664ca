// ABOUTME: Text cleaning for extracted article bodies.
// ABOUTME: Collapses whitespace artifacts, drops UI debris lines, strips boilerplate patterns.

//! Body-text cleanup.
//!
//! Key behaviors:
//! - `clean` is idempotent: cleaning already-clean text is a no-op.
//! - Lines shorter than 4 characters are dropped unless blank; single
//!   characters left behind by extraction are almost never prose.
//! - Boilerplate removal is a fixed case-insensitive pattern list
//!   (copyright notices, share prompts, newsletter calls-to-action, in
//!   Portuguese and generic forms) and always re-runs `clean`.

use once_cell::sync::Lazy;
use regex::Regex;

static MULTI_NEWLINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());
static MULTI_SPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r" {2,}").unwrap());

static BOILERPLATE: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?is)todos os direitos reservados.*",
        r"(?is)© \d{4}.*",
        r"(?is)copyright.*",
        r"(?is)compartilhe:?\s*(facebook|twitter|whatsapp|linkedin).*",
        r"(?is)siga-nos.*",
        r"(?is)assine nossa newsletter.*",
        r"(?is)receba notícias.*",
        r"(?is)share (this|on)\s*(facebook|twitter|whatsapp|linkedin)?.*",
        r"(?is)sign up for our newsletter.*",
    ]
    .into_iter()
    .map(|p| Regex::new(p).expect("boilerplate pattern"))
    .collect()
});

/// Cleans common extraction artifacts from body text.
pub fn clean(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let text = text.replace('\t', " ");
    let text = MULTI_SPACE.replace_all(&text, " ");

    let lines: Vec<&str> = text
        .split('\n')
        .map(str::trim)
        .filter(|line| line.is_empty() || line.chars().count() > 3)
        .collect();
    let text = lines.join("\n");

    let text = MULTI_NEWLINE.replace_all(&text, "\n\n");
    text.trim().to_string()
}

/// Strips boilerplate (copyright, share prompts, newsletter CTAs) and
/// re-cleans the result.
pub fn remove_boilerplate(text: &str) -> String {
    let mut text = text.to_string();
    for pattern in BOILERPLATE.iter() {
        text = pattern.replace_all(&text, "").into_owned();
    }
    clean(&text)
}

/// Splits cleaned text into paragraphs of at least `min_length` characters.
pub fn paragraphs(text: &str, min_length: usize) -> Vec<String> {
    text.split("\n\n")
        .map(str::trim)
        .filter(|p| p.chars().count() >= min_length)
        .map(str::to_string)
        .collect()
}
