// ABOUTME: Date normalization for publish dates found on news pages.
// ABOUTME: Canonicalizes known formats to YYYY-MM-DD; parses free-form datetimes for Article records.

//! Publish-date handling.
//!
//! `normalize` canonicalizes a raw date string to `YYYY-MM-DD`, covering ISO
//! forms, slash-delimited day-first forms, and the Portuguese long form
//! ("28 de janeiro de 2026", abbreviations included). Anything else yields
//! `None`; nothing here panics on bad input.
//!
//! `parse_datetime` is the permissive counterpart for `Article.date_published`,
//! delegating free-form strings to the `dateparser` crate.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

static ISO_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}").unwrap());

static PT_LONG_FORM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\d{1,2})\s+de\s+(\w+)\s+de\s+(\d{4})").unwrap());

/// Portuguese month names and abbreviations.
const MONTHS_PT: &[(&str, u32)] = &[
    ("janeiro", 1),
    ("jan", 1),
    ("fevereiro", 2),
    ("fev", 2),
    ("março", 3),
    ("mar", 3),
    ("abril", 4),
    ("abr", 4),
    ("maio", 5),
    ("mai", 5),
    ("junho", 6),
    ("jun", 6),
    ("julho", 7),
    ("jul", 7),
    ("agosto", 8),
    ("ago", 8),
    ("setembro", 9),
    ("set", 9),
    ("outubro", 10),
    ("out", 10),
    ("novembro", 11),
    ("nov", 11),
    ("dezembro", 12),
    ("dez", 12),
];

/// Datetime formats tried before date-only formats.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%SZ",
    "%Y-%m-%d %H:%M:%S",
    "%d/%m/%Y %H:%M",
];

/// Date-only formats.
const DATE_FORMATS: &[&str] = &["%d/%m/%Y", "%Y/%m/%d"];

/// Normalizes a date string to canonical `YYYY-MM-DD`.
///
/// Strings already starting with an ISO date are returned unchanged, so
/// normalization is idempotent. Returns `None` when no known format matches.
pub fn normalize(date_str: &str) -> Option<String> {
    let date_str = date_str.trim();
    if date_str.is_empty() {
        return None;
    }

    if ISO_PREFIX.is_match(date_str) {
        return Some(date_str.to_string());
    }

    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(date_str, fmt) {
            return Some(dt.format("%Y-%m-%d").to_string());
        }
    }

    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(date_str, fmt) {
            return Some(date.format("%Y-%m-%d").to_string());
        }
    }

    if let Some(caps) = PT_LONG_FORM.captures(date_str) {
        let day: u32 = caps[1].parse().ok()?;
        let month_name = caps[2].to_lowercase();
        let year: i32 = caps[3].parse().ok()?;

        let month = MONTHS_PT
            .iter()
            .find(|(name, _)| *name == month_name)
            .map(|(_, m)| *m)?;

        // Reject impossible dates like "99 de janeiro".
        let date = NaiveDate::from_ymd_opt(year, month, day)?;
        return Some(date.format("%Y-%m-%d").to_string());
    }

    debug!(date = date_str, "could not normalize date");
    None
}

/// Parses a free-form date string into a UTC datetime, for
/// `Article.date_published`. Returns `None` on anything unparseable.
pub fn parse_datetime(date_str: &str) -> Option<DateTime<Utc>> {
    let date_str = date_str.trim();
    if date_str.is_empty() {
        return None;
    }
    dateparser::parse(date_str).ok()
}
