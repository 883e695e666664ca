// ABOUTME: The enumerated set of extraction strategies behind one capability surface.
// ABOUTME: Each variant exposes name(), is_available(), and extract() returning content or an explicit failure.

//! Extraction strategies.
//!
//! A fixed, enumerated set of strategies rather than an open trait hierarchy:
//! the pipeline owns an ordered list of `Strategy` values and dispatches on
//! the variant. Failures are explicit [`ExtractError`] values; a strategy
//! never panics past its boundary.
//!
//! Default priority order (most specific first):
//! 1. `custom_selector` - per-domain selector profiles, cheap short-circuit
//!    when the domain is unknown.
//! 2. `density` - readability-style paragraph scoring, full metadata.
//! 3. `class_weight` - container ranking purely by class/id signal words.
//! 4. `reader` - cleaned top-candidate summary, title and text only.
//! 5. `structural` - generic meta-tag and container fallback.

mod class_weight;
mod custom;
mod density;
mod reader;
mod structural;

use crate::content::ExtractedContent;
use crate::error::ExtractError;
use crate::selectors::{load_builtin_selectors, SelectorRegistry};

/// One extraction strategy, selected and ordered by the pipeline.
#[derive(Debug, Clone)]
pub enum Strategy {
    /// Per-domain CSS selector profiles.
    CustomSelector(SelectorRegistry),
    /// Readability-style paragraph-density scoring.
    Density,
    /// Class/id signal-word container ranking.
    ClassWeight,
    /// Reader-mode cleaned summary.
    Reader,
    /// Generic structural fallback with meta-tag metadata.
    Structural,
}

impl Strategy {
    /// Stable identifier recorded in `ExtractedContent::extractor`.
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::CustomSelector(_) => "custom_selector",
            Strategy::Density => "density",
            Strategy::ClassWeight => "class_weight",
            Strategy::Reader => "reader",
            Strategy::Structural => "structural",
        }
    }

    /// Whether the strategy can do anything at all. The selector strategy is
    /// unavailable with an empty registry; the compiled-in strategies are
    /// always available.
    pub fn is_available(&self) -> bool {
        match self {
            Strategy::CustomSelector(registry) => !registry.is_empty(),
            _ => true,
        }
    }

    /// Runs the strategy against one page.
    ///
    /// Never panics: malformed documents, unknown domains, and misconfigured
    /// selectors all surface as `Err` values the pipeline can log and skip.
    pub fn extract(&self, html: &str, url: &str) -> Result<ExtractedContent, ExtractError> {
        let mut content = match self {
            Strategy::CustomSelector(registry) => custom::extract(registry, html, url)?,
            Strategy::Density => density::extract(html)?,
            Strategy::ClassWeight => class_weight::extract(html)?,
            Strategy::Reader => reader::extract(html)?,
            Strategy::Structural => structural::extract(html)?,
        };
        content.extractor = self.name().to_string();
        content.html_length = html.chars().count();
        content.text_length = content.text.as_deref().map_or(0, |t| t.chars().count());
        Ok(content)
    }

    /// The default strategy set, in priority order, with builtin selector
    /// profiles for the known sites.
    pub fn default_set() -> Vec<Strategy> {
        vec![
            Strategy::CustomSelector(load_builtin_selectors()),
            Strategy::Density,
            Strategy::ClassWeight,
            Strategy::Reader,
            Strategy::Structural,
        ]
    }
}
