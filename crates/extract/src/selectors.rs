// ABOUTME: Per-domain CSS selector profiles and the registry that resolves them.
// ABOUTME: Profiles match by domain substring; builtin profiles are embedded JSON loaded at startup.

//! Site-specific selector profiles.
//!
//! A profile names the CSS selectors for each article field on one known
//! site. Lookup matches a profile's domain key as a substring of the request
//! URL's host, so `infomoney.com.br` covers `www.infomoney.com.br` too.

use serde::{Deserialize, Serialize};

/// Embedded JSON with selector profiles for the known financial-news sites.
const BUILTIN_SELECTORS_JSON: &str = include_str!("../data/site_selectors.json");

/// CSS selectors for extracting article fields from one site.
///
/// Selector strings may be comma-separated lists; the field extractor takes
/// the first non-empty match for singular fields and every match for body
/// text.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SiteSelectors {
    /// Domain key, matched as a substring of the page host.
    pub domain: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
}

/// Registry of selector profiles, resolved by domain substring.
#[derive(Debug, Clone, Default)]
pub struct SelectorRegistry {
    profiles: Vec<SiteSelectors>,
}

impl SelectorRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a profile. Later registrations are consulted after earlier
    /// ones, so more specific keys should be registered first.
    pub fn register(&mut self, profile: SiteSelectors) {
        self.profiles.push(profile);
    }

    /// Finds the first profile whose domain key is contained in `host`.
    pub fn find(&self, host: &str) -> Option<&SiteSelectors> {
        self.profiles.iter().find(|p| host.contains(&p.domain))
    }

    /// Returns the number of registered profiles.
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Returns true if no profiles are registered.
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

/// Loads the builtin selector registry from embedded JSON.
///
/// # Panics
///
/// Panics if the embedded JSON is malformed; the data ships with the crate
/// and is covered by tests.
pub fn load_builtin_selectors() -> SelectorRegistry {
    let profiles: Vec<SiteSelectors> =
        serde_json::from_str(BUILTIN_SELECTORS_JSON).expect("failed to parse builtin selectors");

    let mut registry = SelectorRegistry::new();
    for profile in profiles {
        registry.register(profile);
    }
    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_registry_loads() {
        let registry = load_builtin_selectors();
        assert!(!registry.is_empty());
        assert_eq!(registry.len(), 5);
    }

    #[test]
    fn find_matches_by_substring() {
        let registry = load_builtin_selectors();
        let profile = registry.find("www.infomoney.com.br").expect("profile");
        assert_eq!(profile.domain, "infomoney.com.br");
        assert!(profile.title.as_deref().unwrap().contains("h1"));
    }

    #[test]
    fn find_unknown_host_is_none() {
        let registry = load_builtin_selectors();
        assert!(registry.find("news.ycombinator.com").is_none());
    }

    #[test]
    fn register_custom_profile() {
        let mut registry = SelectorRegistry::new();
        assert!(registry.is_empty());
        registry.register(SiteSelectors {
            domain: "example.com".to_string(),
            title: Some("h1".to_string()),
            text: Some("article p".to_string()),
            ..Default::default()
        });
        assert_eq!(registry.len(), 1);
        assert!(registry.find("example.com").is_some());
    }
}
