// ABOUTME: Source metadata, the external URL-collector seam, and the enumerated source registry.
// ABOUTME: Registry maps source id to spec + constructor closure, built at startup; no reflection.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Embedded catalog of the covered financial-news sources.
const BUILTIN_SOURCES_JSON: &str = include_str!("../data/sources.json");

fn default_min_success_rate() -> f64 {
    0.5
}

fn default_requests_per_second() -> f64 {
    0.5
}

/// Static metadata and policy knobs for one news source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceSpec {
    pub id: String,
    pub name: String,
    pub country: String,
    /// Primary publication language, ISO 639-1.
    pub language: String,
    /// True for sources whose shortfalls should raise the paywall error.
    pub paywall: bool,
    #[serde(default)]
    pub categories: Vec<String>,
    /// Minimum acceptable collected/requested ratio for a run.
    #[serde(default = "default_min_success_rate")]
    pub min_success_rate: f64,
    /// Politeness limit applied to this source's rate-limiter key.
    #[serde(default = "default_requests_per_second")]
    pub requests_per_second: f64,
}

/// One collection request against a source.
#[derive(Debug, Clone, Default)]
pub struct CollectRequest {
    pub category: Option<String>,
    pub limit: usize,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}

/// The seam to site-specific URL discovery, implemented outside this core.
///
/// Implementations return the article URLs found for the request; an empty
/// list is a soft failure the wrapper will retry, an `Err` is a transient
/// failure it will back off from.
pub trait UrlCollector {
    fn collect_urls(&mut self, request: &CollectRequest) -> anyhow::Result<Vec<String>>;
}

impl<F> UrlCollector for F
where
    F: FnMut(&CollectRequest) -> anyhow::Result<Vec<String>>,
{
    fn collect_urls(&mut self, request: &CollectRequest) -> anyhow::Result<Vec<String>> {
        self(request)
    }
}

type CollectorBuilder = Box<dyn Fn() -> Box<dyn UrlCollector> + Send + Sync>;

/// Explicit registry from source id to spec plus collector constructor.
///
/// Built once at startup by the embedding application; looking up an id
/// yields the spec and a fresh collector instance. Unknown ids are simply
/// absent - there is no dynamic resolution.
#[derive(Default)]
pub struct SourceRegistry {
    entries: BTreeMap<String, (SourceSpec, CollectorBuilder)>,
}

impl SourceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a source under its spec id, replacing any previous entry.
    pub fn register<B>(&mut self, spec: SourceSpec, builder: B)
    where
        B: Fn() -> Box<dyn UrlCollector> + Send + Sync + 'static,
    {
        self.entries
            .insert(spec.id.clone(), (spec, Box::new(builder)));
    }

    /// Spec lookup without constructing a collector.
    pub fn spec(&self, id: &str) -> Option<&SourceSpec> {
        self.entries.get(id).map(|(spec, _)| spec)
    }

    /// Builds a fresh collector for the source, with its spec.
    pub fn build(&self, id: &str) -> Option<(SourceSpec, Box<dyn UrlCollector>)> {
        self.entries
            .get(id)
            .map(|(spec, builder)| (spec.clone(), builder()))
    }

    /// Registered ids, sorted.
    pub fn ids(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Debug for SourceRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceRegistry")
            .field("ids", &self.ids())
            .finish()
    }
}

/// Loads the builtin source catalog from embedded JSON.
///
/// # Panics
///
/// Panics if the embedded JSON is malformed; the data ships with the crate
/// and is covered by tests.
pub fn load_builtin_sources() -> Vec<SourceSpec> {
    serde_json::from_str(BUILTIN_SOURCES_JSON).expect("failed to parse builtin sources")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_loads() {
        let sources = load_builtin_sources();
        assert_eq!(sources.len(), 19);

        let valor = sources.iter().find(|s| s.id == "valor").expect("valor");
        assert!(valor.paywall);
        assert_eq!(valor.language, "pt");
        // Defaults apply to fields the catalog omits.
        assert_eq!(valor.min_success_rate, 0.5);
        assert_eq!(valor.requests_per_second, 0.5);
    }

    #[test]
    fn registry_builds_fresh_collectors() {
        let mut registry = SourceRegistry::new();
        let spec = load_builtin_sources()
            .into_iter()
            .find(|s| s.id == "reuters")
            .unwrap();
        registry.register(spec, || {
            Box::new(|_req: &CollectRequest| -> anyhow::Result<Vec<String>> {
                Ok(vec!["https://example.com/a".to_string()])
            })
        });

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.ids(), vec!["reuters"]);
        assert!(registry.spec("reuters").is_some());
        assert!(registry.spec("unknown").is_none());

        let (spec, mut collector) = registry.build("reuters").expect("entry");
        assert_eq!(spec.id, "reuters");
        let urls = collector.collect_urls(&CollectRequest::default()).unwrap();
        assert_eq!(urls.len(), 1);
    }

    #[test]
    fn closures_implement_the_seam() {
        let mut count = 0;
        let mut collector = |_req: &CollectRequest| -> anyhow::Result<Vec<String>> {
            count += 1;
            Ok(Vec::new())
        };
        let urls = collector.collect_urls(&CollectRequest::default()).unwrap();
        assert!(urls.is_empty());
    }
}
