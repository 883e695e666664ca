// ABOUTME: ScraperMetrics record per collection attempt and the explicit cross-source collector.
// ABOUTME: Metrics are immutable once created and appended to per-source history plus an optional central collector.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One record per collection attempt. Always produced, success or not.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScraperMetrics {
    pub source_id: String,
    pub category: Option<String>,
    pub requested: usize,
    pub collected: usize,
    /// collected / requested, in 0.0..=1.0; 0.0 when nothing was requested.
    pub success_rate: f64,
    pub elapsed_seconds: f64,
    pub timestamp: DateTime<Utc>,
    pub errors: Vec<String>,
    pub paywall_detected: bool,
    /// Number of attempts that failed with an error.
    pub retry_count: u32,
}

impl ScraperMetrics {
    /// Flat-map export for JSON serialization downstream.
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "source_id": self.source_id,
            "category": self.category,
            "requested": self.requested,
            "collected": self.collected,
            "success_rate": self.success_rate,
            "elapsed_seconds": self.elapsed_seconds,
            "timestamp": self.timestamp.to_rfc3339(),
            "errors": self.errors,
            "paywall_detected": self.paywall_detected,
            "retry_count": self.retry_count,
        })
    }
}

/// Aggregate statistics over every recorded run.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CollectorStatistics {
    pub total_runs: usize,
    pub avg_success_rate: f64,
    pub avg_elapsed_seconds: f64,
    pub total_errors: usize,
    pub paywall_detections: usize,
    pub by_source: BTreeMap<String, SourceStatistics>,
}

/// Per-source rollup inside [`CollectorStatistics`].
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SourceStatistics {
    pub runs: usize,
    pub avg_success_rate: f64,
    pub total_collected: usize,
    pub total_requested: usize,
}

/// Central metrics aggregation across sources.
///
/// An explicit object passed by reference to whoever needs cross-source
/// aggregation - created once per collection session, not a process global.
#[derive(Debug, Clone, Default)]
pub struct MetricsCollector {
    metrics: Vec<ScraperMetrics>,
}

impl MetricsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one run's metrics.
    pub fn add(&mut self, metrics: ScraperMetrics) {
        self.metrics.push(metrics);
    }

    /// All recorded metrics, in insertion order.
    pub fn all(&self) -> &[ScraperMetrics] {
        &self.metrics
    }

    /// Metrics for one source.
    pub fn by_source(&self, source_id: &str) -> Vec<&ScraperMetrics> {
        self.metrics
            .iter()
            .filter(|m| m.source_id == source_id)
            .collect()
    }

    /// Aggregate statistics; zeroed when nothing was recorded.
    pub fn statistics(&self) -> CollectorStatistics {
        let total = self.metrics.len();
        if total == 0 {
            return CollectorStatistics::default();
        }

        let mut stats = CollectorStatistics {
            total_runs: total,
            avg_success_rate: self.metrics.iter().map(|m| m.success_rate).sum::<f64>()
                / total as f64,
            avg_elapsed_seconds: self.metrics.iter().map(|m| m.elapsed_seconds).sum::<f64>()
                / total as f64,
            total_errors: self.metrics.iter().map(|m| m.errors.len()).sum(),
            paywall_detections: self.metrics.iter().filter(|m| m.paywall_detected).count(),
            by_source: BTreeMap::new(),
        };

        for metrics in &self.metrics {
            let entry = stats
                .by_source
                .entry(metrics.source_id.clone())
                .or_default();
            entry.runs += 1;
            entry.total_collected += metrics.collected;
            entry.total_requested += metrics.requested;
            entry.avg_success_rate += metrics.success_rate;
        }
        for entry in stats.by_source.values_mut() {
            entry.avg_success_rate /= entry.runs as f64;
        }

        stats
    }

    /// Drops all recorded metrics.
    pub fn clear(&mut self) {
        self.metrics.clear();
    }

    /// Serializes every record as a JSON array of flat maps.
    pub fn export_json(&self) -> String {
        let values: Vec<serde_json::Value> =
            self.metrics.iter().map(|m| m.to_json_value()).collect();
        serde_json::to_string_pretty(&values).unwrap_or_else(|_| "[]".to_string())
    }
}
