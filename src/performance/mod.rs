//! Page performance scoring.
//!
//! The analyzer only sees the `PerformanceScorer` trait; `PageSpeedClient`
//! is the production implementation backed by Google PageSpeed Insights.
//! Every failure is recoverable: callers substitute `fallback_report()`.

mod pagespeed;

pub use pagespeed::PageSpeedClient;

use async_trait::async_trait;

use crate::error_handling::PerformanceError;
use crate::models::{PerformanceMetric, PerformanceReport};

/// Lighthouse audits reported as sub-metrics: (audit id, display name).
pub const REPORTED_AUDITS: &[(&str, &str)] = &[
    ("first-contentful-paint", "First Contentful Paint"),
    ("largest-contentful-paint", "Largest Contentful Paint"),
    ("total-blocking-time", "Total Blocking Time"),
    ("cumulative-layout-shift", "Cumulative Layout Shift"),
    ("speed-index", "Speed Index"),
];

/// Source of a page performance score.
#[async_trait]
pub trait PerformanceScorer: Send + Sync {
    /// Scores the page at `url` (already normalized).
    async fn score(&self, url: &str) -> Result<PerformanceReport, PerformanceError>;
}

/// Score 0 with every reported metric at 0.
pub fn fallback_report() -> PerformanceReport {
    PerformanceReport {
        score: 0,
        metrics: REPORTED_AUDITS
            .iter()
            .map(|(_, name)| PerformanceMetric {
                name: (*name).to_string(),
                score: 0.0,
            })
            .collect(),
    }
}

/// Scorer used when performance scoring is switched off.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledScorer;

#[async_trait]
impl PerformanceScorer for DisabledScorer {
    async fn score(&self, _url: &str) -> Result<PerformanceReport, PerformanceError> {
        Err(PerformanceError::Disabled)
    }
}
