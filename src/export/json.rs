//! JSON reports.
//!
//! Field names follow the camelCase serde names of the models, so a single
//! result serializes to the same shape the web API returned.

use anyhow::{Context, Result};
use serde_json::json;

use crate::comparison::ComparisonSummary;
use crate::models::AnalysisResult;

use super::FailedAnalysis;

/// Pretty-printed JSON of one result.
pub fn render_result_json(result: &AnalysisResult) -> Result<String> {
    serde_json::to_string_pretty(result).context("Failed to serialize analysis result")
}

/// Pretty-printed JSON of a comparison run:
/// `{"results": [...], "comparison": {...}, "failures": [...]}`.
///
/// `comparison` is `null` when fewer than two analyses succeeded.
pub fn render_comparison_json(
    results: &[AnalysisResult],
    summary: Option<&ComparisonSummary>,
    failures: &[FailedAnalysis],
) -> Result<String> {
    let document = json!({
        "results": results,
        "comparison": summary,
        "failures": failures,
    });
    serde_json::to_string_pretty(&document).context("Failed to serialize comparison report")
}
