//! Cross-result comparison.
//!
//! Pure aggregates over several `AnalysisResult`s: which page leads each
//! metric, which keywords every page shares, and which recommendations recur.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, EnumIter, EnumString};

use crate::models::AnalysisResult;

/// A metric pages are ranked on. Higher is better for every metric.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    EnumString,
    AsRefStr,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum ComparisonMetric {
    /// Performance score
    Performance,
    /// Words in the body text
    WordCount,
    /// Readability score
    Readability,
    /// Share of images with alt text
    Images,
    /// Total classified links
    Links,
    /// H1 plus H2 count
    Headings,
}

impl ComparisonMetric {
    pub fn label(&self) -> &'static str {
        match self {
            ComparisonMetric::Performance => "Performance",
            ComparisonMetric::WordCount => "Word count",
            ComparisonMetric::Readability => "Readability",
            ComparisonMetric::Images => "Images with alt",
            ComparisonMetric::Links => "Links",
            ComparisonMetric::Headings => "Headings (H1 + H2)",
        }
    }

    /// The value of this metric for one result.
    pub fn value(&self, result: &AnalysisResult) -> f64 {
        match self {
            ComparisonMetric::Performance => f64::from(result.performance_score),
            ComparisonMetric::WordCount => result.word_count as f64,
            ComparisonMetric::Readability => f64::from(result.readability_score),
            ComparisonMetric::Images => result.images.alt_ratio(),
            ComparisonMetric::Links => result.links.total as f64,
            ComparisonMetric::Headings => {
                (result.headings.h1.len() + result.headings.h2.len()) as f64
            }
        }
    }
}

/// Index of the result with the highest value; the first one wins ties.
pub fn best_index(results: &[AnalysisResult], metric: ComparisonMetric) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (index, result) in results.iter().enumerate() {
        let value = metric.value(result);
        match best {
            Some((_, best_value)) if value <= best_value => {}
            _ => best = Some((index, value)),
        }
    }
    best.map(|(index, _)| index)
}

/// Keywords of the first result that appear in every other result.
///
/// Keeps the first result's order. Fewer than two results yields nothing.
pub fn common_keywords(results: &[AnalysisResult]) -> Vec<String> {
    let Some((first, rest)) = results.split_first() else {
        return Vec::new();
    };
    if rest.is_empty() {
        return Vec::new();
    }

    let others: Vec<HashSet<&str>> = rest
        .iter()
        .map(|r| r.keyword_density.iter().map(|k| k.keyword.as_str()).collect())
        .collect();

    first
        .keyword_density
        .iter()
        .map(|k| k.keyword.as_str())
        .filter(|keyword| others.iter().all(|set| set.contains(keyword)))
        .map(str::to_string)
        .collect()
}

/// A recommendation shared by several results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommonIssue {
    pub text: String,
    /// Number of results containing this recommendation
    pub count: usize,
}

/// Recommendation texts found in more than one result, in first-seen order.
///
/// A text repeated inside a single result counts once for that result.
pub fn common_issues(results: &[AnalysisResult]) -> Vec<CommonIssue> {
    if results.len() < 2 {
        return Vec::new();
    }

    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for result in results {
        let mut seen_here: HashSet<&str> = HashSet::new();
        for recommendation in &result.recommendations {
            let text = recommendation.text.as_str();
            if !seen_here.insert(text) {
                continue;
            }
            let count = counts.entry(text).or_insert(0);
            if *count == 0 {
                order.push(text);
            }
            *count += 1;
        }
    }

    order
        .into_iter()
        .filter_map(|text| {
            let count = counts.get(text).copied().unwrap_or(0);
            (count > 1).then(|| CommonIssue {
                text: text.to_string(),
                count,
            })
        })
        .collect()
}

/// Leader of one metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricLeader {
    pub metric: ComparisonMetric,
    /// Index into the compared results
    pub index: usize,
    pub url: String,
    pub value: f64,
}

/// Everything the comparison view shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonSummary {
    pub best_by_metric: Vec<MetricLeader>,
    pub common_keywords: Vec<String>,
    pub common_issues: Vec<CommonIssue>,
}

impl ComparisonSummary {
    /// Leader of `metric`, if any result was compared.
    pub fn leader(&self, metric: ComparisonMetric) -> Option<&MetricLeader> {
        self.best_by_metric.iter().find(|l| l.metric == metric)
    }
}

/// Computes every comparison aggregate.
pub fn compare(results: &[AnalysisResult]) -> ComparisonSummary {
    let best_by_metric = ComparisonMetric::iter()
        .filter_map(|metric| {
            best_index(results, metric).map(|index| MetricLeader {
                metric,
                index,
                url: results[index].url.clone(),
                value: metric.value(&results[index]),
            })
        })
        .collect();

    ComparisonSummary {
        best_by_metric,
        common_keywords: common_keywords(results),
        common_issues: common_issues(results),
    }
}
