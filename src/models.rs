//! Result records produced by an analysis.
//!
//! Field names serialize in camelCase so JSON reports keep the shape consumers
//! of the original web API expect.

use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

/// Qualitative impact of a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One finding of the recommendation engine.
///
/// Has no identity beyond its text; position in the list is generation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeoRecommendation {
    pub text: String,
    pub severity: Severity,
}

impl SeoRecommendation {
    pub fn new(text: impl Into<String>, severity: Severity) -> Self {
        Self {
            text: text.into(),
            severity,
        }
    }
}

/// Counts recommendations of the given severity.
pub fn count_by_severity(recommendations: &[SeoRecommendation], severity: Severity) -> usize {
    recommendations
        .iter()
        .filter(|r| r.severity == severity)
        .count()
}

/// A named Lighthouse sub-metric, score in `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceMetric {
    pub name: String,
    pub score: f64,
}

/// What the performance-scoring collaborator returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceReport {
    /// Overall score, 0-100
    pub score: u8,
    /// Sub-metrics in a fixed order
    pub metrics: Vec<PerformanceMetric>,
}

/// Heading texts per level, document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingStructure {
    pub h1: Vec<String>,
    pub h2: Vec<String>,
    pub h3: Vec<String>,
    pub h4: Vec<String>,
    pub h5: Vec<String>,
    pub h6: Vec<String>,
}

/// A single `<img>` element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageInfo {
    /// `src` attribute, empty when absent
    pub src: String,
    /// `alt` attribute, `None` when absent
    pub alt: Option<String>,
    /// `alt` present and non-empty
    pub has_alt: bool,
}

/// Image alt-text summary. `total == with_alt + without_alt` always holds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageAnalysis {
    pub total: usize,
    pub with_alt: usize,
    pub without_alt: usize,
    pub images: Vec<ImageInfo>,
}

impl ImageAnalysis {
    /// Share of images carrying alt text; a page without images counts as 0.
    pub fn alt_ratio(&self) -> f64 {
        self.with_alt as f64 / self.total.max(1) as f64
    }
}

/// Link classification summary.
///
/// Broken links are hrefs that neither resolve to a host nor look relative,
/// counted separately from internal and external ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkAnalysis {
    pub total: usize,
    pub internal: usize,
    pub external: usize,
    pub broken: usize,
    pub internal_links: Vec<String>,
    pub external_links: Vec<String>,
    pub broken_links: Vec<String>,
}

/// One entry of the keyword density ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordDensity {
    pub keyword: String,
    pub count: usize,
    /// Percent of all tokens, rounded to two decimals
    pub density: f64,
}

/// Shape of the analyzed URL itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlStructure {
    pub is_clean: bool,
    pub has_dynamic_parameters: bool,
    /// Length in characters
    pub length: usize,
}

/// A JSON-LD block found on the page, or a "not found" marker for a commonly
/// recommended schema type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredData {
    #[serde(rename = "type")]
    pub schema_type: String,
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<Vec<String>>,
}

/// Social and crawler meta tags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaTags {
    pub robots: Option<String>,
    pub viewport: Option<String>,
    pub og_title: Option<String>,
    pub og_description: Option<String>,
    pub og_image: Option<String>,
    pub twitter_card: Option<String>,
}

/// Everything known about one analyzed URL.
///
/// Built once by `Analyzer::analyze` and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub url: String,
    pub title: String,
    pub meta_description: String,
    pub canonical: Option<String>,
    pub h1_count: usize,
    pub h1_tags: Vec<String>,
    pub images_count: usize,
    pub word_count: usize,
    pub performance_score: u8,
    pub performance_metrics: Vec<PerformanceMetric>,
    pub content_score: u8,
    pub readability_score: u8,
    pub keyword_density: Vec<KeywordDensity>,
    pub headings: HeadingStructure,
    pub images: ImageAnalysis,
    pub links: LinkAnalysis,
    pub url_structure: UrlStructure,
    pub structured_data: Vec<StructuredData>,
    pub meta_tags: MetaTags,
    pub recommendations: Vec<SeoRecommendation>,
}
