//! seo_audit library: on-page SEO analysis of web pages
//!
//! This library fetches a page, extracts its on-page SEO signals (title, meta
//! tags, headings, images, links, structured data), scores readability and
//! keyword density, merges a PageSpeed performance score, and produces an
//! ordered list of severity-tagged recommendations. Several results can be
//! compared side by side.
//!
//! # Example
//!
//! ```no_run
//! use seo_audit::{Analyzer, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     skip_performance: true,
//!     ..Default::default()
//! };
//! let analyzer = Analyzer::from_config(&config)?;
//! let result = analyzer.analyze("example.com").await?;
//! println!("{}: readability {}", result.url, result.readability_score);
//! for recommendation in &result.recommendations {
//!     println!("[{}] {}", recommendation.severity, recommendation.text);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

pub mod analysis;
pub mod analyzer;
mod app;
pub mod comparison;
pub mod config;
pub mod error_handling;
pub mod export;
pub mod fetch;
pub mod initialization;
pub mod models;
pub mod parse;
pub mod performance;
pub mod recommendations;
pub mod scoring;
mod utils;

// Re-export public API
pub use analyzer::{AnalysisOutcome, Analyzer};
pub use app::validate_and_normalize_url;
pub use comparison::{compare, ComparisonMetric, ComparisonSummary};
pub use config::{Config, LogFormat, LogLevel, OutputFormat};
pub use error_handling::{AnalysisError, InitializationError, PerformanceError};
pub use models::{AnalysisResult, SeoRecommendation, Severity};
pub use run::{run_analyze, run_compare, RunReport};

// Internal run module (drives one CLI invocation end to end)
mod run {
    use anyhow::{bail, Context, Result};
    use chrono::Utc;
    use log::{info, warn};
    use std::path::PathBuf;

    use crate::analyzer::Analyzer;
    use crate::comparison::compare;
    use crate::config::{Config, OutputFormat};
    use crate::export::{
        render_comparison_json, render_comparison_text, render_result_json, render_result_text,
        write_output, FailedAnalysis, SitemapRegistry,
    };
    use crate::models::AnalysisResult;

    /// Results of one analysis run.
    #[derive(Debug, Clone)]
    pub struct RunReport {
        /// Number of URLs given
        pub total_urls: usize,
        /// Number of URLs analyzed successfully
        pub successful: usize,
        /// Number of URLs that failed
        pub failed: usize,
        /// Where the report was written (`None` for stdout)
        pub output: Option<PathBuf>,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    fn build_analyzer(config: &Config) -> Result<Analyzer> {
        config.validate().context("Invalid configuration")?;
        if !config.skip_performance && config.pagespeed_api_key.is_none() {
            warn!(
                "No PageSpeed API key configured (set {} or pass --pagespeed-api-key); performance scores will be 0",
                crate::config::PAGESPEED_API_KEY_ENV
            );
        }
        Analyzer::from_config(config).context("Failed to initialize analyzer")
    }

    async fn write_sitemap(config: &Config, results: &[AnalysisResult]) -> Result<()> {
        let Some(path) = config.sitemap.as_deref() else {
            return Ok(());
        };
        let mut registry = match config.sitemap_root.as_deref() {
            Some(root) => SitemapRegistry::with_root(root),
            None => SitemapRegistry::new(),
        };
        for result in results {
            registry.add(&result.url);
        }
        registry.write_to(path).await
    }

    /// Analyzes a single URL and writes its report.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, the URL is rejected or
    /// cannot be fetched, or the report cannot be written.
    pub async fn run_analyze(config: Config, url: &str) -> Result<RunReport> {
        let start_time = std::time::Instant::now();
        let analyzer = build_analyzer(&config)?;

        let result = analyzer
            .analyze(url)
            .await
            .with_context(|| format!("Failed to analyze {}", url))?;

        let rendered = match config.output_format {
            OutputFormat::Plain => render_result_text(&result, &Utc::now()),
            OutputFormat::Json => render_result_json(&result)?,
        };
        write_output(config.output.as_deref(), &rendered).await?;
        write_sitemap(&config, std::slice::from_ref(&result)).await?;

        analyzer.stats().log_summary();
        Ok(RunReport {
            total_urls: 1,
            successful: 1,
            failed: 0,
            output: config.output.clone(),
            elapsed_seconds: start_time.elapsed().as_secs_f64(),
        })
    }

    /// Analyzes several URLs one after another and writes a comparison report.
    ///
    /// Failed URLs are listed in the report; the comparison itself needs at
    /// least two successful analyses.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than two URLs are given, the configuration is
    /// invalid, no URL could be analyzed, or the report cannot be written.
    pub async fn run_compare(config: Config, urls: &[String]) -> Result<RunReport> {
        if urls.len() < 2 {
            bail!("At least two URLs are required for a comparison");
        }
        let start_time = std::time::Instant::now();
        let analyzer = build_analyzer(&config)?;

        let mut results = Vec::new();
        let mut failures = Vec::new();
        for outcome in analyzer.analyze_all(urls).await {
            match outcome.result {
                Ok(result) => results.push(result),
                Err(e) => failures.push(FailedAnalysis {
                    url: outcome.input,
                    error: e.to_string(),
                }),
            }
        }

        if results.is_empty() {
            bail!("None of the {} URLs could be analyzed", urls.len());
        }

        let summary = if results.len() >= 2 {
            Some(compare(&results))
        } else {
            warn!("Only one URL was analyzed successfully; skipping the comparison");
            None
        };

        let rendered = match config.output_format {
            OutputFormat::Plain => {
                render_comparison_text(&results, summary.as_ref(), &failures, &Utc::now())
            }
            OutputFormat::Json => render_comparison_json(&results, summary.as_ref(), &failures)?,
        };
        write_output(config.output.as_deref(), &rendered).await?;
        write_sitemap(&config, &results).await?;

        analyzer.stats().log_summary();
        info!(
            "Compared {} URL(s): {} succeeded, {} failed",
            urls.len(),
            results.len(),
            failures.len()
        );
        Ok(RunReport {
            total_urls: urls.len(),
            successful: results.len(),
            failed: failures.len(),
            output: config.output.clone(),
            elapsed_seconds: start_time.elapsed().as_secs_f64(),
        })
    }
}
