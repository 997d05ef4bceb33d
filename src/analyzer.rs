//! Analysis orchestration.
//!
//! `Analyzer` wires the collaborators (page fetch, performance scoring) to the
//! pure analyzers: validate the URL, fetch, extract DOM facts, score the text,
//! run the structural analyzers, ask for a performance score, generate
//! recommendations, and assemble one `AnalysisResult`.

use log::{debug, info, warn};

use crate::analysis::{
    analyze_headings, analyze_images, analyze_links, analyze_meta_tags, analyze_structured_data,
    analyze_url_structure,
};
use crate::app::validate_and_normalize_url;
use crate::config::Config;
use crate::error_handling::{
    AnalysisError, AnalysisEvent, AnalysisStats, InitializationError, PerformanceError,
};
use crate::fetch::{HttpPageFetcher, PageFetcher};
use crate::initialization::init_client;
use crate::models::{AnalysisResult, PerformanceReport};
use crate::parse::extract_page_facts;
use crate::performance::{fallback_report, DisabledScorer, PageSpeedClient, PerformanceScorer};
use crate::recommendations::{generate_recommendations, PageSignals};
use crate::scoring::{calculate_readability, content_score, extract_keywords};

/// The outcome for one input URL of `Analyzer::analyze_all`.
#[derive(Debug)]
pub struct AnalysisOutcome {
    /// The URL as supplied by the caller
    pub input: String,
    pub result: Result<AnalysisResult, AnalysisError>,
}

/// Runs complete analyses through injected collaborators.
pub struct Analyzer {
    fetcher: Box<dyn PageFetcher>,
    scorer: Box<dyn PerformanceScorer>,
    stats: AnalysisStats,
}

impl Analyzer {
    pub fn new(fetcher: Box<dyn PageFetcher>, scorer: Box<dyn PerformanceScorer>) -> Self {
        Self {
            fetcher,
            scorer,
            stats: AnalysisStats::new(),
        }
    }

    /// Builds the production analyzer: one shared HTTP client for the page
    /// fetch and PageSpeed, or no performance scoring when it is skipped.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::HttpClientError` if the client cannot be built.
    pub fn from_config(config: &Config) -> Result<Self, InitializationError> {
        let client = init_client(config)?;
        let scorer: Box<dyn PerformanceScorer> = if config.skip_performance {
            Box::new(DisabledScorer)
        } else {
            Box::new(PageSpeedClient::from_config(client.clone(), config))
        };
        Ok(Self::new(Box::new(HttpPageFetcher::new(client)), scorer))
    }

    /// Event counters accumulated by this analyzer.
    pub fn stats(&self) -> &AnalysisStats {
        &self.stats
    }

    /// Analyzes one URL.
    ///
    /// # Errors
    ///
    /// `InvalidUrl` before any network call, `HttpStatus` or `Network` when the
    /// page cannot be fetched. Performance scoring failures never surface here.
    pub async fn analyze(&self, url: &str) -> Result<AnalysisResult, AnalysisError> {
        let outcome = self.analyze_page(url).await;
        match &outcome {
            Ok(result) => {
                self.stats.increment(AnalysisEvent::AnalysisSucceeded);
                info!(
                    "Analyzed {}: performance {}, readability {}, {} recommendation(s)",
                    result.url,
                    result.performance_score,
                    result.readability_score,
                    result.recommendations.len()
                );
            }
            Err(e) => {
                self.stats.increment(AnalysisEvent::AnalysisFailed);
                warn!("Analysis of {} failed: {}", url, e);
            }
        }
        outcome
    }

    /// Analyzes every URL one after another.
    ///
    /// A failing URL does not stop the others; each input gets its outcome in
    /// input order.
    pub async fn analyze_all(&self, urls: &[String]) -> Vec<AnalysisOutcome> {
        let mut outcomes = Vec::with_capacity(urls.len());
        for url in urls {
            let result = self.analyze(url).await;
            outcomes.push(AnalysisOutcome {
                input: url.clone(),
                result,
            });
        }
        outcomes
    }

    async fn analyze_page(&self, input: &str) -> Result<AnalysisResult, AnalysisError> {
        let (url, parsed) = validate_and_normalize_url(input)?;
        info!("Analyzing {}", url);

        let html = self.fetcher.fetch(&parsed).await?;
        let facts = extract_page_facts(&html);

        let word_count = facts.body_text.split_whitespace().count();
        let readability_score = calculate_readability(&facts.body_text);
        let keyword_density = extract_keywords(&facts.body_text);

        let headings = analyze_headings(&facts.headings);
        let images = analyze_images(&facts.images);
        let links = analyze_links(&facts.anchors, &parsed);
        let url_structure = analyze_url_structure(&url);
        let structured = analyze_structured_data(&facts.json_ld_blocks);
        if structured.invalid_blocks > 0 {
            self.stats
                .add(AnalysisEvent::InvalidStructuredData, structured.invalid_blocks);
        }
        let meta_tags = analyze_meta_tags(&facts);

        let performance = self.performance_report(&url).await;

        let title = facts.title;
        let meta_description = facts.meta_description.unwrap_or_default();
        let h1_count = headings.h1.len();

        let recommendations = generate_recommendations(&PageSignals {
            title: &title,
            meta_description: &meta_description,
            h1_count,
            word_count,
            headings: &headings,
            images: &images,
            links: &links,
            readability_score,
            url_structure: &url_structure,
            structured_data: &structured.entries,
            meta_tags: &meta_tags,
            performance_score: performance.score,
        });
        debug!("{} recommendation(s) for {}", recommendations.len(), url);

        Ok(AnalysisResult {
            title,
            meta_description,
            canonical: facts.canonical,
            h1_count,
            h1_tags: headings.h1.clone(),
            images_count: images.total,
            word_count,
            performance_score: performance.score,
            performance_metrics: performance.metrics,
            content_score: content_score(word_count),
            readability_score,
            keyword_density,
            headings,
            images,
            links,
            url_structure,
            structured_data: structured.entries,
            meta_tags,
            recommendations,
            url,
        })
    }

    /// Asks the scorer, falling back to a zero report on any failure.
    async fn performance_report(&self, url: &str) -> PerformanceReport {
        match self.scorer.score(url).await {
            Ok(report) => report,
            Err(PerformanceError::Disabled) => {
                debug!("Performance scoring disabled, using zero score for {}", url);
                fallback_report()
            }
            Err(e) => {
                warn!("Performance scoring failed for {}: {}. Using zero score.", url, e);
                self.stats.increment(AnalysisEvent::PerformanceFallback);
                fallback_report()
            }
        }
    }
}
