//! Google PageSpeed Insights client.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use super::{PerformanceScorer, REPORTED_AUDITS};
use crate::config::{Config, PAGESPEED_STRATEGY};
use crate::error_handling::PerformanceError;
use crate::models::{PerformanceMetric, PerformanceReport};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PageSpeedResponse {
    lighthouse_result: Option<LighthouseResult>,
}

#[derive(Debug, Deserialize)]
struct LighthouseResult {
    categories: Option<Categories>,
    #[serde(default)]
    audits: HashMap<String, Audit>,
}

#[derive(Debug, Deserialize)]
struct Categories {
    performance: Option<Category>,
}

#[derive(Debug, Deserialize)]
struct Category {
    score: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct Audit {
    /// `null` for audits Lighthouse could not score
    score: Option<f64>,
}

/// Calls the PageSpeed v5 `runPagespeed` endpoint with the mobile strategy.
pub struct PageSpeedClient {
    client: Arc<reqwest::Client>,
    api_key: Option<String>,
    endpoint: String,
}

impl PageSpeedClient {
    pub fn new(
        client: Arc<reqwest::Client>,
        api_key: Option<String>,
        endpoint: impl Into<String>,
    ) -> Self {
        Self {
            client,
            api_key,
            endpoint: endpoint.into(),
        }
    }

    /// Builds a client from the API key and endpoint in `config`.
    pub fn from_config(client: Arc<reqwest::Client>, config: &Config) -> Self {
        Self::new(
            client,
            config.pagespeed_api_key.clone(),
            config.pagespeed_endpoint.clone(),
        )
    }
}

/// Converts a decoded PageSpeed body into a report.
fn build_report(response: PageSpeedResponse) -> Result<PerformanceReport, PerformanceError> {
    let lighthouse = response
        .lighthouse_result
        .ok_or_else(|| PerformanceError::MissingField("lighthouseResult".to_string()))?;

    let category_score = lighthouse
        .categories
        .and_then(|c| c.performance)
        .and_then(|p| p.score)
        .ok_or_else(|| {
            PerformanceError::MissingField(
                "lighthouseResult.categories.performance.score".to_string(),
            )
        })?;

    let metrics = REPORTED_AUDITS
        .iter()
        .map(|(id, name)| {
            let audit = lighthouse.audits.get(*id).ok_or_else(|| {
                PerformanceError::MissingField(format!("lighthouseResult.audits.{}", id))
            })?;
            Ok(PerformanceMetric {
                name: (*name).to_string(),
                score: audit.score.unwrap_or(0.0),
            })
        })
        .collect::<Result<Vec<_>, PerformanceError>>()?;

    Ok(PerformanceReport {
        score: (category_score * 100.0).round().clamp(0.0, 100.0) as u8,
        metrics,
    })
}

#[async_trait]
impl PerformanceScorer for PageSpeedClient {
    async fn score(&self, url: &str) -> Result<PerformanceReport, PerformanceError> {
        let api_key = self
            .api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or(PerformanceError::MissingApiKey)?;

        log::debug!("Requesting PageSpeed score for {}", url);
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("url", url), ("key", api_key), ("strategy", PAGESPEED_STRATEGY)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PerformanceError::HttpStatus {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        let body: PageSpeedResponse = response.json().await?;
        build_report(body)
    }
}
