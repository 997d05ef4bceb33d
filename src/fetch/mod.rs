//! Page fetching.
//!
//! `PageFetcher` is the seam the analyzer fetches through; `HttpPageFetcher`
//! performs a single GET with the shared `reqwest` client. No retries.

mod request;

use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use url::Url;

use crate::error_handling::AnalysisError;
use request::RequestHeaders;

/// Retrieves the HTML of a page.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetches `url` and returns the response body.
    ///
    /// # Errors
    ///
    /// `AnalysisError::HttpStatus` for a non-2xx answer,
    /// `AnalysisError::Network` for transport failures.
    async fn fetch(&self, url: &Url) -> Result<String, AnalysisError>;
}

/// `PageFetcher` backed by a `reqwest::Client`.
///
/// User-Agent and timeout come from the client (see `initialization::init_client`).
pub struct HttpPageFetcher {
    client: Arc<reqwest::Client>,
}

impl HttpPageFetcher {
    pub fn new(client: Arc<reqwest::Client>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch(&self, url: &Url) -> Result<String, AnalysisError> {
        debug!("Fetching {} with headers {:?}", url, RequestHeaders::as_vec());
        let builder = RequestHeaders::apply_to_request_builder(self.client.get(url.as_str()));
        let response = builder.send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AnalysisError::HttpStatus {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        let body = response.text().await?;
        debug!("Fetched {} ({} bytes)", url, body.len());
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httptest::{matchers::*, responders::*, Expectation, Server};

    fn fetcher() -> HttpPageFetcher {
        HttpPageFetcher::new(Arc::new(reqwest::Client::new()))
    }

    #[tokio::test]
    async fn test_fetch_returns_body() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/page"))
                .respond_with(status_code(200).body("<html><title>Hi</title></html>")),
        );

        let url = Url::parse(&server.url("/page").to_string()).unwrap();
        let body = fetcher().fetch(&url).await.unwrap();
        assert_eq!(body, "<html><title>Hi</title></html>");
    }

    #[tokio::test]
    async fn test_fetch_sends_accept_header() {
        let server = Server::run();
        server.expect(
            Expectation::matching(httptest::all_of![
                request::method_path("GET", "/page"),
                request::headers(contains(("accept-language", "fr-FR,fr;q=0.9,en;q=0.8"))),
            ])
            .respond_with(status_code(200).body("ok")),
        );

        let url = Url::parse(&server.url("/page").to_string()).unwrap();
        assert!(fetcher().fetch(&url).await.is_ok());
    }

    #[tokio::test]
    async fn test_fetch_non_success_status() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/missing"))
                .respond_with(status_code(404).body("nope")),
        );

        let url = Url::parse(&server.url("/missing").to_string()).unwrap();
        let err = fetcher().fetch(&url).await.unwrap_err();
        assert!(matches!(err, AnalysisError::HttpStatus { status: 404, .. }));
        assert_eq!(err.to_string(), "Failed to fetch URL: 404 Not Found");
    }

    #[tokio::test]
    async fn test_fetch_connection_refused_is_network_error() {
        // Port 9 (discard) is not expected to be listening locally.
        let url = Url::parse("http://127.0.0.1:9/").unwrap();
        let err = fetcher().fetch(&url).await.unwrap_err();
        assert!(matches!(err, AnalysisError::Network(_)));
        assert!(err.to_string().starts_with("Failed to fetch URL:"));
    }
}
