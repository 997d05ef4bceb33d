//! Request headers for page fetches.

/// Headers sent with every page fetch, on top of the client's User-Agent.
///
/// The User-Agent identifies the analyzer; these only make content
/// negotiation behave like a regular document request.
pub(crate) struct RequestHeaders;

impl RequestHeaders {
    const ACCEPT: &'static str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";
    const ACCEPT_LANGUAGE: &'static str = "fr-FR,fr;q=0.9,en;q=0.8";

    /// Returns headers as a vector of (name, value) tuples for logging.
    pub(crate) fn as_vec() -> Vec<(String, String)> {
        vec![
            ("accept".to_string(), Self::ACCEPT.to_string()),
            ("accept-language".to_string(), Self::ACCEPT_LANGUAGE.to_string()),
        ]
    }

    /// Applies the standard request headers to a `reqwest::RequestBuilder`.
    pub(crate) fn apply_to_request_builder(
        builder: reqwest::RequestBuilder,
    ) -> reqwest::RequestBuilder {
        builder
            .header(reqwest::header::ACCEPT, Self::ACCEPT)
            .header(reqwest::header::ACCEPT_LANGUAGE, Self::ACCEPT_LANGUAGE)
    }
}
