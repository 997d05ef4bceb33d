//! Error type definitions.
//!
//! This module defines the error types used throughout the application and the
//! event kinds counted by `AnalysisStats`.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Errors that abort the analysis of a URL.
///
/// No partial result is ever produced when one of these is returned.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// The input could not be turned into an http(s) URL. Raised before any
    /// network call.
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl {
        /// The URL as supplied by the caller
        url: String,
        /// Why it was rejected
        reason: String,
    },

    /// The page answered with a non-success status.
    #[error("Failed to fetch URL: {status} {reason}")]
    HttpStatus {
        /// HTTP status code
        status: u16,
        /// Canonical reason phrase (may be empty for non-standard codes)
        reason: String,
    },

    /// Connection, timeout or body decoding failure while fetching the page.
    #[error("Failed to fetch URL: {0}")]
    Network(#[from] ReqwestError),
}

/// Failures of the performance-scoring collaborator.
///
/// These never reach the caller of `Analyzer::analyze`: the orchestrator logs
/// them and substitutes the zero fallback.
#[derive(Error, Debug)]
pub enum PerformanceError {
    /// No API key was configured.
    #[error("PageSpeed API key is not configured")]
    MissingApiKey,

    /// Performance scoring was switched off.
    #[error("Performance scoring is disabled")]
    Disabled,

    /// PageSpeed answered with a non-success status.
    #[error("PageSpeed API returned {status}: {reason}")]
    HttpStatus {
        /// HTTP status code
        status: u16,
        /// Canonical reason phrase
        reason: String,
    },

    /// Transport or JSON decoding failure.
    #[error("PageSpeed request failed: {0}")]
    Request(#[from] ReqwestError),

    /// The response did not contain a field the score is built from.
    #[error("PageSpeed response is missing `{0}`")]
    MissingField(String),
}

/// Events counted over an analysis run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum AnalysisEvent {
    /// A URL produced a complete result
    AnalysisSucceeded,
    /// A URL failed validation or fetching
    AnalysisFailed,
    /// The performance score fell back to zero
    PerformanceFallback,
    /// A JSON-LD block failed to parse and was skipped
    InvalidStructuredData,
}

impl std::fmt::Display for AnalysisEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AnalysisEvent {
    /// Returns a human-readable string representation of the event.
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisEvent::AnalysisSucceeded => "Analyses succeeded",
            AnalysisEvent::AnalysisFailed => "Analyses failed",
            AnalysisEvent::PerformanceFallback => "Performance score fallbacks",
            AnalysisEvent::InvalidStructuredData => "Invalid JSON-LD blocks skipped",
        }
    }
}
