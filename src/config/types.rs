//! Configuration types.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and library configuration.

use std::path::PathBuf;

use clap::ValueEnum;
use thiserror::Error;

use crate::config::constants::{
    DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, MAX_TIMEOUT_SECS, PAGESPEED_API_URL,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Report output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text report (default)
    Plain,
    /// Pretty-printed JSON with camelCase field names
    Json,
}

/// A configuration value that failed validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid value for `{field}`: {message}")]
pub struct ConfigValidationError {
    /// Name of the offending field
    pub field: String,
    /// What is wrong and what is accepted
    pub message: String,
}

impl ConfigValidationError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Library configuration (no CLI dependencies).
///
/// This is the core configuration struct used by the library. It can be
/// constructed programmatically without any CLI dependencies.
///
/// # Examples
///
/// ```no_run
/// use seo_audit::Config;
///
/// let config = Config {
///     timeout_seconds: 30,
///     skip_performance: true,
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Per-request timeout in seconds
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value sent with page fetches
    pub user_agent: String,

    /// PageSpeed Insights API key (falls back to the zero score when absent)
    pub pagespeed_api_key: Option<String>,

    /// PageSpeed Insights endpoint
    pub pagespeed_endpoint: String,

    /// Do not call PageSpeed at all; every result carries the zero score
    pub skip_performance: bool,

    /// Report format
    pub output_format: OutputFormat,

    /// Report destination (stdout when `None`)
    pub output: Option<PathBuf>,

    /// Write a sitemap.xml of the analyzed URLs to this path
    pub sitemap: Option<PathBuf>,

    /// Site root listed first in the sitemap (changefreq daily, priority 1.0)
    pub sitemap_root: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            pagespeed_api_key: None,
            pagespeed_endpoint: PAGESPEED_API_URL.to_string(),
            skip_performance: false,
            output_format: OutputFormat::Plain,
            output: None,
            sitemap: None,
            sitemap_root: None,
        }
    }
}

impl Config {
    /// Checks the configuration for values the analyzer cannot work with.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field found.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.timeout_seconds == 0 {
            return Err(ConfigValidationError::new(
                "timeout_seconds",
                "must be greater than 0",
            ));
        }
        if self.timeout_seconds > MAX_TIMEOUT_SECS {
            return Err(ConfigValidationError::new(
                "timeout_seconds",
                format!("must be at most {MAX_TIMEOUT_SECS} seconds"),
            ));
        }
        if self.user_agent.trim().is_empty() {
            return Err(ConfigValidationError::new(
                "user_agent",
                "must not be empty (the default is used when the flag is omitted)",
            ));
        }
        match url::Url::parse(&self.pagespeed_endpoint) {
            Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => {}
            _ => {
                return Err(ConfigValidationError::new(
                    "pagespeed_endpoint",
                    "must be an absolute http(s) URL",
                ))
            }
        }
        if let Some(root) = &self.sitemap_root {
            match url::Url::parse(root) {
                Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => {}
                _ => {
                    return Err(ConfigValidationError::new(
                        "sitemap_root",
                        "must be an absolute http(s) URL",
                    ))
                }
            }
        }
        if let Some(key) = &self.pagespeed_api_key {
            if key.trim().is_empty() {
                return Err(ConfigValidationError::new(
                    "pagespeed_api_key",
                    "must not be blank; unset PAGESPEED_API_KEY to skip performance scoring",
                ));
            }
        }
        Ok(())
    }
}
