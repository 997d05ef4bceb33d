//! Configuration constants.
//!
//! This module defines the constants used throughout the application: network
//! defaults, URL limits, and the thresholds the recommendation engine checks
//! extracted page signals against.

/// Default User-Agent string for page fetches.
///
/// Identifies the analyzer honestly instead of impersonating a browser. Users
/// can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str = "SEO Analyzer Bot/1.0";

/// Default per-request timeout in seconds (page fetch and PageSpeed call).
///
/// PageSpeed audits routinely take 10-20s, so this is generous.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Upper bound accepted for `timeout_seconds`.
pub const MAX_TIMEOUT_SECS: u64 = 300;

/// Google PageSpeed Insights v5 endpoint.
pub const PAGESPEED_API_URL: &str = "https://www.googleapis.com/pagespeedonline/v5/runPagespeed";

/// Environment variable holding the PageSpeed API key.
pub const PAGESPEED_API_KEY_ENV: &str = "PAGESPEED_API_KEY";

/// Strategy requested from PageSpeed (the mobile audit is what search ranking uses).
pub const PAGESPEED_STRATEGY: &str = "mobile";

// URL validation
/// Maximum URL length (2048 characters), matching common browser and server limits.
pub const MAX_URL_LENGTH: usize = 2048;

// Title and meta description bounds (characters)
pub const TITLE_MIN_LENGTH: usize = 30;
pub const TITLE_MAX_LENGTH: usize = 60;
pub const META_DESCRIPTION_MIN_LENGTH: usize = 120;
pub const META_DESCRIPTION_MAX_LENGTH: usize = 155;

/// Pages below this word count are flagged as thin content.
/// Also the word count at which the content score reaches 100.
pub const MIN_WORD_COUNT: usize = 300;

// Readability bands (Flesch reading ease, 0-100)
pub const READABILITY_HARD_THRESHOLD: u8 = 30;
pub const READABILITY_FAIR_THRESHOLD: u8 = 50;

/// URLs longer than this (characters) are flagged.
pub const MAX_RECOMMENDED_URL_LENGTH: usize = 100;

// Performance score bands (0-100)
pub const PERFORMANCE_POOR_THRESHOLD: u8 = 50;
pub const PERFORMANCE_GOOD_THRESHOLD: u8 = 90;

/// Maximum number of entries returned by the keyword extractor.
pub const MAX_KEYWORDS: usize = 10;
