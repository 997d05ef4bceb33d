//! Application-level helpers used before a URL reaches the analyzer.

pub mod url;

// Re-export public API
pub use url::validate_and_normalize_url;
