//! Report rendering and output.
//!
//! This module renders analysis results as plain text or JSON, writes them to
//! stdout or a file, and keeps the sitemap of analyzed URLs.

mod json;
mod output;
mod sitemap;
mod text;

use serde::{Deserialize, Serialize};

pub use json::{render_comparison_json, render_result_json};
pub use output::write_output;
pub use sitemap::SitemapRegistry;
pub use text::{render_comparison_text, render_result_text};

/// A URL that could not be analyzed, as listed in comparison reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailedAnalysis {
    pub url: String,
    pub error: String,
}
