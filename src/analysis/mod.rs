//! Structural analyzers.
//!
//! Pure functions mapping extracted DOM facts (`parse::PageFacts`) to the
//! summary records stored in an `AnalysisResult`:
//! - Images (alt-text coverage)
//! - Links (internal / external / broken)
//! - Headings (H1..H6 outline)
//! - Structured data (JSON-LD)
//! - URL structure
//! - Meta tags (robots, viewport, Open Graph, Twitter Card)

mod headings;
mod images;
mod links;
mod meta_tags;
mod structured;
mod url_structure;

// Re-export public API
pub use headings::analyze_headings;
pub use images::analyze_images;
pub use links::{analyze_links, classify_link, LinkKind};
pub use meta_tags::analyze_meta_tags;
pub use structured::{
    analyze_structured_data, has_structured_data, StructuredDataScan, COMMON_SCHEMA_TYPES,
};
pub use url_structure::analyze_url_structure;
