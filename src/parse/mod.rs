//! HTML parsing and DOM fact extraction.
//!
//! This is the only module that touches the DOM. It turns raw HTML into a
//! `PageFacts` value holding plain strings; every analyzer downstream is a pure
//! function over those facts, so tests can build `PageFacts` by hand.
//!
//! All parsing is done using CSS selectors via the `scraper` crate.

mod elements;
mod html;

use scraper::Html;
use std::collections::HashMap;

// Re-export public API
pub use elements::{
    extract_anchors, extract_body_text, extract_headings, extract_images, extract_json_ld_blocks,
};
pub use html::{extract_canonical, extract_meta_description, extract_meta_map, extract_title};

/// An `<img>` element as found in the markup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageElement {
    pub src: Option<String>,
    pub alt: Option<String>,
}

/// An `<a>` element as found in the markup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnchorElement {
    pub href: Option<String>,
}

/// Raw facts extracted from one HTML document.
#[derive(Debug, Clone, Default)]
pub struct PageFacts {
    /// Trimmed text of the first `<title>`, empty when missing
    pub title: String,
    /// Trimmed `content` of `meta[name=description]`
    pub meta_description: Option<String>,
    /// `href` of `link[rel=canonical]`
    pub canonical: Option<String>,
    /// Meta `content` values keyed `name:<name>` / `property:<property>`
    pub meta: HashMap<String, String>,
    /// `(level, raw text)` per heading, document order
    pub headings: Vec<(u8, String)>,
    pub images: Vec<ImageElement>,
    pub anchors: Vec<AnchorElement>,
    /// Raw bodies of JSON-LD scripts
    pub json_ld_blocks: Vec<String>,
    /// Visible text of `<body>`
    pub body_text: String,
}

impl PageFacts {
    /// Looks up `content` of `meta[name=<name>]`.
    pub fn meta_name(&self, name: &str) -> Option<&str> {
        self.meta
            .get(&format!("name:{}", name.to_lowercase()))
            .map(String::as_str)
    }

    /// Looks up `content` of `meta[property=<property>]`.
    pub fn meta_property(&self, property: &str) -> Option<&str> {
        self.meta
            .get(&format!("property:{}", property.to_lowercase()))
            .map(String::as_str)
    }
}

/// Parses HTML and extracts every fact the analyzers need.
///
/// Never fails: html5ever recovers from malformed markup, and per-element
/// problems (such as invalid JSON-LD) are left for the analyzers to handle.
pub fn extract_page_facts(body: &str) -> PageFacts {
    let document = Html::parse_document(body);

    let facts = PageFacts {
        title: extract_title(&document),
        meta_description: extract_meta_description(&document),
        canonical: extract_canonical(&document),
        meta: extract_meta_map(&document),
        headings: extract_headings(&document),
        images: extract_images(&document),
        anchors: extract_anchors(&document),
        json_ld_blocks: extract_json_ld_blocks(&document),
        body_text: extract_body_text(&document),
    };

    log::debug!(
        "Extracted {} meta tags, {} headings, {} images, {} anchors, {} JSON-LD blocks",
        facts.meta.len(),
        facts.headings.len(),
        facts.images.len(),
        facts.anchors.len(),
        facts.json_ld_blocks.len()
    );

    facts
}
