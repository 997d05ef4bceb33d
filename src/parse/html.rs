//! Head-level HTML extraction.
//!
//! This module provides functions to extract:
//! - Page title
//! - Meta description
//! - Canonical link
//! - `name`/`property` meta tag lookups

use scraper::{Html, Selector};
use std::collections::HashMap;
use std::sync::LazyLock;

// CSS selector strings
const TITLE_SELECTOR_STR: &str = "title";
const META_DESCRIPTION_SELECTOR_STR: &str = "meta[name='description']";
const CANONICAL_SELECTOR_STR: &str = "link[rel='canonical']";
const META_SELECTOR_STR: &str = "meta";

static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| crate::utils::parse_selector_unsafe(TITLE_SELECTOR_STR, "TITLE_SELECTOR"));

static META_DESCRIPTION_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    crate::utils::parse_selector_unsafe(META_DESCRIPTION_SELECTOR_STR, "META_DESCRIPTION_SELECTOR")
});

static CANONICAL_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    crate::utils::parse_selector_unsafe(CANONICAL_SELECTOR_STR, "CANONICAL_SELECTOR")
});

static META_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| crate::utils::parse_selector_unsafe(META_SELECTOR_STR, "META_SELECTOR"));

/// Extracts the page title from an HTML document.
///
/// Takes the first `<title>` element and returns its text content, trimmed of
/// whitespace. Returns an empty string if there is no title.
pub fn extract_title(document: &Html) -> String {
    match document.select(&TITLE_SELECTOR).next() {
        Some(element) => {
            let title = element.text().collect::<String>().trim().to_string();
            log::debug!("Extracted title: '{}' ({} chars)", title, title.chars().count());
            title
        }
        None => {
            log::debug!("No title element found in document");
            String::new()
        }
    }
}

/// Extracts the meta description, trimmed of whitespace.
///
/// Returns `None` if the tag or its `content` attribute is missing.
pub fn extract_meta_description(document: &Html) -> Option<String> {
    document
        .select(&META_DESCRIPTION_SELECTOR)
        .next()
        .and_then(|element| element.value().attr("content"))
        .map(|content| content.trim().to_string())
}

/// Extracts the `href` of the first `<link rel="canonical">`.
pub fn extract_canonical(document: &Html) -> Option<String> {
    document
        .select(&CANONICAL_SELECTOR)
        .next()
        .and_then(|element| element.value().attr("href"))
        .map(|href| href.trim().to_string())
        .filter(|href| !href.is_empty())
}

/// Collects `content` values of all meta tags, keyed `name:<name>` or
/// `property:<property>` (keys lowercased).
///
/// The first tag wins when a key repeats, matching a document-order lookup.
pub fn extract_meta_map(document: &Html) -> HashMap<String, String> {
    let mut meta_tags = HashMap::new();
    for element in document.select(&META_SELECTOR) {
        let Some(content) = element.value().attr("content") else {
            continue;
        };
        if let Some(name) = element.value().attr("name") {
            meta_tags
                .entry(format!("name:{}", name.to_lowercase()))
                .or_insert_with(|| content.to_string());
        }
        if let Some(property) = element.value().attr("property") {
            meta_tags
                .entry(format!("property:{}", property.to_lowercase()))
                .or_insert_with(|| content.to_string());
        }
    }
    meta_tags
}
