//! Body-level element enumeration.
//!
//! Collects headings, images, anchors, JSON-LD script bodies and the visible
//! text of the page, all in document order.

use scraper::{Html, Selector};
use std::sync::LazyLock;

use super::{AnchorElement, ImageElement};

const HEADING_SELECTOR_STR: &str = "h1, h2, h3, h4, h5, h6";
const IMAGE_SELECTOR_STR: &str = "img";
const ANCHOR_SELECTOR_STR: &str = "a";
const SCRIPT_SELECTOR_STR: &str = "script";
const BODY_SELECTOR_STR: &str = "body";

const JSON_LD_MIME: &str = "application/ld+json";

/// Elements whose text never renders.
const NON_VISIBLE_TAGS: &[&str] = &["script", "style", "noscript", "template"];

/// Elements that start a new line of text when rendered.
const BLOCK_TAGS: &[&str] = &[
    "address", "article", "aside", "blockquote", "dd", "details", "dialog", "div", "dl", "dt",
    "fieldset", "figcaption", "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6",
    "header", "hr", "li", "main", "nav", "ol", "p", "pre", "section", "summary", "table", "tbody",
    "td", "tfoot", "th", "thead", "tr", "ul",
];

static HEADING_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    crate::utils::parse_selector_unsafe(HEADING_SELECTOR_STR, "HEADING_SELECTOR")
});
static IMAGE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| crate::utils::parse_selector_unsafe(IMAGE_SELECTOR_STR, "IMAGE_SELECTOR"));
static ANCHOR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| crate::utils::parse_selector_unsafe(ANCHOR_SELECTOR_STR, "ANCHOR_SELECTOR"));
static SCRIPT_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| crate::utils::parse_selector_unsafe(SCRIPT_SELECTOR_STR, "SCRIPT_SELECTOR"));
static BODY_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| crate::utils::parse_selector_unsafe(BODY_SELECTOR_STR, "BODY_SELECTOR"));

/// Returns `(level, raw text)` for every `h1`..`h6`, in document order.
pub fn extract_headings(document: &Html) -> Vec<(u8, String)> {
    document
        .select(&HEADING_SELECTOR)
        .filter_map(|element| {
            let level = match element.value().name() {
                "h1" => 1,
                "h2" => 2,
                "h3" => 3,
                "h4" => 4,
                "h5" => 5,
                "h6" => 6,
                _ => return None,
            };
            Some((level, element.text().collect::<String>()))
        })
        .collect()
}

pub fn extract_images(document: &Html) -> Vec<ImageElement> {
    document
        .select(&IMAGE_SELECTOR)
        .map(|element| ImageElement {
            src: element.value().attr("src").map(str::to_string),
            alt: element.value().attr("alt").map(str::to_string),
        })
        .collect()
}

pub fn extract_anchors(document: &Html) -> Vec<AnchorElement> {
    document
        .select(&ANCHOR_SELECTOR)
        .map(|element| AnchorElement {
            href: element.value().attr("href").map(str::to_string),
        })
        .collect()
}

/// Returns the raw bodies of `<script type="application/ld+json">` elements.
///
/// The `type` comparison ignores ASCII case and surrounding whitespace.
pub fn extract_json_ld_blocks(document: &Html) -> Vec<String> {
    document
        .select(&SCRIPT_SELECTOR)
        .filter(|element| {
            element
                .value()
                .attr("type")
                .is_some_and(|t| t.trim().eq_ignore_ascii_case(JSON_LD_MIME))
        })
        .map(|element| element.text().collect::<String>())
        .collect()
}

/// Returns the visible text of `<body>`.
///
/// Text nodes are concatenated as they appear, so inline markup inside a word
/// (`r<strong>é</strong>férencement`) keeps it whole. A single space is inserted
/// where the text moves into another block element or crosses a `<br>`, so
/// adjacent paragraphs do not fuse. Text inside script, style, noscript and
/// template elements is left out.
pub fn extract_body_text(document: &Html) -> String {
    let Some(body) = document.select(&BODY_SELECTOR).next() else {
        return String::new();
    };

    let mut text = String::new();
    let mut current_block = None;
    let mut pending_break = false;
    for node in body.descendants() {
        if let Some(element) = node.value().as_element() {
            if element.name() == "br" {
                pending_break = true;
            }
            continue;
        }
        let Some(content) = node.value().as_text() else {
            continue;
        };
        let hidden = node.ancestors().any(|ancestor| {
            ancestor
                .value()
                .as_element()
                .is_some_and(|e| NON_VISIBLE_TAGS.contains(&e.name()))
        });
        if hidden {
            continue;
        }

        let block = node
            .ancestors()
            .find(|ancestor| {
                ancestor
                    .value()
                    .as_element()
                    .is_some_and(|e| BLOCK_TAGS.contains(&e.name()))
            })
            .map_or(body.id(), |ancestor| ancestor.id());
        if !text.is_empty() && (pending_break || current_block != Some(block)) {
            text.push(' ');
        }
        pending_break = false;
        current_block = Some(block);
        text.push_str(content);
    }
    text
}
