//! Link classification.
//!
//! Every anchor with an `href` is put in exactly one bucket:
//! - **internal**: resolves to the base URL's hostname, or looks relative
//!   (`/`, `#`, `./`, `../`)
//! - **external**: resolves to another hostname, or starts with `http`
//! - **broken**: anything else, including `mailto:`, `tel:` and `javascript:`
//!   hrefs, which resolve to no host at all

use url::Url;

use crate::models::LinkAnalysis;
use crate::parse::AnchorElement;

const RELATIVE_PREFIXES: &[&str] = &["/", "#", "./", "../"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Internal,
    External,
    Broken,
}

/// Returns the hostname an href points at, if it is an absolute URL with a host.
///
/// Scheme-relative hrefs (`//cdn.example.com/x`) borrow the base URL's scheme.
fn resolved_host(href: &str, base: &Url) -> Option<String> {
    let parsed = if href.starts_with("//") {
        base.join(href).ok()
    } else {
        Url::parse(href).ok()
    };
    parsed.and_then(|url| url.host_str().map(str::to_string))
}

/// Classifies a single href against the page URL.
pub fn classify_link(href: &str, base: &Url) -> LinkKind {
    if let Some(host) = resolved_host(href, base) {
        return if base.host_str() == Some(host.as_str()) {
            LinkKind::Internal
        } else {
            LinkKind::External
        };
    }

    if RELATIVE_PREFIXES.iter().any(|prefix| href.starts_with(prefix)) {
        LinkKind::Internal
    } else if href.starts_with("http") {
        LinkKind::External
    } else {
        LinkKind::Broken
    }
}

/// Classifies all anchors of the page.
///
/// Anchors without an `href` (or with an empty one) are skipped and do not
/// count towards `total`. Lists keep document order.
pub fn analyze_links(anchors: &[AnchorElement], base: &Url) -> LinkAnalysis {
    let mut analysis = LinkAnalysis::default();

    for href in anchors
        .iter()
        .filter_map(|anchor| anchor.href.as_deref())
        .filter(|href| !href.is_empty())
    {
        match classify_link(href, base) {
            LinkKind::Internal => analysis.internal_links.push(href.to_string()),
            LinkKind::External => analysis.external_links.push(href.to_string()),
            LinkKind::Broken => analysis.broken_links.push(href.to_string()),
        }
    }

    analysis.internal = analysis.internal_links.len();
    analysis.external = analysis.external_links.len();
    analysis.broken = analysis.broken_links.len();
    analysis.total = analysis.internal + analysis.external + analysis.broken;

    log::debug!(
        "Classified {} links: {} internal, {} external, {} broken",
        analysis.total,
        analysis.internal,
        analysis.external,
        analysis.broken
    );

    analysis
}
