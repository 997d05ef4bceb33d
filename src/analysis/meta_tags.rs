//! Crawler and social meta tags.

use crate::models::MetaTags;
use crate::parse::PageFacts;

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Looks up robots, viewport, Open Graph and Twitter Card tags.
///
/// Empty `content` is treated the same as a missing tag.
pub fn analyze_meta_tags(facts: &PageFacts) -> MetaTags {
    MetaTags {
        robots: non_empty(facts.meta_name("robots")),
        viewport: non_empty(facts.meta_name("viewport")),
        og_title: non_empty(facts.meta_property("og:title")),
        og_description: non_empty(facts.meta_property("og:description")),
        og_image: non_empty(facts.meta_property("og:image")),
        twitter_card: non_empty(facts.meta_name("twitter:card")),
    }
}

impl MetaTags {
    /// True when og:title, og:description and og:image are all present.
    pub fn has_complete_open_graph(&self) -> bool {
        self.og_title.is_some() && self.og_description.is_some() && self.og_image.is_some()
    }
}
