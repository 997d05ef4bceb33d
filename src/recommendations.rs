//! Recommendation engine.
//!
//! A flat, ordered list of rules over the signals of one analyzed page. Every
//! matching rule appends one finding; the order of the output is the order of
//! the rules below, with the two general tips always last.

use crate::analysis::has_structured_data;
use crate::config::{
    MAX_RECOMMENDED_URL_LENGTH, META_DESCRIPTION_MAX_LENGTH, META_DESCRIPTION_MIN_LENGTH,
    MIN_WORD_COUNT, PERFORMANCE_GOOD_THRESHOLD, PERFORMANCE_POOR_THRESHOLD,
    READABILITY_FAIR_THRESHOLD, READABILITY_HARD_THRESHOLD, TITLE_MAX_LENGTH, TITLE_MIN_LENGTH,
};
use crate::models::{
    HeadingStructure, ImageAnalysis, LinkAnalysis, MetaTags, SeoRecommendation, Severity,
    StructuredData, UrlStructure,
};

pub const MISSING_TITLE: &str = "Add a title tag to your page";
pub const TITLE_TOO_SHORT: &str =
    "Your title is too short. Ideally it should contain between 50 and 60 characters";
pub const TITLE_TOO_LONG: &str =
    "Your title is too long. Ideally it should contain fewer than 60 characters";
pub const MISSING_META_DESCRIPTION: &str = "Add a meta description to your page";
pub const META_DESCRIPTION_TOO_SHORT: &str =
    "Your meta description is too short. Ideally it should contain between 120 and 155 characters";
pub const META_DESCRIPTION_TOO_LONG: &str =
    "Your meta description is too long. Ideally it should contain fewer than 155 characters";
pub const MISSING_H1: &str = "Add an H1 heading to your page";
pub const MULTIPLE_H1: &str =
    "Your page contains several H1 headings. A page should ideally have a single H1";
pub const THIN_CONTENT: &str =
    "Your content is too short. Add more content to improve search visibility";
pub const MISSING_H2: &str = "Use H2 headings to structure your content";
pub const H3_WITHOUT_H2: &str =
    "You use H3 headings without any H2. Respect the heading hierarchy";
pub const NO_INTERNAL_LINKS: &str =
    "Add internal links to improve navigation and search visibility";
pub const HARD_TO_READ: &str =
    "Your content is hard to read. Simplify your wording and use shorter sentences";
pub const FAIR_READABILITY: &str =
    "The readability of your content could be improved. Try using simpler language";
pub const DYNAMIC_URL: &str =
    "Your URL contains dynamic parameters. Use clean, descriptive URLs";
pub const URL_TOO_LONG: &str = "Your URL is too long. Use shorter, descriptive URLs";
pub const MISSING_STRUCTURED_DATA: &str =
    "Add structured data (Schema.org) to improve how your page appears in search results";
pub const MISSING_VIEWPORT: &str = "Add a viewport meta tag to improve display on mobile";
pub const INCOMPLETE_OPEN_GRAPH: &str =
    "Add Open Graph tags to improve sharing on social networks";
pub const MISSING_TWITTER_CARD: &str = "Add Twitter Card tags to improve sharing on Twitter";
pub const LOW_PERFORMANCE: &str =
    "Your performance score is low. Optimize images and reduce render-blocking JavaScript and CSS";
pub const MEDIOCRE_PERFORMANCE: &str =
    "Improve your performance score by optimizing resources and reducing load time";
pub const URL_FRIENDLINESS_TIP: &str =
    "Use search-engine-friendly URLs containing relevant keywords";
pub const MOBILE_FRIENDLINESS_TIP: &str =
    "Make sure your site is mobile-friendly and adapts to every device";

fn images_without_alt(count: usize) -> String {
    format!(
        "{} image(s) have no alt attribute. Add alt descriptions to all your images",
        count
    )
}

fn broken_links(count: usize) -> String {
    format!(
        "Your page contains {} broken link(s). Fix or remove these links",
        count
    )
}

/// The page signals the rules look at.
#[derive(Debug, Clone, Copy)]
pub struct PageSignals<'a> {
    pub title: &'a str,
    pub meta_description: &'a str,
    pub h1_count: usize,
    pub word_count: usize,
    pub headings: &'a HeadingStructure,
    pub images: &'a ImageAnalysis,
    pub links: &'a LinkAnalysis,
    pub readability_score: u8,
    pub url_structure: &'a UrlStructure,
    pub structured_data: &'a [StructuredData],
    pub meta_tags: &'a MetaTags,
    pub performance_score: u8,
}

/// Applies every rule in order and returns the findings.
///
/// Lengths are measured in characters. The output is never empty: the
/// URL-friendliness and mobile-friendliness tips are always appended.
pub fn generate_recommendations(signals: &PageSignals<'_>) -> Vec<SeoRecommendation> {
    let mut recommendations = Vec::new();
    let mut push = |text: &str, severity: Severity| {
        recommendations.push(SeoRecommendation::new(text, severity));
    };

    let title_length = signals.title.chars().count();
    if signals.title.is_empty() {
        push(MISSING_TITLE, Severity::High);
    } else if title_length < TITLE_MIN_LENGTH {
        push(TITLE_TOO_SHORT, Severity::Medium);
    } else if title_length > TITLE_MAX_LENGTH {
        push(TITLE_TOO_LONG, Severity::Medium);
    }

    let description_length = signals.meta_description.chars().count();
    if signals.meta_description.is_empty() {
        push(MISSING_META_DESCRIPTION, Severity::High);
    } else if description_length < META_DESCRIPTION_MIN_LENGTH {
        push(META_DESCRIPTION_TOO_SHORT, Severity::Medium);
    } else if description_length > META_DESCRIPTION_MAX_LENGTH {
        push(META_DESCRIPTION_TOO_LONG, Severity::Medium);
    }

    if signals.h1_count == 0 {
        push(MISSING_H1, Severity::High);
    } else if signals.h1_count > 1 {
        push(MULTIPLE_H1, Severity::Medium);
    }

    if signals.word_count < MIN_WORD_COUNT {
        push(THIN_CONTENT, Severity::Medium);
    }

    if signals.headings.h2.is_empty() {
        push(MISSING_H2, Severity::Medium);
    }
    if !signals.headings.h3.is_empty() && signals.headings.h2.is_empty() {
        push(H3_WITHOUT_H2, Severity::Medium);
    }

    if signals.images.without_alt > 0 {
        push(&images_without_alt(signals.images.without_alt), Severity::High);
    }

    if signals.links.broken > 0 {
        push(&broken_links(signals.links.broken), Severity::High);
    }
    if signals.links.internal == 0 {
        push(NO_INTERNAL_LINKS, Severity::Medium);
    }

    if signals.readability_score < READABILITY_HARD_THRESHOLD {
        push(HARD_TO_READ, Severity::Medium);
    } else if signals.readability_score < READABILITY_FAIR_THRESHOLD {
        push(FAIR_READABILITY, Severity::Low);
    }

    if !signals.url_structure.is_clean {
        push(DYNAMIC_URL, Severity::Medium);
    }
    if signals.url_structure.length > MAX_RECOMMENDED_URL_LENGTH {
        push(URL_TOO_LONG, Severity::Low);
    }

    if !has_structured_data(signals.structured_data) {
        push(MISSING_STRUCTURED_DATA, Severity::Medium);
    }

    if signals.meta_tags.viewport.is_none() {
        push(MISSING_VIEWPORT, Severity::High);
    }
    if !signals.meta_tags.has_complete_open_graph() {
        push(INCOMPLETE_OPEN_GRAPH, Severity::Medium);
    }
    if signals.meta_tags.twitter_card.is_none() {
        push(MISSING_TWITTER_CARD, Severity::Low);
    }

    if signals.performance_score < PERFORMANCE_POOR_THRESHOLD {
        push(LOW_PERFORMANCE, Severity::High);
    } else if signals.performance_score < PERFORMANCE_GOOD_THRESHOLD {
        push(MEDIOCRE_PERFORMANCE, Severity::Medium);
    }

    push(URL_FRIENDLINESS_TIP, Severity::Low);
    push(MOBILE_FRIENDLINESS_TIP, Severity::Medium);

    recommendations
}
