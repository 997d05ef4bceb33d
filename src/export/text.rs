//! Plain-text reports.

use chrono::{DateTime, Utc};
use strum::IntoEnumIterator;

use crate::comparison::{ComparisonMetric, ComparisonSummary};
use crate::models::{count_by_severity, AnalysisResult, Severity};
use crate::scoring::ScoreRating;

use super::FailedAnalysis;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

fn section(out: &mut String, title: &str) {
    out.push('\n');
    out.push_str(&format!("== {} ==\n", title));
}

fn line(out: &mut String, text: impl AsRef<str>) {
    out.push_str(text.as_ref());
    out.push('\n');
}

fn or_none(value: Option<&str>) -> &str {
    value.unwrap_or("(none)")
}

fn format_metric(metric: ComparisonMetric, value: f64) -> String {
    match metric {
        ComparisonMetric::Images => format!("{:.0}%", value * 100.0),
        _ => format!("{:.0}", value),
    }
}

/// Renders the report of one analysis.
pub fn render_result_text(result: &AnalysisResult, generated_at: &DateTime<Utc>) -> String {
    let mut out = String::new();
    line(&mut out, "SEO analysis report");
    line(&mut out, format!("URL: {}", result.url));
    line(
        &mut out,
        format!("Generated: {}", generated_at.format(TIMESTAMP_FORMAT)),
    );

    section(&mut out, "Overview");
    if result.title.is_empty() {
        line(&mut out, "Title: (missing)");
    } else {
        line(
            &mut out,
            format!(
                "Title: {} ({} chars)",
                result.title,
                result.title.chars().count()
            ),
        );
    }
    if result.meta_description.is_empty() {
        line(&mut out, "Meta description: (missing)");
    } else {
        line(
            &mut out,
            format!(
                "Meta description: {} ({} chars)",
                result.meta_description,
                result.meta_description.chars().count()
            ),
        );
    }
    line(
        &mut out,
        format!("Canonical: {}", or_none(result.canonical.as_deref())),
    );
    line(
        &mut out,
        format!(
            "Words: {} (content score {}/100)",
            result.word_count, result.content_score
        ),
    );
    line(
        &mut out,
        format!(
            "Readability: {}/100 ({})",
            result.readability_score,
            ScoreRating::from_score(result.readability_score)
        ),
    );
    line(
        &mut out,
        format!(
            "Performance: {}/100 ({})",
            result.performance_score,
            ScoreRating::from_score(result.performance_score)
        ),
    );
    for metric in &result.performance_metrics {
        line(&mut out, format!("  {}: {:.2}", metric.name, metric.score));
    }

    section(&mut out, "Meta tags");
    let tags = &result.meta_tags;
    for (name, value) in [
        ("robots", &tags.robots),
        ("viewport", &tags.viewport),
        ("og:title", &tags.og_title),
        ("og:description", &tags.og_description),
        ("og:image", &tags.og_image),
        ("twitter:card", &tags.twitter_card),
    ] {
        line(&mut out, format!("{}: {}", name, or_none(value.as_deref())));
    }

    section(&mut out, "Headings");
    let headings = &result.headings;
    for (level, texts) in [
        (1, &headings.h1),
        (2, &headings.h2),
        (3, &headings.h3),
        (4, &headings.h4),
        (5, &headings.h5),
        (6, &headings.h6),
    ] {
        if texts.is_empty() {
            line(&mut out, format!("H{} (0)", level));
        } else {
            line(
                &mut out,
                format!("H{} ({}): {}", level, texts.len(), texts.join(" | ")),
            );
        }
    }

    section(&mut out, "Images");
    line(
        &mut out,
        format!(
            "Total: {}, with alt: {}, without alt: {}",
            result.images.total, result.images.with_alt, result.images.without_alt
        ),
    );
    for image in result.images.images.iter().filter(|i| !i.has_alt) {
        line(&mut out, format!("  missing alt: {}", image.src));
    }

    section(&mut out, "Links");
    let links = &result.links;
    line(
        &mut out,
        format!(
            "Total: {}, internal: {}, external: {}, broken: {}",
            links.total, links.internal, links.external, links.broken
        ),
    );
    for href in &links.broken_links {
        line(&mut out, format!("  broken: {}", href));
    }

    section(&mut out, "Keywords");
    if result.keyword_density.is_empty() {
        line(&mut out, "No keywords found");
    }
    for (rank, keyword) in result.keyword_density.iter().enumerate() {
        line(
            &mut out,
            format!(
                "{:>2}. {:<24} {:>4}  {:.2}%",
                rank + 1,
                keyword.keyword,
                keyword.count,
                keyword.density
            ),
        );
    }

    section(&mut out, "Structured data");
    for entry in &result.structured_data {
        match (&entry.properties, entry.found) {
            (Some(properties), true) if !properties.is_empty() => line(
                &mut out,
                format!("{} (found): {}", entry.schema_type, properties.join(", ")),
            ),
            (_, true) => line(&mut out, format!("{} (found)", entry.schema_type)),
            (_, false) => line(&mut out, format!("{} (not found)", entry.schema_type)),
        }
    }

    section(&mut out, "Recommendations");
    for severity in Severity::iter() {
        let count = count_by_severity(&result.recommendations, severity);
        if count == 0 {
            continue;
        }
        line(&mut out, format!("{} ({}):", severity, count));
        for recommendation in result
            .recommendations
            .iter()
            .filter(|r| r.severity == severity)
        {
            line(&mut out, format!("  - {}", recommendation.text));
        }
    }

    out
}

/// Renders the report of a multi-site comparison.
///
/// `summary` is `None` when fewer than two analyses succeeded; the sites and
/// failures are still listed.
pub fn render_comparison_text(
    results: &[AnalysisResult],
    summary: Option<&ComparisonSummary>,
    failures: &[FailedAnalysis],
    generated_at: &DateTime<Utc>,
) -> String {
    let mut out = String::new();
    line(&mut out, "SEO comparison report");
    line(&mut out, format!("Compared {} site(s)", results.len()));
    line(
        &mut out,
        format!("Generated: {}", generated_at.format(TIMESTAMP_FORMAT)),
    );

    section(&mut out, "Sites");
    for (index, result) in results.iter().enumerate() {
        line(&mut out, format!("[{}] {}", index + 1, result.url));
    }

    if let Some(summary) = summary {
        section(&mut out, "Overview");
        let mut header = format!("{:<20}", "Metric");
        for index in 0..results.len() {
            header.push_str(&format!("{:>8}", format!("[{}]", index + 1)));
        }
        header.push_str("  Best");
        line(&mut out, header);

        for metric in ComparisonMetric::iter() {
            let mut row = format!("{:<20}", metric.label());
            for result in results {
                row.push_str(&format!(
                    "{:>8}",
                    format_metric(metric, metric.value(result))
                ));
            }
            if let Some(leader) = summary.leader(metric) {
                row.push_str(&format!("  [{}]", leader.index + 1));
            }
            line(&mut out, row);
        }

        section(&mut out, "Common keywords");
        if summary.common_keywords.is_empty() {
            line(&mut out, "No common keywords found");
        } else {
            line(&mut out, summary.common_keywords.join(", "));
        }

        section(&mut out, "Common issues");
        if summary.common_issues.is_empty() {
            line(&mut out, "No common issues detected");
        }
        for issue in &summary.common_issues {
            line(
                &mut out,
                format!("  - {} (in {} sites)", issue.text, issue.count),
            );
        }
    }

    section(&mut out, "High-priority issues by site");
    for (index, result) in results.iter().enumerate() {
        line(&mut out, format!("[{}] {}", index + 1, result.url));
        let high: Vec<&str> = result
            .recommendations
            .iter()
            .filter(|r| r.severity == Severity::High)
            .map(|r| r.text.as_str())
            .collect();
        if high.is_empty() {
            line(&mut out, "  No critical issues detected");
        }
        for text in high {
            line(&mut out, format!("  - {}", text));
        }
    }

    if !failures.is_empty() {
        section(&mut out, "Failures");
        for failure in failures {
            line(&mut out, format!("{}: {}", failure.url, failure.error));
        }
    }

    out
}
