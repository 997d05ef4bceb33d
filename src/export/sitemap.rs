//! Sitemap of analyzed URLs.
//!
//! The registry lives for one run only; it is rendered once and never read back.

use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use std::path::Path;

const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";
const CHANGE_FREQUENCY: &str = "weekly";
const PRIORITY: &str = "0.8";
const ROOT_CHANGE_FREQUENCY: &str = "daily";
const ROOT_PRIORITY: &str = "1.0";

#[derive(Debug, Clone, PartialEq, Eq)]
struct SitemapEntry {
    url: String,
    last_modified: DateTime<Utc>,
}

/// Analyzed URLs in insertion order, without duplicates.
///
/// An optional site root is listed first, ahead of the analyzed URLs.
#[derive(Debug, Clone, Default)]
pub struct SitemapRegistry {
    root: Option<String>,
    entries: Vec<SitemapEntry>,
}

fn escape_xml(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn push_url(
    xml: &mut String,
    url: &str,
    last_modified: &DateTime<Utc>,
    change_frequency: &str,
    priority: &str,
) {
    xml.push_str("  <url>\n");
    xml.push_str(&format!("    <loc>{}</loc>\n", escape_xml(url)));
    xml.push_str(&format!(
        "    <lastmod>{}</lastmod>\n",
        last_modified.to_rfc3339_opts(SecondsFormat::Millis, true)
    ));
    xml.push_str(&format!("    <changefreq>{}</changefreq>\n", change_frequency));
    xml.push_str(&format!("    <priority>{}</priority>\n", priority));
    xml.push_str("  </url>\n");
}

impl SitemapRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry whose sitemap always starts with `root`.
    pub fn with_root(root: &str) -> Self {
        Self {
            root: Some(root.to_string()).filter(|r| !r.is_empty()),
            entries: Vec::new(),
        }
    }

    /// Records `url` as analyzed now. Returns false if it was already present.
    pub fn add(&mut self, url: &str) -> bool {
        self.add_at(url, Utc::now())
    }

    /// Records `url` with an explicit modification time.
    pub fn add_at(&mut self, url: &str, last_modified: DateTime<Utc>) -> bool {
        if url.is_empty() || self.contains(url) || self.root.as_deref() == Some(url) {
            return false;
        }
        self.entries.push(SitemapEntry {
            url: url.to_string(),
            last_modified,
        });
        true
    }

    pub fn contains(&self, url: &str) -> bool {
        self.entries.iter().any(|e| e.url == url)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Renders a sitemap.xml document.
    pub fn render(&self) -> String {
        self.render_at(Utc::now())
    }

    /// Renders with `now` as the root entry's modification time.
    pub fn render_at(&self, now: DateTime<Utc>) -> String {
        let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str(&format!("<urlset xmlns=\"{}\">\n", SITEMAP_NAMESPACE));
        if let Some(root) = &self.root {
            push_url(&mut xml, root, &now, ROOT_CHANGE_FREQUENCY, ROOT_PRIORITY);
        }
        for entry in &self.entries {
            push_url(
                &mut xml,
                &entry.url,
                &entry.last_modified,
                CHANGE_FREQUENCY,
                PRIORITY,
            );
        }
        xml.push_str("</urlset>\n");
        xml
    }

    /// Writes the rendered sitemap to `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub async fn write_to(&self, path: &Path) -> Result<()> {
        tokio::fs::write(path, self.render())
            .await
            .context(format!("Failed to write sitemap: {}", path.display()))?;
        log::info!("Wrote sitemap with {} URL(s) to {}", self.len(), path.display());
        Ok(())
    }
}
