//! Structured data (JSON-LD) analysis.
//!
//! Each `<script type="application/ld+json">` body is parsed with `serde_json`.
//! Blocks that fail to parse are skipped; they are counted but never reported
//! as errors.

use serde_json::Value;

use crate::models::StructuredData;

/// Schema types reported as "not found" when a page has no valid JSON-LD.
pub const COMMON_SCHEMA_TYPES: &[&str] = &[
    "Organization",
    "Person",
    "WebSite",
    "Article",
    "Product",
    "BreadcrumbList",
];

/// Outcome of scanning a page's JSON-LD blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuredDataScan {
    /// Found entries, or the not-found placeholders
    pub entries: Vec<StructuredData>,
    /// Blocks whose body was not valid JSON
    pub invalid_blocks: usize,
}

/// Reads `@type`: a string, or an array of strings joined with ", ".
fn schema_type(value: &Value) -> String {
    match value.get("@type") {
        Some(Value::String(t)) => t.clone(),
        Some(Value::Array(types)) => {
            let names: Vec<&str> = types.iter().filter_map(Value::as_str).collect();
            if names.is_empty() {
                "Unknown".to_string()
            } else {
                names.join(", ")
            }
        }
        _ => "Unknown".to_string(),
    }
}

fn found_entry(value: &Value) -> StructuredData {
    let properties = value
        .as_object()
        .map(|object| object.keys().cloned().collect())
        .unwrap_or_default();
    StructuredData {
        schema_type: schema_type(value),
        found: true,
        properties: Some(properties),
    }
}

fn unknown_entry() -> StructuredData {
    StructuredData {
        schema_type: "Unknown".to_string(),
        found: true,
        properties: Some(Vec::new()),
    }
}

/// Entries of one parsed block, or `None` when the block is not an object or array.
fn block_entries(value: &Value) -> Option<Vec<StructuredData>> {
    match value {
        Value::Array(items) => {
            let entries: Vec<StructuredData> = items
                .iter()
                .filter_map(block_entries)
                .flatten()
                .collect();
            if entries.is_empty() {
                Some(vec![unknown_entry()])
            } else {
                Some(entries)
            }
        }
        Value::Object(object) => match object.get("@graph") {
            Some(graph) if graph.as_array().is_some_and(|nodes| !nodes.is_empty()) => {
                block_entries(graph)
            }
            _ => Some(vec![found_entry(value)]),
        },
        _ => None,
    }
}

/// Analyzes the raw JSON-LD blocks of a page.
///
/// A block holding a JSON array, or an object with a non-empty `@graph`, yields
/// one entry per node; an empty array still counts as one `Unknown` entry.
/// Blocks that are not valid JSON, or whose top level is neither an object nor
/// an array, are skipped and counted as invalid. When no block yields an entry,
/// one `found: false` placeholder per `COMMON_SCHEMA_TYPES` entry is returned
/// instead.
pub fn analyze_structured_data(blocks: &[String]) -> StructuredDataScan {
    let mut entries = Vec::new();
    let mut invalid_blocks = 0;

    for block in blocks {
        match serde_json::from_str::<Value>(block.trim()) {
            Ok(value) => match block_entries(&value) {
                Some(found) => entries.extend(found),
                None => {
                    log::debug!("Skipping JSON-LD block that is not an object: {}", value);
                    invalid_blocks += 1;
                }
            },
            Err(e) => {
                log::debug!("Skipping invalid JSON-LD block: {}", e);
                invalid_blocks += 1;
            }
        }
    }

    if entries.is_empty() {
        entries = COMMON_SCHEMA_TYPES
            .iter()
            .map(|schema_type| StructuredData {
                schema_type: (*schema_type).to_string(),
                found: false,
                properties: None,
            })
            .collect();
    }

    StructuredDataScan {
        entries,
        invalid_blocks,
    }
}

/// True when at least one entry was actually found on the page.
pub fn has_structured_data(entries: &[StructuredData]) -> bool {
    entries.iter().any(|entry| entry.found)
}
