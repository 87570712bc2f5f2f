//! Candidate extraction and type normalization.

use serde_json::Value;
use studygate_core::{ModuleDetail, RelatedResource, ResourceType};
use tracing::debug;

/// Default relevance for module-level resources missing a score.
pub const MODULE_DEFAULT_RELEVANCE: u8 = 80;

/// Default relevance for section-level resources missing a score.
pub const SECTION_DEFAULT_RELEVANCE: u8 = 70;

/// Placeholder title for module-level resources missing one.
const DEFAULT_TITLE: &str = "リソース";

/// Ordered keyword table for type normalization. First match wins, so the
/// order is part of the contract: reordering changes the outcome for
/// inputs matching several keywords. Each entry carries the localized
/// display label as an extra synonym so upstream Japanese type strings
/// normalize too.
const TYPE_KEYWORDS: &[(&[&str], ResourceType)] = &[
    (
        &["documentation", "official", "公式", "ドキュメント"],
        ResourceType::OfficialDocumentation,
    ),
    (&["tutorial", "チュートリアル"], ResourceType::Tutorial),
    (&["example", "サンプル"], ResourceType::Example),
    (&["article", "記事"], ResourceType::Article),
    (&["video", "動画"], ResourceType::Video),
    (&["github", "repository"], ResourceType::Github),
    (&["community", "コミュニティ"], ResourceType::Community),
    (&["book", "書籍"], ResourceType::Book),
];

/// Normalize a raw type string against the keyword table.
///
/// Case-insensitive substring match; anything unmatched or missing maps
/// to [`ResourceType::Other`].
pub fn map_resource_type(raw: Option<&str>) -> ResourceType {
    let raw = match raw {
        Some(s) => s.to_lowercase(),
        None => return ResourceType::Other,
    };

    for (keywords, ty) in TYPE_KEYWORDS {
        if keywords.iter().any(|kw| raw.contains(kw)) {
            return *ty;
        }
    }
    ResourceType::Other
}

/// Read a relevance score off a raw record, clamped into [0, 100].
fn record_relevance(record: &Value, default: u8) -> u8 {
    match record.get("relevance").and_then(Value::as_f64) {
        Some(n) => n.clamp(0.0, 100.0) as u8,
        None => default,
    }
}

fn record_tags(record: &Value) -> Vec<String> {
    match record.get("tags").and_then(Value::as_array) {
        Some(items) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
        None => Vec::new(),
    }
}

/// Build one resource from a raw record.
///
/// A candidate is usable only if it is an object with a non-empty `url`
/// string; anything else is dropped silently since malformed records are
/// expected noise from the generator, not an error.
fn build_resource(
    record: &Value,
    id: String,
    fallback_title: &str,
    default_relevance: u8,
    section_id: Option<&str>,
) -> Option<RelatedResource> {
    let url = match record.get("url").and_then(Value::as_str) {
        Some(u) if !u.is_empty() => u.to_string(),
        _ => return None,
    };

    let title = match record.get("title").and_then(Value::as_str) {
        Some(t) if !t.is_empty() => t.to_string(),
        _ => fallback_title.to_string(),
    };
    let description = record
        .get("description")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    Some(RelatedResource {
        id,
        title,
        url,
        description,
        resource_type: map_resource_type(record.get("type").and_then(Value::as_str)),
        relevance: record_relevance(record, default_relevance),
        section_id: section_id.map(str::to_string),
        tags: record_tags(record),
    })
}

/// Extract every usable resource from a module.
///
/// Module-level records come first (ids `module-resource-<i>`), then each
/// section's records in section order (ids `section-<si>-resource-<ri>`,
/// with `section_id` pointing back at the owning section).
pub fn extract_resources(module: &ModuleDetail) -> Vec<RelatedResource> {
    let mut out = Vec::new();

    if let Some(records) = &module.resources {
        for (i, record) in records.iter().enumerate() {
            if let Some(resource) = build_resource(
                record,
                format!("module-resource-{i}"),
                DEFAULT_TITLE,
                MODULE_DEFAULT_RELEVANCE,
                None,
            ) {
                out.push(resource);
            }
        }
    }

    if let Some(sections) = &module.sections {
        for (si, section) in sections.iter().enumerate() {
            let Some(records) = &section.resources else {
                continue;
            };
            let fallback_title = format!("{}のリソース", section.title);
            for (ri, record) in records.iter().enumerate() {
                if let Some(resource) = build_resource(
                    record,
                    format!("section-{si}-resource-{ri}"),
                    &fallback_title,
                    SECTION_DEFAULT_RELEVANCE,
                    Some(&section.id),
                ) {
                    out.push(resource);
                }
            }
        }
    }

    debug!("extracted {} resources from module {}", out.len(), module.id);
    out
}
