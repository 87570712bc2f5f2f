//! Related resource model.

use serde::{Deserialize, Serialize};

/// A learning resource referenced from generated module content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedResource {
    /// Unique identifier (assigned by the extractor)
    pub id: String,

    /// Title
    pub title: String,

    /// Link target, never empty
    pub url: String,

    /// Description
    pub description: String,

    /// Normalized resource type
    #[serde(rename = "type")]
    pub resource_type: ResourceType,

    /// Relevance score in [0, 100]
    pub relevance: u8,

    /// Identifier of the owning section, when extracted from one.
    /// A cross-reference used for relevance boosting, not an ownership link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_id: Option<String>,

    /// Tags
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// Closed vocabulary of resource types.
///
/// The snake_case identifiers are a cross-layer contract: other layers
/// persist and display them, so they must stay stable across versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    /// Official documentation
    OfficialDocumentation,
    /// Tutorial
    Tutorial,
    /// Worked example or sample code
    Example,
    /// Article or blog post
    Article,
    /// Video
    Video,
    /// GitHub repository
    Github,
    /// Community forum or discussion
    Community,
    /// Book
    Book,
    /// Anything that fits no other type
    Other,
}

impl ResourceType {
    /// Every type, in canonical order. Grouping and display iterate this.
    pub const ALL: [ResourceType; 9] = [
        ResourceType::OfficialDocumentation,
        ResourceType::Tutorial,
        ResourceType::Example,
        ResourceType::Article,
        ResourceType::Video,
        ResourceType::Github,
        ResourceType::Community,
        ResourceType::Book,
        ResourceType::Other,
    ];

    /// Stable wire identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::OfficialDocumentation => "official_documentation",
            ResourceType::Tutorial => "tutorial",
            ResourceType::Example => "example",
            ResourceType::Article => "article",
            ResourceType::Video => "video",
            ResourceType::Github => "github",
            ResourceType::Community => "community",
            ResourceType::Book => "book",
            ResourceType::Other => "other",
        }
    }

    /// Localized display label.
    pub fn label(&self) -> &'static str {
        match self {
            ResourceType::OfficialDocumentation => "公式ドキュメント",
            ResourceType::Tutorial => "チュートリアル",
            ResourceType::Example => "サンプル",
            ResourceType::Article => "記事",
            ResourceType::Video => "動画",
            ResourceType::Github => "GitHub",
            ResourceType::Community => "コミュニティ",
            ResourceType::Book => "書籍",
            ResourceType::Other => "その他",
        }
    }

    /// Icon identifier for the presentation layer.
    pub fn icon(&self) -> &'static str {
        match self {
            ResourceType::OfficialDocumentation => "book-open",
            ResourceType::Tutorial => "graduation-cap",
            ResourceType::Example => "code",
            ResourceType::Article => "file-text",
            ResourceType::Video => "video",
            ResourceType::Github => "github",
            ResourceType::Community => "users",
            ResourceType::Book => "book",
            ResourceType::Other => "link",
        }
    }
}

impl std::fmt::Display for ResourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_identifiers_are_stable() {
        assert_eq!(
            ResourceType::OfficialDocumentation.as_str(),
            "official_documentation"
        );
        assert_eq!(ResourceType::Github.as_str(), "github");
        let json = serde_json::to_string(&ResourceType::OfficialDocumentation).unwrap();
        assert_eq!(json, "\"official_documentation\"");
    }

    #[test]
    fn test_all_covers_every_type_once() {
        let mut seen = std::collections::HashSet::new();
        for ty in ResourceType::ALL {
            assert!(seen.insert(ty.as_str()));
        }
        assert_eq!(seen.len(), 9);
    }

    #[test]
    fn test_display_tables_are_total() {
        for ty in ResourceType::ALL {
            assert!(!ty.label().is_empty());
            assert!(!ty.icon().is_empty());
        }
    }
}
