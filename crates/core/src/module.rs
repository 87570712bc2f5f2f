//! Learning module model - generated content with sections and resources.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A unit of generated learning content.
///
/// `content` blocks and raw `resources` records stay opaque JSON: the
/// upstream generator is schema-loose and malformed entries are expected
/// noise, filtered out by the resource extractor rather than rejected here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleDetail {
    /// Unique identifier
    pub id: String,

    /// Title
    pub title: String,

    /// Description
    pub description: String,

    /// Ordered content blocks (opaque)
    pub content: Vec<Value>,

    /// Sections, in display order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sections: Option<Vec<ModuleSection>>,

    /// Module-level raw resource records
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources: Option<Vec<Value>>,
}

/// A section of a module. Owned by its [`ModuleDetail`], no independent
/// lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleSection {
    /// Unique identifier within the module
    pub id: String,

    /// Title
    pub title: String,

    /// Section-level raw resource records
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources: Option<Vec<Value>>,
}
