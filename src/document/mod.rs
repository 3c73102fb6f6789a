// Document shapes flowing from the loader through the organizer

use serde::{Deserialize, Serialize};

/// Rendered body of a document. Opaque to this crate: produced by the
/// external loader and handed through to the renderer untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderedContent {
    pub html: String,
    #[serde(default)]
    pub metadata: Option<serde_yaml::Value>,
}

impl RenderedContent {
    pub fn new(html: impl Into<String>) -> Self {
        RenderedContent {
            html: html.into(),
            metadata: None,
        }
    }
}

/// A validated document as produced by the loader for one matched source
/// file. Read-only to the organizer; `data` conforms to the collection's
/// field schema (defaults applied, required fields present).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawDocument {
    /// Unique within its collection
    pub id: String,
    pub collection: String,
    pub path: String,
    pub rendered: RenderedContent,
    pub data: serde_yaml::Value,
}

/// Canonical entry shape used by the organizer and the navigation tree.
/// Exactly one entry exists per raw document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedEntry {
    pub id: String,
    pub collection: String,
    /// Slugified display title derived from the data record's title field.
    /// Display-safe, not globally unique.
    pub title: String,
    pub path: String,
    pub rendered: RenderedContent,
    pub data: serde_yaml::Value,
}
