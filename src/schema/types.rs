use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Definition of a single collection: where its source files live and the
/// front-matter shape they must satisfy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionDefinition {
    /// Glob-style pattern matching source files, e.g. "**/*.mdx"
    pub pattern: String,
    /// Base directory the pattern is resolved against, e.g. "./content/guides"
    pub base: String,
    #[serde(default)]
    pub fields: HashMap<String, FieldDefinition>,
}

impl CollectionDefinition {
    pub fn new(
        pattern: impl Into<String>,
        base: impl Into<String>,
        fields: HashMap<String, FieldDefinition>,
    ) -> Self {
        CollectionDefinition {
            pattern: pattern.into(),
            base: base.into(),
            fields,
        }
    }
}

/// Definition of a single front-matter field.
/// Declarative only: applying defaults and coercions is the loader's job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldDefinition {
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub default: Option<serde_yaml::Value>,
    /// Whether the loader coerces raw input into the declared type
    /// (e.g. an ISO string into a date)
    #[serde(default)]
    pub coerce: bool,
}

impl FieldDefinition {
    pub fn required(field_type: FieldType) -> Self {
        FieldDefinition {
            field_type,
            required: true,
            default: None,
            coerce: false,
        }
    }

    pub fn optional(field_type: FieldType) -> Self {
        FieldDefinition {
            field_type,
            required: false,
            default: None,
            coerce: false,
        }
    }

    pub fn with_default(field_type: FieldType, default: serde_yaml::Value) -> Self {
        FieldDefinition {
            field_type,
            required: false,
            default: Some(default),
            coerce: false,
        }
    }

    /// A required field whose raw value the loader must coerce,
    /// e.g. a release date given as a string.
    pub fn coerced(field_type: FieldType) -> Self {
        FieldDefinition {
            field_type,
            required: true,
            default: None,
            coerce: true,
        }
    }
}

/// Field type enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    String,
    Boolean,
    Date,
    StringList,
}
