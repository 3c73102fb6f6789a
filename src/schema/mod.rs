mod parser;
mod types;

pub use parser::parse_registry_str;
pub use types::{CollectionDefinition, FieldDefinition, FieldType};

use crate::error::{DocNavError, Result};
use std::collections::{BTreeMap, HashMap};

/// Explicit collection registry handed to the loading pipeline.
/// Constructed by the caller; nothing registers at module load.
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    collections: BTreeMap<String, CollectionDefinition>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        SchemaRegistry::default()
    }

    /// Register a collection under a unique name.
    /// Fails if the name is already taken or the source pattern is not a
    /// valid glob.
    pub fn define_collection(
        &mut self,
        name: &str,
        definition: CollectionDefinition,
    ) -> Result<()> {
        if self.collections.contains_key(name) {
            return Err(DocNavError::DuplicateCollection(name.to_string()));
        }
        glob::Pattern::new(&definition.pattern).map_err(|e| {
            DocNavError::Schema(format!(
                "Invalid source pattern for collection '{name}': {e}"
            ))
        })?;
        self.collections.insert(name.to_string(), definition);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&CollectionDefinition> {
        self.collections.get(name)
    }

    /// Iterate collections in name order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &CollectionDefinition)> {
        self.collections.iter()
    }

    pub fn len(&self) -> usize {
        self.collections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }
}

/// The field set shared by every document collection: a required string
/// title and a hidden flag defaulting to false. Callers extend this with
/// collection-specific fields.
pub fn common_document_fields() -> HashMap<String, FieldDefinition> {
    let mut fields = HashMap::new();
    fields.insert(
        "title".to_string(),
        FieldDefinition::required(FieldType::String),
    );
    fields.insert(
        "hidden".to_string(),
        FieldDefinition::with_default(FieldType::Boolean, serde_yaml::Value::Bool(false)),
    );
    fields
}
