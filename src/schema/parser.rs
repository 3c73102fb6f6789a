use super::{CollectionDefinition, SchemaRegistry};
use crate::error::Result;
use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Deserialize)]
struct RegistryFile {
    #[serde(default)]
    collections: BTreeMap<String, CollectionDefinition>,
}

/// Parse a YAML registry declaration into a SchemaRegistry
pub fn parse_registry_str(content: &str) -> Result<SchemaRegistry> {
    let file: RegistryFile = serde_yaml::from_str(content)?;
    let mut registry = SchemaRegistry::new();
    for (name, definition) in file.collections {
        registry.define_collection(&name, definition)?;
    }
    Ok(registry)
}
