use crate::document::RawDocument;
use crate::error::Result;
use crate::schema::{CollectionDefinition, SchemaRegistry};
use std::collections::BTreeMap;

/// Interface to the external content-loading system.
///
/// Implementations match source files against the collection's pattern,
/// apply declared defaults and coercions, and validate required fields.
/// Documents handed back are assumed to conform to the collection's field
/// schema; the organizer only re-checks the title field defensively.
pub trait CollectionLoader {
    fn load(&self, name: &str, definition: &CollectionDefinition) -> Result<Vec<RawDocument>>;
}

impl SchemaRegistry {
    /// Load every registered collection, in collection-name order.
    /// Fails fast on the first collection the loader rejects.
    pub fn load_all<L: CollectionLoader>(
        &self,
        loader: &L,
    ) -> Result<BTreeMap<String, Vec<RawDocument>>> {
        let mut loaded = BTreeMap::new();
        for (name, definition) in self.iter() {
            loaded.insert(name.clone(), loader.load(name, definition)?);
        }
        Ok(loaded)
    }
}
