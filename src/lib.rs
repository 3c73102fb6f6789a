pub mod schema;
pub mod document;
pub mod loader;
pub mod organizer;
pub mod nav;
pub mod error;

pub use error::{DocNavError, Result};
pub use schema::{CollectionDefinition, FieldDefinition, FieldType, SchemaRegistry};
pub use document::{NormalizedEntry, RawDocument, RenderedContent};
pub use loader::CollectionLoader;
pub use nav::{ContentNode, DocumentRef, Group, NavigationRoot, Space};
