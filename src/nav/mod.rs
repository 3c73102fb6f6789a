// Navigation tree handed to the rendering layer.
// Nodes carry fully resolved entries; bare path strings never enter the tree.

use crate::document::NormalizedEntry;
use crate::error::{DocNavError, Result};
use crate::organizer;
use serde::Serialize;

/// A titled, ordered cluster of documents within a space
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Group {
    pub title: String,
    pub documents: Vec<NormalizedEntry>,
}

impl Group {
    pub fn new(title: impl Into<String>, documents: Vec<NormalizedEntry>) -> Result<Self> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(DocNavError::EmptyTitle("group"));
        }
        Ok(Group { title, documents })
    }
}

/// A leaf navigation node wrapping a single resolved entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentRef {
    pub document: NormalizedEntry,
}

/// A node in a space's content tree. The serialized form carries a `type`
/// tag ("document" or "group") for the renderer to discriminate on.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentNode {
    Document(DocumentRef),
    Group(Group),
}

impl ContentNode {
    /// Build a document node by resolving a path suffix against the given
    /// entries. Resolution happens here, at construction time.
    pub fn document(entries: &[NormalizedEntry], suffix: &str) -> Result<Self> {
        let entry = organizer::locate(entries, suffix)?;
        Ok(ContentNode::Document(DocumentRef {
            document: entry.clone(),
        }))
    }

    pub fn group(title: impl Into<String>, documents: Vec<NormalizedEntry>) -> Result<Self> {
        Ok(ContentNode::Group(Group::new(title, documents)?))
    }

    fn entries(&self) -> &[NormalizedEntry] {
        match self {
            ContentNode::Document(doc) => std::slice::from_ref(&doc.document),
            ContentNode::Group(group) => &group.documents,
        }
    }
}

impl From<Group> for ContentNode {
    fn from(group: Group) -> Self {
        ContentNode::Group(group)
    }
}

/// A top-level section of the site's navigation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Space {
    pub title: String,
    /// Opaque icon handle for the renderer
    pub icon: Option<String>,
    /// Flat entry list for lookup. Always a superset of the entries placed
    /// in `content`; may also hold entries not yet placed in the tree.
    pub documents: Vec<NormalizedEntry>,
    pub content: Vec<ContentNode>,
}

impl Space {
    /// Assemble a space. Any entry appearing in `content` but absent from
    /// `documents` is appended to `documents`, keeping the flat list and the
    /// tree consistent.
    pub fn new(
        title: impl Into<String>,
        documents: Vec<NormalizedEntry>,
        content: Vec<ContentNode>,
        icon: Option<String>,
    ) -> Result<Self> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(DocNavError::EmptyTitle("space"));
        }

        let mut documents = documents;
        for node in &content {
            for entry in node.entries() {
                let listed = documents
                    .iter()
                    .any(|d| d.collection == entry.collection && d.id == entry.id);
                if !listed {
                    documents.push(entry.clone());
                }
            }
        }

        Ok(Space {
            title,
            icon,
            documents,
            content,
        })
    }
}

/// The ordered set of spaces handed to the renderer. Built once per site
/// build; space order is the caller's display order, preserved exactly.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavigationRoot {
    pub spaces: Vec<Space>,
}

impl NavigationRoot {
    pub fn new(spaces: Vec<Space>) -> Self {
        NavigationRoot { spaces }
    }
}
