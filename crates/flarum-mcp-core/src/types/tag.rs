//! Tag and taxonomy snapshot types

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A single tag in the forum's taxonomy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Opaque taxonomy identifier (used in API relationships)
    pub id: String,
    /// Stable human-readable key, unique within the taxonomy
    pub slug: String,
    /// Display name
    pub name: String,
    /// Optional description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Identifier of the parent tag, `None` for top-level tags
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    /// Forum-side "primary" flag
    #[serde(default)]
    pub is_primary: bool,
    /// Sort position (secondary tags usually have none)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<i32>,
}

impl Tag {
    /// Create a top-level tag
    pub fn new(id: impl Into<String>, slug: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            slug: slug.into(),
            name: name.into(),
            description: None,
            parent_id: None,
            is_primary: false,
            position: None,
        }
    }

    /// Set the parent reference
    pub fn with_parent(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Mark the tag as primary with a sort position
    pub fn primary(mut self, position: i32) -> Self {
        self.is_primary = true;
        self.position = Some(position);
        self
    }

    /// Whether this tag sits below another tag
    pub fn is_secondary(&self) -> bool {
        self.parent_id.is_some()
    }
}

/// Immutable snapshot of the forum's full tag list
///
/// Keeps the order the forum returned and indexes tags by slug and by id.
#[derive(Debug, Clone, Default)]
pub struct TaxonomySnapshot {
    tags: Vec<Tag>,
    by_slug: HashMap<String, usize>,
    by_id: HashMap<String, usize>,
}

impl TaxonomySnapshot {
    /// Build a snapshot from an ordered tag list
    ///
    /// If two tags share a slug the first one wins.
    pub fn new(tags: Vec<Tag>) -> Self {
        let mut by_slug = HashMap::with_capacity(tags.len());
        let mut by_id = HashMap::with_capacity(tags.len());
        for (index, tag) in tags.iter().enumerate() {
            by_slug.entry(tag.slug.clone()).or_insert(index);
            by_id.entry(tag.id.clone()).or_insert(index);
        }
        Self { tags, by_slug, by_id }
    }

    /// An empty snapshot ("no validation possible")
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// All tags in forum order
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Look up a tag by slug
    pub fn by_slug(&self, slug: &str) -> Option<&Tag> {
        self.by_slug.get(slug).map(|&i| &self.tags[i])
    }

    /// Look up a tag by identifier
    pub fn by_id(&self, id: &str) -> Option<&Tag> {
        self.by_id.get(id).map(|&i| &self.tags[i])
    }

    /// Parent of a tag, if it has one and it is present in this snapshot
    pub fn parent_of(&self, tag: &Tag) -> Option<&Tag> {
        tag.parent_id.as_deref().and_then(|id| self.by_id(id))
    }
}

impl From<Vec<Tag>> for TaxonomySnapshot {
    fn from(tags: Vec<Tag>) -> Self {
        Self::new(tags)
    }
}
