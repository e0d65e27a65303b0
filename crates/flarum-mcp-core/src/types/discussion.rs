//! Discussion request and result types

use serde::{Deserialize, Serialize};

/// A discussion ready to be sent to the forum
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDiscussion {
    pub title: String,
    pub content: String,
    /// Taxonomy identifiers of the attached tags
    pub tag_ids: Vec<String>,
}

/// Raw tag selection as supplied by the caller
///
/// An empty string means "use the configured defaults".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSelectionRequest {
    pub raw: String,
}

impl TagSelectionRequest {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }
}

impl From<Option<String>> for TagSelectionRequest {
    fn from(raw: Option<String>) -> Self {
        Self {
            raw: raw.unwrap_or_default(),
        }
    }
}

impl From<&str> for TagSelectionRequest {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

/// A discussion that the forum accepted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishedPost {
    /// Identifier assigned by the forum
    pub id: String,
    pub title: String,
    /// Content length in characters
    pub content_length: usize,
    /// Selected tag slugs, in selection order
    pub tags: Vec<String>,
    /// Resolved tag identifiers, same order as `tags`
    pub tag_ids: Vec<String>,
    /// Public URL of the discussion
    pub permalink: String,
}
