//! Parent/child consistency rules for a tag selection
//!
//! Rules, first failure wins:
//! 1. every slug exists in the taxonomy
//! 2. secondary tags (those with a parent) need at least one primary tag
//! 3. each secondary tag's own parent must be among the selected primary tags
//!
//! Rule 2 only short-circuits the case with no primary tag at all. Rule 3 is
//! what gates acceptance: a primary tag from another branch does not satisfy
//! a secondary tag.

use std::collections::HashSet;

use super::error::{TagError, Verdict};
use crate::types::{Tag, TaxonomySnapshot};

/// Check a selection against the taxonomy
pub fn validate(selected: &[String], taxonomy: &TaxonomySnapshot) -> Verdict {
    let mut tags: Vec<&Tag> = Vec::with_capacity(selected.len());
    for slug in selected {
        let tag = taxonomy
            .by_slug(slug)
            .ok_or_else(|| TagError::UnknownTag(slug.clone()))?;
        tags.push(tag);
    }

    let (secondary, primary): (Vec<&Tag>, Vec<&Tag>) =
        tags.into_iter().partition(|tag| tag.is_secondary());

    if let Some(first) = secondary.first() {
        if primary.is_empty() {
            return Err(TagError::OrphanSecondary(first.slug.clone()));
        }
    }

    let primary_slugs: HashSet<&str> = primary.iter().map(|t| t.slug.as_str()).collect();
    for tag in &secondary {
        match taxonomy.parent_of(tag) {
            Some(parent) if primary_slugs.contains(parent.slug.as_str()) => {}
            Some(parent) => {
                return Err(TagError::MissingParent {
                    tag: tag.slug.clone(),
                    parent: parent.slug.clone(),
                })
            }
            None => {
                return Err(TagError::MissingParent {
                    tag: tag.slug.clone(),
                    parent: tag.parent_id.clone().unwrap_or_default(),
                })
            }
        }
    }

    Ok(())
}
