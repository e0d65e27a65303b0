//! Core domain types
//!
//! This module contains the types shared by the caches, the validator and
//! the publish coordinator.

mod tag;
mod credential;
mod discussion;

pub use tag::{Tag, TaxonomySnapshot};
pub use credential::{Credential, CredentialSource};
pub use discussion::{NewDiscussion, PublishedPost, TagSelectionRequest};
