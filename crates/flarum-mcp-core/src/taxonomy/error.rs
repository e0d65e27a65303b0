//! Tag selection and validation errors

use thiserror::Error;

/// Why a tag selection was refused
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TagError {
    #[error("No tags provided and no default tags configured")]
    NoTagsProvided,

    #[error("Not enough tags: got {have}, need at least {need}")]
    InsufficientTags { have: usize, need: usize },

    #[error("Unknown tag '{0}'")]
    UnknownTag(String),

    #[error("Secondary tag '{0}' needs at least one primary tag in the same selection")]
    OrphanSecondary(String),

    #[error("Tag '{tag}' requires its parent tag '{parent}' to be selected as well")]
    MissingParent { tag: String, parent: String },
}

/// Outcome of hierarchy validation
pub type Verdict = Result<(), TagError>;
