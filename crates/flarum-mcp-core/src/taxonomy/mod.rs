//! Tag taxonomy: caching, selection and hierarchy validation
//!
//! - [`TaxonomyCache`] fetches the forum's tag list once per process
//! - [`select`] turns the caller's tag string into a slug list
//! - [`validate`] checks that list against the parent/child rules

mod cache;
mod error;
mod selector;
mod validator;

pub use cache::TaxonomyCache;
pub use error::{TagError, Verdict};
pub use selector::{parse_slugs, select};
pub use validator::validate;
