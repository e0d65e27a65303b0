//! Discussion publishing

mod coordinator;
mod error;

pub use coordinator::{PublishCoordinator, CONTENT_SOFT_LIMIT};
pub use error::{ErrorKind, PublishError, PublishResult};
