//! Flarum MCP Core
//!
//! Tag resolution and validation engine behind the `create_discussion` MCP
//! tool. The binary crate only wires this library to a stdio transport.
//!
//! ## Publishing
//!
//! A publish call selects tags, validates them against the forum taxonomy,
//! resolves slugs to ids and creates the discussion, retrying once after a
//! credential refresh if the forum answers 401:
//!
//! ```rust,ignore
//! use flarum_mcp_core::{ConfigLoader, HttpForumApi, PublishCoordinator, TagSelectionRequest};
//!
//! let config = ConfigLoader::new().load()?;
//! let api = Arc::new(HttpForumApi::new(&config, logger.clone())?);
//! let coordinator = PublishCoordinator::from_config(&config, api, logger);
//!
//! let post = coordinator
//!     .publish("Title", "Body", &TagSelectionRequest::new("shenghuo,jiankang"))
//!     .await?;
//! println!("{}", post.permalink);
//! ```

pub mod types;
pub mod secrets;
pub mod logging;
pub mod config;
pub mod api;
pub mod auth;
pub mod taxonomy;
pub mod publish;
pub mod tools;

// Re-export commonly used types
pub use types::{
    Tag, TaxonomySnapshot,
    Credential, CredentialSource,
    NewDiscussion, PublishedPost, TagSelectionRequest,
};

pub use secrets::{SecretStore, EnvSecretStore, MemorySecretStore};

pub use logging::{Logger, SharedLogger, NoOpLogger, ConsoleLogger, MemoryLogger};

pub use config::{
    ConfigError, ConfigLoader, ConfigResult, CredentialConfig, FileConfigSource, ForumConfig,
    TagPolicy,
};

pub use api::{ApiError, ApiResult, ForumApi, HttpForumApi, MockForumApi};

pub use auth::CredentialCache;

pub use taxonomy::{select, validate, TagError, TaxonomyCache, Verdict};

pub use publish::{ErrorKind, PublishCoordinator, PublishError, PublishResult};

pub use tools::{CreateDiscussionTool, TOOL_NAME};
