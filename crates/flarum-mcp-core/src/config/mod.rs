//! Configuration
//!
//! Configuration is built once at process start and passed down explicitly:
//! - `ForumConfig`: the validated result
//! - `FileConfigSource`: YAML file (user level by default)
//! - `ConfigLoader`: merges the file with a `SecretStore` (environment by default)

mod settings;
mod file;
mod loader;

pub use settings::{
    ConfigError, ConfigResult, CredentialConfig, ForumConfig, TagPolicy,
    DEFAULT_MAX_TAGS, DEFAULT_MIN_TAGS, DEFAULT_TIMEOUT_SECS,
};
pub use file::{ConfigFile, FileConfigSource, TagSection};
pub use loader::ConfigLoader;
