//! Layered configuration loading
//!
//! Sources, lowest priority first:
//! 1. YAML config file
//! 2. Secret store (environment variables by default)

use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use super::file::{ConfigFile, FileConfigSource};
use super::settings::{
    normalize_base_url, ConfigError, ConfigResult, CredentialConfig, ForumConfig, TagPolicy,
    DEFAULT_MAX_TAGS, DEFAULT_MIN_TAGS, DEFAULT_TIMEOUT_SECS,
};
use crate::secrets::{EnvSecretStore, SecretStore};

/// Builds a `ForumConfig` from a config file and a secret store
pub struct ConfigLoader {
    file: Option<FileConfigSource>,
    store: Arc<dyn SecretStore>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Loader reading the user config file and the environment
    pub fn new() -> Self {
        Self {
            file: Some(FileConfigSource::user()),
            store: Arc::new(EnvSecretStore::new()),
        }
    }

    /// Use a specific config file instead of the user-level one
    pub fn with_file(mut self, file: FileConfigSource) -> Self {
        self.file = Some(file);
        self
    }

    /// Skip the config file entirely
    pub fn without_file(mut self) -> Self {
        self.file = None;
        self
    }

    /// Use a different store for overrides
    pub fn with_store(mut self, store: Arc<dyn SecretStore>) -> Self {
        self.store = store;
        self
    }

    /// Merge all sources and validate the result
    pub fn load(&self) -> ConfigResult<ForumConfig> {
        let file = match &self.file {
            Some(source) => source.load()?,
            None => ConfigFile::default(),
        };
        let config = self.merge(file)?;
        config.validate()?;
        Ok(config)
    }

    fn merge(&self, file: ConfigFile) -> ConfigResult<ForumConfig> {
        let store = self.store.as_ref();
        let file_tags = file.tags.unwrap_or_default();

        let base_url = store
            .get("url")
            .or(file.url)
            .map(|u| normalize_base_url(&u))
            .unwrap_or_default();

        let token = store.get("token").or(file.token);
        let username = store.get("username").or(file.username);
        let password = store.get("password").or(file.password);
        let credentials = resolve_credentials(token, username, password)?;

        let min_tags = parse_override(store, "min_tags")?
            .or(file_tags.min)
            .unwrap_or(DEFAULT_MIN_TAGS);
        let max_tags = parse_override(store, "max_tags")?
            .or(file_tags.max)
            .unwrap_or(DEFAULT_MAX_TAGS);
        let default_tags = store
            .get("default_tags")
            .or(file_tags.defaults)
            .filter(|t| !t.trim().is_empty());
        let timeout_secs = parse_override(store, "timeout_secs")?
            .or(file.timeout_secs)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Ok(ForumConfig {
            base_url,
            credentials,
            tags: TagPolicy {
                min_tags,
                max_tags,
                default_tags,
            },
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

/// A static token wins over username/password
fn resolve_credentials(
    token: Option<String>,
    username: Option<String>,
    password: Option<String>,
) -> ConfigResult<CredentialConfig> {
    if let Some(token) = token {
        return Ok(CredentialConfig::Token(token));
    }
    match (username, password) {
        (Some(username), Some(password)) => Ok(CredentialConfig::Password { username, password }),
        (Some(_), None) => Err(ConfigError::Missing("password (FLARUM_PASSWORD)".to_string())),
        (None, Some(_)) => Err(ConfigError::Missing("username (FLARUM_USERNAME)".to_string())),
        (None, None) => Ok(CredentialConfig::None),
    }
}

fn parse_override<T: FromStr>(store: &dyn SecretStore, key: &str) -> ConfigResult<Option<T>>
where
    T::Err: std::fmt::Display,
{
    match store.get(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| ConfigError::invalid(key, format!("'{}': {}", raw, e))),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::secrets::MemorySecretStore;
    use std::fs;
    use tempfile::tempdir;

    fn loader(store: MemorySecretStore) -> ConfigLoader {
        ConfigLoader::new().without_file().with_store(Arc::new(store))
    }

    #[test]
    fn test_token_from_store() {
        let store = MemorySecretStore::new()
            .with("url", "https://forum.example.com/")
            .with("token", "abc");

        let config = loader(store).load().unwrap();
        assert_eq!(config.base_url, "https://forum.example.com");
        assert_eq!(config.credentials, CredentialConfig::Token("abc".to_string()));
        assert_eq!(config.tags, TagPolicy::default());
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_token_wins_over_password() {
        let store = MemorySecretStore::new()
            .with("url", "https://forum.example.com")
            .with("token", "abc")
            .with("username", "poster")
            .with("password", "secret");

        let config = loader(store).load().unwrap();
        assert_eq!(config.credentials.kind(), "token");
    }

    #[test]
    fn test_password_pair() {
        let store = MemorySecretStore::new()
            .with("url", "https://forum.example.com")
            .with("username", "poster")
            .with("password", "secret");

        let config = loader(store).load().unwrap();
        assert_eq!(
            config.credentials,
            CredentialConfig::Password {
                username: "poster".to_string(),
                password: "secret".to_string(),
            }
        );
    }

    #[test]
    fn test_half_password_pair_is_missing() {
        let store = MemorySecretStore::new()
            .with("url", "https://forum.example.com")
            .with("username", "poster");

        assert!(matches!(loader(store).load(), Err(ConfigError::Missing(_))));
    }

    #[test]
    fn test_missing_url_and_credentials() {
        assert!(matches!(
            loader(MemorySecretStore::new()).load(),
            Err(ConfigError::Missing(_))
        ));

        let store = MemorySecretStore::new().with("url", "https://forum.example.com");
        assert!(matches!(loader(store).load(), Err(ConfigError::Missing(_))));
    }

    #[test]
    fn test_tag_overrides() {
        let store = MemorySecretStore::new()
            .with("url", "https://forum.example.com")
            .with("token", "abc")
            .with("min_tags", "2")
            .with("max_tags", " 5 ")
            .with("default_tags", "shenghuo,jiankang")
            .with("timeout_secs", "12");

        let config = loader(store).load().unwrap();
        assert_eq!(config.tags.min_tags, 2);
        assert_eq!(config.tags.max_tags, 5);
        assert_eq!(config.tags.default_tags.as_deref(), Some("shenghuo,jiankang"));
        assert_eq!(config.timeout, Duration::from_secs(12));
    }

    #[test]
    fn test_invalid_number() {
        let store = MemorySecretStore::new()
            .with("url", "https://forum.example.com")
            .with("token", "abc")
            .with("max_tags", "three");

        match loader(store).load() {
            Err(ConfigError::Invalid { key, .. }) => assert_eq!(key, "max_tags"),
            other => panic!("expected invalid max_tags, got {:?}", other),
        }
    }

    #[test]
    fn test_min_greater_than_max_rejected() {
        let store = MemorySecretStore::new()
            .with("url", "https://forum.example.com")
            .with("token", "abc")
            .with("min_tags", "4");

        assert!(matches!(loader(store).load(), Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn test_store_overrides_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(
            &path,
            "url: https://file.example.com\ntoken: from-file\ntags:\n  max: 2\n  defaults: keji\n",
        )
        .unwrap();

        let store = MemorySecretStore::new().with("url", "https://env.example.com");
        let config = ConfigLoader::new()
            .with_file(FileConfigSource::new(&path))
            .with_store(Arc::new(store))
            .load()
            .unwrap();

        assert_eq!(config.base_url, "https://env.example.com");
        assert_eq!(config.credentials, CredentialConfig::Token("from-file".to_string()));
        assert_eq!(config.tags.max_tags, 2);
        assert_eq!(config.tags.default_tags.as_deref(), Some("keji"));
    }
}
