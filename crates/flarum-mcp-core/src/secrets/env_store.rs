//! Environment variable secret store

use std::collections::HashMap;
use std::env;

use once_cell::sync::Lazy;

use super::traits::SecretStore;

/// Mapping from logical keys to environment variable names
static ENV_VAR_MAP: Lazy<HashMap<&'static str, Vec<&'static str>>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert("url", vec!["FLARUM_URL"]);
    m.insert("token", vec!["FLARUM_API_TOKEN", "FLARUM_TOKEN"]);
    m.insert("username", vec!["FLARUM_USERNAME", "FLARUM_USER"]);
    m.insert("password", vec!["FLARUM_PASSWORD"]);
    m.insert("min_tags", vec!["FLARUM_MIN_TAGS"]);
    m.insert("max_tags", vec!["FLARUM_MAX_TAGS"]);
    m.insert("default_tags", vec!["FLARUM_DEFAULT_TAGS"]);
    m.insert("timeout_secs", vec!["FLARUM_TIMEOUT_SECS"]);
    m
});

/// Store that reads from environment variables
///
/// This store is read-only. Logical keys map onto `FLARUM_*` variables:
/// - `url` → `FLARUM_URL`
/// - `token` → `FLARUM_API_TOKEN` (or `FLARUM_TOKEN`)
/// - `username` → `FLARUM_USERNAME` (or `FLARUM_USER`)
/// - `password` → `FLARUM_PASSWORD`
/// - etc.
///
/// Variables can also be read directly by their full name.
#[derive(Debug, Default)]
pub struct EnvSecretStore {
    _private: (), // Prevent direct construction, use new()
}

impl EnvSecretStore {
    pub fn new() -> Self {
        Self { _private: () }
    }

    /// Get the environment variable names for a logical key
    pub fn env_vars_for(key: &str) -> Option<&'static [&'static str]> {
        ENV_VAR_MAP.get(key.to_lowercase().as_str()).map(|v| v.as_slice())
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

impl SecretStore for EnvSecretStore {
    fn name(&self) -> &str {
        "env"
    }

    fn get(&self, key: &str) -> Option<String> {
        if let Some(env_vars) = Self::env_vars_for(key) {
            return env_vars.iter().find_map(|name| non_empty_var(name));
        }

        // Direct env var access
        non_empty_var(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_store_name() {
        let store = EnvSecretStore::new();
        assert_eq!(store.name(), "env");
    }

    #[test]
    fn test_env_store_get_direct() {
        env::set_var("FLARUM_TEST_DIRECT_12345", "test_value");

        let store = EnvSecretStore::new();
        assert_eq!(store.get("FLARUM_TEST_DIRECT_12345"), Some("test_value".to_string()));

        env::remove_var("FLARUM_TEST_DIRECT_12345");
    }

    #[test]
    fn test_env_store_get_mapped() {
        env::set_var("FLARUM_DEFAULT_TAGS", "shenghuo,jiankang");

        let store = EnvSecretStore::new();
        assert_eq!(store.get("default_tags"), Some("shenghuo,jiankang".to_string()));
        assert_eq!(store.get("DEFAULT_TAGS"), Some("shenghuo,jiankang".to_string()));

        env::remove_var("FLARUM_DEFAULT_TAGS");
    }

    #[test]
    fn test_env_store_blank_is_absent() {
        env::set_var("FLARUM_TEST_BLANK_12345", "   ");

        let store = EnvSecretStore::new();
        assert!(!store.has("FLARUM_TEST_BLANK_12345"));

        env::remove_var("FLARUM_TEST_BLANK_12345");
    }

    #[test]
    fn test_env_vars_for() {
        assert_eq!(
            EnvSecretStore::env_vars_for("token"),
            Some(&["FLARUM_API_TOKEN", "FLARUM_TOKEN"][..])
        );
        assert!(EnvSecretStore::env_vars_for("nonexistent_key_xyz").is_none());
    }
}
