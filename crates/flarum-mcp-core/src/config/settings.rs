//! Validated runtime configuration

use std::time::Duration;

/// Default minimum number of tags per discussion
pub const DEFAULT_MIN_TAGS: usize = 1;
/// Default maximum number of tags per discussion
pub const DEFAULT_MAX_TAGS: usize = 3;
/// Default timeout for every forum request
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Errors that can occur while building the configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing configuration: {0}")]
    Missing(String),

    #[error("Invalid value for {key}: {message}")]
    Invalid { key: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(String),
}

impl ConfigError {
    pub fn invalid(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Invalid {
            key: key.into(),
            message: message.into(),
        }
    }
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// How the server authenticates against the forum
#[derive(Clone, PartialEq, Eq)]
pub enum CredentialConfig {
    /// A long-lived API token, used as-is
    Token(String),
    /// Username (or email) and password, exchanged for a token on demand
    Password { username: String, password: String },
    /// Nothing configured
    None,
}

impl CredentialConfig {
    pub fn is_configured(&self) -> bool {
        !matches!(self, CredentialConfig::None)
    }

    pub fn kind(&self) -> &'static str {
        match self {
            CredentialConfig::Token(_) => "token",
            CredentialConfig::Password { .. } => "password",
            CredentialConfig::None => "none",
        }
    }
}

impl std::fmt::Debug for CredentialConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CredentialConfig::Token(_) => write!(f, "Token(<redacted>)"),
            CredentialConfig::Password { username, .. } => f
                .debug_struct("Password")
                .field("username", username)
                .field("password", &"<redacted>")
                .finish(),
            CredentialConfig::None => write!(f, "None"),
        }
    }
}

/// Tag cardinality rules and default tag list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagPolicy {
    pub min_tags: usize,
    pub max_tags: usize,
    /// Comma-separated slugs that replace whatever the caller passes
    pub default_tags: Option<String>,
}

impl Default for TagPolicy {
    fn default() -> Self {
        Self {
            min_tags: DEFAULT_MIN_TAGS,
            max_tags: DEFAULT_MAX_TAGS,
            default_tags: None,
        }
    }
}

impl TagPolicy {
    pub fn new(min_tags: usize, max_tags: usize) -> Self {
        Self {
            min_tags,
            max_tags,
            default_tags: None,
        }
    }

    pub fn with_default_tags(mut self, tags: impl Into<String>) -> Self {
        self.default_tags = Some(tags.into());
        self
    }

    /// Default tags as a string, empty when none are configured
    pub fn default_tags_str(&self) -> &str {
        self.default_tags.as_deref().unwrap_or("")
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.max_tags == 0 {
            return Err(ConfigError::invalid("max_tags", "must be at least 1"));
        }
        if self.min_tags > self.max_tags {
            return Err(ConfigError::invalid(
                "min_tags",
                format!("{} is greater than max_tags ({})", self.min_tags, self.max_tags),
            ));
        }
        Ok(())
    }
}

/// Complete configuration, built once at process start
#[derive(Debug, Clone)]
pub struct ForumConfig {
    /// Forum base URL without trailing slash
    pub base_url: String,
    pub credentials: CredentialConfig,
    pub tags: TagPolicy,
    /// Timeout applied to every forum request
    pub timeout: Duration,
}

impl ForumConfig {
    /// Create a configuration with default tag policy and timeout
    pub fn new(base_url: impl Into<String>, credentials: CredentialConfig) -> Self {
        Self {
            base_url: normalize_base_url(&base_url.into()),
            credentials,
            tags: TagPolicy::default(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_tags(mut self, tags: TagPolicy) -> Self {
        self.tags = tags;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Check that everything required is present and consistent
    pub fn validate(&self) -> ConfigResult<()> {
        if self.base_url.is_empty() {
            return Err(ConfigError::Missing("forum URL (FLARUM_URL)".to_string()));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigError::invalid("url", format!("'{}' is not an http(s) URL", self.base_url)));
        }
        if !self.credentials.is_configured() {
            return Err(ConfigError::Missing(
                "credentials (FLARUM_API_TOKEN or FLARUM_USERNAME/FLARUM_PASSWORD)".to_string(),
            ));
        }
        if self.timeout.is_zero() {
            return Err(ConfigError::invalid("timeout_secs", "must be greater than 0"));
        }
        self.tags.validate()
    }

    /// Build an absolute URL for an API path such as `/api/tags`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Public URL of a discussion
    pub fn permalink(&self, discussion_id: &str) -> String {
        format!("{}/d/{}", self.base_url, discussion_id)
    }
}

/// Trim whitespace and trailing slashes
pub(crate) fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token() -> CredentialConfig {
        CredentialConfig::Token("abc".to_string())
    }

    #[test]
    fn test_defaults() {
        let config = ForumConfig::new("https://forum.example.com/", token());
        assert_eq!(config.base_url, "https://forum.example.com");
        assert_eq!(config.tags.min_tags, 1);
        assert_eq!(config.tags.max_tags, 3);
        assert!(config.tags.default_tags.is_none());
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_urls() {
        let config = ForumConfig::new("https://forum.example.com", token());
        assert_eq!(config.endpoint("/api/tags"), "https://forum.example.com/api/tags");
        assert_eq!(config.permalink("42"), "https://forum.example.com/d/42");
    }

    #[test]
    fn test_missing_url() {
        let config = ForumConfig::new("  ", token());
        assert!(matches!(config.validate(), Err(ConfigError::Missing(_))));
    }

    #[test]
    fn test_missing_credentials() {
        let config = ForumConfig::new("https://forum.example.com", CredentialConfig::None);
        assert!(matches!(config.validate(), Err(ConfigError::Missing(_))));
    }

    #[test]
    fn test_rejects_non_http_url() {
        let config = ForumConfig::new("forum.example.com", token());
        assert!(matches!(config.validate(), Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn test_tag_policy_bounds() {
        assert!(TagPolicy::new(2, 1).validate().is_err());
        assert!(TagPolicy::new(0, 0).validate().is_err());
        assert!(TagPolicy::new(2, 2).validate().is_ok());
        assert_eq!(TagPolicy::default().default_tags_str(), "");
        assert_eq!(TagPolicy::default().with_default_tags("a,b").default_tags_str(), "a,b");
    }

    #[test]
    fn test_credential_debug_redacts() {
        let creds = CredentialConfig::Password {
            username: "admin".to_string(),
            password: "hunter2".to_string(),
        };
        let printed = format!("{:?}", creds);
        assert!(printed.contains("admin"));
        assert!(!printed.contains("hunter2"));
        assert_eq!(creds.kind(), "password");
        assert!(!format!("{:?}", token()).contains("abc"));
    }
}
