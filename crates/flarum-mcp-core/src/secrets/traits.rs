//! Core trait for secret and setting lookup

/// Trait for read access to settings and secrets
///
/// Implementations:
/// - Environment variables (`EnvSecretStore`)
/// - In-memory for testing (`MemorySecretStore`)
///
/// Keys are short logical names (`url`, `token`, `username`, ...). Each store
/// decides how a key maps onto its own storage.
///
/// # Example
///
/// ```
/// use flarum_mcp_core::secrets::{SecretStore, EnvSecretStore};
///
/// let store = EnvSecretStore::new();
/// // store.get("token") will check FLARUM_API_TOKEN
/// ```
pub trait SecretStore: Send + Sync {
    /// Human-readable name of this store
    fn name(&self) -> &str;

    /// Retrieve a value by key; empty values count as absent
    fn get(&self, key: &str) -> Option<String>;

    /// Check if a value exists
    fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}
