//! Process-wide credential cache
//!
//! Holds at most one credential. A configured static token is cached from
//! the start and never invalidated; a username/password pair is exchanged
//! for a token on first use and again after every invalidation.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::api::{ApiError, ForumApi};
use crate::config::CredentialConfig;
use crate::logging::Logger;
use crate::publish::{PublishError, PublishResult};
use crate::types::Credential;

pub struct CredentialCache {
    api: Arc<dyn ForumApi>,
    config: CredentialConfig,
    /// Held across the token exchange so concurrent callers share one exchange
    cached: Mutex<Option<Credential>>,
    logger: Arc<dyn Logger>,
}

impl CredentialCache {
    pub fn new(api: Arc<dyn ForumApi>, config: CredentialConfig, logger: Arc<dyn Logger>) -> Self {
        let cached = match &config {
            CredentialConfig::Token(token) => Some(Credential::from_static(token.clone())),
            _ => None,
        };
        Self {
            api,
            config,
            cached: Mutex::new(cached),
            logger,
        }
    }

    /// Return the cached credential, exchanging username/password on a miss
    pub async fn get_credential(&self) -> PublishResult<Credential> {
        let mut cached = self.cached.lock().await;
        if let Some(credential) = cached.as_ref() {
            return Ok(credential.clone());
        }

        let credential = match &self.config {
            CredentialConfig::Token(token) => Credential::from_static(token.clone()),
            CredentialConfig::Password { username, password } => {
                self.logger.info(&format!("[CredentialCache] Exchanging password for a token (user '{}')", username));
                let token = self
                    .api
                    .exchange_token(username, password)
                    .await
                    .map_err(|e| self.exchange_error(e))?;
                Credential::exchanged(token)
            }
            CredentialConfig::None => {
                return Err(PublishError::AuthUnavailable("no credential configured".to_string()));
            }
        };

        *cached = Some(credential.clone());
        Ok(credential)
    }

    /// Drop `stale` so the next call exchanges again
    ///
    /// Only clears when `stale` is still the cached credential: if another
    /// caller already replaced it, the fresh one is kept. Static credentials
    /// are never cleared.
    pub async fn invalidate(&self, stale: &Credential) {
        let mut cached = self.cached.lock().await;
        match cached.as_ref() {
            Some(current) if current.is_static() => {}
            Some(current) if current == stale => {
                self.logger.info("[CredentialCache] Invalidated exchanged credential");
                *cached = None;
            }
            Some(_) => {
                self.logger.debug("[CredentialCache] Credential already refreshed, keeping it");
            }
            None => {}
        }
    }

    /// Acquire a credential ahead of the first request
    pub async fn prefetch(&self) -> PublishResult<()> {
        self.get_credential().await.map(|_| ())
    }

    /// Whether a credential is currently cached
    pub async fn is_cached(&self) -> bool {
        self.cached.lock().await.is_some()
    }

    fn exchange_error(&self, err: ApiError) -> PublishError {
        self.logger.warn(&format!("[CredentialCache] Token exchange failed: {}", err));
        match err {
            ApiError::Transport(message) => PublishError::TransportFailure(message),
            ApiError::InvalidResponse(message) => PublishError::AuthUnavailable(message),
            ApiError::Unauthorized { status, body } | ApiError::Rejected { status, body } => {
                PublishError::AuthUnavailable(format!("token exchange refused ({}): {}", status, body))
            }
        }
    }
}
