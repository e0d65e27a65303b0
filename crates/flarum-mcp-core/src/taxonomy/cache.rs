//! Process-wide taxonomy cache
//!
//! The tag list is fetched on first use and kept until the process exits.
//! A fetch answered with 401 invalidates the credential and is retried once.
//! Only a non-empty snapshot is cached, so a failed or empty fetch is tried
//! again on the next call.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::api::{ApiError, ForumApi};
use crate::auth::CredentialCache;
use crate::logging::Logger;
use crate::publish::{PublishError, PublishResult};
use crate::types::{Tag, TaxonomySnapshot};

pub struct TaxonomyCache {
    api: Arc<dyn ForumApi>,
    credentials: Arc<CredentialCache>,
    /// Held across the fetch so concurrent callers never fetch twice
    snapshot: Mutex<Option<Arc<TaxonomySnapshot>>>,
    logger: Arc<dyn Logger>,
}

impl TaxonomyCache {
    pub fn new(
        api: Arc<dyn ForumApi>,
        credentials: Arc<CredentialCache>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self {
            api,
            credentials,
            snapshot: Mutex::new(None),
            logger,
        }
    }

    /// Current snapshot, empty when the tag list could not be loaded
    ///
    /// An empty snapshot means nothing can be validated; callers must fail
    /// rather than accept any tag.
    pub async fn get_tags(&self) -> Arc<TaxonomySnapshot> {
        match self.load().await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                self.logger.error(&format!("[TaxonomyCache] Failed to load tags: {}", e));
                Arc::new(TaxonomySnapshot::empty())
            }
        }
    }

    /// Current snapshot, with the failure that prevented loading it
    pub async fn load(&self) -> PublishResult<Arc<TaxonomySnapshot>> {
        let mut snapshot = self.snapshot.lock().await;
        if let Some(cached) = snapshot.as_ref() {
            return Ok(cached.clone());
        }

        let tags = self.fetch_with_reauth().await?;
        let fetched = Arc::new(TaxonomySnapshot::new(tags));
        if fetched.is_empty() {
            self.logger.warn("[TaxonomyCache] Forum returned no tags");
        } else {
            self.logger.info(&format!("[TaxonomyCache] Cached {} tags", fetched.len()));
            *snapshot = Some(fetched.clone());
        }
        Ok(fetched)
    }

    /// The cached snapshot, without fetching
    pub async fn cached(&self) -> Option<Arc<TaxonomySnapshot>> {
        self.snapshot.lock().await.clone()
    }

    async fn fetch_with_reauth(&self) -> PublishResult<Vec<Tag>> {
        let credential = self.credentials.get_credential().await?;
        match self.api.fetch_tags(&credential).await {
            Ok(tags) => Ok(tags),
            Err(ApiError::Unauthorized { .. }) => {
                self.logger.warn("[TaxonomyCache] Tag fetch unauthorized, refreshing credential");
                self.credentials.invalidate(&credential).await;
                let credential = self.credentials.get_credential().await?;
                self.api
                    .fetch_tags(&credential)
                    .await
                    .map_err(PublishError::from)
            }
            Err(e) => Err(e.into()),
        }
    }
}
