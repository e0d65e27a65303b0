//! Publish coordinator
//!
//! Runs one `create_discussion` call end to end: select tags, validate them
//! against the taxonomy, resolve slugs to ids, send, and retry the send once
//! after a credential refresh if the forum answers 401. Validation always
//! finishes before the first request that can create anything.

use std::sync::Arc;

use super::error::{PublishError, PublishResult};
use crate::api::{ApiError, ForumApi};
use crate::auth::CredentialCache;
use crate::config::{ForumConfig, TagPolicy};
use crate::logging::Logger;
use crate::taxonomy::{select, validate, TagError, TaxonomyCache};
use crate::types::{NewDiscussion, PublishedPost, TagSelectionRequest, TaxonomySnapshot};

/// Content longer than this (in characters) is logged, never rejected
pub const CONTENT_SOFT_LIMIT: usize = 250;

pub struct PublishCoordinator {
    api: Arc<dyn ForumApi>,
    credentials: Arc<CredentialCache>,
    taxonomy: Arc<TaxonomyCache>,
    config: ForumConfig,
    logger: Arc<dyn Logger>,
}

impl PublishCoordinator {
    pub fn new(
        api: Arc<dyn ForumApi>,
        credentials: Arc<CredentialCache>,
        taxonomy: Arc<TaxonomyCache>,
        config: ForumConfig,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self {
            api,
            credentials,
            taxonomy,
            config,
            logger,
        }
    }

    /// Wire both caches and the coordinator around one API client
    pub fn from_config(config: &ForumConfig, api: Arc<dyn ForumApi>, logger: Arc<dyn Logger>) -> Self {
        let credentials = Arc::new(CredentialCache::new(
            api.clone(),
            config.credentials.clone(),
            logger.clone(),
        ));
        let taxonomy = Arc::new(TaxonomyCache::new(api.clone(), credentials.clone(), logger.clone()));
        Self::new(api, credentials, taxonomy, config.clone(), logger)
    }

    pub fn credentials(&self) -> &Arc<CredentialCache> {
        &self.credentials
    }

    pub fn taxonomy(&self) -> &Arc<TaxonomyCache> {
        &self.taxonomy
    }

    pub fn policy(&self) -> &TagPolicy {
        &self.config.tags
    }

    /// Create a discussion
    pub async fn publish(
        &self,
        title: &str,
        content: &str,
        tags: &TagSelectionRequest,
    ) -> PublishResult<PublishedPost> {
        if title.trim().is_empty() {
            return Err(PublishError::invalid_argument("title must not be empty"));
        }
        if content.trim().is_empty() {
            return Err(PublishError::invalid_argument("content must not be empty"));
        }

        let content_length = content.chars().count();
        if content_length > CONTENT_SOFT_LIMIT {
            crate::log_warn!(
                self.logger,
                "[Publish] Content is {} characters, above the recommended {}",
                content_length,
                CONTENT_SOFT_LIMIT
            );
        }

        let policy = self.policy();
        let slugs = select(
            &tags.raw,
            policy.default_tags_str(),
            policy.min_tags,
            policy.max_tags,
        )?;

        let taxonomy = self.taxonomy.load().await?;
        if taxonomy.is_empty() {
            return Err(PublishError::TaxonomyUnavailable);
        }
        validate(&slugs, &taxonomy)?;
        let tag_ids = resolve_ids(&slugs, &taxonomy)?;

        let discussion = NewDiscussion {
            title: title.to_string(),
            content: content.to_string(),
            tag_ids: tag_ids.clone(),
        };
        let id = self.send(&discussion).await?;
        let permalink = self.config.permalink(&id);

        crate::log_info!(self.logger, "[Publish] Created discussion {} ({})", id, permalink);

        Ok(PublishedPost {
            id,
            title: discussion.title,
            content_length,
            tags: slugs,
            tag_ids,
            permalink,
        })
    }

    /// Send once, and once more after invalidate and reacquire on 401
    async fn send(&self, discussion: &NewDiscussion) -> PublishResult<String> {
        let stale = self.credentials.get_credential().await?;
        match self.api.create_discussion(&stale, discussion).await {
            Err(ApiError::Unauthorized { .. }) => {
                self.logger.warn("[Publish] Forum answered 401, refreshing credential and retrying");
                self.credentials.invalidate(&stale).await;
                let credential = self.credentials.get_credential().await?;
                self.api
                    .create_discussion(&credential, discussion)
                    .await
                    .map_err(PublishError::from)
            }
            other => other.map_err(PublishError::from),
        }
    }
}

fn resolve_ids(slugs: &[String], taxonomy: &TaxonomySnapshot) -> PublishResult<Vec<String>> {
    slugs
        .iter()
        .map(|slug| {
            taxonomy
                .by_slug(slug)
                .map(|tag| tag.id.clone())
                .ok_or_else(|| PublishError::Tag(TagError::UnknownTag(slug.clone())))
        })
        .collect()
}
