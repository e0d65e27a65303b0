//! HTTP implementation of `ForumApi` against a Flarum instance

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Client, Response};

use super::error::{ApiError, ApiResult};
use super::traits::ForumApi;
use super::wire::{CreatedDocument, DiscussionDocument, TagListDocument, TokenRequest, TokenResponse};
use crate::config::ForumConfig;
use crate::logging::Logger;
use crate::types::{Credential, NewDiscussion, Tag};

const JSON_API: &str = "application/vnd.api+json, application/json";

/// Flarum REST client
///
/// Every request carries the configured timeout; a timeout surfaces as
/// `ApiError::Transport`.
pub struct HttpForumApi {
    client: Client,
    config: ForumConfig,
    logger: Arc<dyn Logger>,
}

impl HttpForumApi {
    /// Create a client for the configured forum
    pub fn new(config: &ForumConfig, logger: Arc<dyn Logger>) -> ApiResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("flarum-mcp/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            config: config.clone(),
            logger,
        })
    }

    /// Turn a non-2xx response into an error, keeping the body verbatim
    async fn error_from(response: Response) -> ApiError {
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .unwrap_or_else(|e| format!("<unreadable body: {}>", e));
        crate::warn_log!("status={} body_len={}", status, body.len());
        ApiError::from_status(status, body)
    }
}

#[async_trait]
impl ForumApi for HttpForumApi {
    async fn exchange_token(&self, identification: &str, password: &str) -> ApiResult<String> {
        let url = self.config.endpoint("/api/token");
        crate::debug_log!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .header(ACCEPT, JSON_API)
            .json(&TokenRequest {
                identification,
                password,
            })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }

        let body: TokenResponse = serde_json::from_str(&response.text().await?)?;
        body.token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ApiError::invalid_response("token response has no token field"))
    }

    async fn fetch_tags(&self, credential: &Credential) -> ApiResult<Vec<Tag>> {
        let url = self.config.endpoint("/api/tags");
        crate::debug_log!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, JSON_API)
            .header(AUTHORIZATION, credential.header_value())
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }

        let document: TagListDocument = serde_json::from_str(&response.text().await?)?;
        let tags: Vec<Tag> = document.data.into_iter().map(Tag::from).collect();
        self.logger.debug(&format!("[HttpForumApi] Fetched {} tags", tags.len()));
        Ok(tags)
    }

    async fn create_discussion(
        &self,
        credential: &Credential,
        discussion: &NewDiscussion,
    ) -> ApiResult<String> {
        let url = self.config.endpoint("/api/discussions");
        crate::debug_log!("POST {} tags={:?}", url, discussion.tag_ids);

        let response = self
            .client
            .post(&url)
            .header(ACCEPT, JSON_API)
            .header(AUTHORIZATION, credential.header_value())
            .json(&DiscussionDocument::from(discussion))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }

        let document: CreatedDocument = serde_json::from_str(&response.text().await?)?;
        self.logger.info(&format!("[HttpForumApi] Created discussion {}", document.data.id));
        Ok(document.data.id)
    }
}
