//! Forum API trait definition

use async_trait::async_trait;

use super::error::ApiResult;
use crate::types::{Credential, NewDiscussion, Tag};

/// The three forum endpoints the engine needs
///
/// `HttpForumApi` talks to a real Flarum instance; `MockForumApi` is scripted
/// for tests. Implementations report a 401 as `ApiError::Unauthorized` so
/// callers can refresh the credential and retry.
#[async_trait]
pub trait ForumApi: Send + Sync {
    /// Exchange username (or email) and password for an API token
    /// (`POST /api/token`)
    async fn exchange_token(&self, identification: &str, password: &str) -> ApiResult<String>;

    /// Fetch the full tag list (`GET /api/tags`)
    async fn fetch_tags(&self, credential: &Credential) -> ApiResult<Vec<Tag>>;

    /// Create a discussion and return its identifier (`POST /api/discussions`)
    async fn create_discussion(
        &self,
        credential: &Credential,
        discussion: &NewDiscussion,
    ) -> ApiResult<String>;
}
