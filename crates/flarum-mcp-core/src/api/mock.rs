//! Mock forum API for testing
//!
//! Responses are scripted per endpoint. When an endpoint's script is empty
//! the mock falls back to a default success, so tests only script the calls
//! they care about. Every call is counted and recorded.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use parking_lot::Mutex;

use super::error::{ApiError, ApiResult};
use super::traits::ForumApi;
use crate::types::{Credential, NewDiscussion, Tag};

/// Token returned by default from `exchange_token`
pub const MOCK_TOKEN: &str = "mock-token";

/// Scripted in-memory `ForumApi`
pub struct MockForumApi {
    tags: Mutex<Vec<Tag>>,
    next_discussion_id: AtomicUsize,
    token_script: Mutex<VecDeque<ApiResult<String>>>,
    tags_script: Mutex<VecDeque<ApiResult<Vec<Tag>>>>,
    create_script: Mutex<VecDeque<ApiResult<String>>>,
    token_calls: AtomicUsize,
    tags_calls: AtomicUsize,
    create_calls: AtomicUsize,
    seen_credentials: Mutex<Vec<String>>,
    created: Mutex<Vec<NewDiscussion>>,
}

impl MockForumApi {
    /// A forum with the given taxonomy
    pub fn new(tags: Vec<Tag>) -> Self {
        Self {
            tags: Mutex::new(tags),
            next_discussion_id: AtomicUsize::new(1),
            token_script: Mutex::new(VecDeque::new()),
            tags_script: Mutex::new(VecDeque::new()),
            create_script: Mutex::new(VecDeque::new()),
            token_calls: AtomicUsize::new(0),
            tags_calls: AtomicUsize::new(0),
            create_calls: AtomicUsize::new(0),
            seen_credentials: Mutex::new(Vec::new()),
            created: Mutex::new(Vec::new()),
        }
    }

    /// Queue the result of the next `exchange_token` call
    pub fn push_token(&self, result: ApiResult<String>) -> &Self {
        self.token_script.lock().push_back(result);
        self
    }

    /// Queue the result of the next `fetch_tags` call
    pub fn push_tags(&self, result: ApiResult<Vec<Tag>>) -> &Self {
        self.tags_script.lock().push_back(result);
        self
    }

    /// Queue the result of the next `create_discussion` call
    pub fn push_create(&self, result: ApiResult<String>) -> &Self {
        self.create_script.lock().push_back(result);
        self
    }

    /// Shortcut: the next call to `endpoint` answers 401
    pub fn fail_next_with_401(&self, endpoint: MockEndpoint) -> &Self {
        let err = || ApiError::unauthorized("{\"errors\":[{\"status\":\"401\",\"code\":\"not_authenticated\"}]}");
        match endpoint {
            MockEndpoint::Token => self.push_token(Err(err())),
            MockEndpoint::Tags => self.push_tags(Err(err())),
            MockEndpoint::Create => self.push_create(Err(err())),
        }
    }

    /// Replace the taxonomy served by default
    pub fn set_tags(&self, tags: Vec<Tag>) {
        *self.tags.lock() = tags;
    }

    pub fn token_calls(&self) -> usize {
        self.token_calls.load(Ordering::SeqCst)
    }

    pub fn tags_calls(&self) -> usize {
        self.tags_calls.load(Ordering::SeqCst)
    }

    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    /// Tokens presented on authenticated calls, in call order
    pub fn seen_credentials(&self) -> Vec<String> {
        self.seen_credentials.lock().clone()
    }

    /// Discussions passed to `create_discussion`, in call order
    pub fn created(&self) -> Vec<NewDiscussion> {
        self.created.lock().clone()
    }
}

/// Endpoint selector for `fail_next_with_401`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockEndpoint {
    Token,
    Tags,
    Create,
}

#[async_trait]
impl ForumApi for MockForumApi {
    async fn exchange_token(&self, _identification: &str, _password: &str) -> ApiResult<String> {
        self.token_calls.fetch_add(1, Ordering::SeqCst);
        match self.token_script.lock().pop_front() {
            Some(result) => result,
            None => Ok(MOCK_TOKEN.to_string()),
        }
    }

    async fn fetch_tags(&self, credential: &Credential) -> ApiResult<Vec<Tag>> {
        self.tags_calls.fetch_add(1, Ordering::SeqCst);
        self.seen_credentials.lock().push(credential.token().to_string());
        match self.tags_script.lock().pop_front() {
            Some(result) => result,
            None => Ok(self.tags.lock().clone()),
        }
    }

    async fn create_discussion(
        &self,
        credential: &Credential,
        discussion: &NewDiscussion,
    ) -> ApiResult<String> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        self.seen_credentials.lock().push(credential.token().to_string());
        self.created.lock().push(discussion.clone());
        match self.create_script.lock().pop_front() {
            Some(result) => result,
            None => Ok(self.next_discussion_id.fetch_add(1, Ordering::SeqCst).to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_defaults() {
        let api = MockForumApi::new(vec![Tag::new("1", "a", "A")]);
        let credential = Credential::from_static("t");

        assert_eq!(api.exchange_token("u", "p").await.unwrap(), MOCK_TOKEN);
        assert_eq!(api.fetch_tags(&credential).await.unwrap().len(), 1);

        let discussion = NewDiscussion {
            title: "t".to_string(),
            content: "c".to_string(),
            tag_ids: vec!["1".to_string()],
        };
        assert_eq!(api.create_discussion(&credential, &discussion).await.unwrap(), "1");
        assert_eq!(api.create_discussion(&credential, &discussion).await.unwrap(), "2");

        assert_eq!(api.token_calls(), 1);
        assert_eq!(api.tags_calls(), 1);
        assert_eq!(api.create_calls(), 2);
        assert_eq!(api.seen_credentials(), vec!["t", "t", "t"]);
        assert_eq!(api.created().len(), 2);
    }

    #[tokio::test]
    async fn test_script_then_default() {
        let api = MockForumApi::new(vec![]);
        api.fail_next_with_401(MockEndpoint::Tags)
            .push_token(Err(ApiError::rejected(422, "bad password")));

        let credential = Credential::from_static("t");
        assert!(api.fetch_tags(&credential).await.unwrap_err().is_unauthorized());
        assert!(api.fetch_tags(&credential).await.unwrap().is_empty());

        assert!(matches!(
            api.exchange_token("u", "p").await,
            Err(ApiError::Rejected { status: 422, .. })
        ));
        assert_eq!(api.exchange_token("u", "p").await.unwrap(), MOCK_TOKEN);
    }
}
