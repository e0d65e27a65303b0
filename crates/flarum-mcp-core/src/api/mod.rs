//! Forum API access
//!
//! The engine talks to the forum only through the `ForumApi` trait:
//! - `HttpForumApi`: reqwest client for a real Flarum instance
//! - `MockForumApi`: scripted responses and call counters for tests

mod traits;
mod error;
mod wire;
mod http;
mod mock;

pub use traits::ForumApi;
pub use error::{ApiError, ApiResult};
pub use http::HttpForumApi;
pub use mock::{MockEndpoint, MockForumApi, MOCK_TOKEN};
