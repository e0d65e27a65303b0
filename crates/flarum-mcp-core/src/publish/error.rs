//! Publish error types

use thiserror::Error;

use crate::api::ApiError;
use crate::config::ConfigError;
use crate::taxonomy::TagError;

/// Everything that can stop a discussion from being published
///
/// None of these are fatal to the process: the tool boundary renders each
/// one as a failed tool result.
#[derive(Error, Debug)]
pub enum PublishError {
    /// Required configuration is absent or invalid
    #[error("Configuration error: {0}")]
    ConfigMissing(String),

    /// No usable credential (bad username/password, none configured, or
    /// rejected again after a refresh)
    #[error("Authentication unavailable: {0}")]
    AuthUnavailable(String),

    /// Blank title/content or malformed tool arguments
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Tag selection or hierarchy validation failed
    #[error(transparent)]
    Tag(#[from] TagError),

    /// The tag list could not be loaded, so nothing can be validated
    #[error("The forum tag list is unavailable, tags cannot be validated")]
    TaxonomyUnavailable,

    /// Non-2xx answer other than 401, body verbatim
    #[error("Forum rejected the request ({status}): {body}")]
    RemoteRejected { status: u16, body: String },

    /// Network failure or timeout
    #[error("Transport failure: {0}")]
    TransportFailure(String),

    /// 2xx answer the client could not understand
    #[error("Unexpected response from forum: {0}")]
    UnexpectedResponse(String),
}

/// Coarse category of a `PublishError`, used when rendering messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Config,
    Auth,
    Argument,
    Tag,
    Taxonomy,
    Remote,
    Transport,
    Response,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Config => "config",
            ErrorKind::Auth => "auth",
            ErrorKind::Argument => "argument",
            ErrorKind::Tag => "tag",
            ErrorKind::Taxonomy => "taxonomy",
            ErrorKind::Remote => "remote",
            ErrorKind::Transport => "transport",
            ErrorKind::Response => "response",
        }
    }
}

impl PublishError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PublishError::ConfigMissing(_) => ErrorKind::Config,
            PublishError::AuthUnavailable(_) => ErrorKind::Auth,
            PublishError::InvalidArgument(_) => ErrorKind::Argument,
            PublishError::Tag(_) => ErrorKind::Tag,
            PublishError::TaxonomyUnavailable => ErrorKind::Taxonomy,
            PublishError::RemoteRejected { .. } => ErrorKind::Remote,
            PublishError::TransportFailure(_) => ErrorKind::Transport,
            PublishError::UnexpectedResponse(_) => ErrorKind::Response,
        }
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}

impl From<ApiError> for PublishError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Unauthorized { status, body } => {
                PublishError::AuthUnavailable(format!("forum refused the credential ({}): {}", status, body))
            }
            ApiError::Rejected { status, body } => PublishError::RemoteRejected { status, body },
            ApiError::Transport(message) => PublishError::TransportFailure(message),
            ApiError::InvalidResponse(message) => PublishError::UnexpectedResponse(message),
        }
    }
}

impl From<ConfigError> for PublishError {
    fn from(err: ConfigError) -> Self {
        PublishError::ConfigMissing(err.to_string())
    }
}

pub type PublishResult<T> = Result<T, PublishError>;
