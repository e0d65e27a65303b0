//! Forum API error types

use thiserror::Error;

/// Errors returned by a `ForumApi` implementation
#[derive(Error, Debug)]
pub enum ApiError {
    /// The forum answered 401: the credential is missing, wrong or expired
    #[error("Authentication failed ({status}): {body}")]
    Unauthorized { status: u16, body: String },

    /// Any other non-2xx answer, body kept verbatim
    #[error("Forum API error ({status}): {body}")]
    Rejected { status: u16, body: String },

    /// Network failure or timeout
    #[error("Transport error: {0}")]
    Transport(String),

    /// 2xx answer that could not be understood
    #[error("Invalid response from forum: {0}")]
    InvalidResponse(String),
}

impl ApiError {
    /// Classify a non-success status
    pub fn from_status(status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        if status == 401 {
            Self::Unauthorized { status, body }
        } else {
            Self::Rejected { status, body }
        }
    }

    pub fn unauthorized(body: impl Into<String>) -> Self {
        Self::Unauthorized {
            status: 401,
            body: body.into(),
        }
    }

    pub fn rejected(status: u16, body: impl Into<String>) -> Self {
        Self::Rejected {
            status,
            body: body.into(),
        }
    }

    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse(message.into())
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Transport(format!("request timed out: {}", err))
        } else if err.is_decode() {
            ApiError::InvalidResponse(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::InvalidResponse(err.to_string())
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
