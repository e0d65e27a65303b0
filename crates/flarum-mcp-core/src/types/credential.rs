//! Credential type

use std::fmt;

/// Where a credential came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialSource {
    /// Configured API token, never invalidated
    Static,
    /// Token obtained by exchanging username and password
    Exchanged,
}

impl CredentialSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            CredentialSource::Static => "static",
            CredentialSource::Exchanged => "exchanged",
        }
    }
}

/// An opaque bearer credential for the forum API
///
/// `Debug` redacts the token so credentials never end up in logs.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    token: String,
    source: CredentialSource,
}

impl Credential {
    /// A credential taken from configuration
    pub fn from_static(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            source: CredentialSource::Static,
        }
    }

    /// A credential returned by the token endpoint
    pub fn exchanged(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            source: CredentialSource::Exchanged,
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn source(&self) -> CredentialSource {
        self.source
    }

    pub fn is_static(&self) -> bool {
        self.source == CredentialSource::Static
    }

    /// Value for the `Authorization` header
    pub fn header_value(&self) -> String {
        format!("Token {}", self.token)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("token", &"<redacted>")
            .field("source", &self.source)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_value() {
        let credential = Credential::exchanged("abc123");
        assert_eq!(credential.header_value(), "Token abc123");
        assert_eq!(credential.source(), CredentialSource::Exchanged);
        assert!(!credential.is_static());
    }

    #[test]
    fn test_debug_redacts_token() {
        let credential = Credential::from_static("super-secret");
        let printed = format!("{:?}", credential);
        assert!(!printed.contains("super-secret"));
        assert!(printed.contains("Static"));
    }
}
