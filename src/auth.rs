//! Credential transport
//!
//! Jira supports two credential schemes: HTTP Basic with a username and API
//! token (Cloud), and a bearer personal access token (Server/Data Center).
//! Credentials are attached per request; nothing is cached or refreshed.

use crate::error::{Error, Result};
use reqwest::RequestBuilder;

/// Credentials applied to outgoing requests
#[derive(Debug, Clone, Default)]
pub enum Credentials {
    /// No authentication (anonymous read-only access)
    #[default]
    Anonymous,

    /// HTTP Basic authentication (username + API token)
    Basic {
        /// Account username or email
        username: String,
        /// API token used as the password
        token: String,
    },

    /// Bearer token authentication (personal access token)
    Bearer {
        /// The bearer token
        token: String,
    },
}

impl Credentials {
    /// Create basic auth credentials
    pub fn basic(username: impl Into<String>, token: impl Into<String>) -> Self {
        Self::Basic {
            username: username.into(),
            token: token.into(),
        }
    }

    /// Create bearer token credentials
    pub fn bearer(token: impl Into<String>) -> Self {
        Self::Bearer {
            token: token.into(),
        }
    }

    /// Apply the credentials to a request builder
    pub fn apply(&self, req: RequestBuilder) -> RequestBuilder {
        match self {
            Self::Anonymous => req,
            Self::Basic { username, token } => req.basic_auth(username, Some(token)),
            Self::Bearer { token } => req.bearer_auth(token),
        }
    }

    /// Check that the credentials are usable
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::Anonymous => Ok(()),
            Self::Basic { username, token } => {
                if username.is_empty() {
                    return Err(Error::missing_field("username"));
                }
                if token.is_empty() {
                    return Err(Error::missing_field("token"));
                }
                Ok(())
            }
            Self::Bearer { token } => {
                if token.is_empty() {
                    return Err(Error::missing_field("token"));
                }
                Ok(())
            }
        }
    }
}
