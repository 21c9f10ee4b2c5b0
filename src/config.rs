//! Client configuration
//!
//! Configuration is an explicit struct passed at construction rather than
//! ambient process environment, so tests can build clients in isolation.
//! `JiraConfig::from_env` remains available for deployments that configure
//! through `JIRA_URL` / `JIRA_USER` / `JIRA_TOKEN`.

use crate::auth::Credentials;
use crate::error::{Error, Result};
use std::time::Duration;
use url::Url;

/// Environment variable holding the Jira base URL
pub const ENV_URL: &str = "JIRA_URL";
/// Environment variable holding the Jira username
pub const ENV_USER: &str = "JIRA_USER";
/// Environment variable holding the Jira API token
pub const ENV_TOKEN: &str = "JIRA_TOKEN";

/// Configuration for a Jira client
#[derive(Debug, Clone)]
pub struct JiraConfig {
    /// Base URL of the Jira instance (e.g., `https://company.atlassian.net`)
    pub base_url: String,
    /// Credentials applied to every request
    pub credentials: Credentials,
    /// Request timeout
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
}

impl JiraConfig {
    /// Create a config with basic auth credentials
    pub fn new(
        base_url: impl Into<String>,
        username: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            credentials: Credentials::basic(username, token),
            ..Self::bare()
        }
    }

    /// Create a config from the `JIRA_URL`, `JIRA_USER` and `JIRA_TOKEN`
    /// environment variables.
    ///
    /// Missing variables are an error rather than silently-empty strings.
    pub fn from_env() -> Result<Self> {
        let base_url = require_env(ENV_URL)?;
        let username = require_env(ENV_USER)?;
        let token = require_env(ENV_TOKEN)?;
        Ok(Self::new(base_url, username, token))
    }

    /// Create a config builder
    pub fn builder() -> JiraConfigBuilder {
        JiraConfigBuilder::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.base_url.is_empty() {
            return Err(Error::missing_field("base_url"));
        }
        Url::parse(&self.base_url)?;
        self.credentials.validate()?;
        Ok(())
    }

    fn bare() -> Self {
        Self {
            base_url: String::new(),
            credentials: Credentials::Anonymous,
            timeout: Duration::from_secs(30),
            user_agent: format!("jira-client/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

fn require_env(name: &str) -> Result<String> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(Error::missing_field(name)),
    }
}

/// Builder for Jira client config
#[derive(Debug)]
pub struct JiraConfigBuilder {
    config: JiraConfig,
}

impl Default for JiraConfigBuilder {
    fn default() -> Self {
        Self {
            config: JiraConfig::bare(),
        }
    }
}

impl JiraConfigBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Use basic auth (Jira Cloud username + API token)
    pub fn basic_auth(mut self, username: impl Into<String>, token: impl Into<String>) -> Self {
        self.config.credentials = Credentials::basic(username, token);
        self
    }

    /// Use a bearer token (Jira Server/Data Center personal access token)
    pub fn bearer(mut self, token: impl Into<String>) -> Self {
        self.config.credentials = Credentials::bearer(token);
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> JiraConfig {
        self.config
    }
}
