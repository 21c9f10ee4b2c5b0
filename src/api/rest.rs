//! Jira REST v2 implementation of the tracker capabilities

use super::IssueTracker;
use crate::config::JiraConfig;
use crate::error::Result;
use crate::http::{HttpClient, RequestConfig};
use crate::models::{Project, SearchResponse, Transition, TransitionsResponse};
use async_trait::async_trait;
use tracing::debug;

/// Live Jira REST v2 API
#[derive(Debug)]
pub struct RestApi {
    client: HttpClient,
}

impl RestApi {
    /// Create an API bound to one Jira instance
    pub fn new(config: JiraConfig) -> Result<Self> {
        let client = HttpClient::new(config)?;
        Ok(Self { client })
    }

    /// Get the underlying HTTP client
    pub fn client(&self) -> &HttpClient {
        &self.client
    }
}

#[async_trait]
impl IssueTracker for RestApi {
    async fn search_page(
        &self,
        jql: &str,
        start_at: u32,
        max_results: u32,
    ) -> Result<SearchResponse> {
        debug!("Searching issues: startAt={start_at} maxResults={max_results}");
        self.client
            .get_json(
                "/rest/api/2/search",
                RequestConfig::new()
                    .query("jql", jql)
                    .query("startAt", start_at.to_string())
                    .query("maxResults", max_results.to_string()),
            )
            .await
    }

    async fn transitions(&self, issue_key: &str) -> Result<Vec<Transition>> {
        let response: TransitionsResponse = self
            .client
            .get_json(
                &format!("/rest/api/2/issue/{issue_key}/transitions"),
                RequestConfig::new(),
            )
            .await?;
        Ok(response.transitions)
    }

    async fn do_transition(&self, issue_id: &str, transition_id: &str) -> Result<()> {
        debug!("Transitioning issue {issue_id} with transition {transition_id}");
        self.client
            .post(
                &format!("/rest/api/2/issue/{issue_id}/transitions"),
                RequestConfig::new().json(serde_json::json!({
                    "transition": { "id": transition_id }
                })),
            )
            .await
    }

    async fn projects(&self) -> Result<Vec<Project>> {
        self.client
            .get_json("/rest/api/2/project", RequestConfig::new())
            .await
    }
}
