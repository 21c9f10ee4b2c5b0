//! Remote tracker capabilities
//!
//! The four remote operations the client consumes, behind a trait so the
//! search loop and the facade can be tested against a deterministic fake
//! instead of a live Jira instance. `RestApi` is the live implementation.

mod rest;

pub use rest::RestApi;

use crate::error::Result;
use crate::models::{Project, SearchResponse, Transition};
use async_trait::async_trait;

/// The remote operations this client consumes
#[async_trait]
pub trait IssueTracker: Send + Sync {
    /// Fetch one page of search results for a JQL query
    ///
    /// The query string is passed through uninterpreted; malformed queries
    /// are rejected by the server and surface as an error.
    async fn search_page(
        &self,
        jql: &str,
        start_at: u32,
        max_results: u32,
    ) -> Result<SearchResponse>;

    /// Fetch the transitions currently available on an issue
    async fn transitions(&self, issue_key: &str) -> Result<Vec<Transition>>;

    /// Apply a transition to an issue
    async fn do_transition(&self, issue_id: &str, transition_id: &str) -> Result<()>;

    /// List all projects
    async fn projects(&self) -> Result<Vec<Project>>;
}
