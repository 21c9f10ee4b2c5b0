//! High-level Jira facade
//!
//! Wraps the tracker capabilities into the handful of operations callers
//! actually want: search everything matching a query, look up a transition
//! by name, move an issue, list projects.

use crate::api::{IssueTracker, RestApi};
use crate::config::JiraConfig;
use crate::error::{Error, Result};
use crate::models::{Issue, Project, Transition};
use crate::search;

/// A Jira client
pub struct Jira<T: IssueTracker = RestApi> {
    api: T,
}

impl Jira<RestApi> {
    /// Connect to a Jira instance with the given configuration
    pub fn connect(config: JiraConfig) -> Result<Self> {
        Ok(Self {
            api: RestApi::new(config)?,
        })
    }
}

impl<T: IssueTracker> Jira<T> {
    /// Build a client over any tracker implementation
    pub fn with_api(api: T) -> Self {
        Self { api }
    }

    /// Get the underlying tracker
    pub fn api(&self) -> &T {
        &self.api
    }

    /// Fetch every issue matching a JQL query, paginating as needed
    pub async fn issues(&self, jql: &str) -> Result<Vec<Issue>> {
        search::fetch_all(&self.api, jql).await
    }

    /// List the transitions currently available on an issue
    pub async fn transitions(&self, issue_key: &str) -> Result<Vec<Transition>> {
        self.api.transitions(issue_key).await
    }

    /// Find an available transition on an issue by name
    ///
    /// Absence is an error (`Error::TransitionNotFound`), not an empty
    /// sentinel, so callers can tell "no such transition" apart from any
    /// transition that happens to carry empty fields.
    pub async fn find_transition(&self, issue_key: &str, name: &str) -> Result<Transition> {
        let transitions = self.api.transitions(issue_key).await?;
        transitions
            .into_iter()
            .find(|t| t.name == name)
            .ok_or_else(|| Error::transition_not_found(issue_key, name))
    }

    /// Apply a transition to an issue
    pub async fn transition_issue(&self, issue_id: &str, transition: &Transition) -> Result<()> {
        self.api.do_transition(issue_id, &transition.id).await
    }

    /// Move an issue to a named status: look the transition up by name,
    /// apply it, and return the transition that was applied
    pub async fn move_issue(&self, issue: &Issue, status_name: &str) -> Result<Transition> {
        let transition = self.find_transition(&issue.key, status_name).await?;
        self.api.do_transition(&issue.id, &transition.id).await?;
        Ok(transition)
    }

    /// Move an issue by key alone; the transition endpoint accepts an issue
    /// ID or key interchangeably
    pub async fn move_issue_by_key(&self, issue_key: &str, status_name: &str) -> Result<Transition> {
        let transition = self.find_transition(issue_key, status_name).await?;
        self.api.do_transition(issue_key, &transition.id).await?;
        Ok(transition)
    }

    /// List all projects
    pub async fn projects(&self) -> Result<Vec<Project>> {
        self.api.projects().await
    }
}
