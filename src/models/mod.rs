//! Wire types for the Jira REST v2 API
//!
//! Jira serializes in camelCase; issue field payloads are sprawling and
//! caller-specific, so only the commonly used fields are typed and the rest
//! are preserved in a flattened map.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// A Jira issue
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Issue {
    /// Internal numeric ID (as a string on the wire)
    pub id: String,

    /// Human-readable key (e.g., "PROJ-123")
    pub key: String,

    /// Issue fields
    #[serde(default)]
    pub fields: IssueFields,
}

/// The subset of issue fields this client types explicitly
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct IssueFields {
    /// Issue summary
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    /// Current status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,

    /// Everything else Jira returned
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// An issue status
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Status {
    /// Status ID
    pub id: String,

    /// Status name (e.g., "In Progress")
    pub name: String,
}

/// A state-change operation currently applicable to an issue
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transition {
    /// Transition ID, passed back when executing the transition
    pub id: String,

    /// Transition name (e.g., "Done")
    pub name: String,

    /// Status the issue moves to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<Status>,
}

/// A Jira project
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    /// Project ID
    pub id: String,

    /// Project key (e.g., "PROJ")
    pub key: String,

    /// Project name
    pub name: String,
}

/// One page of search results
///
/// `start_at` and `total` are server-reported: `start_at` is the position of
/// the first issue in this page within the overall result ordering, and
/// `total` is the count of all results matching the query, independent of
/// pagination.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    /// Issues in this page, in server-reported order
    #[serde(default)]
    pub issues: Vec<Issue>,

    /// Position of the first issue in this page
    #[serde(default)]
    pub start_at: u32,

    /// Page size cap the server applied
    #[serde(default)]
    pub max_results: u32,

    /// Total matching results across all pages
    #[serde(default)]
    pub total: u32,
}

/// Response of the transition-list endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TransitionsResponse {
    /// Available transitions
    #[serde(default)]
    pub transitions: Vec<Transition>,
}
