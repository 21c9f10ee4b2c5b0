//! # jira-client
//!
//! A minimal, Rust-native client for the Jira REST API.
//!
//! ## Features
//!
//! - **Paginated search**: fetch every issue matching a JQL query; the
//!   client walks pages until the server-reported total is reached
//! - **Transitions**: list available transitions, look one up by name,
//!   and move issues between statuses
//! - **Projects**: list all projects
//! - **Explicit configuration**: credentials and base URL are passed at
//!   construction (with an opt-in environment fallback), so clients can be
//!   built in isolation
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use jira_client::{Jira, JiraConfig, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = JiraConfig::new(
//!         "https://company.atlassian.net",
//!         "user@company.com",
//!         "api-token",
//!     );
//!     let jira = Jira::connect(config)?;
//!
//!     // All matching issues, regardless of how many pages Jira needs
//!     let issues = jira.issues("project = PROJ AND status = \"To Do\"").await?;
//!
//!     // Move the first one
//!     if let Some(issue) = issues.first() {
//!         jira.move_issue(issue, "In Progress").await?;
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Failure semantics
//!
//! Every remote call is fail-fast: the first transport error or non-success
//! status is surfaced to the caller immediately. There is no retry, no
//! backoff, no rate limiting, and a failed multi-page search returns no
//! partial result.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Client configuration
pub mod config;

/// Credential transport
pub mod auth;

/// Fail-fast JSON HTTP client
pub mod http;

/// Wire types for the Jira REST v2 API
pub mod models;

/// Remote tracker capabilities and the REST implementation
pub mod api;

/// Paginated issue search
pub mod search;

/// High-level Jira facade
pub mod client;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use api::{IssueTracker, RestApi};
pub use auth::Credentials;
pub use client::Jira;
pub use config::JiraConfig;
pub use error::{Error, Result};
pub use models::{Issue, Project, SearchResponse, Status, Transition};
pub use search::{fetch_all, fetch_all_with_limit, MAX_RESULTS};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
