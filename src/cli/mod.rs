//! CLI module
//!
//! Command-line interface for the Jira client.
//!
//! # Commands
//!
//! - `search` - Search issues with a JQL query, following pagination
//! - `transitions` - List the transitions available on an issue
//! - `move` - Move an issue to a named status
//! - `projects` - List all projects

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
