//! CLI commands and argument parsing

use clap::{Parser, Subcommand};

/// Jira client CLI
#[derive(Parser, Debug)]
#[command(name = "jira-client")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Jira base URL (falls back to JIRA_URL)
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// Jira username (falls back to JIRA_USER)
    #[arg(long, global = true)]
    pub user: Option<String>,

    /// Jira API token (falls back to JIRA_TOKEN)
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// Output format
    #[arg(short, long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search issues with a JQL query, following pagination to the end
    Search {
        /// JQL query string (passed through uninterpreted)
        jql: String,
    },

    /// List the transitions currently available on an issue
    Transitions {
        /// Issue key (e.g., PROJ-123)
        key: String,
    },

    /// Move an issue to a named status
    Move {
        /// Issue key (e.g., PROJ-123)
        key: String,

        /// Target status name (e.g., "Done")
        status: String,
    },

    /// List all projects
    Projects,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Human-readable output
    Pretty,
}
