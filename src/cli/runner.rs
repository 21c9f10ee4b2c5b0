//! CLI runner - executes commands

use super::commands::{Cli, Commands, OutputFormat};
use crate::client::Jira;
use crate::config::{JiraConfig, ENV_TOKEN, ENV_URL, ENV_USER};
use crate::error::{Error, Result};
use crate::models::{Issue, Project, Transition};
use tracing::info;

/// Executes CLI commands
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the requested command
    pub async fn run(&self) -> Result<()> {
        let config = self.build_config()?;
        let jira = Jira::connect(config)?;

        match &self.cli.command {
            Commands::Search { jql } => {
                let issues = jira.issues(jql).await?;
                info!("Fetched {} issues", issues.len());
                self.print_issues(&issues)?;
            }
            Commands::Transitions { key } => {
                let transitions = jira.transitions(key).await?;
                self.print_transitions(&transitions)?;
            }
            Commands::Move { key, status } => {
                let applied = jira.move_issue_by_key(key, status).await?;
                match self.cli.format {
                    OutputFormat::Json => println!("{}", serde_json::to_string(&applied)?),
                    OutputFormat::Pretty => {
                        println!("Moved {key} via transition '{}' ({})", applied.name, applied.id);
                    }
                }
            }
            Commands::Projects => {
                let projects = jira.projects().await?;
                self.print_projects(&projects)?;
            }
        }

        Ok(())
    }

    /// Assemble the config from flags, falling back to the environment
    fn build_config(&self) -> Result<JiraConfig> {
        let base_url = self.arg_or_env(self.cli.url.as_deref(), ENV_URL)?;
        let user = self.arg_or_env(self.cli.user.as_deref(), ENV_USER)?;
        let token = self.arg_or_env(self.cli.token.as_deref(), ENV_TOKEN)?;
        Ok(JiraConfig::new(base_url, user, token))
    }

    fn arg_or_env(&self, arg: Option<&str>, env_name: &str) -> Result<String> {
        if let Some(value) = arg {
            return Ok(value.to_string());
        }
        match std::env::var(env_name) {
            Ok(value) if !value.is_empty() => Ok(value),
            _ => Err(Error::missing_field(env_name)),
        }
    }

    fn print_issues(&self, issues: &[Issue]) -> Result<()> {
        match self.cli.format {
            OutputFormat::Json => println!("{}", serde_json::to_string(issues)?),
            OutputFormat::Pretty => {
                for issue in issues {
                    let status = issue
                        .fields
                        .status
                        .as_ref()
                        .map_or("-", |s| s.name.as_str());
                    let summary = issue.fields.summary.as_deref().unwrap_or("");
                    println!("{:<12} {:<14} {}", issue.key, status, summary);
                }
            }
        }
        Ok(())
    }

    fn print_transitions(&self, transitions: &[Transition]) -> Result<()> {
        match self.cli.format {
            OutputFormat::Json => println!("{}", serde_json::to_string(transitions)?),
            OutputFormat::Pretty => {
                for transition in transitions {
                    let to = transition.to.as_ref().map_or("-", |s| s.name.as_str());
                    println!("{:<6} {:<20} -> {}", transition.id, transition.name, to);
                }
            }
        }
        Ok(())
    }

    fn print_projects(&self, projects: &[Project]) -> Result<()> {
        match self.cli.format {
            OutputFormat::Json => println!("{}", serde_json::to_string(projects)?),
            OutputFormat::Pretty => {
                for project in projects {
                    println!("{:<12} {}", project.key, project.name);
                }
            }
        }
        Ok(())
    }
}
