//! Orchestrates a report run: query, search, extraction, grouping.

mod config;
mod error;

pub use config::RunnerConfig;
pub use error::RunnerError;

use crate::bugs::bugs_from_issues;
use crate::config::{load_settings, Settings};
use crate::jira::JiraClient;
use crate::query::build_search_query;
use crate::report::Report;
use tracing::{info, warn};

/// Runs the search and builds the report.
pub struct Runner {
    config: RunnerConfig,
    settings: Settings,
    client: JiraClient,
}

impl Runner {
    /// Loads settings and builds the Jira client.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError`] if the settings file is invalid or the client
    /// cannot be constructed.
    pub fn new(config: RunnerConfig) -> Result<Self, RunnerError> {
        let mut settings = load_settings(config.settings_path())?;
        if let Some(server) = config.server() {
            settings.server = server.to_string();
        }

        let client = JiraClient::new(&settings.server, config.token())?;
        Ok(Self {
            config,
            settings,
            client,
        })
    }

    /// Returns the settings in effect.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Executes the run.
    ///
    /// The query is built before any request is sent, so an unknown team
    /// fails without touching the network.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError`] if a team is unknown or the search fails.
    pub async fn run(&self) -> Result<Report, RunnerError> {
        let query = build_search_query(&self.settings, self.config.teams())?;

        info!(server = %self.settings.server, "Fetching bugs");
        let issues = self
            .client
            .search(&query, self.settings.max_results)
            .await?;

        let bugs = bugs_from_issues(&issues, &self.settings.fields);
        let report = Report::build(&bugs, self.config.filters());

        if report.sections.is_empty() {
            warn!(fetched = bugs.len(), "No bugs matched the filters");
        } else {
            info!(
                fetched = bugs.len(),
                listed = report.bug_count(),
                "Report ready"
            );
        }

        Ok(report)
    }
}
