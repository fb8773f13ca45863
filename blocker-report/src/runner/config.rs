//! Runner configuration.

use crate::filter::ReportFilters;
use std::path::{Path, PathBuf};

/// Configuration for a single report run.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Jira personal access token.
    token: String,
    /// Teams whose components restrict the search.
    teams: Vec<String>,
    /// Report filters and display options.
    filters: ReportFilters,
    /// Optional settings file; defaults are used without one.
    settings_path: Option<PathBuf>,
    /// Optional server URL overriding the settings.
    server: Option<String>,
}

impl RunnerConfig {
    /// Creates a new configuration for a run.
    pub fn new(token: String, teams: Vec<String>, filters: ReportFilters) -> Self {
        Self {
            token,
            teams,
            filters,
            settings_path: None,
            server: None,
        }
    }

    /// Sets a settings file to load.
    pub fn with_settings_path(mut self, settings_path: PathBuf) -> Self {
        self.settings_path = Some(settings_path);
        self
    }

    /// Overrides the Jira server URL from the settings.
    pub fn with_server(mut self, server: String) -> Self {
        self.server = Some(server);
        self
    }

    /// Returns the configured token.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Returns the requested team names.
    pub fn teams(&self) -> &[String] {
        &self.teams
    }

    /// Returns the report filters.
    pub fn filters(&self) -> &ReportFilters {
        &self.filters
    }

    /// Returns the settings file path, if any.
    pub fn settings_path(&self) -> Option<&Path> {
        self.settings_path.as_deref()
    }

    /// Returns the server override, if any.
    pub fn server(&self) -> Option<&str> {
        self.server.as_deref()
    }
}
