//! Settings deserialization and validation.

use crate::config::{ConfigError, Team, TeamTable};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;
use url::Url;

/// Largest page Jira accepts for a single search request.
const MAX_PAGE_SIZE: u32 = 1000;

/// Identifiers of the Jira custom fields read for each issue.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct FieldIds {
    /// String list holding the blocker flag.
    pub blocker: String,

    /// String holding the external bug tracker link.
    pub link: String,

    /// Object whose `value` holds the severity label.
    pub severity: String,
}

impl Default for FieldIds {
    fn default() -> Self {
        Self {
            blocker: "customfield_12318640".to_string(),
            link: "customfield_12317325".to_string(),
            severity: "customfield_12316142".to_string(),
        }
    }
}

/// Static settings loaded once at start-up.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Settings {
    /// Base URL of the Jira instance.
    pub server: String,

    /// Project key searched for bugs.
    pub project: String,

    /// Issue type searched for.
    pub issue_type: String,

    /// Maximum number of issues fetched in the single search page.
    pub max_results: u32,

    /// Custom field identifiers.
    pub fields: FieldIds,

    /// Team ownership table.
    pub teams: TeamTable,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: "https://issues.redhat.com/".to_string(),
            project: "OCPBUGSM".to_string(),
            issue_type: "Bug".to_string(),
            max_results: 200,
            fields: FieldIds::default(),
            teams: TeamTable::default(),
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file and validates them.
    ///
    /// Keys missing from the file keep their default values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read, parsed, or fails validation.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        debug!(path = %path.display(), "Loading settings");

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;

        let settings: Settings = toml::from_str(&content).map_err(|e| ConfigError::TomlError {
            path: path.display().to_string(),
            source: e,
        })?;

        settings.validate(path)?;
        Ok(settings)
    }

    /// Validates the settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] describing the first problem found.
    pub fn validate(&self, path: &Path) -> Result<(), ConfigError> {
        let invalid = |message: String| ConfigError::ValidationError {
            path: path.display().to_string(),
            message,
        };

        if Url::parse(&self.server).is_err() {
            return Err(invalid(format!("server is not a valid URL: {}", self.server)));
        }

        if self.project.trim().is_empty() {
            return Err(invalid("project must not be empty".to_string()));
        }

        if self.issue_type.trim().is_empty() {
            return Err(invalid("issue-type must not be empty".to_string()));
        }

        if self.max_results == 0 || self.max_results > MAX_PAGE_SIZE {
            return Err(invalid(format!(
                "max-results must be between 1 and {MAX_PAGE_SIZE}, got {}",
                self.max_results
            )));
        }

        let mut seen = HashSet::new();
        for team in self.teams.iter() {
            validate_team(team).map_err(&invalid)?;
            if !seen.insert(team.name.as_str()) {
                return Err(invalid(format!("team '{}' is defined twice", team.name)));
            }
        }

        Ok(())
    }
}

fn validate_team(team: &Team) -> Result<(), String> {
    if team.name.trim().is_empty() {
        return Err("team name must not be empty".to_string());
    }
    if team.components.is_empty() {
        return Err(format!("team '{}' owns no components", team.name));
    }
    Ok(())
}
