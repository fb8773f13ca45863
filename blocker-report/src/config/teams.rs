//! Team to component ownership table.

use serde::Deserialize;

/// A named group of Jira components.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Team {
    /// Team name used on the command line (e.g. "api").
    pub name: String,

    /// Components owned by the team, in query order.
    pub components: Vec<String>,
}

impl Team {
    /// Creates a team from a name and its component names.
    pub fn new<I, S>(name: impl Into<String>, components: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            components: components.into_iter().map(Into::into).collect(),
        }
    }
}

/// Ordered lookup table from team name to owned components.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct TeamTable {
    teams: Vec<Team>,
}

impl TeamTable {
    /// Creates a table from teams in display order.
    #[must_use]
    pub fn new(teams: Vec<Team>) -> Self {
        Self { teams }
    }

    /// Returns the components owned by `name`, if the team is configured.
    #[must_use]
    pub fn components(&self, name: &str) -> Option<&[String]> {
        self.teams
            .iter()
            .find(|team| team.name == name)
            .map(|team| team.components.as_slice())
    }

    /// Returns the configured team names joined with commas.
    #[must_use]
    pub fn names(&self) -> String {
        self.teams
            .iter()
            .map(|team| team.name.as_str())
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Iterates over the configured teams.
    pub fn iter(&self) -> impl Iterator<Item = &Team> {
        self.teams.iter()
    }
}

impl Default for TeamTable {
    fn default() -> Self {
        Self::new(vec![Team::new(
            "api",
            ["kube-apiserver", "config-operator", "openshift-apiserver"],
        )])
    }
}
