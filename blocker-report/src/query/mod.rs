//! JQL query construction.
//!
//! Translates team names into a `component in (...)` clause using the
//! configured team table and appends it to the base project query.

mod error;

pub use error::QueryError;

use crate::config::{Settings, TeamTable};
use tracing::debug;

/// Builds the complete search query for the configured project and issue type.
///
/// Format: `project = {project} AND issuetype = {issue_type}{team clause}`
///
/// # Errors
///
/// Returns [`QueryError::UnknownTeam`] if a team is not in the settings' team table.
pub fn build_search_query(settings: &Settings, teams: &[String]) -> Result<String, QueryError> {
    let clause = team_clause(&settings.teams, teams)?;
    let query = format!(
        "project = {} AND issuetype = {}{}",
        settings.project, settings.issue_type, clause
    );
    debug!(query = %query, "Built search query");
    Ok(query)
}

/// Builds the ` AND component in (...)` clause for the given teams.
///
/// Components are listed in request order, team by team. An empty team list
/// yields an empty clause.
///
/// # Errors
///
/// Returns [`QueryError::UnknownTeam`] for the first name missing from `table`.
pub fn team_clause(table: &TeamTable, teams: &[String]) -> Result<String, QueryError> {
    if teams.is_empty() {
        return Ok(String::new());
    }

    let mut components = Vec::new();
    for name in teams {
        let owned = table
            .components(name)
            .ok_or_else(|| QueryError::UnknownTeam {
                name: name.clone(),
                valid: table.names(),
            })?;
        components.extend(owned.iter().map(|c| quote_component(c)));
    }

    Ok(format!(" AND component in ({})", components.join(",")))
}

/// Quotes a component name unless it is a bare JQL word.
fn quote_component(name: &str) -> String {
    let bare = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'));
    if bare {
        name.to_string()
    } else {
        format!("\"{}\"", name.replace('"', "\\\""))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Team;

    fn table() -> TeamTable {
        TeamTable::new(vec![
            Team::new("api", ["kube-apiserver", "openshift-apiserver"]),
            Team::new("mco", ["Machine Config Operator"]),
        ])
    }

    #[test]
    fn empty_teams_yield_no_clause() {
        assert_eq!(team_clause(&table(), &[]).unwrap(), "");
    }

    #[test]
    fn clause_lists_components_in_order() {
        let clause = team_clause(&table(), &["api".to_string()]).unwrap();
        assert_eq!(
            clause,
            " AND component in (kube-apiserver,openshift-apiserver)"
        );
    }

    #[test]
    fn components_with_spaces_are_quoted() {
        let clause =
            team_clause(&table(), &["mco".to_string(), "api".to_string()]).unwrap();
        assert_eq!(
            clause,
            " AND component in (\"Machine Config Operator\",kube-apiserver,openshift-apiserver)"
        );
    }

    #[test]
    fn unknown_team_lists_valid_names() {
        let err = team_clause(&table(), &["api".to_string(), "storage".to_string()])
            .unwrap_err();

        assert!(matches!(&err, QueryError::UnknownTeam { name, .. } if name == "storage"));
        assert_eq!(
            err.to_string(),
            "team \"storage\" is not configured, only api,mco are supported"
        );
    }

    #[test]
    fn full_query_uses_project_and_issue_type() {
        let settings = Settings::default();
        let query = build_search_query(&settings, &["api".to_string()]).unwrap();

        assert_eq!(
            query,
            "project = OCPBUGSM AND issuetype = Bug AND component in \
             (kube-apiserver,config-operator,openshift-apiserver)"
        );
    }

    #[test]
    fn full_query_without_teams() {
        let query = build_search_query(&Settings::default(), &[]).unwrap();
        assert_eq!(query, "project = OCPBUGSM AND issuetype = Bug");
    }
}
