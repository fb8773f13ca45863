//! Runner error types.

/// Errors that abort a report run.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Settings file loading errors.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// Invalid report filter values.
    #[error(transparent)]
    Filter(#[from] crate::filter::FilterError),

    /// Search query construction errors.
    #[error(transparent)]
    Query(#[from] crate::query::QueryError),

    /// Jira client and search errors.
    #[error(transparent)]
    Jira(#[from] crate::jira::JiraError),
}
