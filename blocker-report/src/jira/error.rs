//! Jira client error types.

use thiserror::Error;

/// Errors that can occur while talking to Jira.
#[derive(Debug, Error)]
pub enum JiraError {
    /// The bearer token is missing from the environment.
    #[error("Environment variable not set: {0}")]
    MissingToken(&'static str),

    /// The configured server is not a valid base URL.
    #[error("Invalid Jira server URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The HTTP client could not be built.
    #[error("Failed to build Jira client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    /// The search request failed or returned an error status.
    #[error("Jira search failed: {source} (query: {query})")]
    Search {
        query: String,
        #[source]
        source: reqwest::Error,
    },
}
