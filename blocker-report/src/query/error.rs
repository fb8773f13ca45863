//! Query construction error types.

use thiserror::Error;

/// Errors that can occur while building a search query.
#[derive(Debug, Error)]
pub enum QueryError {
    /// A requested team is missing from the team table.
    #[error("team {name:?} is not configured, only {valid} are supported")]
    UnknownTeam { name: String, valid: String },
}
