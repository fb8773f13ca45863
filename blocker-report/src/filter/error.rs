//! Filter configuration error types.

use thiserror::Error;

/// Errors that can occur while building report filters.
#[derive(Debug, Error)]
pub enum FilterError {
    /// A requested blocker value is not a known flag spelling.
    #[error("invalid blocker value {0:?}, expected one of '+', '-', '?', 'none'")]
    InvalidBlocker(String),
}
