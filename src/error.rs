//! Fetch Errors
//!
//! The only failure the task list knows about: the initial load.

use thiserror::Error;

/// Errors raised while fetching the initial task list
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    /// Request never produced a response
    #[error("network error: {0}")]
    Network(String),
    /// Server answered with a non-2xx status
    #[error("server responded with {status} {status_text}")]
    Status { status: u16, status_text: String },
    /// Body was not a list of tasks
    #[error("failed to decode tasks: {0}")]
    Decode(String),
}
