use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid task id '{input}': {reason}")]
    InvalidTaskId { input: String, reason: String },
}
