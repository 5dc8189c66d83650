use todo_types::TaskId;

/// Errors from task store operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    /// The requested task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// A task with the same id is already stored.
    #[error("task already exists: {0}")]
    AlreadyExists(TaskId),

    /// A writer panicked while holding the store lock.
    #[error("task store lock poisoned")]
    LockPoisoned,
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
