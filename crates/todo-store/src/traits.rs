use todo_types::{Task, TaskId};

use crate::error::StoreResult;

/// Task storage backend.
///
/// Implementations must be safe to share across request handlers.
pub trait TaskStore: Send + Sync {
    /// Read a task by id.
    ///
    /// Returns `Ok(None)` if the task does not exist.
    fn get(&self, id: &TaskId) -> StoreResult<Option<Task>>;

    /// All tasks, ordered by id (creation time).
    fn list(&self) -> StoreResult<Vec<Task>>;

    /// Store a new task and return it.
    ///
    /// Fails with `AlreadyExists` if the id is taken.
    fn insert(&self, task: Task) -> StoreResult<Task>;

    /// Apply `mutate` to the stored task and return the result.
    ///
    /// The read, the mutation and the write happen atomically with respect to
    /// other store calls. Fails with `NotFound` if the task does not exist.
    fn update(&self, id: &TaskId, mutate: &mut dyn FnMut(&mut Task)) -> StoreResult<Task>;

    /// Delete a task. Returns `true` if it existed.
    fn delete(&self, id: &TaskId) -> StoreResult<bool>;
}
