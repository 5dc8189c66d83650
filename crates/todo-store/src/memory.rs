use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use todo_types::{Task, TaskId};

use crate::error::{StoreError, StoreResult};
use crate::traits::TaskStore;

/// In-memory, HashMap-based task store.
///
/// All tasks are held behind a `RwLock` for safe concurrent access and are
/// cloned on read and write.
pub struct InMemoryTaskStore {
    tasks: RwLock<HashMap<TaskId, Task>>,
}

impl InMemoryTaskStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            tasks: RwLock::new(HashMap::new()),
        }
    }

    /// Number of tasks currently stored.
    pub fn len(&self) -> StoreResult<usize> {
        Ok(self.read_lock()?.len())
    }

    /// Returns `true` if the store is empty.
    pub fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.read_lock()?.is_empty())
    }

    fn read_lock(&self) -> StoreResult<RwLockReadGuard<'_, HashMap<TaskId, Task>>> {
        self.tasks.read().map_err(|_| StoreError::LockPoisoned)
    }

    fn write_lock(&self) -> StoreResult<RwLockWriteGuard<'_, HashMap<TaskId, Task>>> {
        self.tasks.write().map_err(|_| StoreError::LockPoisoned)
    }
}

impl Default for InMemoryTaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskStore for InMemoryTaskStore {
    fn get(&self, id: &TaskId) -> StoreResult<Option<Task>> {
        Ok(self.read_lock()?.get(id).cloned())
    }

    fn list(&self) -> StoreResult<Vec<Task>> {
        let map = self.read_lock()?;
        let mut tasks: Vec<Task> = map.values().cloned().collect();
        tasks.sort_by_key(|task| task.id);
        Ok(tasks)
    }

    fn insert(&self, task: Task) -> StoreResult<Task> {
        let mut map = self.write_lock()?;
        if map.contains_key(&task.id) {
            return Err(StoreError::AlreadyExists(task.id));
        }
        tracing::debug!(task = %task.id, "task inserted");
        map.insert(task.id, task.clone());
        Ok(task)
    }

    fn update(&self, id: &TaskId, mutate: &mut dyn FnMut(&mut Task)) -> StoreResult<Task> {
        let mut map = self.write_lock()?;
        let task = map.get_mut(id).ok_or(StoreError::NotFound(*id))?;
        mutate(task);
        Ok(task.clone())
    }

    fn delete(&self, id: &TaskId) -> StoreResult<bool> {
        let removed = self.write_lock()?.remove(id).is_some();
        if removed {
            tracing::debug!(task = %id, "task deleted");
        }
        Ok(removed)
    }
}

impl std::fmt::Debug for InMemoryTaskStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.len().unwrap_or_default();
        f.debug_struct("InMemoryTaskStore")
            .field("task_count", &count)
            .finish()
    }
}
