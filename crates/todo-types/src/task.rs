use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use todo_merge::impl_merge_non_null;

use crate::id::TaskId;

/// Task priority.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

/// A stored task.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: Option<String>,
    pub priority: Priority,
    pub start_at: Option<DateTime<Utc>>,
    pub end_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Mark the task as modified now.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Payload for creating a task. Only the title is mandatory.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub priority: Option<Priority>,
    pub start_at: Option<DateTime<Utc>>,
    pub end_at: Option<DateTime<Utc>>,
}

impl NewTask {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            priority: None,
            start_at: None,
            end_at: None,
        }
    }

    /// Materialize into a [`Task`] with a fresh id and timestamps.
    pub fn into_task(self) -> Task {
        let now = Utc::now();
        Task {
            id: TaskId::new(),
            title: self.title,
            description: self.description,
            priority: self.priority.unwrap_or_default(),
            start_at: self.start_at,
            end_at: self.end_at,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial update of a task.
///
/// `None` (absent or JSON `null`) leaves the stored value untouched, so a
/// patch can set a field but never clear one. `id`, `created_at` and
/// `updated_at` are not client-writable.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<Priority>,
    pub start_at: Option<DateTime<Utc>>,
    pub end_at: Option<DateTime<Utc>>,
}

impl_merge_non_null!(TaskPatch => Task {
    required: [title, priority],
    optional: [description, start_at, end_at],
});
