//! Domain types for the to-do backend.
//!
//! # Key Types
//!
//! - [`TaskId`] — UUID v7 task identifier (time ordered)
//! - [`Task`] — a stored task
//! - [`NewTask`] — create payload
//! - [`TaskPatch`] — partial update payload; merged onto a [`Task`] with
//!   [`todo_merge::merge_non_null`]
//! - [`Priority`] — task priority

pub mod error;
pub mod id;
pub mod task;

pub use error::TypeError;
pub use id::TaskId;
pub use task::{NewTask, Priority, Task, TaskPatch};
