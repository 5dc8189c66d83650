//! Task storage for the to-do backend.
//!
//! All backends implement the [`TaskStore`] trait:
//!
//! - [`InMemoryTaskStore`] -- `HashMap`-based store, the only backend
//!   (tasks live for the lifetime of the process)
//!
//! # Design Rules
//!
//! 1. Tasks are keyed by [`TaskId`](todo_types::TaskId); ids are never reused.
//! 2. An update is load, mutate, save under a single write lock.
//! 3. Listing returns tasks in creation order.

pub mod error;
pub mod memory;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use memory::InMemoryTaskStore;
pub use traits::TaskStore;
