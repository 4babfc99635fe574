//! Domain model for task lifecycle management.
//!
//! The task domain models task creation, field updates, and completion
//! bookkeeping while keeping all infrastructure concerns outside of the
//! domain boundary.

mod error;
mod ids;
mod task;

pub use error::{ParseTaskStatusError, TaskDomainError};
pub use ids::{TaskId, TaskTitle};
pub use task::{PersistedTaskData, Task, TaskChanges, TaskStatus};
