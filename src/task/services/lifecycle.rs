//! Service layer for task creation, retrieval, update, and deletion.

use crate::task::{
    domain::{Task, TaskChanges, TaskId, TaskStatus, TaskTitle},
    ports::{TaskRepository, TaskRepositoryError},
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

/// Request payload for updating an existing task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    id: TaskId,
    title: TaskTitle,
    description: Option<String>,
    status: TaskStatus,
    completed_on: Option<DateTime<Utc>>,
}

impl UpdateTaskRequest {
    /// Creates a request with the required fields.
    ///
    /// The description starts empty, so an update built without
    /// [`Self::with_description`] clears any stored description.
    #[must_use]
    pub const fn new(id: TaskId, title: TaskTitle, status: TaskStatus) -> Self {
        Self {
            id,
            title,
            description: None,
            status,
            completed_on: None,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the completion timestamp.
    ///
    /// The value is only applied when the requested status is
    /// [`TaskStatus::Completed`].
    #[must_use]
    pub const fn with_completed_on(mut self, completed_on: DateTime<Utc>) -> Self {
        self.completed_on = Some(completed_on);
        self
    }

    /// Returns the identifier of the task being updated.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    fn into_changes(self) -> TaskChanges {
        TaskChanges {
            title: self.title,
            description: self.description,
            status: self.status,
            completed_on: self.completed_on,
        }
    }
}

impl From<Task> for UpdateTaskRequest {
    fn from(task: Task) -> Self {
        Self {
            id: task.id(),
            title: task.title().clone(),
            description: task.description().map(str::to_owned),
            status: task.status(),
            completed_on: task.completed_on(),
        }
    }
}

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// The task targeted by an update does not exist.
    #[error("task not found: {0}")]
    NotFound(TaskId),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

impl TaskLifecycleError {
    /// Returns `true` when the error reports a missing task rather than a
    /// storage failure.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task lifecycle orchestration service.
#[derive(Clone)]
pub struct TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Returns all stored tasks, unfiltered.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the lookup fails.
    #[tracing::instrument(skip_all)]
    pub async fn list_tasks(&self) -> TaskLifecycleResult<Vec<Task>> {
        Ok(self.repository.list_all().await?)
    }

    /// Retrieves a task by identifier.
    ///
    /// Returns `Ok(None)` when no task exists for `id`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the lookup fails.
    #[tracing::instrument(skip_all, fields(task_id = %id))]
    pub async fn get_task(&self, id: TaskId) -> TaskLifecycleResult<Option<Task>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Persists a new task and returns the stored entity.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the repository rejects
    /// persistence.
    #[tracing::instrument(skip_all, fields(task_id = %draft.id()))]
    pub async fn create_task(&self, draft: Task) -> TaskLifecycleResult<Task> {
        let created = self.repository.insert(&draft).await?;
        debug!(status = created.status().as_str(), "task created");
        Ok(created)
    }

    /// Applies an update to an existing task.
    ///
    /// Title, description, and status are copied from the request and the
    /// modification timestamp is refreshed. When the resulting status is
    /// `Completed`, the caller-supplied completion timestamp is stored as-is,
    /// including `None`.
    ///
    /// The read and the write are separate repository calls. A concurrent
    /// update between them is overwritten. A concurrent delete between them
    /// surfaces as [`TaskLifecycleError::Repository`] wrapping
    /// [`TaskRepositoryError::NotFound`], for which
    /// [`TaskLifecycleError::is_not_found`] returns `false`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when no task exists for the
    /// request identifier, or [`TaskLifecycleError::Repository`] when either
    /// repository call fails.
    #[tracing::instrument(skip_all, fields(task_id = %request.id()))]
    pub async fn update_task(&self, request: UpdateTaskRequest) -> TaskLifecycleResult<Task> {
        let id = request.id();
        let Some(mut existing) = self.repository.find_by_id(id).await? else {
            warn!("update rejected, task does not exist");
            return Err(TaskLifecycleError::NotFound(id));
        };

        existing.apply_changes(request.into_changes(), &*self.clock);
        let updated = self.repository.update(&existing).await?;
        debug!(status = updated.status().as_str(), "task updated");
        Ok(updated)
    }

    /// Deletes a task. Deleting a missing task succeeds without effect.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the repository call
    /// fails.
    #[tracing::instrument(skip_all, fields(task_id = %id))]
    pub async fn delete_task(&self, id: TaskId) -> TaskLifecycleResult<()> {
        self.repository.delete_by_id(id).await?;
        Ok(())
    }
}
