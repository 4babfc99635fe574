//! Task aggregate root and related lifecycle types.

use super::{ParseTaskStatusError, TaskId, TaskTitle};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Task lifecycle status.
///
/// Serializes to the canonical storage string and deserializes through
/// [`TaskStatus::try_from`], so PascalCase names are accepted on input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum TaskStatus {
    /// Task has been recorded but work has not started.
    #[default]
    ToDo,
    /// Task is being worked on.
    InProgress,
    /// Task has been finished.
    Completed,
}

impl TaskStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ToDo => "to_do",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
        }
    }

    /// Returns `true` for [`TaskStatus::Completed`].
    #[must_use]
    pub const fn is_completed(self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "to_do" | "todo" => Ok(Self::ToDo),
            "in_progress" | "inprogress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

impl TryFrom<String> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

impl From<TaskStatus> for &'static str {
    fn from(status: TaskStatus) -> Self {
        status.as_str()
    }
}

/// Task aggregate root.
///
/// Serialize-only: inbound data is rebuilt through [`Task::from_persisted`]
/// or changed through [`Task::apply_changes`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    description: Option<String>,
    created_on: DateTime<Utc>,
    created_by: String,
    last_modified_on: DateTime<Utc>,
    status: TaskStatus,
    completed_on: Option<DateTime<Utc>>,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: TaskTitle,
    /// Persisted description, if any.
    pub description: Option<String>,
    /// Persisted creation timestamp.
    pub created_on: DateTime<Utc>,
    /// Persisted creator identifier.
    pub created_by: String,
    /// Persisted latest modification timestamp.
    pub last_modified_on: DateTime<Utc>,
    /// Persisted lifecycle status.
    pub status: TaskStatus,
    /// Persisted completion timestamp, if any.
    pub completed_on: Option<DateTime<Utc>>,
}

/// Mutable task fields supplied by an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskChanges {
    /// Replacement title.
    pub title: TaskTitle,
    /// Replacement description; `None` clears it.
    pub description: Option<String>,
    /// Replacement status.
    pub status: TaskStatus,
    /// Completion timestamp applied only when `status` is `Completed`.
    pub completed_on: Option<DateTime<Utc>>,
}

impl Task {
    /// Creates a new `ToDo` task.
    ///
    /// The identifier is generated here and both `created_on` and
    /// `last_modified_on` are stamped from `clock`.
    #[must_use]
    pub fn new(title: TaskTitle, created_by: impl Into<String>, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: TaskId::new(),
            title,
            description: None,
            created_on: timestamp,
            created_by: created_by.into(),
            last_modified_on: timestamp,
            status: TaskStatus::ToDo,
            completed_on: None,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the initial task status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            created_on: data.created_on,
            created_by: data.created_by,
            last_modified_on: data.last_modified_on,
            status: data.status,
            completed_on: data.completed_on,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the task description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_on(&self) -> DateTime<Utc> {
        self.created_on
    }

    /// Returns the identifier of the creating principal.
    #[must_use]
    pub fn created_by(&self) -> &str {
        &self.created_by
    }

    /// Returns the latest modification timestamp.
    #[must_use]
    pub const fn last_modified_on(&self) -> DateTime<Utc> {
        self.last_modified_on
    }

    /// Returns the task status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the completion timestamp, if any.
    #[must_use]
    pub const fn completed_on(&self) -> Option<DateTime<Utc>> {
        self.completed_on
    }

    /// Applies an update to the mutable fields.
    ///
    /// Title, description, and status are replaced unconditionally; any
    /// status may follow any other. `completed_on` is taken verbatim from
    /// `changes` when the resulting status is [`TaskStatus::Completed`] and
    /// is left untouched otherwise, so moving away from `Completed` keeps the
    /// previous completion timestamp.
    pub fn apply_changes(&mut self, changes: TaskChanges, clock: &impl Clock) {
        self.title = changes.title;
        self.description = changes.description;
        self.status = changes.status;
        self.touch(clock);

        if self.status.is_completed() {
            self.completed_on = changes.completed_on;
        }
    }

    /// Advances `last_modified_on` to the current clock time.
    ///
    /// A clock reading earlier than the stored value leaves it unchanged.
    fn touch(&mut self, clock: &impl Clock) {
        self.last_modified_on = self.last_modified_on.max(clock.utc());
    }
}
