//! Tasks

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Progress status of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Not started
    #[default]
    Todo,
    /// Being worked on
    InProgress,
    /// Waiting on something
    Blocked,
    /// Finished
    Done,
}

/// A task of a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Task id
    pub id: u64,
    /// Owning project
    pub project: u64,
    /// Sprint the task belongs to
    #[serde(default)]
    pub sprint: Option<u64>,
    /// Title of that sprint
    #[serde(default)]
    pub sprint_title: Option<String>,
    /// Title
    pub title: String,
    /// Description
    #[serde(default)]
    pub description: String,
    /// Progress status
    #[serde(default)]
    pub status: TaskStatus,
    /// Priority, 1 is highest
    #[serde(default = "default_priority")]
    pub priority: u8,
    /// Due date
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    /// Set by the server when the task enters `blocked`
    #[serde(default)]
    pub blocked_since: Option<DateTime<Utc>>,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Last update time
    pub updated_at: DateTime<Utc>,
}

const fn default_priority() -> u8 {
    3
}

/// Payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTask {
    /// Owning project
    pub project: u64,
    /// Title
    pub title: String,
    /// Initial status
    pub status: TaskStatus,
    /// Due date; must not be after the sprint's end date
    pub due_date: Option<NaiveDate>,
    /// Sprint, which must belong to the same project
    pub sprint: Option<u64>,
    /// Optional priority (server default 3)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u8>,
}

/// Partial update of a task.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TaskPatch {
    /// New title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    /// New priority
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u8>,
    /// New due date, or `Some(None)` to clear it
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::model::double_option"
    )]
    pub due_date: Option<Option<NaiveDate>>,
    /// New sprint, or `Some(None)` to detach
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::model::double_option"
    )]
    pub sprint: Option<Option<u64>>,
}

impl TaskPatch {
    /// A patch that only changes the status.
    #[must_use]
    pub fn status(status: TaskStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }
}
