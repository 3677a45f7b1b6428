//! Milestones and sprints

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Status of a milestone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MilestoneStatus {
    /// Scheduled
    #[default]
    Planned,
    /// Under way
    InProgress,
    /// Reached
    Done,
}

/// A key step in a project's schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    /// Milestone id
    pub id: u64,
    /// Owning project
    pub project: u64,
    /// Title
    pub title: String,
    /// Description
    #[serde(default)]
    pub description: String,
    /// Due date
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    /// Status
    #[serde(default)]
    pub status: MilestoneStatus,
    /// Display order
    #[serde(default)]
    pub order: u32,
    /// Creation time
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a milestone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMilestone {
    /// Title
    pub title: String,
    /// Description
    pub description: String,
    /// Due date
    pub due_date: Option<NaiveDate>,
    /// Status
    pub status: MilestoneStatus,
}

/// Partial update of a milestone.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MilestonePatch {
    /// New title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New due date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    /// New status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<MilestoneStatus>,
}

/// Status of a sprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SprintStatus {
    /// Not started
    #[default]
    Planned,
    /// Current iteration
    Active,
    /// Finished
    Completed,
}

/// An iteration of a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprint {
    /// Sprint id
    pub id: u64,
    /// Owning project
    pub project: u64,
    /// Title
    pub title: String,
    /// First day
    pub start_date: NaiveDate,
    /// Last day
    pub end_date: NaiveDate,
    /// Sprint goal
    #[serde(default)]
    pub goal: String,
    /// Status
    #[serde(default)]
    pub status: SprintStatus,
    /// Creation time
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a sprint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSprint {
    /// Title
    pub title: String,
    /// First day
    pub start_date: NaiveDate,
    /// Last day
    pub end_date: NaiveDate,
    /// Sprint goal
    pub goal: String,
    /// Status
    pub status: SprintStatus,
}

/// Partial update of a sprint.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SprintPatch {
    /// New title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New first day
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    /// New last day
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    /// New goal
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal: Option<String>,
    /// New status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<SprintStatus>,
}
