//! Projects

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    /// Work in progress
    #[default]
    Active,
    /// Finished
    Completed,
    /// Kept for reference only
    Archived,
}

/// A student project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Project id
    pub id: u64,
    /// Owning student
    pub owner: u64,
    /// Assigned supervisor, if any
    #[serde(default)]
    pub supervisor: Option<u64>,
    /// Title
    pub title: String,
    /// Free-form description
    #[serde(default)]
    pub description: String,
    /// Lifecycle status
    #[serde(default)]
    pub status: ProjectStatus,
    /// Planned start
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    /// Planned end
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// Share of tasks done, computed by the server (0-100)
    #[serde(default)]
    pub progress_percent: u8,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Last update time
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProject {
    /// Title
    pub title: String,
    /// Free-form description
    pub description: String,
}

/// Partial update of a project.
///
/// `supervisor: Some(None)` clears the assigned supervisor.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProjectPatch {
    /// New title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProjectStatus>,
    /// New start date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    /// New end date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    /// New supervisor, or `Some(None)` to unassign
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::model::double_option"
    )]
    pub supervisor: Option<Option<u64>>,
}
