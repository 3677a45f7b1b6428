//! Student dashboard

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ProjectStatus;

/// Aggregated counters over the user's projects and tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
#[allow(missing_docs)]
pub struct DashboardSummary {
    pub total_projects: u64,
    pub active_projects: u64,
    pub total_tasks: u64,
    pub overdue_tasks: u64,
    pub blocked_tasks: u64,
    pub in_progress_tasks: u64,
    pub high_priority_todo: u64,
}

/// Urgency of a nudge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum NudgeSeverity {
    /// Informational
    #[default]
    Info,
    /// Needs attention
    Warning,
    /// Needs action now
    Danger,
    /// Unknown severity
    #[serde(other)]
    Other,
}

/// A suggested action computed by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nudge {
    /// Nudge kind, e.g. `overdue` or `deadline_risk`
    #[serde(rename = "type")]
    pub kind: String,
    /// Short title
    pub title: String,
    /// Explanation
    pub message: String,
    /// Urgency
    #[serde(default)]
    pub severity: NudgeSeverity,
}

/// Per-project progress row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectProgress {
    /// Project id
    pub id: u64,
    /// Title
    pub title: String,
    /// Status
    #[serde(default)]
    pub status: ProjectStatus,
    /// Planned start
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    /// Planned end
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// Share of tasks done (0-100)
    #[serde(default)]
    pub progress: u8,
    /// Number of tasks
    #[serde(default)]
    pub tasks_total: u64,
    /// Number of finished tasks
    #[serde(default)]
    pub tasks_done: u64,
    /// Number of overdue tasks
    #[serde(default)]
    pub tasks_overdue: u64,
}

/// Body of the student dashboard endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Dashboard {
    /// Counters
    #[serde(default)]
    pub summary: DashboardSummary,
    /// Suggested actions
    #[serde(default)]
    pub nudges: Vec<Nudge>,
    /// Per-project progress
    #[serde(default)]
    pub projects: Vec<ProjectProgress>,
}
