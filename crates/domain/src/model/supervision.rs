//! Supervision requests between students and staff

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Status of a supervision request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SupervisionStatus {
    /// Awaiting an answer
    #[default]
    Pending,
    /// Supervisor accepted; the project now has a supervisor
    Accepted,
    /// Supervisor declined
    Declined,
}

/// Whether the current user sent or received a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Sent by the current user (project owner)
    #[default]
    Sent,
    /// Addressed to the current user (supervisor)
    Received,
}

/// A request from a project owner to a staff member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupervisionRequest {
    /// Request id
    pub id: u64,
    /// Project concerned
    pub project: u64,
    /// Title of that project
    #[serde(default)]
    pub project_title: Option<String>,
    /// Staff member asked
    pub requested_supervisor: u64,
    /// Email of the staff member asked
    #[serde(default)]
    pub requested_supervisor_email: Option<String>,
    /// Email of the project owner
    #[serde(default)]
    pub owner_email: Option<String>,
    /// Status
    #[serde(default)]
    pub status: SupervisionStatus,
    /// Student's message
    #[serde(default)]
    pub message: String,
    /// Supervisor's answer
    #[serde(default)]
    pub response_message: String,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Answer time
    #[serde(default)]
    pub responded_at: Option<DateTime<Utc>>,
    /// Relative to the current user
    #[serde(default)]
    pub direction: Direction,
}

/// Payload for sending a supervision request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSupervisionRequest {
    /// Staff member to ask
    pub requested_supervisor: u64,
    /// Optional message
    pub message: String,
}

/// Payload for answering a supervision request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupervisionResponse {
    /// `accepted` or `declined`
    pub status: SupervisionStatus,
    /// Optional answer
    pub response_message: String,
}

/// Body of the pending-count endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingCount {
    /// Pending requests addressed to the current user
    pub count: u64,
}
