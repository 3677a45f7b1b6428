//! Comments and the project activity log

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A comment on a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Comment id
    pub id: u64,
    /// Project commented on
    pub project: u64,
    /// Author id
    pub author: u64,
    /// Author email
    #[serde(default)]
    pub author_email: Option<String>,
    /// Text
    pub content: String,
    /// Creation time
    pub created_at: DateTime<Utc>,
}

/// Payload for posting a comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewComment {
    /// Text
    pub content: String,
}

/// Kind of event recorded in the activity log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum ActionType {
    ProjectCreated,
    ProjectUpdated,
    TaskCreated,
    TaskUpdated,
    CommentAdded,
    MilestoneCreated,
    MilestoneUpdated,
    SprintCreated,
    SprintUpdated,
    DeliverableCreated,
    SubmissionCreated,
    ReviewSubmitted,
    SupervisionRequestSent,
    SupervisionRequestAccepted,
    SupervisionRequestDeclined,
    /// An action type this client does not know yet
    #[serde(other)]
    Other,
}

/// An entry of a project's activity log (newest first).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityItem {
    /// Entry id
    pub id: u64,
    /// Acting user id
    pub actor: u64,
    /// Acting user email
    #[serde(default)]
    pub actor_email: Option<String>,
    /// Event kind
    pub action_type: ActionType,
    /// Human-readable description
    #[serde(default)]
    pub description: String,
    /// Event-specific details, e.g. `{"task_id": 1, "field": "status"}`
    #[serde(default)]
    pub metadata: serde_json::Value,
    /// Event time
    pub created_at: DateTime<Utc>,
}
