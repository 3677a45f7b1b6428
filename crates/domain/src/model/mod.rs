//! Resources exposed by the Gradely backend

mod dashboard;
mod deliverable;
mod discussion;
mod planning;
mod project;
mod supervision;
mod task;
mod user;

pub use dashboard::{Dashboard, DashboardSummary, Nudge, NudgeSeverity, ProjectProgress};
pub use deliverable::{
    Attachment, Deliverable, DeliverablePatch, NewDeliverable, NewReview, NewSubmission, Review,
    ReviewStatus, Submission, SubmissionStatus,
};
pub use discussion::{ActionType, ActivityItem, Comment, NewComment};
pub use planning::{
    Milestone, MilestonePatch, MilestoneStatus, NewMilestone, NewSprint, Sprint, SprintPatch,
    SprintStatus,
};
pub use project::{NewProject, Project, ProjectPatch, ProjectStatus};
pub use supervision::{
    Direction, NewSupervisionRequest, PendingCount, SupervisionRequest, SupervisionResponse,
    SupervisionStatus,
};
pub use task::{NewTask, Task, TaskPatch, TaskStatus};
pub use user::{CurrentUser, StaffMember};

/// Serde helper for nullable patch fields: outer `None` is skipped,
/// `Some(None)` is sent as `null`.
pub(crate) mod double_option {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[allow(clippy::ref_option)]
    pub fn serialize<T, S>(value: &Option<Option<T>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Serialize,
        S: Serializer,
    {
        match value {
            Some(inner) => inner.serialize(serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
    where
        T: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Some)
    }
}
