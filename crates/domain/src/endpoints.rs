//! REST endpoint paths of the Gradely backend.
//!
//! Paths are relative to the API base URL and keep the backend's
//! trailing-slash conventions exactly (the student dashboard is the one
//! route without a trailing slash).

/// Token issuance (login).
pub const TOKEN: &str = "/api/token/";

/// Token refresh.
pub const TOKEN_REFRESH: &str = "/api/token/refresh/";

/// Entry point the user is sent to when the session ends.
pub const LOGIN_ENTRY_POINT: &str = "/login";

/// Current user.
pub const ME: &str = "/api/me/";

/// Project collection.
pub const PROJECTS: &str = "/api/projects/";

/// Task collection.
pub const TASKS: &str = "/api/tasks/";

/// Supervision requests visible to the current user.
pub const SUPERVISION_REQUESTS: &str = "/api/supervision-requests/";

/// Number of pending supervision requests addressed to the current user.
pub const SUPERVISION_PENDING_COUNT: &str = "/api/supervision-requests/pending-count/";

/// Staff directory.
pub const STAFF_USERS: &str = "/api/users/staff/";

/// Student dashboard summary.
pub const STUDENT_DASHBOARD: &str = "/api/dashboard/student";

/// Returns true if the path targets the token-issuance or token-refresh endpoint.
///
/// A 401 from either of these never triggers a renewal.
#[must_use]
pub fn is_token_endpoint(path: &str) -> bool {
    path.contains(TOKEN_REFRESH) || path.contains(TOKEN)
}

/// `/api/projects/{id}/`
#[must_use]
pub fn project(id: u64) -> String {
    format!("{PROJECTS}{id}/")
}

/// `/api/tasks/{id}/`
#[must_use]
pub fn task(id: u64) -> String {
    format!("{TASKS}{id}/")
}

/// `/api/projects/{id}/milestones/`
#[must_use]
pub fn milestones(project_id: u64) -> String {
    format!("{}milestones/", project(project_id))
}

/// `/api/projects/{id}/milestones/{mid}/`
#[must_use]
pub fn milestone(project_id: u64, milestone_id: u64) -> String {
    format!("{}{milestone_id}/", milestones(project_id))
}

/// `/api/projects/{id}/sprints/`
#[must_use]
pub fn sprints(project_id: u64) -> String {
    format!("{}sprints/", project(project_id))
}

/// `/api/projects/{id}/sprints/{sid}/`
#[must_use]
pub fn sprint(project_id: u64, sprint_id: u64) -> String {
    format!("{}{sprint_id}/", sprints(project_id))
}

/// `/api/projects/{id}/deliverables/`
#[must_use]
pub fn deliverables(project_id: u64) -> String {
    format!("{}deliverables/", project(project_id))
}

/// `/api/projects/{id}/deliverables/{did}/`
#[must_use]
pub fn deliverable(project_id: u64, deliverable_id: u64) -> String {
    format!("{}{deliverable_id}/", deliverables(project_id))
}

/// `/api/projects/{id}/deliverables/{did}/submissions/`
#[must_use]
pub fn submissions(project_id: u64, deliverable_id: u64) -> String {
    format!("{}submissions/", deliverable(project_id, deliverable_id))
}

/// `/api/projects/{id}/deliverables/{did}/submissions/{sid}/`
#[must_use]
pub fn submission(project_id: u64, deliverable_id: u64, submission_id: u64) -> String {
    format!("{}{submission_id}/", submissions(project_id, deliverable_id))
}

/// `/api/submissions/{id}/review/`
#[must_use]
pub fn submission_review(submission_id: u64) -> String {
    format!("/api/submissions/{submission_id}/review/")
}

/// `/api/projects/{id}/comments/`
#[must_use]
pub fn comments(project_id: u64) -> String {
    format!("{}comments/", project(project_id))
}

/// `/api/projects/{id}/activity/`
#[must_use]
pub fn activity(project_id: u64) -> String {
    format!("{}activity/", project(project_id))
}

/// `/api/projects/{id}/supervision-requests/`
#[must_use]
pub fn project_supervision_requests(project_id: u64) -> String {
    format!("{}supervision-requests/", project(project_id))
}

/// `/api/supervision-requests/{id}/`
#[must_use]
pub fn supervision_request(request_id: u64) -> String {
    format!("{SUPERVISION_REQUESTS}{request_id}/")
}
