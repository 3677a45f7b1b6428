//! Milestones and sprints.

use gradely_domain::model::{
    Milestone, MilestonePatch, NewMilestone, NewSprint, Sprint, SprintPatch,
};
use gradely_domain::{ApiRequest, endpoints};

use crate::client::ApiClient;
use crate::error::ApplicationResult;
use crate::ports::HttpTransport;

impl<T: HttpTransport + 'static> ApiClient<T> {
    /// Lists the milestones of a project.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is malformed.
    pub async fn milestones(&self, project_id: u64) -> ApplicationResult<Vec<Milestone>> {
        self.fetch(ApiRequest::get(endpoints::milestones(project_id)))
            .await
    }

    /// Fetches one milestone.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is malformed.
    pub async fn milestone(
        &self,
        project_id: u64,
        milestone_id: u64,
    ) -> ApplicationResult<Milestone> {
        self.fetch(ApiRequest::get(endpoints::milestone(project_id, milestone_id)))
            .await
    }

    /// Adds a milestone to a project.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is malformed.
    pub async fn create_milestone(
        &self,
        project_id: u64,
        milestone: &NewMilestone,
    ) -> ApplicationResult<Milestone> {
        self.fetch(ApiRequest::post_json(
            endpoints::milestones(project_id),
            milestone,
        )?)
        .await
    }

    /// Applies a partial update to a milestone.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is malformed.
    pub async fn update_milestone(
        &self,
        project_id: u64,
        milestone_id: u64,
        patch: &MilestonePatch,
    ) -> ApplicationResult<Milestone> {
        self.fetch(ApiRequest::patch_json(
            endpoints::milestone(project_id, milestone_id),
            patch,
        )?)
        .await
    }

    /// Deletes a milestone.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn delete_milestone(
        &self,
        project_id: u64,
        milestone_id: u64,
    ) -> ApplicationResult<()> {
        self.send(ApiRequest::delete(endpoints::milestone(project_id, milestone_id)))
            .await
    }

    /// Lists the sprints of a project.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is malformed.
    pub async fn sprints(&self, project_id: u64) -> ApplicationResult<Vec<Sprint>> {
        self.fetch(ApiRequest::get(endpoints::sprints(project_id)))
            .await
    }

    /// Fetches one sprint.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is malformed.
    pub async fn sprint(&self, project_id: u64, sprint_id: u64) -> ApplicationResult<Sprint> {
        self.fetch(ApiRequest::get(endpoints::sprint(project_id, sprint_id)))
            .await
    }

    /// Adds a sprint to a project.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is malformed.
    pub async fn create_sprint(
        &self,
        project_id: u64,
        sprint: &NewSprint,
    ) -> ApplicationResult<Sprint> {
        self.fetch(ApiRequest::post_json(endpoints::sprints(project_id), sprint)?)
            .await
    }

    /// Applies a partial update to a sprint.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is malformed.
    pub async fn update_sprint(
        &self,
        project_id: u64,
        sprint_id: u64,
        patch: &SprintPatch,
    ) -> ApplicationResult<Sprint> {
        self.fetch(ApiRequest::patch_json(
            endpoints::sprint(project_id, sprint_id),
            patch,
        )?)
        .await
    }

    /// Deletes a sprint.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn delete_sprint(&self, project_id: u64, sprint_id: u64) -> ApplicationResult<()> {
        self.send(ApiRequest::delete(endpoints::sprint(project_id, sprint_id)))
            .await
    }
}
