//! Projects.

use gradely_domain::model::{NewProject, Project, ProjectPatch};
use gradely_domain::{ApiRequest, endpoints};

use crate::client::ApiClient;
use crate::error::ApplicationResult;
use crate::ports::HttpTransport;

impl<T: HttpTransport + 'static> ApiClient<T> {
    /// Lists the projects visible to the current user.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is malformed.
    pub async fn list_projects(&self) -> ApplicationResult<Vec<Project>> {
        self.fetch(ApiRequest::get(endpoints::PROJECTS)).await
    }

    /// Fetches one project.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is malformed.
    pub async fn project(&self, id: u64) -> ApplicationResult<Project> {
        self.fetch(ApiRequest::get(endpoints::project(id))).await
    }

    /// Creates a project owned by the current user.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is malformed.
    pub async fn create_project(&self, project: &NewProject) -> ApplicationResult<Project> {
        self.fetch(ApiRequest::post_json(endpoints::PROJECTS, project)?)
            .await
    }

    /// Applies a partial update to a project.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is malformed.
    pub async fn update_project(
        &self,
        id: u64,
        patch: &ProjectPatch,
    ) -> ApplicationResult<Project> {
        self.fetch(ApiRequest::patch_json(endpoints::project(id), patch)?)
            .await
    }

    /// Deletes a project.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn delete_project(&self, id: u64) -> ApplicationResult<()> {
        self.send(ApiRequest::delete(endpoints::project(id))).await
    }
}
