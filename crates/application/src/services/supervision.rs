//! Supervision requests.

use gradely_domain::model::{
    NewSupervisionRequest, PendingCount, SupervisionRequest, SupervisionResponse,
};
use gradely_domain::{ApiRequest, endpoints};

use crate::client::ApiClient;
use crate::error::ApplicationResult;
use crate::ports::HttpTransport;

impl<T: HttpTransport + 'static> ApiClient<T> {
    /// Lists the supervision requests sent or received by the current user.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is malformed.
    pub async fn supervision_requests(&self) -> ApplicationResult<Vec<SupervisionRequest>> {
        self.fetch(ApiRequest::get(endpoints::SUPERVISION_REQUESTS))
            .await
    }

    /// Fetches one supervision request.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is malformed.
    pub async fn supervision_request(
        &self,
        request_id: u64,
    ) -> ApplicationResult<SupervisionRequest> {
        self.fetch(ApiRequest::get(endpoints::supervision_request(request_id)))
            .await
    }

    /// Lists the supervision requests of one project.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is malformed.
    pub async fn project_supervision_requests(
        &self,
        project_id: u64,
    ) -> ApplicationResult<Vec<SupervisionRequest>> {
        self.fetch(ApiRequest::get(endpoints::project_supervision_requests(
            project_id,
        )))
        .await
    }

    /// Asks a staff member to supervise a project.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is malformed.
    pub async fn request_supervision(
        &self,
        project_id: u64,
        request: &NewSupervisionRequest,
    ) -> ApplicationResult<SupervisionRequest> {
        self.fetch(ApiRequest::post_json(
            endpoints::project_supervision_requests(project_id),
            request,
        )?)
        .await
    }

    /// Accepts or declines a supervision request addressed to the
    /// current user.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is malformed.
    pub async fn respond_to_supervision(
        &self,
        request_id: u64,
        response: &SupervisionResponse,
    ) -> ApplicationResult<SupervisionRequest> {
        self.fetch(ApiRequest::patch_json(
            endpoints::supervision_request(request_id),
            response,
        )?)
        .await
    }

    /// Number of pending requests addressed to the current user.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is malformed.
    pub async fn pending_supervision_count(&self) -> ApplicationResult<u64> {
        let pending: PendingCount = self
            .fetch(ApiRequest::get(endpoints::SUPERVISION_PENDING_COUNT))
            .await?;
        Ok(pending.count)
    }
}
