//! Current user, staff directory and dashboard.

use gradely_domain::model::{CurrentUser, Dashboard, StaffMember};
use gradely_domain::{ApiRequest, endpoints};

use crate::client::ApiClient;
use crate::error::ApplicationResult;
use crate::ports::HttpTransport;

impl<T: HttpTransport + 'static> ApiClient<T> {
    /// Fetches the authenticated user.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is malformed.
    pub async fn me(&self) -> ApplicationResult<CurrentUser> {
        self.fetch(ApiRequest::get(endpoints::ME)).await
    }

    /// Lists staff members who can be asked to supervise a project.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is malformed.
    pub async fn staff(&self) -> ApplicationResult<Vec<StaffMember>> {
        self.fetch(ApiRequest::get(endpoints::STAFF_USERS)).await
    }

    /// Fetches the student dashboard summary and nudges.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is malformed.
    pub async fn student_dashboard(&self) -> ApplicationResult<Dashboard> {
        self.fetch(ApiRequest::get(endpoints::STUDENT_DASHBOARD))
            .await
    }
}
