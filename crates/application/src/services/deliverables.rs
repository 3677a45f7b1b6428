//! Deliverables, submissions and reviews.

use gradely_domain::model::{
    Deliverable, DeliverablePatch, NewDeliverable, NewReview, NewSubmission, Review, Submission,
};
use gradely_domain::{ApiRequest, endpoints};

use crate::client::ApiClient;
use crate::error::ApplicationResult;
use crate::ports::HttpTransport;

impl<T: HttpTransport + 'static> ApiClient<T> {
    /// Lists the deliverables of a project.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is malformed.
    pub async fn deliverables(&self, project_id: u64) -> ApplicationResult<Vec<Deliverable>> {
        self.fetch(ApiRequest::get(endpoints::deliverables(project_id)))
            .await
    }

    /// Fetches one deliverable.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is malformed.
    pub async fn deliverable(
        &self,
        project_id: u64,
        deliverable_id: u64,
    ) -> ApplicationResult<Deliverable> {
        self.fetch(ApiRequest::get(endpoints::deliverable(
            project_id,
            deliverable_id,
        )))
        .await
    }

    /// Adds a deliverable to a project.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is malformed.
    pub async fn create_deliverable(
        &self,
        project_id: u64,
        deliverable: &NewDeliverable,
    ) -> ApplicationResult<Deliverable> {
        self.fetch(ApiRequest::post_json(
            endpoints::deliverables(project_id),
            deliverable,
        )?)
        .await
    }

    /// Applies a partial update to a deliverable.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is malformed.
    pub async fn update_deliverable(
        &self,
        project_id: u64,
        deliverable_id: u64,
        patch: &DeliverablePatch,
    ) -> ApplicationResult<Deliverable> {
        self.fetch(ApiRequest::patch_json(
            endpoints::deliverable(project_id, deliverable_id),
            patch,
        )?)
        .await
    }

    /// Deletes a deliverable.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn delete_deliverable(
        &self,
        project_id: u64,
        deliverable_id: u64,
    ) -> ApplicationResult<()> {
        self.send(ApiRequest::delete(endpoints::deliverable(
            project_id,
            deliverable_id,
        )))
        .await
    }

    /// Lists the submissions for a deliverable.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is malformed.
    pub async fn submissions(
        &self,
        project_id: u64,
        deliverable_id: u64,
    ) -> ApplicationResult<Vec<Submission>> {
        self.fetch(ApiRequest::get(endpoints::submissions(
            project_id,
            deliverable_id,
        )))
        .await
    }

    /// Fetches one submission.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is malformed.
    pub async fn submission(
        &self,
        project_id: u64,
        deliverable_id: u64,
        submission_id: u64,
    ) -> ApplicationResult<Submission> {
        self.fetch(ApiRequest::get(endpoints::submission(
            project_id,
            deliverable_id,
            submission_id,
        )))
        .await
    }

    /// Uploads a submission as multipart form data.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is malformed.
    /// An oversized document yields a 413 whose
    /// [`user_message`](crate::ApplicationError::user_message) is the
    /// fixed file-size message.
    pub async fn submit(
        &self,
        project_id: u64,
        deliverable_id: u64,
        submission: &NewSubmission,
    ) -> ApplicationResult<Submission> {
        self.fetch(ApiRequest::post_multipart(
            endpoints::submissions(project_id, deliverable_id),
            submission.to_form(),
        ))
        .await
    }

    /// Deletes a submission.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn delete_submission(
        &self,
        project_id: u64,
        deliverable_id: u64,
        submission_id: u64,
    ) -> ApplicationResult<()> {
        self.send(ApiRequest::delete(endpoints::submission(
            project_id,
            deliverable_id,
            submission_id,
        )))
        .await
    }

    /// Reviews a submission (supervisors only).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is malformed.
    pub async fn review_submission(
        &self,
        submission_id: u64,
        review: &NewReview,
    ) -> ApplicationResult<Review> {
        self.fetch(ApiRequest::post_json(
            endpoints::submission_review(submission_id),
            review,
        )?)
        .await
    }
}
