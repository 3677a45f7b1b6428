//! Comments and activity log.

use gradely_domain::model::{ActivityItem, Comment, NewComment};
use gradely_domain::{ApiRequest, endpoints};

use crate::client::ApiClient;
use crate::error::ApplicationResult;
use crate::ports::HttpTransport;

impl<T: HttpTransport + 'static> ApiClient<T> {
    /// Lists the comments on a project.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is malformed.
    pub async fn comments(&self, project_id: u64) -> ApplicationResult<Vec<Comment>> {
        self.fetch(ApiRequest::get(endpoints::comments(project_id)))
            .await
    }

    /// Posts a comment on a project.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is malformed.
    pub async fn add_comment(&self, project_id: u64, content: &str) -> ApplicationResult<Comment> {
        let comment = NewComment {
            content: content.to_string(),
        };
        self.fetch(ApiRequest::post_json(endpoints::comments(project_id), &comment)?)
            .await
    }

    /// Fetches the activity log of a project, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is malformed.
    pub async fn activity(&self, project_id: u64) -> ApplicationResult<Vec<ActivityItem>> {
        self.fetch(ApiRequest::get(endpoints::activity(project_id)))
            .await
    }
}
