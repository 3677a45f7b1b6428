//! Tasks.

use gradely_domain::model::{NewTask, Task, TaskPatch, TaskStatus};
use gradely_domain::{ApiRequest, endpoints};

use crate::client::ApiClient;
use crate::error::ApplicationResult;
use crate::ports::HttpTransport;

impl<T: HttpTransport + 'static> ApiClient<T> {
    /// Lists every task visible to the current user.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is malformed.
    pub async fn list_tasks(&self) -> ApplicationResult<Vec<Task>> {
        self.fetch(ApiRequest::get(endpoints::TASKS)).await
    }

    /// Lists the tasks of one project.
    ///
    /// The backend has no per-project route, so the full list is
    /// filtered locally.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is malformed.
    pub async fn project_tasks(&self, project_id: u64) -> ApplicationResult<Vec<Task>> {
        let mut tasks = self.list_tasks().await?;
        tasks.retain(|task| task.project == project_id);
        Ok(tasks)
    }

    /// Creates a task.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is malformed.
    pub async fn create_task(&self, task: &NewTask) -> ApplicationResult<Task> {
        self.fetch(ApiRequest::post_json(endpoints::TASKS, task)?)
            .await
    }

    /// Applies a partial update to a task.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is malformed.
    pub async fn update_task(&self, id: u64, patch: &TaskPatch) -> ApplicationResult<Task> {
        self.fetch(ApiRequest::patch_json(endpoints::task(id), patch)?)
            .await
    }

    /// Moves a task to another status.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is malformed.
    pub async fn set_task_status(&self, id: u64, status: TaskStatus) -> ApplicationResult<Task> {
        self.update_task(id, &TaskPatch::status(status)).await
    }

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn delete_task(&self, id: u64) -> ApplicationResult<()> {
        self.send(ApiRequest::delete(endpoints::task(id))).await
    }
}
