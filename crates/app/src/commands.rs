//! Command execution against the API client

use anyhow::{Context, Result};
use gradely_application::ApiClient;
use gradely_application::ports::HttpTransport;
use gradely_domain::model::{
    Attachment, NewDeliverable, NewMilestone, NewProject, NewReview, NewSprint,
    NewSubmission, NewSupervisionRequest, NewTask, ProjectPatch, SupervisionResponse,
};
use serde::Serialize;
use serde_json::json;
use tracing::info;

use crate::cli::{
    CommentCommands, Commands, DeliverableCommands, MilestoneCommands, ProjectCommands,
    SprintCommands, SubmissionCommands, SupervisionCommands, TaskCommands,
};

/// Prints a result as pretty JSON on stdout.
fn emit<V: Serialize>(value: &V) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn deleted(kind: &str, id: u64) -> Result<()> {
    info!(kind, id, "deleted");
    emit(&json!({ "deleted": kind, "id": id }))
}

impl Commands {
    pub async fn execute<T: HttpTransport + 'static>(self, client: &ApiClient<T>) -> Result<()> {
        match self {
            Self::Login { email, password } => {
                client.login(&email, &password).await?;
                emit(&json!({ "logged_in": email }))
            }
            Self::Logout => {
                client.logout().await?;
                emit(&json!({ "logged_in": null }))
            }
            Self::Whoami => emit(&client.me().await?),
            Self::Dashboard => emit(&client.student_dashboard().await?),
            Self::Projects { command } => command.execute(client).await,
            Self::Tasks { command } => command.execute(client).await,
            Self::Milestones { command } => command.execute(client).await,
            Self::Sprints { command } => command.execute(client).await,
            Self::Deliverables { command } => command.execute(client).await,
            Self::Submissions { command } => command.execute(client).await,
            Self::Review {
                submission,
                status,
                feedback,
            } => emit(
                &client
                    .review_submission(submission, &NewReview { status, feedback })
                    .await?,
            ),
            Self::Comments { command } => command.execute(client).await,
            Self::Activity { project } => emit(&client.activity(project).await?),
            Self::Supervision { command } => command.execute(client).await,
            Self::Staff => emit(&client.staff().await?),
        }
    }
}

impl ProjectCommands {
    async fn execute<T: HttpTransport + 'static>(self, client: &ApiClient<T>) -> Result<()> {
        match self {
            Self::List => emit(&client.list_projects().await?),
            Self::Show { id } => emit(&client.project(id).await?),
            Self::Create { title, description } => emit(
                &client
                    .create_project(&NewProject { title, description })
                    .await?,
            ),
            Self::Update {
                id,
                title,
                description,
                status,
                start_date,
                end_date,
                clear_supervisor,
            } => {
                let patch = ProjectPatch {
                    title,
                    description,
                    status,
                    start_date,
                    end_date,
                    supervisor: clear_supervisor.then_some(None),
                };
                emit(&client.update_project(id, &patch).await?)
            }
            Self::Delete { id } => {
                client.delete_project(id).await?;
                deleted("project", id)
            }
        }
    }
}

impl TaskCommands {
    async fn execute<T: HttpTransport + 'static>(self, client: &ApiClient<T>) -> Result<()> {
        match self {
            Self::List { project: None } => emit(&client.list_tasks().await?),
            Self::List {
                project: Some(project),
            } => emit(&client.project_tasks(project).await?),
            Self::Create {
                project,
                title,
                status,
                due,
                sprint,
                priority,
            } => emit(
                &client
                    .create_task(&NewTask {
                        project,
                        title,
                        status,
                        due_date: due,
                        sprint,
                        priority,
                    })
                    .await?,
            ),
            Self::Status { id, status } => emit(&client.set_task_status(id, status).await?),
            Self::Delete { id } => {
                client.delete_task(id).await?;
                deleted("task", id)
            }
        }
    }
}

impl MilestoneCommands {
    async fn execute<T: HttpTransport + 'static>(self, client: &ApiClient<T>) -> Result<()> {
        match self {
            Self::List { project } => emit(&client.milestones(project).await?),
            Self::Create {
                project,
                title,
                description,
                due,
                status,
            } => emit(
                &client
                    .create_milestone(
                        project,
                        &NewMilestone {
                            title,
                            description,
                            due_date: due,
                            status,
                        },
                    )
                    .await?,
            ),
            Self::Delete { project, id } => {
                client.delete_milestone(project, id).await?;
                deleted("milestone", id)
            }
        }
    }
}

impl SprintCommands {
    async fn execute<T: HttpTransport + 'static>(self, client: &ApiClient<T>) -> Result<()> {
        match self {
            Self::List { project } => emit(&client.sprints(project).await?),
            Self::Create {
                project,
                title,
                start,
                end,
                goal,
                status,
            } => emit(
                &client
                    .create_sprint(
                        project,
                        &NewSprint {
                            title,
                            start_date: start,
                            end_date: end,
                            goal,
                            status,
                        },
                    )
                    .await?,
            ),
            Self::Delete { project, id } => {
                client.delete_sprint(project, id).await?;
                deleted("sprint", id)
            }
        }
    }
}

impl DeliverableCommands {
    async fn execute<T: HttpTransport + 'static>(self, client: &ApiClient<T>) -> Result<()> {
        match self {
            Self::List { project } => emit(&client.deliverables(project).await?),
            Self::Create {
                project,
                title,
                description,
                due,
            } => emit(
                &client
                    .create_deliverable(
                        project,
                        &NewDeliverable {
                            title,
                            description,
                            due_date: due,
                        },
                    )
                    .await?,
            ),
            Self::Delete { project, id } => {
                client.delete_deliverable(project, id).await?;
                deleted("deliverable", id)
            }
        }
    }
}

impl SubmissionCommands {
    async fn execute<T: HttpTransport + 'static>(self, client: &ApiClient<T>) -> Result<()> {
        match self {
            Self::List {
                project,
                deliverable,
            } => emit(&client.submissions(project, deliverable).await?),
            Self::Submit {
                project,
                deliverable,
                content,
                file,
                status,
            } => {
                let document = match file {
                    Some(path) => {
                        let bytes = tokio::fs::read(&path)
                            .await
                            .with_context(|| format!("could not read {}", path.display()))?;
                        let file_name = path
                            .file_name()
                            .map_or_else(
                                || "document".to_string(),
                                |n| n.to_string_lossy().into_owned(),
                            );
                        Some(Attachment {
                            file_name,
                            content_type: None,
                            bytes,
                        })
                    }
                    None => None,
                };
                let submission = NewSubmission {
                    content,
                    status,
                    document,
                };
                emit(&client.submit(project, deliverable, &submission).await?)
            }
            Self::Delete {
                project,
                deliverable,
                id,
            } => {
                client.delete_submission(project, deliverable, id).await?;
                deleted("submission", id)
            }
        }
    }
}

impl CommentCommands {
    async fn execute<T: HttpTransport + 'static>(self, client: &ApiClient<T>) -> Result<()> {
        match self {
            Self::List { project } => emit(&client.comments(project).await?),
            Self::Add { project, content } => emit(&client.add_comment(project, &content).await?),
        }
    }
}

impl SupervisionCommands {
    async fn execute<T: HttpTransport + 'static>(self, client: &ApiClient<T>) -> Result<()> {
        match self {
            Self::List => emit(&client.supervision_requests().await?),
            Self::Project { project } => emit(&client.project_supervision_requests(project).await?),
            Self::Request {
                project,
                supervisor,
                message,
            } => emit(
                &client
                    .request_supervision(
                        project,
                        &NewSupervisionRequest {
                            requested_supervisor: supervisor,
                            message,
                        },
                    )
                    .await?,
            ),
            Self::Respond {
                id,
                status,
                message,
            } => emit(
                &client
                    .respond_to_supervision(
                        id,
                        &SupervisionResponse {
                            status,
                            response_message: message,
                        },
                    )
                    .await?,
            ),
            Self::Pending => emit(&json!({ "count": client.pending_supervision_count().await? })),
        }
    }
}
