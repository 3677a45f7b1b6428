//! Command-line surface

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use gradely_domain::model::{
    MilestoneStatus, ProjectStatus, ReviewStatus, SprintStatus, SubmissionStatus,
    SupervisionStatus, TaskStatus,
};
use serde::de::DeserializeOwned;

#[derive(Debug, Parser)]
#[command(name = "gradely")]
#[command(about = "Command-line client for the Gradely project tracker")]
#[command(version)]
pub struct Cli {
    /// Configuration file (TOML); defaults to ./gradely.toml when present
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    /// API base URL, overriding configuration
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Parses a backend vocabulary value (`in_progress`, `accepted`, ...).
fn vocabulary<T: DeserializeOwned>(value: &str) -> Result<T, String> {
    serde_json::from_value(serde_json::Value::String(value.to_string()))
        .map_err(|_| format!("unknown value {value:?}"))
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Sign in and store the credentials
    Login {
        /// Account email
        #[arg(long, env = "GRADELY_EMAIL")]
        email: String,
        /// Account password
        #[arg(long, env = "GRADELY_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Discard the stored credentials
    Logout,

    /// Show the signed-in user
    Whoami,

    /// Show the student dashboard
    Dashboard,

    /// Manage projects
    Projects {
        #[command(subcommand)]
        command: ProjectCommands,
    },

    /// Manage tasks
    Tasks {
        #[command(subcommand)]
        command: TaskCommands,
    },

    /// Manage project milestones
    Milestones {
        #[command(subcommand)]
        command: MilestoneCommands,
    },

    /// Manage project sprints
    Sprints {
        #[command(subcommand)]
        command: SprintCommands,
    },

    /// Manage project deliverables
    Deliverables {
        #[command(subcommand)]
        command: DeliverableCommands,
    },

    /// Manage deliverable submissions
    Submissions {
        #[command(subcommand)]
        command: SubmissionCommands,
    },

    /// Review a submission (supervisors)
    Review {
        /// Submission id
        submission: u64,
        /// Verdict: pending, approved or rejected
        #[arg(long, value_parser = vocabulary::<ReviewStatus>)]
        status: ReviewStatus,
        /// Feedback for the student
        #[arg(long, default_value = "")]
        feedback: String,
    },

    /// Read and post project comments
    Comments {
        #[command(subcommand)]
        command: CommentCommands,
    },

    /// Show the activity feed of a project
    Activity {
        /// Project id
        project: u64,
    },

    /// Supervision requests
    Supervision {
        #[command(subcommand)]
        command: SupervisionCommands,
    },

    /// List staff members who can supervise
    Staff,
}

#[derive(Debug, Subcommand)]
pub enum ProjectCommands {
    /// List visible projects
    List,
    /// Show one project
    Show {
        /// Project id
        id: u64,
    },
    /// Create a project
    Create {
        /// Title
        title: String,
        /// Description
        #[arg(long, default_value = "")]
        description: String,
    },
    /// Update a project
    Update {
        /// Project id
        id: u64,
        /// New title
        #[arg(long)]
        title: Option<String>,
        /// New description
        #[arg(long)]
        description: Option<String>,
        /// New status: active, completed or archived
        #[arg(long, value_parser = vocabulary::<ProjectStatus>)]
        status: Option<ProjectStatus>,
        /// New start date (YYYY-MM-DD)
        #[arg(long)]
        start_date: Option<NaiveDate>,
        /// New end date (YYYY-MM-DD)
        #[arg(long)]
        end_date: Option<NaiveDate>,
        /// Remove the assigned supervisor
        #[arg(long)]
        clear_supervisor: bool,
    },
    /// Delete a project
    Delete {
        /// Project id
        id: u64,
    },
}

#[derive(Debug, Subcommand)]
pub enum TaskCommands {
    /// List tasks, optionally of one project
    List {
        /// Only tasks of this project
        #[arg(long)]
        project: Option<u64>,
    },
    /// Create a task
    Create {
        /// Owning project
        project: u64,
        /// Title
        title: String,
        /// Initial status
        #[arg(long, default_value = "todo", value_parser = vocabulary::<TaskStatus>)]
        status: TaskStatus,
        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due: Option<NaiveDate>,
        /// Sprint of the same project
        #[arg(long)]
        sprint: Option<u64>,
        /// Priority, 1 (highest) to 5
        #[arg(long)]
        priority: Option<u8>,
    },
    /// Change the status of a task
    Status {
        /// Task id
        id: u64,
        /// todo, in_progress, blocked or done
        #[arg(value_parser = vocabulary::<TaskStatus>)]
        status: TaskStatus,
    },
    /// Delete a task
    Delete {
        /// Task id
        id: u64,
    },
}

#[derive(Debug, Subcommand)]
pub enum MilestoneCommands {
    /// List milestones of a project
    List {
        /// Project id
        project: u64,
    },
    /// Create a milestone
    Create {
        /// Project id
        project: u64,
        /// Title
        title: String,
        /// Description
        #[arg(long, default_value = "")]
        description: String,
        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due: Option<NaiveDate>,
        /// planned, in_progress or done
        #[arg(long, default_value = "planned", value_parser = vocabulary::<MilestoneStatus>)]
        status: MilestoneStatus,
    },
    /// Delete a milestone
    Delete {
        /// Project id
        project: u64,
        /// Milestone id
        id: u64,
    },
}

#[derive(Debug, Subcommand)]
pub enum SprintCommands {
    /// List sprints of a project
    List {
        /// Project id
        project: u64,
    },
    /// Create a sprint
    Create {
        /// Project id
        project: u64,
        /// Title
        title: String,
        /// First day (YYYY-MM-DD)
        #[arg(long)]
        start: NaiveDate,
        /// Last day (YYYY-MM-DD)
        #[arg(long)]
        end: NaiveDate,
        /// Sprint goal
        #[arg(long, default_value = "")]
        goal: String,
        /// planned, active or completed
        #[arg(long, default_value = "planned", value_parser = vocabulary::<SprintStatus>)]
        status: SprintStatus,
    },
    /// Delete a sprint
    Delete {
        /// Project id
        project: u64,
        /// Sprint id
        id: u64,
    },
}

#[derive(Debug, Subcommand)]
pub enum DeliverableCommands {
    /// List deliverables of a project
    List {
        /// Project id
        project: u64,
    },
    /// Create a deliverable
    Create {
        /// Project id
        project: u64,
        /// Title
        title: String,
        /// Description
        #[arg(long, default_value = "")]
        description: String,
        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due: Option<NaiveDate>,
    },
    /// Delete a deliverable
    Delete {
        /// Project id
        project: u64,
        /// Deliverable id
        id: u64,
    },
}

#[derive(Debug, Subcommand)]
pub enum SubmissionCommands {
    /// List submissions of a deliverable
    List {
        /// Project id
        project: u64,
        /// Deliverable id
        deliverable: u64,
    },
    /// Submit work for a deliverable
    Submit {
        /// Project id
        project: u64,
        /// Deliverable id
        deliverable: u64,
        /// Text content
        #[arg(long, default_value = "")]
        content: String,
        /// Document to attach
        #[arg(long)]
        file: Option<PathBuf>,
        /// draft or submitted
        #[arg(long, default_value = "submitted", value_parser = vocabulary::<SubmissionStatus>)]
        status: SubmissionStatus,
    },
    /// Delete a submission
    Delete {
        /// Project id
        project: u64,
        /// Deliverable id
        deliverable: u64,
        /// Submission id
        id: u64,
    },
}

#[derive(Debug, Subcommand)]
pub enum CommentCommands {
    /// List comments of a project
    List {
        /// Project id
        project: u64,
    },
    /// Post a comment
    Add {
        /// Project id
        project: u64,
        /// Comment text
        content: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum SupervisionCommands {
    /// List requests sent or received by the current user
    List,
    /// List requests of one project
    Project {
        /// Project id
        project: u64,
    },
    /// Ask a staff member to supervise a project
    Request {
        /// Project id
        project: u64,
        /// Staff member id
        supervisor: u64,
        /// Message to the staff member
        #[arg(long, default_value = "")]
        message: String,
    },
    /// Accept or decline a request
    Respond {
        /// Request id
        id: u64,
        /// accepted or declined
        #[arg(value_parser = vocabulary::<SupervisionStatus>)]
        status: SupervisionStatus,
        /// Reply to the student
        #[arg(long, default_value = "")]
        message: String,
    },
    /// Count requests awaiting an answer
    Pending,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_vocabulary_values() {
        assert_eq!(
            vocabulary::<TaskStatus>("in_progress").unwrap(),
            TaskStatus::InProgress
        );
        assert!(vocabulary::<TaskStatus>("doing").is_err());
    }

    #[test]
    fn test_parse_task_status() {
        let cli = Cli::try_parse_from(["gradely", "tasks", "status", "7", "blocked"]).unwrap();
        let Commands::Tasks {
            command: TaskCommands::Status { id, status },
        } = cli.command
        else {
            panic!("unexpected command");
        };
        assert_eq!(id, 7);
        assert_eq!(status, TaskStatus::Blocked);
    }

    #[test]
    fn test_parse_sprint_dates() {
        let cli = Cli::try_parse_from([
            "gradely", "sprints", "create", "3", "Sprint 1", "--start", "2025-10-01", "--end",
            "2025-10-14",
        ])
        .unwrap();
        let Commands::Sprints {
            command: SprintCommands::Create { start, status, .. },
        } = cli.command
        else {
            panic!("unexpected command");
        };
        assert_eq!(start, NaiveDate::from_ymd_opt(2025, 10, 1).unwrap());
        assert_eq!(status, SprintStatus::Planned);
    }

    #[test]
    fn test_invalid_date_is_rejected() {
        let result = Cli::try_parse_from([
            "gradely", "tasks", "create", "3", "Write intro", "--due", "tomorrow",
        ]);
        assert!(result.is_err());
    }
}
