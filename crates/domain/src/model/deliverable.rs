//! Deliverables, submissions and reviews

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::request::MultipartForm;

/// An expected output of a project (report, source code, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deliverable {
    /// Deliverable id
    pub id: u64,
    /// Owning project
    pub project: u64,
    /// Title
    pub title: String,
    /// Description
    #[serde(default)]
    pub description: String,
    /// Due date
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    /// Creation time
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a deliverable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewDeliverable {
    /// Title
    pub title: String,
    /// Description
    pub description: String,
    /// Due date
    pub due_date: Option<NaiveDate>,
}

/// Partial update of a deliverable.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DeliverablePatch {
    /// New title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New due date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
}

/// Status of a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    /// Saved but not handed in
    #[default]
    Draft,
    /// Handed in for review
    Submitted,
}

impl SubmissionStatus {
    /// Wire value of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Submitted => "submitted",
        }
    }
}

/// Outcome of a supervisor review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ReviewStatus {
    /// Not decided yet
    #[default]
    Pending,
    /// Accepted
    Approved,
    /// Sent back
    Rejected,
}

/// A supervisor's review of a submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    /// Review id
    pub id: u64,
    /// Reviewed submission
    pub submission: u64,
    /// Reviewer id
    pub reviewer: u64,
    /// Reviewer email
    #[serde(default)]
    pub reviewer_email: Option<String>,
    /// Outcome
    #[serde(default)]
    pub status: ReviewStatus,
    /// Written feedback
    #[serde(default)]
    pub feedback: String,
    /// Review time
    pub reviewed_at: DateTime<Utc>,
}

/// Payload for reviewing a submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewReview {
    /// Outcome
    pub status: ReviewStatus,
    /// Written feedback
    pub feedback: String,
}

/// A student's hand-in for a deliverable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    /// Submission id
    pub id: u64,
    /// Deliverable this answers
    pub deliverable: u64,
    /// Submitting user
    pub submitted_by: u64,
    /// Submitting user's email
    #[serde(default)]
    pub submitted_by_email: Option<String>,
    /// Text content
    #[serde(default)]
    pub content: String,
    /// External link
    #[serde(default)]
    pub file_url: String,
    /// Stored document path
    #[serde(default)]
    pub document: Option<String>,
    /// Absolute download URL of the document
    #[serde(default)]
    pub document_url: Option<String>,
    /// Original file name of the document
    #[serde(default)]
    pub document_name: Option<String>,
    /// Status
    #[serde(default)]
    pub status: SubmissionStatus,
    /// Hand-in time
    #[serde(default)]
    pub submitted_at: Option<DateTime<Utc>>,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Last update time
    pub updated_at: DateTime<Utc>,
    /// Review, when one exists
    #[serde(default)]
    pub review: Option<Review>,
}

/// A file attached to a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    /// File name reported to the server
    pub file_name: String,
    /// MIME type; guessed from the file name when absent
    pub content_type: Option<String>,
    /// File contents
    pub bytes: Vec<u8>,
}

/// Payload for creating a submission (sent as multipart form data).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSubmission {
    /// Text content
    pub content: String,
    /// Status
    pub status: SubmissionStatus,
    /// Optional document
    pub document: Option<Attachment>,
}

impl NewSubmission {
    /// Builds the multipart form: `content`, `status`, then `document`.
    #[must_use]
    pub fn to_form(&self) -> MultipartForm {
        let form = MultipartForm::new()
            .text("content", self.content.trim())
            .text("status", self.status.as_str());
        match &self.document {
            Some(doc) => form.file(
                "document",
                doc.file_name.clone(),
                doc.content_type.clone(),
                doc.bytes.clone(),
            ),
            None => form,
        }
    }
}
