use crate::routes::common::double_option;
use chrono::{DateTime, Utc};
use db::models::assignment::Model as AssignmentModel;
use db::models::submission::Model as SubmissionModel;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateAssignmentRequest {
    pub class_id: i64,

    #[validate(length(min = 1, max = 200, message = "must be between 1 and 200 characters"))]
    pub title: String,

    pub description: Option<String>,

    /// RFC 3339 timestamp, e.g. `2026-11-01T23:59:00Z`.
    pub due_date: Option<DateTime<Utc>>,

    #[validate(range(min = 1, message = "must be at least 1"))]
    pub max_score: Option<i32>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateAssignmentRequest {
    #[validate(length(min = 1, max = 200, message = "must be between 1 and 200 characters"))]
    pub title: Option<String>,

    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,

    /// `null` removes the deadline.
    #[serde(default, deserialize_with = "double_option")]
    pub due_date: Option<Option<DateTime<Utc>>>,

    #[validate(range(min = 1, message = "must be at least 1"))]
    pub max_score: Option<i32>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct SubmitRequest {
    #[validate(length(min = 1, message = "cannot be empty"))]
    pub content: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct GradeRequest {
    #[validate(range(min = 0, message = "cannot be negative"))]
    pub score: i32,

    pub feedback: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AssignmentResponse {
    pub id: i64,
    pub class_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<String>,
    pub max_score: i32,
    pub created_at: String,
    pub updated_at: String,
}

impl From<AssignmentModel> for AssignmentResponse {
    fn from(a: AssignmentModel) -> Self {
        Self {
            id: a.id,
            class_id: a.class_id,
            title: a.title,
            description: a.description,
            due_date: a.due_date.map(|d| d.to_rfc3339()),
            max_score: a.max_score,
            created_at: a.created_at.to_rfc3339(),
            updated_at: a.updated_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SubmissionResponse {
    pub id: i64,
    pub assignment_id: i64,
    pub student_id: i64,
    pub content: String,
    pub score: Option<i32>,
    pub feedback: Option<String>,
    pub submitted_at: String,
    pub graded_at: Option<String>,
}

impl From<SubmissionModel> for SubmissionResponse {
    fn from(s: SubmissionModel) -> Self {
        Self {
            id: s.id,
            assignment_id: s.assignment_id,
            student_id: s.student_id,
            content: s.content,
            score: s.score,
            feedback: s.feedback,
            submitted_at: s.submitted_at.to_rfc3339(),
            graded_at: s.graded_at.map(|d| d.to_rfc3339()),
        }
    }
}
