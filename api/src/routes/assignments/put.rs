use crate::{
    auth::AuthUser,
    response::{ApiError, ApiResponse},
    routes::{
        assignments::common::{
            AssignmentResponse, GradeRequest, SubmissionResponse, UpdateAssignmentRequest,
        },
        common::format_validation_errors,
    },
};
use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::assignment::AssignmentChanges;
use services::assignment_service::AssignmentService;
use util::state::AppState;
use validator::Validate;

/// PUT /api/assignments/{assignment_id}
///
/// Partial update. `description` and `due_date` accept `null` to clear them.
pub async fn update_assignment(
    State(app_state): State<AppState>,
    Path(assignment_id): Path<i64>,
    Extension(user): Extension<AuthUser>,
    Json(req): Json<UpdateAssignmentRequest>,
) -> Response {
    if let Err(e) = req.validate() {
        return ApiError::bad_request(format_validation_errors(&e)).into_response();
    }

    let changes = AssignmentChanges {
        title: req.title,
        description: req.description,
        due_date: req.due_date,
        max_score: req.max_score,
    };

    match AssignmentService::update(app_state.db(), user.actor(), assignment_id, changes).await {
        Ok(assignment) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                AssignmentResponse::from(assignment),
                "Assignment updated successfully",
            )),
        )
            .into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}

/// PUT /api/assignments/{assignment_id}/submissions/{submission_id}/grade
///
/// ### Request Body
/// ```json
/// { "score": 42, "feedback": "Good work" }
/// ```
///
/// ### Responses
/// - `200 OK` with the graded submission
/// - `400 Bad Request` if the score is outside `0..=max_score`
/// - `403 Forbidden` if the caller does not own the class
/// - `404 Not Found` if the submission does not belong to the assignment
pub async fn grade_submission(
    State(app_state): State<AppState>,
    Path((assignment_id, submission_id)): Path<(i64, i64)>,
    Extension(user): Extension<AuthUser>,
    Json(req): Json<GradeRequest>,
) -> Response {
    if let Err(e) = req.validate() {
        return ApiError::bad_request(format_validation_errors(&e)).into_response();
    }

    match AssignmentService::grade(
        app_state.db(),
        user.actor(),
        assignment_id,
        submission_id,
        req.score,
        req.feedback.as_deref(),
    )
    .await
    {
        Ok(submission) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                SubmissionResponse::from(submission),
                "Submission graded successfully",
            )),
        )
            .into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}
