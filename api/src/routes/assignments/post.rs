use crate::{
    auth::AuthUser,
    response::{ApiError, ApiResponse},
    routes::{
        assignments::common::{
            AssignmentResponse, CreateAssignmentRequest, SubmissionResponse, SubmitRequest,
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
use services::assignment_service::{AssignmentService, CreateAssignment};
use util::state::AppState;
use validator::Validate;

/// POST /api/assignments
///
/// Creates an assignment in a class the caller teaches.
///
/// ### Request Body
/// ```json
/// {
///   "class_id": 1,
///   "title": "Lab report",
///   "description": "Write up the osmosis lab",
///   "due_date": "2026-11-01T23:59:00Z",
///   "max_score": 50
/// }
/// ```
/// `max_score` defaults to 100.
///
/// ### Responses
/// - `201 Created` with the assignment
/// - `400 Bad Request` on validation failure
/// - `403 Forbidden` if the caller does not own the class
/// - `404 Not Found` if the class does not exist
pub async fn create_assignment(
    State(app_state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(req): Json<CreateAssignmentRequest>,
) -> Response {
    if let Err(e) = req.validate() {
        return ApiError::bad_request(format_validation_errors(&e)).into_response();
    }

    let params = CreateAssignment {
        class_id: req.class_id,
        title: req.title,
        description: req.description,
        due_date: req.due_date,
        max_score: req.max_score,
    };

    match AssignmentService::create(app_state.db(), user.actor(), params).await {
        Ok(assignment) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                AssignmentResponse::from(assignment),
                "Assignment created successfully",
            )),
        )
            .into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}

/// POST /api/assignments/{assignment_id}/submissions
///
/// Submits (or resubmits) work for an assignment. Resubmitting replaces the
/// previous content and clears any grade.
///
/// ### Request Body
/// ```json
/// { "content": "My answer" }
/// ```
///
/// ### Responses
/// - `201 Created` with the submission
/// - `400 Bad Request` if the content is empty or the due date has passed
/// - `403 Forbidden` if the student is not enrolled in the class
/// - `404 Not Found` if the assignment does not exist
pub async fn submit_assignment(
    State(app_state): State<AppState>,
    Path(assignment_id): Path<i64>,
    Extension(user): Extension<AuthUser>,
    Json(req): Json<SubmitRequest>,
) -> Response {
    if let Err(e) = req.validate() {
        return ApiError::bad_request(format_validation_errors(&e)).into_response();
    }

    match AssignmentService::submit(app_state.db(), user.actor(), assignment_id, &req.content)
        .await
    {
        Ok(submission) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                SubmissionResponse::from(submission),
                "Submission received",
            )),
        )
            .into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}
