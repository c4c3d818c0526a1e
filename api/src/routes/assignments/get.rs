use crate::{
    auth::AuthUser,
    response::{ApiError, ApiResponse},
    routes::assignments::common::{AssignmentResponse, SubmissionResponse},
};
use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use services::assignment_service::AssignmentService;
use util::state::AppState;

/// GET /api/assignments/{assignment_id}
///
/// Any member of the assignment's class may read it.
///
/// ### Responses
/// - `200 OK` with the assignment
/// - `403 Forbidden` if the caller is not a member of the class
/// - `404 Not Found` if the assignment does not exist
pub async fn get_assignment(
    State(app_state): State<AppState>,
    Path(assignment_id): Path<i64>,
    Extension(user): Extension<AuthUser>,
) -> Response {
    match AssignmentService::get(app_state.db(), user.actor(), assignment_id).await {
        Ok(assignment) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                AssignmentResponse::from(assignment),
                "Assignment retrieved successfully",
            )),
        )
            .into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}

/// GET /api/assignments/{assignment_id}/submissions
///
/// Every submission for the assignment, for the class owner or an admin.
pub async fn list_submissions(
    State(app_state): State<AppState>,
    Path(assignment_id): Path<i64>,
    Extension(user): Extension<AuthUser>,
) -> Response {
    match AssignmentService::submissions(app_state.db(), user.actor(), assignment_id).await {
        Ok(submissions) => {
            let data: Vec<SubmissionResponse> = submissions
                .into_iter()
                .map(SubmissionResponse::from)
                .collect();
            (
                StatusCode::OK,
                Json(ApiResponse::success(data, "Submissions retrieved successfully")),
            )
                .into_response()
        }
        Err(e) => ApiError::from(e).into_response(),
    }
}

/// GET /api/assignments/{assignment_id}/submissions/me
///
/// The calling student's own submission, including score and feedback once graded.
///
/// ### Responses
/// - `200 OK` with the submission
/// - `404 Not Found` if nothing has been submitted yet
pub async fn get_my_submission(
    State(app_state): State<AppState>,
    Path(assignment_id): Path<i64>,
    Extension(user): Extension<AuthUser>,
) -> Response {
    match AssignmentService::my_submission(app_state.db(), user.actor(), assignment_id).await {
        Ok(submission) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                SubmissionResponse::from(submission),
                "Submission retrieved successfully",
            )),
        )
            .into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}
